// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size used by the showroom UI.

## Organization

- **Palette**: Base colors (stone neutrals, forest-green brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_showroom::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Warm neutrals (stone scale)
    pub const STONE_50: Color = Color::from_rgb8(0xfa, 0xfa, 0xf9);
    pub const STONE_100: Color = Color::from_rgb8(0xf5, 0xf5, 0xf4);
    pub const STONE_200: Color = Color::from_rgb8(0xe7, 0xe5, 0xe4);
    pub const STONE_300: Color = Color::from_rgb8(0xd6, 0xd3, 0xd1);
    pub const STONE_400: Color = Color::from_rgb8(0xa8, 0xa2, 0x9e);
    pub const STONE_500: Color = Color::from_rgb8(0x78, 0x71, 0x6c);
    pub const STONE_600: Color = Color::from_rgb8(0x57, 0x53, 0x4e);
    pub const STONE_700: Color = Color::from_rgb8(0x44, 0x40, 0x3c);
    pub const STONE_800: Color = Color::from_rgb8(0x29, 0x25, 0x24);
    pub const STONE_900: Color = Color::from_rgb8(0x1c, 0x19, 0x17);

    // Brand colors (forest green scale)
    pub const GREEN_100: Color = Color::from_rgb8(0xdc, 0xfc, 0xe7);
    pub const GREEN_600: Color = Color::from_rgb8(0x16, 0xa3, 0x4a);
    pub const GREEN_700: Color = Color::from_rgb8(0x15, 0x80, 0x3d);
    pub const GREEN_800: Color = Color::from_rgb8(0x16, 0x65, 0x34);
    pub const GREEN_900: Color = Color::from_rgb8(0x14, 0x53, 0x2d);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Product region while a transition is pending.
    pub const TRANSITIONING: f32 = 0.3;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Navbar
    pub const ANNOUNCEMENT_HEIGHT: f32 = 32.0;
    pub const NAVBAR_HEIGHT: f32 = 72.0;
    pub const NAVBAR_COMPACT_HEIGHT: f32 = 56.0;
    pub const DROPDOWN_IMAGE: f32 = 96.0;

    // Product cards
    pub const LIST_THUMBNAIL: f32 = 160.0;
    pub const GRID_TILE_MIN: f32 = 140.0;

    // Lightbox
    pub const GALLERY_THUMBNAIL: f32 = 120.0;
    pub const SPINNER: f32 = 48.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Brand name, product title on detail page
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers, card titles in list layout
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Badges, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TRANSITIONING > 0.0 && opacity::TRANSITIONING < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::NAVBAR_HEIGHT > sizing::NAVBAR_COMPACT_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
