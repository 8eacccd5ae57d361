// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic raised surface: dropdown panel, banners.
///
/// The color is derived from the active Iced `Theme` background.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Product card surface.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Image placeholder shown when a product has no picture.
pub fn placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        ..Default::default()
    }
}

/// "Sold out" tag in the card corner.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_200)),
        text_color: Some(palette::STONE_900),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral pill used for the active category filter.
pub fn chip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.brand_primary),
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Announcement bar above the navbar. The about page uses the brand color.
pub fn announcement(about_page: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let (background, text) = if about_page {
            (palette::GREEN_900, palette::WHITE)
        } else {
            (colors.surface_secondary, colors.text_secondary)
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// Navbar header. `transparent_on_brand` keeps the about-page hero color
/// behind the menu.
pub fn navbar(compact: bool, transparent_on_brand: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if transparent_on_brand {
            palette::GREEN_900
        } else {
            colors.surface_primary
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: colors.border,
                width: if compact { 1.0 } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: if compact { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Full-screen mobile menu sheet.
pub fn sheet(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Dimmed lightbox backdrop.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        ..Default::default()
    }
}

/// Dismissible warning banner (config fallback).
pub fn warning(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WARNING_500
        })),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
