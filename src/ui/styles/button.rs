// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button ("Detail", "Load more").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_secondary,
        button::Status::Disabled => palette::STONE_400,
        button::Status::Active | button::Status::Pressed => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Style for selected/active state: current page, active layout toggle,
/// active tab.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_secondary,
        _ => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for unselected/secondary state. Disabled buttons are dimmed.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, text_color, border_color) = match status {
        button::Status::Hovered => (
            colors.surface_secondary,
            colors.text_primary,
            colors.brand_primary,
        ),
        button::Status::Disabled => (
            colors.surface_primary,
            palette::STONE_400,
            colors.border,
        ),
        button::Status::Active | button::Status::Pressed => {
            (colors.surface_primary, colors.text_primary, colors.border)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text link used in the navbar and footer.
///
/// `light_text` renders on dark backgrounds (the about-page header).
pub fn nav_link(active: bool, light_text: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let base = if light_text {
            WHITE
        } else {
            colors.text_primary
        };
        let text_color = if active || matches!(status, button::Status::Hovered) {
            if light_text {
                palette::GREEN_100
            } else {
                colors.brand_secondary
            }
        } else {
            base
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent button wrapping an icon or an image.
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: palette::STONE_900,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round controls drawn over the lightbox backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
