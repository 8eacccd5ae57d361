// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color roles used by the component styles.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub border: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::STONE_100,

            text_primary: palette::STONE_900,
            text_secondary: palette::STONE_600,

            brand_primary: palette::GREEN_900,
            brand_secondary: palette::GREEN_700,

            border: palette::STONE_200,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::STONE_900,
            surface_secondary: palette::STONE_800,

            text_primary: palette::STONE_50,
            text_secondary: palette::STONE_300,

            brand_primary: palette::GREEN_600,
            brand_secondary: palette::GREEN_700,

            border: palette::STONE_700,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the active Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors fall back to light.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
