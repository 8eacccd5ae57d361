// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents embedded in the binary. Handles are
//! cached using `OnceLock` so each document is parsed once.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let toggle = button(icons::sized(icons::grid(), sizing::ICON_MD));
//! let close = button(icons::tinted(icons::close(), palette::WHITE));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_menu`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function returning an [`Svg`] backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Layout Icons
// =============================================================================

define_icon!(
    grid,
    r#"<rect x="3" y="3" width="7" height="7"/><rect x="14" y="3" width="7" height="7"/><rect x="3" y="14" width="7" height="7"/><rect x="14" y="14" width="7" height="7"/>"#,
    "Grid icon: four squares."
);
define_icon!(
    list,
    r#"<line x1="8" y1="6" x2="21" y2="6"/><line x1="8" y1="12" x2="21" y2="12"/><line x1="8" y1="18" x2="21" y2="18"/><circle cx="4" cy="6" r="1"/><circle cx="4" cy="12" r="1"/><circle cx="4" cy="18" r="1"/>"#,
    "List icon: three bullet rows."
);

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    chevron_left,
    r#"<polyline points="15 18 9 12 15 6"/>"#,
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    r#"<polyline points="9 18 15 12 9 6"/>"#,
    "Chevron pointing right."
);
define_icon!(
    chevron_down,
    r#"<polyline points="6 9 12 15 18 9"/>"#,
    "Chevron pointing down."
);
define_icon!(
    hamburger,
    r#"<line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/>"#,
    "Hamburger icon: three horizontal bars."
);
define_icon!(
    cross,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "Cross icon: two diagonal strokes."
);
define_icon!(
    plus,
    r#"<line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/>"#,
    "Plus icon."
);
define_icon!(
    question_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#,
    "Question mark in a circle."
);

// =============================================================================
// Helpers
// =============================================================================

/// Square icon of `size` pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Icon drawn in a single `color`.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
