// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::browser::component;
use crate::ui::{navbar, pages, product_detail};
use iced::{keyboard, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the current page with the one at this path.
    Navigate(String),
    Navbar(navbar::Message),
    Browser(component::Message),
    Page(pages::Message),
    Detail(product_detail::Message),
    /// Vertical offset of the page scrollable.
    PageScrolled(f32),
    WindowResized(Size),
    KeyPressed(keyboard::Key),
    /// Animation tick while a browser transition runs.
    Tick(Instant),
    DismissWarning,
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `id-ID`).
    pub lang: Option<String>,
    /// Catalog file or directory overriding the configured source.
    pub catalog_path: Option<String>,
    /// Initial route; defaults to `/`.
    pub route: Option<String>,
}
