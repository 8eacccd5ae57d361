// SPDX-License-Identifier: MPL-2.0
//! `iced_showroom` is a furniture catalog browser built with the Iced GUI
//! framework.
//!
//! It renders a product catalog loaded from JSON with a sortable, paginated
//! product view, a navigation bar with a hover dropdown, and an image
//! lightbox, localized with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_showroom/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod ui;
