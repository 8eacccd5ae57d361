// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`browser`] - Sortable, paginated product view (grid or list)
//! - [`product_detail`] - Product detail page with its image gallery
//! - [`pages`] - Home, about, blog, FAQ, not-found and error pages
//!
//! # Components
//!
//! - [`navbar`] - Navigation bar with hover dropdown and mobile menu
//! - [`lightbox`] - Modal image viewer with swipe support
//! - [`product_card`] - Grid tile and list row for one product
//! - [`navtab`] - Single-selection tab list
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Timers, transition fence and swipe tracking
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod browser;
pub mod design_tokens;
pub mod icons;
pub mod lightbox;
pub mod navbar;
pub mod navtab;
pub mod pages;
pub mod product_card;
pub mod product_detail;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
