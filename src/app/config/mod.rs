// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! user-edited `settings.toml` file. The application never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Catalog source and image asset root
//! - `[browser]` - Pagination strategy, page size, transition delay, initial layout
//! - `[navbar]` - Dropdown close delay and compact-mode threshold
//! - `[display]` - Product card decorations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_SHOWROOM_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! Out-of-range numbers are kept as written and clamped when read through
//! the accessor methods on [`Config`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_showroom::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! let page_size = config.page_size();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::{PageSize, PaginationMode};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Product browser layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Grid,
    #[default]
    List,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "id-ID").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Where products and their images come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// JSON file or directory of JSON records. The bundled catalog is used
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Directory image `src` values are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<PathBuf>,
}

/// Product browser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserConfig {
    /// Pagination strategy (`paged` or `load-more`).
    #[serde(default)]
    pub pagination: PaginationMode,

    /// Products per page or per "load more" step.
    #[serde(
        default = "default_items_per_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_per_page: Option<usize>,

    /// Delay before a sort, page or layout change is applied (milliseconds).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Layout used when the browser is mounted.
    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            pagination: PaginationMode::default(),
            items_per_page: default_items_per_page(),
            transition_ms: default_transition_ms(),
            default_view: ViewMode::default(),
        }
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavbarConfig {
    /// Delay before the hover dropdown closes (milliseconds).
    #[serde(
        default = "default_hover_close_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_close_ms: Option<u64>,

    /// Scroll offset that switches the navbar to its compact style (pixels).
    #[serde(
        default = "default_compact_scroll_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_scroll_threshold: Option<f32>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            hover_close_ms: default_hover_close_ms(),
            compact_scroll_threshold: default_compact_scroll_threshold(),
        }
    }
}

/// Product card settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Show the "Sold out" badge on every card. The badge is not derived from
    /// stock data.
    #[serde(default = "default_sold_out_badge")]
    pub sold_out_badge: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sold_out_badge: default_sold_out_badge(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Page size, clamped to `MIN_ITEMS_PER_PAGE..=MAX_ITEMS_PER_PAGE`.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.browser
            .items_per_page
            .map(PageSize::new)
            .unwrap_or_default()
    }

    /// Transition fence delay, clamped to `MIN_TRANSITION_MS..=MAX_TRANSITION_MS`.
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        let ms = self
            .browser
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS);
        Duration::from_millis(ms)
    }

    /// Dropdown close delay, capped at `MAX_HOVER_CLOSE_MS`.
    #[must_use]
    pub fn hover_close_delay(&self) -> Duration {
        let ms = self
            .navbar
            .hover_close_ms
            .unwrap_or(DEFAULT_HOVER_CLOSE_MS)
            .min(MAX_HOVER_CLOSE_MS);
        Duration::from_millis(ms)
    }

    /// Compact-mode threshold; non-finite values fall back to the default.
    #[must_use]
    pub fn compact_scroll_threshold(&self) -> f32 {
        match self.navbar.compact_scroll_threshold {
            Some(value) if value.is_finite() => value.clamp(0.0, MAX_COMPACT_SCROLL_THRESHOLD),
            _ => DEFAULT_COMPACT_SCROLL_THRESHOLD,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_items_per_page() -> Option<usize> {
    Some(DEFAULT_ITEMS_PER_PAGE)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_hover_close_ms() -> Option<u64> {
    Some(DEFAULT_HOVER_CLOSE_MS)
}

fn default_compact_scroll_threshold() -> Option<f32> {
    Some(DEFAULT_COMPACT_SCROLL_THRESHOLD)
}

fn default_sold_out_badge() -> bool {
    true
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
