// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Browser**: Page size and transition fence delay
//! - **Navbar**: Dropdown close delay and compact-mode scroll threshold
//! - **Layout**: Responsive breakpoints and column counts
//! - **Lightbox**: Swipe recognition

// ==========================================================================
// Browser Defaults
// ==========================================================================

/// Products per page (paged) or per "load more" step (incremental).
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Minimum products per page.
pub const MIN_ITEMS_PER_PAGE: usize = 1;

/// Maximum products per page.
pub const MAX_ITEMS_PER_PAGE: usize = 200;

/// Delay before a fenced browser change is applied (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Minimum transition delay (milliseconds).
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition delay (milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Delay before the hover dropdown closes after the pointer leaves (milliseconds).
pub const DEFAULT_HOVER_CLOSE_MS: u64 = 150;

/// Maximum hover close delay (milliseconds).
pub const MAX_HOVER_CLOSE_MS: u64 = 2000;

/// Scroll offset past which the navbar switches to its compact style (pixels).
pub const DEFAULT_COMPACT_SCROLL_THRESHOLD: f32 = 80.0;

/// Maximum compact-mode scroll threshold (pixels).
pub const MAX_COMPACT_SCROLL_THRESHOLD: f32 = 2000.0;

// ==========================================================================
// Layout Breakpoints
// ==========================================================================

/// Window width at which the navbar switches from mobile to desktop.
pub const DESKTOP_BREAKPOINT: f32 = 768.0;

/// Window width at which the grid layout shows its wide column count.
pub const GRID_WIDE_BREAKPOINT: f32 = 1024.0;

/// Window width at which the list layout shows two columns.
pub const LIST_WIDE_BREAKPOINT: f32 = 1536.0;

/// Grid columns below [`GRID_WIDE_BREAKPOINT`].
pub const GRID_COLUMNS_NARROW: usize = 2;

/// Grid columns at or above [`GRID_WIDE_BREAKPOINT`].
pub const GRID_COLUMNS_WIDE: usize = 6;

/// List columns at or above [`LIST_WIDE_BREAKPOINT`].
pub const LIST_COLUMNS_WIDE: usize = 2;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Horizontal travel a touch must exceed to count as a swipe (pixels).
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Page size validation
    assert!(MIN_ITEMS_PER_PAGE > 0);
    assert!(MAX_ITEMS_PER_PAGE >= MIN_ITEMS_PER_PAGE);
    assert!(DEFAULT_ITEMS_PER_PAGE >= MIN_ITEMS_PER_PAGE);
    assert!(DEFAULT_ITEMS_PER_PAGE <= MAX_ITEMS_PER_PAGE);

    // Transition validation
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    // Navbar validation
    assert!(DEFAULT_HOVER_CLOSE_MS <= MAX_HOVER_CLOSE_MS);
    assert!(DEFAULT_COMPACT_SCROLL_THRESHOLD >= 0.0);
    assert!(DEFAULT_COMPACT_SCROLL_THRESHOLD <= MAX_COMPACT_SCROLL_THRESHOLD);

    // Breakpoints must be ordered
    assert!(DESKTOP_BREAKPOINT < GRID_WIDE_BREAKPOINT);
    assert!(GRID_WIDE_BREAKPOINT < LIST_WIDE_BREAKPOINT);
    assert!(GRID_COLUMNS_NARROW > 0);
    assert!(GRID_COLUMNS_WIDE > GRID_COLUMNS_NARROW);
    assert!(LIST_COLUMNS_WIDE > 1);

    assert!(SWIPE_THRESHOLD > 0.0);
};
