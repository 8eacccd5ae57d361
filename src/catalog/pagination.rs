// SPDX-License-Identifier: MPL-2.0
//! Pagination strategies for the product browser.
//!
//! Two strategies exist and are chosen once per deployment through the
//! `[browser] pagination` setting:
//!
//! - [`PaginationMode::Paged`]: numbered pages; a category selection is a
//!   hard filter.
//! - [`PaginationMode::LoadMore`]: a growing prefix revealed by "load more";
//!   a category selection only moves matching products to the front.
//!
//! The category semantics are part of the strategy and are never mixed.

use super::sort::{self, SortBy};
use super::Product;
use crate::app::config::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, MIN_ITEMS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Number of page links shown on each side of the current page.
pub const PAGE_LINK_DELTA: usize = 2;

/// Pagination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationMode {
    #[default]
    Paged,
    LoadMore,
}

impl PaginationMode {
    /// Applies the selection to `products` with this strategy's category
    /// semantics.
    #[must_use]
    pub fn arrange<'a>(self, products: &'a [Product], sort_by: &SortBy) -> Vec<&'a Product> {
        match (self, sort_by.category()) {
            (Self::Paged, Some(category)) => sort::filter_by_category(products, category),
            (Self::LoadMore, Some(category)) => sort::prioritize_category(products, category),
            (_, None) => sort::sorted(products, sort_by),
        }
    }

    /// Cursor a freshly mounted browser (or a new selection) starts from.
    #[must_use]
    pub fn initial_cursor(self, page_size: PageSize) -> Cursor {
        match self {
            Self::Paged => Cursor::Page(1),
            Self::LoadMore => Cursor::Shown(page_size.value()),
        }
    }
}

/// Items per page (or per "load more" step), clamped to a sane range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Position of the browser within the arranged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// 1-based page number (paged strategy).
    Page(usize),
    /// Number of items revealed so far (load-more strategy).
    Shown(usize),
}

impl Cursor {
    /// Index range of the displayed slice for a list of `count` items.
    #[must_use]
    pub fn visible_range(self, page_size: PageSize, count: usize) -> Range<usize> {
        match self {
            Self::Page(page) => page_range(page, page_size, count),
            Self::Shown(shown) => 0..shown.min(count),
        }
    }
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Collapsed gap; never clickable.
    Ellipsis,
}

/// `ceil(count / page_size)`.
#[must_use]
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.value())
}

/// Half-open range `[(page-1)*size, page*size)` clamped to `count`.
#[must_use]
pub fn page_range(page: usize, page_size: PageSize, count: usize) -> Range<usize> {
    let size = page_size.value();
    let start = page.saturating_sub(1).saturating_mul(size).min(count);
    let end = start.saturating_add(size).min(count);
    start..end
}

/// Page strip: first page, last page and up to [`PAGE_LINK_DELTA`] pages on
/// each side of `current`, with gaps collapsed into [`PageItem::Ellipsis`].
#[must_use]
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    let delta = PAGE_LINK_DELTA;
    let mut items = vec![PageItem::Page(1)];

    if current > delta + 2 {
        items.push(PageItem::Ellipsis);
    }

    let low = current.saturating_sub(delta).max(2);
    let high = (current + delta).min(total.saturating_sub(1));
    items.extend((low..=high).map(PageItem::Page));

    if current + delta + 1 < total {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if total > 1 {
        items.push(PageItem::Page(total));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::sample;
    use PageItem::{Ellipsis, Page};

    fn catalog(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| sample(&format!("Item {i:02}"), if i % 3 == 0 { "chair" } else { "table" }, i as f64))
            .collect()
    }

    #[test]
    fn forty_five_items_make_three_pages() {
        let size = PageSize::new(20);
        assert_eq!(total_pages(45, size), 3);
        assert_eq!(page_range(1, size, 45), 0..20);
        assert_eq!(page_range(3, size, 45), 40..45);
        assert_eq!(page_range(3, size, 45).len(), 5);
    }

    #[test]
    fn empty_list_has_no_pages() {
        assert_eq!(total_pages(0, PageSize::default()), 0);
        assert_eq!(page_range(1, PageSize::default(), 0), 0..0);
    }

    #[test]
    fn out_of_range_pages_yield_empty_slices() {
        let size = PageSize::new(20);
        assert_eq!(page_range(0, size, 45), 0..20);
        assert!(page_range(9, size, 45).is_empty());
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(PageSize::new(0).value(), MIN_ITEMS_PER_PAGE);
        assert_eq!(PageSize::new(10_000).value(), MAX_ITEMS_PER_PAGE);
        assert_eq!(PageSize::default().value(), 20);
    }

    #[test]
    fn page_strip_collapses_both_sides() {
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn page_strip_without_gaps() {
        assert_eq!(page_numbers(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_numbers(2, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
    }

    #[test]
    fn page_strip_near_edges() {
        assert_eq!(
            page_numbers(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_numbers(7, 10),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn shown_cursor_is_capped_by_count() {
        let size = PageSize::default();
        assert_eq!(Cursor::Shown(60).visible_range(size, 45), 0..45);
        assert_eq!(Cursor::Page(3).visible_range(size, 45), 40..45);
    }

    #[test]
    fn paged_category_is_a_filter() {
        let products = catalog(9);
        let arranged = PaginationMode::Paged.arrange(&products, &SortBy::from_key("category-chair"));
        assert_eq!(arranged.len(), 3);
        assert!(arranged.iter().all(|p| p.category == "chair"));
    }

    #[test]
    fn load_more_category_is_a_priority() {
        let products = catalog(9);
        let arranged =
            PaginationMode::LoadMore.arrange(&products, &SortBy::from_key("category-chair"));
        assert_eq!(arranged.len(), 9);
        assert!(arranged[..3].iter().all(|p| p.category == "chair"));
        assert!(arranged[3..].iter().all(|p| p.category == "table"));
    }

    #[test]
    fn initial_cursor_per_mode() {
        let size = PageSize::new(20);
        assert_eq!(PaginationMode::Paged.initial_cursor(size), Cursor::Page(1));
        assert_eq!(PaginationMode::LoadMore.initial_cursor(size), Cursor::Shown(20));
    }
}
