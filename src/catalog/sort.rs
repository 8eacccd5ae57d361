// SPDX-License-Identifier: MPL-2.0
//! Sort and category selection for the product browser.
//!
//! `SortBy` mirrors the option keys of the shop's "Sort by" selector so the
//! selection can be carried in config files or route state as plain text.

use super::Product;
use std::cmp::Ordering;
use std::fmt;

const CATEGORY_PREFIX: &str = "category-";

/// Current sort or category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Catalog order.
    #[default]
    None,
    PriceLowToHigh,
    PriceHighToLow,
    TitleAscending,
    TitleDescending,
    /// Category selection. How it applies depends on the pagination mode.
    Category(String),
}

impl SortBy {
    /// Parses a selector key (`price-low`, `title-desc`, `category-chair`, ...).
    ///
    /// Unknown keys map to [`SortBy::None`], like an unmatched `<option>`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-low" => Self::PriceLowToHigh,
            "price-high" => Self::PriceHighToLow,
            "title-asc" => Self::TitleAscending,
            "title-desc" => Self::TitleDescending,
            other => match other.strip_prefix(CATEGORY_PREFIX) {
                Some(category) if !category.is_empty() => Self::Category(category.to_string()),
                _ => Self::None,
            },
        }
    }

    /// Selector key for this value; `""` for [`SortBy::None`].
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::PriceLowToHigh => "price-low".to_string(),
            Self::PriceHighToLow => "price-high".to_string(),
            Self::TitleAscending => "title-asc".to_string(),
            Self::TitleDescending => "title-desc".to_string(),
            Self::Category(category) => format!("{CATEGORY_PREFIX}{category}"),
        }
    }

    /// Category name when this is a category selection.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Category(category) => Some(category),
            _ => None,
        }
    }

    /// i18n key for the selector label. Category labels are built from the
    /// category name instead.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::None => "sort-default",
            Self::PriceLowToHigh => "sort-price-low",
            Self::PriceHighToLow => "sort-price-high",
            Self::TitleAscending => "sort-title-asc",
            Self::TitleDescending => "sort-title-desc",
            Self::Category(_) => "sort-category",
        }
    }

    /// Ordering between two products for the non-category selections.
    ///
    /// [`SortBy::None`] and category selections compare everything as equal,
    /// which leaves a stable sort untouched.
    #[must_use]
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::PriceLowToHigh => a.price.total_cmp(&b.price),
            Self::PriceHighToLow => b.price.total_cmp(&a.price),
            Self::TitleAscending => compare_titles(&a.title, &b.title),
            Self::TitleDescending => compare_titles(&b.title, &a.title),
            Self::None | Self::Category(_) => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Locale-style title comparison: case-insensitive first, ordinal on ties.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Stable sort of `products` by a non-category selection.
#[must_use]
pub fn sorted<'a>(products: &'a [Product], sort_by: &SortBy) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = products.iter().collect();
    if !matches!(sort_by, SortBy::None | SortBy::Category(_)) {
        items.sort_by(|a, b| sort_by.compare(a, b));
    }
    items
}

/// Keeps only products of `category` (case-insensitive), in catalog order.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.in_category(category))
        .collect()
}

/// Moves products of `category` to the front, keeping relative order on both
/// sides of the partition.
#[must_use]
pub fn prioritize_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = products.iter().collect();
    items.sort_by_key(|product| !product.in_category(category));
    items
}
