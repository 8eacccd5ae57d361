// SPDX-License-Identifier: MPL-2.0
//! Product catalog: records, content loading, sorting and pagination.

pub mod loader;
pub mod pagination;
pub mod price;
pub mod product;
pub mod sort;

pub use pagination::{Cursor, PageItem, PageSize, PaginationMode};
pub use price::format_price;
pub use product::{CardData, Product, ProductImage};
pub use sort::SortBy;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Display label of a category key: first letter uppercased.
#[must_use]
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// In-memory catalog, in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps loaded records. Duplicate slugs are reported but kept.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.slug.as_str()) {
                tracing::warn!(slug = %product.slug, "duplicate product slug in catalog");
            }
        }
        Self { products }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories (lowercased) in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            let category = product.category.to_lowercase();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Products of one category, in catalog order.
    #[must_use]
    pub fn for_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.in_category(category))
            .cloned()
            .collect()
    }

    /// Looks up the product shown at `/shop/{category}/{slug}`.
    ///
    /// With duplicate slugs the first occurrence wins.
    #[must_use]
    pub fn find(&self, category: &str, slug: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.slug == slug && product.in_category(category))
    }
}

/// Resolves an image `src` against the asset root.
///
/// A leading `/` is relative to the root, like a site's public directory.
/// Absolute paths that exist on disk are used as-is.
#[must_use]
pub fn resolve_asset(root: &Path, src: &str) -> PathBuf {
    let direct = Path::new(src);
    if direct.is_absolute() && direct.exists() {
        return direct.to_path_buf();
    }
    root.join(src.trim_start_matches('/'))
}
