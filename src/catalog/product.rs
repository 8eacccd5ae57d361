// SPDX-License-Identifier: MPL-2.0
//! Product records and the card projection derived from them.

use serde::{Deserialize, Serialize};

/// One entry of a product's image gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
}

/// A catalog entry as supplied by the content loader.
///
/// Records are validated once at load time and treated as immutable
/// afterwards. `slug` is expected to be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image: Vec<ProductImage>,
    pub price: f64,
    pub category: String,
}

impl Product {
    /// Source of the representative thumbnail (the first gallery image).
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.image.first().map(|image| image.src.as_str())
    }

    /// Path of the product detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        detail_path(&self.category, &self.slug)
    }

    /// Case-insensitive category comparison.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Builds `/shop/{category}/{slug}`.
#[must_use]
pub fn detail_path(category: &str, slug: &str) -> String {
    format!("/shop/{category}/{slug}")
}

/// Flattened view of a product used by the card renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct CardData<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub price: f64,
    pub category: &'a str,
}

impl<'a> From<&'a Product> for CardData<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            title: &product.title,
            slug: &product.slug,
            description: &product.description,
            image: product.thumbnail(),
            price: product.price,
            category: &product.category,
        }
    }
}

impl CardData<'_> {
    #[must_use]
    pub fn detail_path(&self) -> String {
        detail_path(self.category, self.slug)
    }
}

#[cfg(test)]
pub(crate) fn sample(title: &str, category: &str, price: f64) -> Product {
    Product {
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: format!("{title} description"),
        image: vec![
            ProductImage {
                src: format!("/images/{category}-1.jpg"),
            },
            ProductImage {
                src: format!("/images/{category}-2.jpg"),
            },
        ],
        price,
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_is_first_image() {
        let product = sample("Kursi Jati", "chair", 1_500_000.0);
        assert_eq!(product.thumbnail(), Some("/images/chair-1.jpg"));
    }

    #[test]
    fn thumbnail_is_none_without_images() {
        let mut product = sample("Kursi Jati", "chair", 1.0);
        product.image.clear();
        assert_eq!(product.thumbnail(), None);
        assert_eq!(CardData::from(&product).image, None);
    }

    #[test]
    fn detail_path_combines_category_and_slug() {
        let product = sample("Meja Makan", "table", 1.0);
        assert_eq!(product.detail_path(), "/shop/table/meja-makan");
        assert_eq!(CardData::from(&product).detail_path(), "/shop/table/meja-makan");
    }

    #[test]
    fn category_match_ignores_case() {
        let product = sample("Kursi", "Chair", 1.0);
        assert!(product.in_category("chair"));
        assert!(product.in_category("CHAIR"));
        assert!(!product.in_category("table"));
    }
}
