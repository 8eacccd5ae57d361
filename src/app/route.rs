// SPDX-License-Identifier: MPL-2.0
//! Route table for the showroom pages.
//!
//! Paths are parsed into [`Route`] values and formatted back. A trailing slash
//! is ignored, so `/about/` and `/about` are the same page.

use std::fmt;
use std::str::FromStr;

/// A parsed navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    /// Full catalog.
    Shop,
    /// `/shop/{category}`.
    Category(String),
    /// `/shop/{category}/{slug}`.
    Product { category: String, slug: String },
    Blog,
    Faq,
    /// Any unknown path, kept in normalized form.
    NotFound(String),
}

impl Route {
    /// Parses a path. Unknown paths become [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let normalized = normalize(path);
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["shop"] => Self::Shop,
            ["shop", category] => Self::Category((*category).to_string()),
            ["shop", category, slug] => Self::Product {
                category: (*category).to_string(),
                slug: (*slug).to_string(),
            },
            ["blog"] => Self::Blog,
            ["faq"] => Self::Faq,
            _ => Self::NotFound(normalized),
        }
    }

    /// Canonical path, without trailing slash (except for `/`).
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Shop => "/shop".to_string(),
            Self::Category(category) => format!("/shop/{category}"),
            Self::Product { category, slug } => crate::catalog::product::detail_path(category, slug),
            Self::Blog => "/blog".to_string(),
            Self::Faq => "/faq".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// True for the pages that show the product browser.
    #[must_use]
    pub fn is_shop_listing(&self) -> bool {
        matches!(self, Self::Shop | Self::Category(_))
    }
}

/// Adds a leading slash, drops the query, fragment and trailing slashes.
fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_round_trip() {
        for path in [
            "/",
            "/about",
            "/shop",
            "/shop/chair",
            "/shop/chair/kursi-jati",
            "/blog",
            "/faq",
        ] {
            let route = Route::parse(path);
            assert!(!matches!(route, Route::NotFound(_)), "{path} should be known");
            assert_eq!(route.path(), path);
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/shop/table/"), Route::Category("table".into()));
        assert_eq!(Route::parse("//"), Route::Home);
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(Route::parse("faq"), Route::Faq);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(Route::parse("/shop?page=2"), Route::Shop);
        assert_eq!(Route::parse("/blog#top"), Route::Blog);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/cart/"),
            Route::NotFound("/cart".to_string())
        );
        assert_eq!(
            Route::parse("/shop/a/b/c"),
            Route::NotFound("/shop/a/b/c".to_string())
        );
        assert_eq!(Route::parse("/cart").path(), "/cart");
    }

    #[test]
    fn product_route_captures_segments() {
        assert_eq!(
            Route::parse("/shop/couch/sofa-bed"),
            Route::Product {
                category: "couch".into(),
                slug: "sofa-bed".into()
            }
        );
    }

    #[test]
    fn shop_listing_routes() {
        assert!(Route::Shop.is_shop_listing());
        assert!(Route::Category("chair".into()).is_shop_listing());
        assert!(!Route::Faq.is_shop_listing());
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Route::Category("shelf".into()).to_string(), "/shop/shelf");
        assert_eq!("/about".parse::<Route>().ok(), Some(Route::About));
    }
}
