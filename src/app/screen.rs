// SPDX-License-Identifier: MPL-2.0
//! The mounted page and its component state.
//!
//! Navigation always mounts a fresh [`Screen`], so browser and lightbox
//! state never survives a route change.

use super::route::Route;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::browser::{self, component};
use crate::ui::{lightbox, navtab, pages, product_detail};

#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    About,
    Blog,
    Faq(navtab::State),
    Shop {
        category: Option<String>,
        browser: component::State,
    },
    Product {
        category: String,
        slug: String,
        lightbox: lightbox::State,
    },
    NotFound(String),
    /// Startup failed to load the catalog.
    CatalogError,
}

impl Screen {
    /// Mounts the page for `route`.
    ///
    /// Unknown categories and products resolve to [`Screen::NotFound`].
    #[must_use]
    pub fn mount(
        route: &Route,
        catalog: &Catalog,
        settings: browser::Settings,
        i18n: &I18n,
    ) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::About => Screen::About,
            Route::Blog => Screen::Blog,
            Route::Faq => Screen::Faq(pages::faq_tabs(i18n)),
            Route::Shop => Screen::Shop {
                category: None,
                browser: component::State::new(catalog.products().to_vec(), settings),
            },
            Route::Category(category) => {
                let products = catalog.for_category(category);
                if products.is_empty() {
                    return Screen::NotFound(route.path());
                }
                Screen::Shop {
                    category: Some(category.to_lowercase()),
                    browser: component::State::new(products, settings),
                }
            }
            Route::Product { category, slug } => match catalog.find(category, slug) {
                Some(product) => Screen::Product {
                    category: category.clone(),
                    slug: slug.clone(),
                    lightbox: product_detail::lightbox_for(product),
                },
                None => Screen::NotFound(route.path()),
            },
            Route::NotFound(path) => Screen::NotFound(path.clone()),
        }
    }

    /// Whether the mounted browser is waiting on its transition fence.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Screen::Shop { browser, .. } if browser.is_transitioning())
    }

    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        matches!(self, Screen::Product { lightbox, .. } if lightbox.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::sample;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            sample("Kursi Jati", "chair", 1_500_000.0),
            sample("Meja Bundar", "table", 2_000_000.0),
        ])
    }

    fn mount(path: &str) -> Screen {
        Screen::mount(
            &Route::parse(path),
            &catalog(),
            browser::Settings::default(),
            &I18n::default(),
        )
    }

    #[test]
    fn shop_mounts_full_catalog() {
        match mount("/shop") {
            Screen::Shop { category, browser } => {
                assert_eq!(category, None);
                assert_eq!(browser.products().len(), 2);
            }
            other => panic!("expected shop, got {other:?}"),
        }
    }

    #[test]
    fn category_mounts_restricted_list() {
        match mount("/shop/Chair") {
            Screen::Shop { category, browser } => {
                assert_eq!(category.as_deref(), Some("chair"));
                assert_eq!(browser.products().len(), 1);
            }
            other => panic!("expected shop, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_not_found() {
        assert!(matches!(mount("/shop/lamp"), Screen::NotFound(path) if path == "/shop/lamp"));
    }

    #[test]
    fn product_mounts_closed_lightbox() {
        match mount("/shop/chair/kursi-jati") {
            Screen::Product { slug, lightbox, .. } => {
                assert_eq!(slug, "kursi-jati");
                assert!(!lightbox.is_open());
            }
            other => panic!("expected product, got {other:?}"),
        }
    }

    #[test]
    fn unknown_product_is_not_found() {
        assert!(matches!(mount("/shop/chair/nope"), Screen::NotFound(_)));
    }

    #[test]
    fn faq_mounts_tabs() {
        assert!(matches!(mount("/faq"), Screen::Faq(tabs) if tabs.active() == Some(0)));
    }
}
