// SPDX-License-Identifier: MPL-2.0
use iced_showroom::app::config::{self, Config, ViewMode};
use iced_showroom::app::Route;
use iced_showroom::catalog::{loader, PaginationMode};
use iced_showroom::error::{CatalogError, Error};
use iced_showroom::i18n::fluent::I18n;
use std::fs;
use tempfile::tempdir;

const RECORDS: &str = r#"[
    {
        "title": "Kursi Rotan",
        "slug": "kursi-rotan",
        "description": "Kursi rotan anyaman tangan.",
        "image": [{ "src": "/images/kursi-1.jpg" }, { "src": "/images/kursi-2.jpg" }],
        "price": 760000,
        "category": "chair"
    },
    {
        "title": "Meja Kopi",
        "slug": "meja-kopi",
        "description": "Meja kopi bundar.",
        "image": [],
        "price": 1250000,
        "category": "table"
    }
]"#;

#[test]
fn catalog_file_loads_and_resolves_products() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("products.json");
    fs::write(&path, RECORDS).expect("write catalog");

    let catalog = loader::load_from_path(&path).expect("catalog loads");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories(), vec!["chair".to_string(), "table".to_string()]);

    let product = catalog.find("chair", "kursi-rotan").expect("product exists");
    assert_eq!(product.image.len(), 2);
    assert!(catalog.find("table", "kursi-rotan").is_none());
}

#[test]
fn invalid_record_fails_the_whole_load() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("a.json"), RECORDS).expect("write valid file");
    fs::write(
        dir.path().join("b.json"),
        r#"{ "title": "Rak", "slug": "rak", "description": "", "image": [], "price": -1, "category": "shelf" }"#,
    )
    .expect("write invalid file");

    match loader::load_from_path(dir.path()) {
        Err(Error::Catalog(CatalogError::InvalidPrice { source_name, slug })) => {
            assert_eq!(source_name, "b.json");
            assert_eq!(slug, "rak");
        }
        other => panic!("expected invalid price, got {other:?}"),
    }
}

#[test]
fn bundled_catalog_covers_the_navbar_categories() {
    let catalog = loader::load_bundled().expect("bundled catalog loads");
    for category in ["chair", "table", "cabinet", "shelf", "couch"] {
        assert!(
            !catalog.for_category(category).is_empty(),
            "no products in {category}"
        );
    }
}

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("id-ID".to_string());
    config.browser.pagination = PaginationMode::LoadMore;
    config.browser.default_view = ViewMode::Grid;
    config.display.sold_out_badge = false;
    let content = toml::to_string_pretty(&config).expect("serialize config");
    fs::write(&path, content).expect("write settings");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded, config);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "id-ID");
    assert_eq!(i18n.tr("nav-shop"), "Belanja");
}

#[test]
fn broken_settings_fall_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[browser\npagination = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn static_routes_round_trip() {
    for path in ["/", "/about", "/shop", "/blog", "/faq", "/shop/couch", "/shop/couch/sofa-l"] {
        assert_eq!(Route::parse(path).path(), path);
    }
    assert_eq!(Route::parse("/about/"), Route::About);
    assert!(matches!(Route::parse("/checkout"), Route::NotFound(_)));
}

#[test]
fn every_locale_translates_the_shell() {
    let keys = [
        "window-title",
        "nav-about",
        "nav-shop",
        "browser-load-more",
        "sort-label",
        "not-found-title",
        "error-page-title",
        "notification-config-load-error",
    ];
    for locale in ["en-US", "id-ID"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{locale} lacks {key}");
        }
    }
}
