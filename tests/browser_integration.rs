// SPDX-License-Identifier: MPL-2.0
//! Drives the product browser the way the application does: every change
//! is requested, then completed with the token of the timer it started.

use iced_showroom::app::config::ViewMode;
use iced_showroom::catalog::{Cursor, PageSize, PaginationMode, Product, ProductImage, SortBy};
use iced_showroom::ui::browser::component::{Message, State};
use iced_showroom::ui::browser::{Effect, Settings};
use std::time::Duration;

fn product(index: usize, category: &str, price: f64) -> Product {
    Product {
        title: format!("Produk {index:02}"),
        slug: format!("produk-{index:02}"),
        description: String::new(),
        image: vec![ProductImage {
            src: format!("/images/produk-{index:02}.jpg"),
        }],
        price,
        category: category.to_string(),
    }
}

fn catalog(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let category = if i % 3 == 0 { "Chair" } else { "table" };
            product(i, category, ((i * 7919) % 1000) as f64 * 1000.0)
        })
        .collect()
}

fn browser(count: usize, mode: PaginationMode) -> State {
    State::new(
        catalog(count),
        Settings {
            mode,
            page_size: PageSize::new(20),
            delay: Duration::from_millis(200),
            view: ViewMode::List,
        },
    )
}

/// Sends `message` and fires the timer it scheduled, if any.
fn settle(state: &mut State, message: Message) -> Effect {
    match state.handle(message) {
        Effect::StartTimer { token, .. } => state.handle(Message::TransitionElapsed(token)),
        other => other,
    }
}

fn titles(state: &State) -> Vec<String> {
    state.visible().iter().map(|p| p.title.clone()).collect()
}

#[test]
fn second_toggle_during_transition_is_dropped() {
    let mut state = browser(10, PaginationMode::Paged);

    let first = state.handle(Message::SetView(ViewMode::Grid));
    let Effect::StartTimer { token, .. } = first else {
        panic!("expected a timer, got {first:?}");
    };
    assert_eq!(state.handle(Message::SetView(ViewMode::List)), Effect::None);
    assert_eq!(state.view_mode(), ViewMode::List);

    state.handle(Message::TransitionElapsed(token));
    assert_eq!(state.view_mode(), ViewMode::Grid);
    assert!(!state.is_transitioning());
}

#[test]
fn price_orders_are_mirror_images() {
    let mut state = browser(30, PaginationMode::LoadMore);
    settle(&mut state, Message::LoadMore);

    settle(&mut state, Message::SortSelected(SortBy::from_key("price-low")));
    let ascending: Vec<String> = state.arranged().iter().map(|p| p.title.clone()).collect();
    settle(&mut state, Message::SortSelected(SortBy::from_key("price-high")));
    let mut descending: Vec<String> = state.arranged().iter().map(|p| p.title.clone()).collect();

    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn equal_prices_keep_catalog_order() {
    let products = vec![
        product(0, "chair", 500.0),
        product(1, "chair", 100.0),
        product(2, "chair", 500.0),
        product(3, "chair", 100.0),
    ];
    let mut state = State::new(products, Settings::default());
    settle(&mut state, Message::SortSelected(SortBy::from_key("price-low")));
    assert_eq!(titles(&state), vec!["Produk 01", "Produk 03", "Produk 00", "Produk 02"]);
}

#[test]
fn paged_browsing_over_45_items() {
    let mut state = browser(45, PaginationMode::Paged);
    assert_eq!(state.total_pages(), 3);
    assert!(state.shows_pagination());

    assert_eq!(settle(&mut state, Message::GoToPage(3)), Effect::ScrollToTop);
    assert_eq!(state.visible().len(), 5);
    assert_eq!(state.counter().start, 41);
    assert_eq!(state.counter().end, 45);

    assert_eq!(state.handle(Message::GoToPage(0)), Effect::None);
    assert_eq!(state.handle(Message::GoToPage(4)), Effect::None);
    assert_eq!(state.handle(Message::NextPage), Effect::None);
    assert_eq!(state.cursor(), Cursor::Page(3));
}

#[test]
fn load_more_reveals_twenty_at_a_time() {
    let mut state = browser(45, PaginationMode::LoadMore);
    assert_eq!(state.visible().len(), 20);
    assert!(!state.shows_pagination());

    settle(&mut state, Message::LoadMore);
    assert_eq!(state.visible().len(), 40);
    settle(&mut state, Message::LoadMore);
    assert_eq!(state.visible().len(), 45);

    assert!(!state.can_load_more());
    assert_eq!(state.handle(Message::LoadMore), Effect::None);
}

#[test]
fn paged_category_filter_is_case_insensitive() {
    let mut state = browser(45, PaginationMode::Paged);
    settle(&mut state, Message::GoToPage(2));

    settle(&mut state, Message::SortSelected(SortBy::from_key("category-chair")));
    assert_eq!(state.cursor(), Cursor::Page(1));
    assert_eq!(state.total(), 15);
    assert!(state.arranged().iter().all(|p| p.category == "Chair"));
}

#[test]
fn paged_category_filter_drops_previous_sort() {
    let products = vec![
        product(0, "Chair", 900.0),
        product(1, "table", 1.0),
        product(2, "chair", 10.0),
    ];
    let mut state = State::new(products, Settings::default());

    settle(&mut state, Message::SortSelected(SortBy::from_key("price-low")));
    assert_eq!(titles(&state), vec!["Produk 01", "Produk 02", "Produk 00"]);

    settle(&mut state, Message::SortSelected(SortBy::from_key("category-chair")));
    assert_eq!(titles(&state), vec!["Produk 00", "Produk 02"]);

    settle(&mut state, Message::SortSelected(SortBy::from_key("title-desc")));
    assert_eq!(titles(&state), vec!["Produk 02", "Produk 01", "Produk 00"]);
}

#[test]
fn load_more_category_sort_keeps_every_product() {
    let mut state = browser(45, PaginationMode::LoadMore);
    settle(&mut state, Message::SortSelected(SortBy::from_key("category-table")));

    let arranged = state.arranged();
    assert_eq!(arranged.len(), 45);
    assert!(arranged[..30].iter().all(|p| p.category == "table"));
}

#[test]
fn card_detail_press_navigates() {
    let mut state = browser(3, PaginationMode::Paged);
    let path = state.visible()[0].detail_path();
    assert_eq!(
        state.handle(Message::Card(
            iced_showroom::ui::product_card::Message::OpenDetail(path.clone())
        )),
        Effect::Navigate(path)
    );
}
