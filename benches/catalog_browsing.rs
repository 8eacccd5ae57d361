// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog browsing operations.
//!
//! Measures the performance of:
//! - Arranging a large catalog for each sort selection
//! - Slicing pages out of the arranged list
//! - A full browser transition (request + completion)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_showroom::app::config::ViewMode;
use iced_showroom::catalog::pagination::{page_numbers, total_pages};
use iced_showroom::catalog::{Cursor, PageSize, PaginationMode, Product, ProductImage, SortBy};
use iced_showroom::ui::browser::component::{Message, State};
use iced_showroom::ui::browser::{Effect, Settings};
use std::hint::black_box;
use std::time::Duration;

const CATEGORIES: [&str; 5] = ["chair", "table", "cabinet", "shelf", "couch"];

/// Generates a deterministic catalog of `count` products.
fn generate_catalog(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            title: format!("Produk {:05}", (i * 7919) % count),
            slug: format!("produk-{i:05}"),
            description: String::new(),
            image: vec![ProductImage {
                src: format!("/images/produk-{i:05}.jpg"),
            }],
            price: ((i * 104_729) % 10_000) as f64 * 1_000.0,
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
        })
        .collect()
}

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_arrange");
    let products = generate_catalog(10_000);

    for key in ["price-low", "title-asc", "category-shelf"] {
        let sort_by = SortBy::from_key(key);
        for mode in [PaginationMode::Paged, PaginationMode::LoadMore] {
            group.bench_with_input(
                BenchmarkId::new(key, format!("{mode:?}")),
                &sort_by,
                |b, sort_by| {
                    b.iter(|| black_box(mode.arrange(black_box(&products), sort_by)));
                },
            );
        }
    }

    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_paginate");
    let products = generate_catalog(10_000);
    let arranged = PaginationMode::Paged.arrange(&products, &SortBy::from_key("price-high"));
    let page_size = PageSize::default();
    let pages = total_pages(arranged.len(), page_size);

    group.bench_function("every_page", |b| {
        b.iter(|| {
            for page in 1..=pages {
                let range = Cursor::Page(page).visible_range(page_size, arranged.len());
                black_box(&arranged[range]);
                black_box(page_numbers(page, pages));
            }
        });
    });

    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("browser_transition");
    let products = generate_catalog(2_000);
    let settings = Settings {
        mode: PaginationMode::Paged,
        page_size: PageSize::default(),
        delay: Duration::from_millis(200),
        view: ViewMode::Grid,
    };

    group.bench_function("sort_then_render_slice", |b| {
        b.iter_batched(
            || State::new(products.clone(), settings),
            |mut state| {
                if let Effect::StartTimer { token, .. } =
                    state.handle(Message::SortSelected(SortBy::from_key("price-low")))
                {
                    state.handle(Message::TransitionElapsed(token));
                }
                black_box(state.visible().len())
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_arrange, bench_paginate, bench_transition);
criterion_main!(benches);
