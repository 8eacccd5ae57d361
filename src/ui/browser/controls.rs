// SPDX-License-Identifier: MPL-2.0
//! Browser controls: counter, sort selector, layout toggle, page strip and
//! "load more".

use super::component::{Message, State};
use crate::app::config::ViewMode;
use crate::catalog::pagination::page_numbers;
use crate::catalog::{category_label, PageItem, PaginationMode, SortBy};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, pick_list, row, text, Row, Space};
use iced::{Element, Length};
use std::fmt;

/// Entry of the "Sort by" selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOption {
    pub sort_by: SortBy,
    pub label: String,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Selector entries: the fixed sort orders, then one entry per category
/// present in the product list.
#[must_use]
pub fn sort_options(state: &State, i18n: &I18n) -> Vec<SortOption> {
    let fixed = [
        SortBy::None,
        SortBy::PriceLowToHigh,
        SortBy::PriceHighToLow,
        SortBy::TitleAscending,
        SortBy::TitleDescending,
    ];

    let mut categories: Vec<String> = Vec::new();
    for product in state.products() {
        let category = product.category.to_lowercase();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    fixed
        .into_iter()
        .map(|sort_by| SortOption {
            label: i18n.tr(sort_by.i18n_key()),
            sort_by,
        })
        .chain(categories.into_iter().map(|category| SortOption {
            label: i18n.tr_with_args("sort-category", &[("category", &category_label(&category))]),
            sort_by: SortBy::Category(category),
        }))
        .collect()
}

/// Counter, active-category badge, sort selector and layout toggle.
pub fn toolbar<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let counter = state.counter();
    let start = counter.start.to_string();
    let end = counter.end.to_string();
    let total = counter.total.to_string();
    let summary = text(i18n.tr_with_args(
        "browser-showing",
        &[("start", &start), ("end", &end), ("total", &total)],
    ))
    .size(typography::BODY);

    let mut left = Row::new().spacing(spacing::SM).align_y(Vertical::Center).push(summary);

    // Only the paged strategy filters; load-more merely reorders.
    if state.mode() == PaginationMode::Paged {
        if let Some(category) = state.sort_by().category() {
            let badge = container(
                text(i18n.tr_with_args(
                    "browser-category-only",
                    &[("category", &category_label(category))],
                ))
                .size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::chip);
            left = left.push(badge);
        }
    }

    let options = sort_options(state, i18n);
    let selected = options
        .iter()
        .find(|option| &option.sort_by == state.sort_by())
        .cloned();
    let picker = pick_list(options, selected, |option: SortOption| {
        Message::SortSelected(option.sort_by)
    })
    .placeholder(i18n.tr("sort-placeholder"))
    .padding(spacing::XS);

    let sort = row![text(i18n.tr("sort-label")).size(typography::BODY), picker]
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    row![
        left,
        Space::new().width(Length::Fill),
        sort,
        view_toggle(state.view_mode()),
    ]
    .spacing(spacing::MD)
    .align_y(Vertical::Center)
    .into()
}

fn view_toggle<'a>(active: ViewMode) -> Element<'a, Message> {
    let toggle = |mode: ViewMode, icon| {
        let style = if mode == active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(icons::sized(icon, sizing::ICON_MD))
            .on_press(Message::SetView(mode))
            .padding(spacing::XS)
            .style(style)
    };

    row![
        toggle(ViewMode::Grid, icons::grid()),
        toggle(ViewMode::List, icons::list()),
    ]
    .spacing(spacing::XXS)
    .into()
}

/// Previous, numbered pages with ellipses, next.
pub fn page_strip<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(current) = state.current_page() else {
        return Space::new().into();
    };
    let total = state.total_pages();
    let busy = state.is_transitioning();

    let previous = button(icons::sized(icons::chevron_left(), sizing::ICON_SM))
        .on_press_maybe((current > 1 && !busy).then_some(Message::PreviousPage))
        .padding(spacing::XS)
        .style(styles::button::unselected);
    let next = button(icons::sized(icons::chevron_right(), sizing::ICON_SM))
        .on_press_maybe((current < total && !busy).then_some(Message::NextPage))
        .padding(spacing::XS)
        .style(styles::button::unselected);

    let pages = page_numbers(current, total).into_iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |pages, item| match item {
            PageItem::Page(page) => {
                let style = if page == current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                pages.push(
                    button(text(page.to_string()).size(typography::BODY))
                        .on_press_maybe((!busy).then_some(Message::GoToPage(page)))
                        .padding([spacing::XXS, spacing::SM])
                        .style(style),
                )
            }
            PageItem::Ellipsis => {
                pages.push(text(i18n.tr("browser-ellipsis")).size(typography::BODY))
            }
        },
    );

    container(
        row![previous, pages, next]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
    )
    .center_x(Length::Fill)
    .into()
}

/// "Load more" button; disabled while a transition runs.
pub fn load_more<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let more = button(text(i18n.tr("browser-load-more")).size(typography::BODY))
        .on_press_maybe((!state.is_transitioning()).then_some(Message::LoadMore))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    container(more).center_x(Length::Fill).into()
}
