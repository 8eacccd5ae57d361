// SPDX-License-Identifier: MPL-2.0
//! Product browser: sortable, paginated product view with grid and list
//! layouts.

pub mod component;
pub mod controls;

use self::component::{Message, State};
use crate::app::config::{
    ViewMode, GRID_COLUMNS_NARROW, GRID_COLUMNS_WIDE, GRID_WIDE_BREAKPOINT, LIST_COLUMNS_WIDE,
    LIST_WIDE_BREAKPOINT,
};
use crate::catalog::CardData;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::product_card;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, text, Column, Row, Space};
use iced::{Color, Element, Length};
use std::path::Path;

pub use component::{Effect, Settings};

/// Contextual data needed to render the browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub asset_root: &'a Path,
    pub sold_out_badge: bool,
    /// Window width, used for the column count.
    pub width: f32,
    pub spinner_color: Color,
}

/// Number of columns for `view` at window `width`.
#[must_use]
pub fn columns(view: ViewMode, width: f32) -> usize {
    match view {
        ViewMode::Grid if width >= GRID_WIDE_BREAKPOINT => GRID_COLUMNS_WIDE,
        ViewMode::Grid => GRID_COLUMNS_NARROW,
        ViewMode::List if width >= LIST_WIDE_BREAKPOINT => LIST_COLUMNS_WIDE,
        ViewMode::List => 1,
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toolbar = controls::toolbar(state, ctx.i18n);

    let body: Element<'a, Message> = if state.is_transitioning() {
        busy(state, &ctx)
    } else {
        products(state, &ctx)
    };

    let mut content = column![toolbar, body]
        .spacing(spacing::LG)
        .width(Length::Fill);

    if state.shows_pagination() {
        content = content.push(controls::page_strip(state, ctx.i18n));
    } else if state.can_load_more() {
        content = content.push(controls::load_more(state, ctx.i18n));
    }

    container(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(spacing::LG)
        .into()
}

/// Spinner shown in place of the product region during a transition.
fn busy<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    container(AnimatedSpinner::new(ctx.spinner_color, state.spinner_rotation()).into_element())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GRID_TILE_MIN * 2.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn products<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let visible = state.visible();
    if visible.is_empty() {
        return container(text(ctx.i18n.tr("browser-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL)
            .into();
    }

    let card_ctx = product_card::ViewContext {
        i18n: ctx.i18n,
        asset_root: ctx.asset_root,
        sold_out_badge: ctx.sold_out_badge,
    };
    let view = state.view_mode();
    let per_row = columns(view, ctx.width);

    let rows = visible
        .chunks(per_row)
        .fold(Column::new().spacing(spacing::MD), |rows, chunk| {
            let mut row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, product| {
                let card = CardData::from(*product);
                let element = match view {
                    ViewMode::Grid => product_card::grid(card, card_ctx),
                    ViewMode::List => product_card::list(card, card_ctx),
                };
                row.push(container(element.map(Message::Card)).width(Length::FillPortion(1)))
            });
            // Pad the last row so cells keep the same width.
            for _ in chunk.len()..per_row {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            rows.push(row)
        });

    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_columns_follow_breakpoint() {
        assert_eq!(columns(ViewMode::Grid, 1023.0), 2);
        assert_eq!(columns(ViewMode::Grid, 1024.0), 6);
    }

    #[test]
    fn list_columns_follow_breakpoint() {
        assert_eq!(columns(ViewMode::List, 1200.0), 1);
        assert_eq!(columns(ViewMode::List, 1536.0), 2);
    }
}
