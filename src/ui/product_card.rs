// SPDX-License-Identifier: MPL-2.0
//! Product cards: a grid tile and a list row rendered from a [`CardData`].
//!
//! Both renderers are pure. Pressing the detail button emits the product's
//! detail path.

use crate::catalog::{format_price, resolve_asset, CardData};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, rule, stack, text};
use iced::{ContentFit, Element, Font, Length};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Navigate to a product detail path.
    OpenDetail(String),
}

/// Contextual data needed to render cards.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub asset_root: &'a Path,
    pub sold_out_badge: bool,
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

fn thumbnail<'a>(src: Option<&str>, ctx: ViewContext<'a>, size: Length) -> Element<'a, Message> {
    match src {
        Some(src) => image(Handle::from_path(resolve_asset(ctx.asset_root, src)))
            .content_fit(ContentFit::Cover)
            .width(size)
            .height(size)
            .into(),
        None => container(text(ctx.i18n.tr("product-no-image")).size(typography::CAPTION))
            .width(size)
            .height(size)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    }
}

/// Overlays the "Sold out" tag on the card corner when enabled.
fn with_badge<'a>(card: Element<'a, Message>, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.sold_out_badge {
        return card;
    }

    let badge = container(text(ctx.i18n.tr("product-sold-out")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge);

    stack![card, container(badge).padding(spacing::SM)].into()
}

fn detail_button<'a>(label: String, card: &CardData<'_>) -> iced::widget::Button<'a, Message> {
    button(text(label).size(typography::BODY).font(bold()))
        .on_press(Message::OpenDetail(card.detail_path()))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
}

/// Grid tile: thumbnail, title, price, short rule, "Detail" button.
pub fn grid<'a>(card: CardData<'a>, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = column![
        thumbnail(card.image, ctx, Length::Fixed(sizing::GRID_TILE_MIN)),
        text(card.title).size(typography::BODY_LG).font(bold()),
        text(format_price(card.price)).size(typography::BODY),
        container(rule::horizontal(1)).width(Length::Fixed(sizing::GRID_TILE_MIN / 4.0)),
        detail_button(ctx.i18n.tr("product-detail"), &card),
    ]
    .spacing(spacing::XS)
    .align_x(Horizontal::Center)
    .width(Length::Fill);

    let tile = container(body)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::card);

    with_badge(tile.into(), ctx)
}

/// List row: thumbnail, title and description, price column with the
/// "Details" button.
pub fn list<'a>(card: CardData<'a>, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let info = column![
        text(card.title).size(typography::TITLE_SM).font(bold()),
        text(card.description).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .width(Length::FillPortion(3));

    let price = column![
        text(format_price(card.price))
            .size(typography::BODY_LG)
            .font(bold()),
        detail_button(ctx.i18n.tr("product-details"), &card),
    ]
    .spacing(spacing::XS)
    .align_x(Horizontal::Center)
    .width(Length::FillPortion(1));

    let body = row![
        thumbnail(card.image, ctx, Length::Fixed(sizing::LIST_THUMBNAIL)),
        info,
        rule::vertical(1),
        price,
    ]
    .spacing(spacing::MD)
    .align_y(Vertical::Center);

    let tile = container(body)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::card);

    with_badge(tile.into(), ctx)
}
