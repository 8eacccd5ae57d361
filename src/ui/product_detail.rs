// SPDX-License-Identifier: MPL-2.0
//! Product detail page: breadcrumb, title, price, description and the
//! image gallery backed by the lightbox.

use crate::catalog::{category_label, format_price, Product};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Font, Length};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    Navigate(String),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub asset_root: &'a Path,
}

/// Lightbox state for a freshly mounted detail page.
#[must_use]
pub fn lightbox_for(product: &Product) -> lightbox::State {
    lightbox::State::new(
        product.title.clone(),
        product.image.iter().map(|image| image.src.clone()).collect(),
    )
}

fn crumb<'a>(label: String, path: String) -> Element<'a, Message> {
    button(text(label).size(typography::CAPTION))
        .on_press(Message::Navigate(path))
        .padding(0)
        .style(styles::button::nav_link(false, false))
        .into()
}

pub fn view<'a>(
    product: &'a Product,
    gallery: &'a lightbox::State,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let category = product.category.to_lowercase();
    let breadcrumb = row![
        crumb(ctx.i18n.tr("nav-shop"), "/shop".to_string()),
        text("/").size(typography::CAPTION),
        crumb(category_label(&category), format!("/shop/{category}")),
        text("/").size(typography::CAPTION),
        text(product.title.as_str()).size(typography::CAPTION),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    let info = column![
        text(product.title.as_str())
            .size(typography::TITLE_LG)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
        text(format_price(product.price)).size(typography::TITLE_SM),
        text(product.description.as_str()).size(typography::BODY_LG),
    ]
    .spacing(spacing::MD)
    .width(Length::FillPortion(1));

    let lightbox_ctx = lightbox::ViewContext {
        i18n: ctx.i18n,
        asset_root: ctx.asset_root,
    };
    let images = lightbox::gallery(gallery, &lightbox_ctx).map(Message::Lightbox);

    let body = row![container(images).width(Length::FillPortion(1)), info].spacing(spacing::XL);

    container(
        container(column![breadcrumb, body].spacing(spacing::LG))
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding(spacing::XL),
    )
    .center_x(Length::Fill)
    .into()
}
