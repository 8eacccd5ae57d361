// SPDX-License-Identifier: MPL-2.0
//! Page frame: navbar header, scrollable page, and the overlay layers
//! (desktop dropdown, mobile menu, lightbox).

use super::config::{Config, DESKTOP_BREAKPOINT};
use super::route::Route;
use super::screen::Screen;
use super::{Message, PAGE_SCROLL_ID};
use crate::catalog::{category_label, Catalog};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use crate::ui::{lightbox, navbar, pages, product_detail, styles};
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, column, container, row, scrollable, text, Column, Id, Space, Stack};
use iced::{Element, Font, Length, Theme};
use std::path::Path;

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub catalog: &'a Catalog,
    pub catalog_error: Option<&'a Error>,
    pub asset_root: &'a Path,
    pub route: &'a Route,
    pub screen: &'a Screen,
    pub navbar: &'a navbar::State,
    pub window_width: f32,
    pub theme: Theme,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_ctx = navbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        route: ctx.route,
        desktop: ctx.window_width >= DESKTOP_BREAKPOINT,
        asset_root: ctx.asset_root,
    };

    let header = navbar::header(&navbar_ctx).map(Message::Navbar);

    let mut page = Column::new().width(Length::Fill);
    if let Some(key) = ctx.config_warning {
        page = page.push(warning_banner(ctx.i18n, key));
    }
    page = page.push(screen_content(&ctx));

    let page = scrollable(page)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset().y));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);
    if let Some(dropdown) = navbar::dropdown(&navbar_ctx) {
        layers = layers.push(dropdown.map(Message::Navbar));
    }
    if let Some(sheet) = navbar::mobile_sheet(&navbar_ctx) {
        layers = layers.push(sheet.map(Message::Navbar));
    }

    let body: Element<'_, Message> = column![header, layers].into();

    match lightbox_overlay(&ctx) {
        Some(overlay) => Stack::new().push(body).push(overlay).into(),
        None => body,
    }
}

fn lightbox_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let Screen::Product {
        lightbox: gallery, ..
    } = ctx.screen
    else {
        return None;
    };
    let lightbox_ctx = lightbox::ViewContext {
        i18n: ctx.i18n,
        asset_root: ctx.asset_root,
    };
    lightbox::overlay(gallery, &lightbox_ctx).map(|overlay| {
        overlay.map(|message| Message::Detail(product_detail::Message::Lightbox(message)))
    })
}

fn screen_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::Home => pages::home(ctx.i18n).map(Message::Page),
        Screen::About => pages::about(ctx.i18n).map(Message::Page),
        Screen::Blog => pages::blog(ctx.i18n).map(Message::Page),
        Screen::Faq(tabs) => pages::faq(tabs, ctx.i18n).map(Message::Page),
        Screen::NotFound(path) => pages::not_found(path, ctx.i18n).map(Message::Page),
        Screen::CatalogError => {
            pages::catalog_error(ctx.catalog_error, ctx.i18n).map(Message::Page)
        }
        Screen::Shop { category, browser: state } => shop(ctx, category.as_deref(), state),
        Screen::Product {
            category,
            slug,
            lightbox: gallery,
        } => match ctx.catalog.find(category, slug) {
            Some(product) => product_detail::view(
                product,
                gallery,
                product_detail::ViewContext {
                    i18n: ctx.i18n,
                    asset_root: ctx.asset_root,
                },
            )
            .map(Message::Detail),
            None => pages::not_found(&ctx.route.path(), ctx.i18n).map(Message::Page),
        },
    }
}

fn shop<'a>(
    ctx: &ViewContext<'a>,
    category: Option<&str>,
    state: &'a browser::component::State,
) -> Element<'a, Message> {
    let title = match category {
        Some(category) => category_label(category),
        None => ctx.i18n.tr("shop-title"),
    };

    let browser_ctx = browser::ViewContext {
        i18n: ctx.i18n,
        asset_root: ctx.asset_root,
        sold_out_badge: ctx.config.display.sold_out_badge,
        width: ctx.window_width,
        spinner_color: ColorScheme::for_theme(&ctx.theme).brand_primary,
    };

    let heading = text(title).size(typography::TITLE_LG).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    container(
        column![
            container(heading).padding([spacing::LG, spacing::LG]),
            browser::view(state, browser_ctx).map(Message::Browser),
        ]
        .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .center_x(Length::Fill)
    .into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::DismissWarning)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    container(
        row![
            text(i18n.tr(key)).size(typography::BODY),
            Space::new().width(Length::Fill),
            dismiss,
        ]
        .align_y(Vertical::Center),
    )
    .padding([spacing::XS, spacing::LG])
    .width(Length::Fill)
    .style(styles::container::warning)
    .into()
}
