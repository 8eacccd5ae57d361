// SPDX-License-Identifier: MPL-2.0
//! Static pages: home, about, blog, FAQ, not-found and the catalog error page.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar::DROPDOWN;
use crate::ui::navtab;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Font, Length};

/// FAQ topics as (tab label key, answer key).
pub const FAQ_TOPICS: &[(&str, &str)] = &[
    ("faq-topic-orders", "faq-answer-orders"),
    ("faq-topic-shipping", "faq-answer-shipping"),
    ("faq-topic-returns", "faq-answer-returns"),
    ("faq-topic-care", "faq-answer-care"),
];

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(String),
    Faq(navtab::Message),
}

fn heading<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .into()
}

fn paragraph<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::BODY_LG).into()
}

fn link_button<'a>(label: String, path: &str) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(Message::Navigate(path.to_string()))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .into()
}

/// Centers page content and caps its width.
fn frame<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding(spacing::XL),
    )
    .center_x(Length::Fill)
    .into()
}

pub fn home(i18n: &I18n) -> Element<'_, Message> {
    let categories = DROPDOWN
        .iter()
        .fold(Row::new().spacing(spacing::SM), |categories, item| {
            categories.push(
                button(text(i18n.tr(item.label_key)).size(typography::BODY))
                    .on_press(Message::Navigate(item.path.to_string()))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::unselected),
            )
        });

    frame(
        column![
            heading(i18n.tr("home-title")),
            paragraph(i18n.tr("home-subtitle")),
            link_button(i18n.tr("home-cta"), "/shop"),
            categories,
        ]
        .spacing(spacing::LG),
    )
}

pub fn about(i18n: &I18n) -> Element<'_, Message> {
    frame(
        column![
            heading(i18n.tr("about-title")),
            paragraph(i18n.tr("about-body")),
            paragraph(i18n.tr("about-showroom")),
        ]
        .spacing(spacing::MD),
    )
}

pub fn blog(i18n: &I18n) -> Element<'_, Message> {
    frame(
        column![heading(i18n.tr("blog-title")), paragraph(i18n.tr("blog-empty"))]
            .spacing(spacing::MD),
    )
}

/// Tab labels for the FAQ topics in the current locale.
#[must_use]
pub fn faq_tabs(i18n: &I18n) -> navtab::State {
    navtab::State::new(FAQ_TOPICS.iter().map(|(label, _)| i18n.tr(label)).collect())
}

pub fn faq<'a>(tabs: &'a navtab::State, i18n: &'a I18n) -> Element<'a, Message> {
    let answer = tabs
        .active()
        .and_then(|index| FAQ_TOPICS.get(index))
        .map(|(_, answer)| i18n.tr(answer))
        .unwrap_or_default();

    let body = row![
        container(navtab::view(tabs).map(Message::Faq)).width(Length::FillPortion(1)),
        container(paragraph(answer))
            .padding(spacing::MD)
            .width(Length::FillPortion(3))
            .style(styles::container::panel),
    ]
    .spacing(spacing::LG);

    frame(column![heading(i18n.tr("faq-title")), body].spacing(spacing::LG))
}

pub fn not_found<'a>(path: &str, i18n: &'a I18n) -> Element<'a, Message> {
    frame(
        column![
            heading(i18n.tr("not-found-title")),
            paragraph(i18n.tr_with_args("not-found-body", &[("path", path)])),
            link_button(i18n.tr("not-found-home"), "/"),
        ]
        .spacing(spacing::MD),
    )
}

/// Localized catalog failure with its technical details.
pub fn catalog_error<'a>(error: Option<&Error>, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n.tr("error-page-title")));

    if let Some(error) = error {
        content = content.push(paragraph(i18n.tr(error.i18n_key()))).push(
            container(text(error.to_string()).size(typography::CAPTION))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::panel),
        );
    }

    frame(content.push(link_button(i18n.tr("not-found-home"), "/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn faq_tabs_match_topics() {
        let tabs = faq_tabs(&I18n::default());
        assert_eq!(tabs.tabs().len(), FAQ_TOPICS.len());
        assert_eq!(tabs.active(), Some(0));
    }

    #[test]
    fn pages_render() {
        let i18n = I18n::default();
        let tabs = faq_tabs(&i18n);
        let error = Error::from(CatalogError::EmptySource("products".into()));
        let _ = home(&i18n);
        let _ = about(&i18n);
        let _ = blog(&i18n);
        let _ = faq(&tabs, &i18n);
        let _ = not_found("/nowhere", &i18n);
        let _ = catalog_error(Some(&error), &i18n);
        let _ = catalog_error(None, &i18n);
    }
}
