// SPDX-License-Identifier: MPL-2.0
//! Modal image viewer with circular navigation and swipe support.
//!
//! The gallery grid is rendered inline by [`gallery`]; while open, the
//! parent stacks [`overlay`] above the page.

use crate::catalog::resolve_asset;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::{SwipeDirection, SwipeState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, opaque, text, Column, Row};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Gallery columns.
const GALLERY_COLUMNS: usize = 3;

/// Maximum width of the enlarged image.
const VIEWER_MAX_WIDTH: f32 = 800.0;

#[derive(Debug, Clone, Default)]
pub struct State {
    title: String,
    images: Vec<String>,
    current: Option<usize>,
    swipe: SwipeState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Open(usize),
    Close,
    Previous,
    Next,
    TouchStart(f32),
    TouchMove(f32),
    TouchEnd,
    TouchLost,
}

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub asset_root: &'a Path,
}

impl State {
    #[must_use]
    pub fn new(title: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            title: title.into(),
            images,
            current: None,
            swipe: SwipeState::default(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Index shown while open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Accessible label of the image at `index` (1-based in the text).
    #[must_use]
    pub fn alt_text(&self, index: usize) -> String {
        format!("{} {}", self.title, index + 1)
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Open(index) => self.open(index),
            Message::Close => self.close(),
            Message::Previous => self.previous(),
            Message::Next => self.next(),
            Message::TouchStart(x) => self.swipe.touch_start(x),
            Message::TouchMove(x) => self.swipe.touch_move(x),
            Message::TouchEnd => match self.swipe.touch_end() {
                Some(SwipeDirection::Next) => self.next(),
                Some(SwipeDirection::Previous) => self.previous(),
                None => {}
            },
            Message::TouchLost => self.swipe.cancel(),
        }
    }

    fn open(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = Some(index);
        }
    }

    fn close(&mut self) {
        self.current = None;
        self.swipe.cancel();
    }

    fn previous(&mut self) {
        let n = self.images.len();
        if let Some(index) = self.current.filter(|_| n > 0) {
            self.current = Some((index + n - 1) % n);
        }
    }

    fn next(&mut self) {
        let n = self.images.len();
        if let Some(index) = self.current.filter(|_| n > 0) {
            self.current = Some((index + 1) % n);
        }
    }
}

/// Thumbnail grid; pressing a thumbnail opens the viewer at that index.
pub fn gallery<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let indexed: Vec<(usize, &String)> = state.images.iter().enumerate().collect();

    indexed
        .chunks(GALLERY_COLUMNS)
        .fold(Column::new().spacing(spacing::SM), |grid, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(spacing::SM), |row, (index, src)| {
                let thumbnail = image(Handle::from_path(resolve_asset(ctx.asset_root, src)))
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(sizing::GALLERY_THUMBNAIL))
                    .height(Length::Fixed(sizing::GALLERY_THUMBNAIL));

                row.push(
                    button(thumbnail)
                        .on_press(Message::Open(*index))
                        .padding(0)
                        .style(styles::button::ghost),
                )
            });
            grid.push(row)
        })
        .into()
}

/// Full-window viewer, or `None` while closed.
pub fn overlay<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let index = state.current?;
    let src = state.images.get(index)?;

    let control = |icon, message| {
        button(icons::tinted(icons::sized(icon, sizing::ICON_MD), palette::WHITE))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
            ))
    };

    let close_button = button(text(ctx.i18n.tr("lightbox-close")).size(typography::BODY))
        .on_press(Message::Close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let picture = opaque(
        container(
            column![
                image(Handle::from_path(resolve_asset(ctx.asset_root, src)))
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
                text(state.alt_text(index))
                    .size(typography::CAPTION)
                    .color(palette::WHITE),
            ]
            .spacing(spacing::XS)
            .align_x(Horizontal::Center),
        )
        .max_width(VIEWER_MAX_WIDTH)
        .padding(spacing::LG),
    );

    let mut middle = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill);
    if state.len() > 1 {
        middle = middle.push(control(icons::chevron_left(), Message::Previous));
    }
    middle = middle.push(
        container(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );
    if state.len() > 1 {
        middle = middle.push(control(icons::chevron_right(), Message::Next));
    }

    let content = column![
        container(close_button)
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(spacing::SM),
        middle,
    ];

    let backdrop = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    Some(mouse_area(backdrop).on_press(Message::Close).into())
}
