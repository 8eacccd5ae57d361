// SPDX-License-Identifier: MPL-2.0
//! Product browser state and update logic.
//!
//! Every user-visible change (sort, page, load more, layout) is routed
//! through a [`TransitionFence`]: the first request starts a fixed delay and
//! is applied when it elapses, requests arriving meanwhile are dropped.

use crate::app::config::{Config, ViewMode};
use crate::catalog::pagination::total_pages;
use crate::catalog::{Cursor, PageSize, PaginationMode, Product, SortBy};
use crate::ui::product_card;
use crate::ui::state::{TimerToken, TransitionFence};
use crate::ui::widgets::animated_spinner;
use std::ops::Range;
use std::time::Duration;

/// Browser settings resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub mode: PaginationMode,
    pub page_size: PageSize,
    pub delay: Duration,
    pub view: ViewMode,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.browser.pagination,
            page_size: config.page_size(),
            delay: config.transition_delay(),
            view: config.browser.default_view,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A change waiting behind the fence.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Page(usize),
    LoadMore,
    View(ViewMode),
    Sort(SortBy),
}

#[derive(Debug, Clone)]
pub enum Message {
    SortSelected(SortBy),
    GoToPage(usize),
    PreviousPage,
    NextPage,
    LoadMore,
    SetView(ViewMode),
    TransitionElapsed(TimerToken),
    SpinnerTick,
    Card(product_card::Message),
}

/// Side effects requested by the browser for the parent to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Deliver `TransitionElapsed(token)` after `delay`.
    StartTimer { token: TimerToken, delay: Duration },
    /// Reset the page scroll position.
    ScrollToTop,
    Navigate(String),
}

/// "Showing {start}-{end} of {total}" numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct State {
    products: Vec<Product>,
    settings: Settings,
    view: ViewMode,
    sort_by: SortBy,
    cursor: Cursor,
    fence: TransitionFence<Change>,
    spinner_rotation: f32,
}

impl State {
    /// Mounts a browser over `products` with fresh view state.
    #[must_use]
    pub fn new(products: Vec<Product>, settings: Settings) -> Self {
        Self {
            products,
            view: settings.view,
            sort_by: SortBy::None,
            cursor: settings.mode.initial_cursor(settings.page_size),
            fence: TransitionFence::default(),
            spinner_rotation: 0.0,
            settings,
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn mode(&self) -> PaginationMode {
        self.settings.mode
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub fn sort_by(&self) -> &SortBy {
        &self.sort_by
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.fence.is_transitioning()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Products after the current selection, before pagination.
    #[must_use]
    pub fn arranged(&self) -> Vec<&Product> {
        self.settings.mode.arrange(&self.products, &self.sort_by)
    }

    /// Number of products the current selection yields.
    #[must_use]
    pub fn total(&self) -> usize {
        self.arranged().len()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total(), self.settings.page_size)
    }

    /// Current page in paged mode.
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        match self.cursor {
            Cursor::Page(page) => Some(page),
            Cursor::Shown(_) => None,
        }
    }

    fn visible_range(&self, total: usize) -> Range<usize> {
        self.cursor.visible_range(self.settings.page_size, total)
    }

    /// The products currently on screen.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        let arranged = self.arranged();
        let range = self.visible_range(arranged.len());
        arranged[range].to_vec()
    }

    #[must_use]
    pub fn counter(&self) -> Counter {
        let total = self.total();
        let range = self.visible_range(total);
        Counter {
            start: if range.is_empty() { 0 } else { range.start + 1 },
            end: range.end,
            total,
        }
    }

    /// Whether "load more" has anything left to reveal.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        match self.cursor {
            Cursor::Shown(shown) => shown < self.total(),
            Cursor::Page(_) => false,
        }
    }

    /// Whether the page strip is shown.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        self.settings.mode == PaginationMode::Paged && self.total_pages() > 1
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SortSelected(sort_by) => {
                if sort_by == self.sort_by {
                    return Effect::None;
                }
                self.request(Change::Sort(sort_by))
            }
            Message::GoToPage(page) => self.go_to_page(page),
            Message::PreviousPage => match self.current_page() {
                Some(page) if page > 1 => self.go_to_page(page - 1),
                _ => Effect::None,
            },
            Message::NextPage => match self.current_page() {
                Some(page) => self.go_to_page(page + 1),
                None => Effect::None,
            },
            Message::LoadMore => {
                if !self.can_load_more() {
                    return Effect::None;
                }
                self.request(Change::LoadMore)
            }
            Message::SetView(view) => {
                if view == self.view {
                    return Effect::None;
                }
                self.request(Change::View(view))
            }
            Message::TransitionElapsed(token) => match self.fence.complete(token) {
                Some(change) => self.apply(change),
                None => Effect::None,
            },
            Message::SpinnerTick => {
                if self.is_transitioning() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                Effect::None
            }
            Message::Card(product_card::Message::OpenDetail(path)) => Effect::Navigate(path),
        }
    }

    fn go_to_page(&mut self, page: usize) -> Effect {
        let Some(current) = self.current_page() else {
            return Effect::None;
        };
        if page == current || page < 1 || page > self.total_pages() || self.is_transitioning() {
            return Effect::None;
        }
        self.request(Change::Page(page))
    }

    fn request(&mut self, change: Change) -> Effect {
        let description = format!("{change:?}");
        match self.fence.request(change) {
            Some(token) => {
                tracing::debug!(change = %description, "browser transition started");
                Effect::StartTimer {
                    token,
                    delay: self.settings.delay,
                }
            }
            None => {
                tracing::debug!(change = %description, "browser busy, change dropped");
                Effect::None
            }
        }
    }

    fn apply(&mut self, change: Change) -> Effect {
        tracing::debug!(?change, "browser transition applied");
        match change {
            Change::Page(page) => {
                self.cursor = Cursor::Page(page);
                Effect::ScrollToTop
            }
            Change::LoadMore => {
                if let Cursor::Shown(shown) = self.cursor {
                    let step = self.settings.page_size.value();
                    self.cursor = Cursor::Shown(shown.saturating_add(step).min(self.total()));
                }
                Effect::None
            }
            Change::View(view) => {
                self.view = view;
                Effect::None
            }
            Change::Sort(sort_by) => {
                self.sort_by = sort_by;
                self.cursor = self.settings.mode.initial_cursor(self.settings.page_size);
                Effect::None
            }
        }
    }
}
