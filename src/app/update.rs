// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components return effects; the handlers here turn them into tasks. Timer
//! tasks are made abortable and their handles kept with `abort_on_drop`, so
//! replacing or dropping a handle cancels the sleep.

use super::config::Config;
use super::route::Route;
use super::screen::Screen;
use super::{Message, PAGE_SCROLL_ID};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::browser::{self, component};
use crate::ui::state::timer;
use crate::ui::{lightbox, navbar, pages, product_detail};
use iced::keyboard::{self, key::Named};
use iced::task;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Duration;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub catalog: &'a Catalog,
    pub route: &'a mut Route,
    pub screen: &'a mut Screen,
    pub navbar: &'a mut navbar::State,
    pub window_width: &'a mut f32,
    pub config_warning: &'a mut Option<String>,
    pub browser_timer: &'a mut Option<task::Handle>,
    pub navbar_timer: &'a mut Option<task::Handle>,
}

/// Schedules `message` after `delay` and returns the task with its handle.
fn start_timer(delay: Duration, message: Message) -> (Task<Message>, task::Handle) {
    let (task, handle) = timer::after(delay, message).abortable();
    (task, handle.abort_on_drop())
}

fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset::START)
}

/// Mounts the page at `path`, dropping the previous page and its timers.
pub fn navigate(ctx: &mut UpdateContext<'_>, path: &str) -> Task<Message> {
    let route = Route::parse(path);
    tracing::debug!(from = %ctx.route, to = %route, "navigate");

    *ctx.browser_timer = None;
    *ctx.screen = Screen::mount(
        &route,
        ctx.catalog,
        browser::Settings::from_config(ctx.config),
        ctx.i18n,
    );
    if ctx.navbar.route_changed(&route.path()) {
        *ctx.navbar_timer = None;
    }
    ctx.navbar
        .set_scroll_offset(0.0, ctx.config.compact_scroll_threshold());
    *ctx.route = route;

    scroll_to_top()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match ctx.navbar.update(message) {
        navbar::Event::None => Task::none(),
        navbar::Event::ScheduleClose(token) => {
            let (task, handle) = start_timer(
                ctx.config.hover_close_delay(),
                Message::Navbar(navbar::Message::HoverCloseElapsed(token)),
            );
            *ctx.navbar_timer = Some(handle);
            task
        }
        navbar::Event::CancelClose => {
            *ctx.navbar_timer = None;
            Task::none()
        }
        navbar::Event::Navigate(path) => navigate(ctx, &path),
    }
}

pub fn handle_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    // Messages addressed to an unmounted browser are dropped.
    let Screen::Shop { browser, .. } = &mut *ctx.screen else {
        return Task::none();
    };

    match browser.handle(message) {
        browser::Effect::None => Task::none(),
        browser::Effect::StartTimer { token, delay } => {
            let (task, handle) = start_timer(
                delay,
                Message::Browser(component::Message::TransitionElapsed(token)),
            );
            *ctx.browser_timer = Some(handle);
            task
        }
        browser::Effect::ScrollToTop => {
            *ctx.browser_timer = None;
            scroll_to_top()
        }
        browser::Effect::Navigate(path) => navigate(ctx, &path),
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::Navigate(path) => navigate(ctx, &path),
        pages::Message::Faq(tab_message) => {
            if let Screen::Faq(tabs) = &mut *ctx.screen {
                tabs.handle(tab_message);
            }
            Task::none()
        }
    }
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: product_detail::Message,
) -> Task<Message> {
    match message {
        product_detail::Message::Navigate(path) => navigate(ctx, &path),
        product_detail::Message::Lightbox(lightbox_message) => {
            if let Screen::Product { lightbox, .. } = &mut *ctx.screen {
                lightbox.handle(lightbox_message);
            }
            Task::none()
        }
    }
}

/// Tracks the page offset for the compact navbar. Ignored while the mobile
/// menu covers the page.
pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, offset: f32) {
    if ctx.navbar.menu_open() {
        return;
    }
    ctx.navbar
        .set_scroll_offset(offset, ctx.config.compact_scroll_threshold());
}

/// Keyboard shortcuts: arrows and Escape drive the open lightbox; Escape
/// also closes the mobile menu.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: &keyboard::Key) -> Task<Message> {
    let keyboard::Key::Named(named) = key else {
        return Task::none();
    };

    if let Screen::Product { lightbox, .. } = &mut *ctx.screen {
        if lightbox.is_open() {
            let message = match named {
                Named::Escape => Some(lightbox::Message::Close),
                Named::ArrowLeft => Some(lightbox::Message::Previous),
                Named::ArrowRight => Some(lightbox::Message::Next),
                _ => None,
            };
            if let Some(message) = message {
                lightbox.handle(message);
            }
            return Task::none();
        }
    }

    if *named == Named::Escape && ctx.navbar.menu_open() {
        return handle_navbar_message(ctx, navbar::Message::ToggleMenu);
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::sample;

    struct Fixture {
        i18n: I18n,
        config: Config,
        catalog: Catalog,
        route: Route,
        screen: Screen,
        navbar: navbar::State,
        window_width: f32,
        config_warning: Option<String>,
        browser_timer: Option<task::Handle>,
        navbar_timer: Option<task::Handle>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                config: Config::default(),
                catalog: Catalog::new(vec![
                    sample("Kursi Jati", "chair", 1_500_000.0),
                    sample("Meja Bundar", "table", 2_000_000.0),
                ]),
                route: Route::Home,
                screen: Screen::Home,
                navbar: navbar::State::new("/"),
                window_width: 1280.0,
                config_warning: None,
                browser_timer: None,
                navbar_timer: None,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                config: &self.config,
                catalog: &self.catalog,
                route: &mut self.route,
                screen: &mut self.screen,
                navbar: &mut self.navbar,
                window_width: &mut self.window_width,
                config_warning: &mut self.config_warning,
                browser_timer: &mut self.browser_timer,
                navbar_timer: &mut self.navbar_timer,
            }
        }
    }

    #[test]
    fn navigate_mounts_route() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(), "/shop/chair/");
        assert_eq!(fixture.route, Route::Category("chair".into()));
        assert!(matches!(fixture.screen, Screen::Shop { .. }));
    }

    #[test]
    fn navigate_closes_navbar_dropdowns() {
        let mut fixture = Fixture::new();
        fixture.navbar.update(navbar::Message::DropdownEnter);
        let _ = navigate(&mut fixture.ctx(), "/shop/table");
        assert!(!fixture.navbar.dropdown_open());
    }

    #[test]
    fn navigate_drops_pending_browser_transition() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(), "/shop");
        let _ = handle_browser_message(
            &mut fixture.ctx(),
            component::Message::SetView(crate::app::config::ViewMode::Grid),
        );
        assert!(fixture.screen.is_transitioning());

        let _ = navigate(&mut fixture.ctx(), "/shop");
        assert!(!fixture.screen.is_transitioning());
        assert!(fixture.browser_timer.is_none());
    }

    #[test]
    fn browser_messages_without_browser_are_ignored() {
        let mut fixture = Fixture::new();
        let _ = handle_browser_message(&mut fixture.ctx(), component::Message::LoadMore);
        assert!(matches!(fixture.screen, Screen::Home));
    }

    #[test]
    fn escape_closes_lightbox_then_arrows_do_nothing() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(), "/shop/chair/kursi-jati");
        let _ = handle_detail_message(
            &mut fixture.ctx(),
            product_detail::Message::Lightbox(lightbox::Message::Open(0)),
        );
        let _ = handle_key(
            &mut fixture.ctx(),
            &keyboard::Key::Named(Named::ArrowRight),
        );
        assert!(
            matches!(&fixture.screen, Screen::Product { lightbox, .. } if lightbox.current() == Some(1))
        );

        let _ = handle_key(&mut fixture.ctx(), &keyboard::Key::Named(Named::Escape));
        assert!(!fixture.screen.lightbox_open());
    }

    #[test]
    fn escape_closes_mobile_menu() {
        let mut fixture = Fixture::new();
        fixture.navbar.update(navbar::Message::ToggleMenu);
        let _ = handle_key(&mut fixture.ctx(), &keyboard::Key::Named(Named::Escape));
        assert!(!fixture.navbar.menu_open());
    }

    #[test]
    fn scrolling_is_ignored_while_menu_open() {
        let mut fixture = Fixture::new();
        fixture.navbar.update(navbar::Message::ToggleMenu);
        handle_page_scrolled(&mut fixture.ctx(), 500.0);
        assert!(!fixture.navbar.is_compact());
    }

    #[test]
    fn faq_tab_selection_updates_screen() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(), "/faq");
        let _ = handle_page_message(
            &mut fixture.ctx(),
            pages::Message::Faq(crate::ui::navtab::Message::Select(2)),
        );
        assert!(matches!(&fixture.screen, Screen::Faq(tabs) if tabs.active() == Some(2)));
    }
}
