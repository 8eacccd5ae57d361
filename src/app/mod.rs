// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar and the
//! mounted page.
//!
//! The `App` struct owns the loaded catalog, the configuration and the
//! current [`Screen`], and translates component effects into Iced tasks
//! (timers, scroll operations, navigation).

pub mod config;
mod message;
pub mod paths;
pub mod route;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;
pub use screen::Screen;

use crate::catalog::{loader, Catalog};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::task;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier of the page scrollable, used to reset its offset.
pub const PAGE_SCROLL_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    catalog: Catalog,
    /// Set when the catalog failed to load at startup.
    catalog_error: Option<Error>,
    asset_root: PathBuf,
    route: Route,
    screen: Screen,
    navbar: navbar::State,
    theme_mode: ThemeMode,
    window_width: f32,
    /// i18n key of a dismissible startup warning.
    config_warning: Option<String>,
    /// Pending browser transition; dropping it aborts the sleep.
    browser_timer: Option<task::Handle>,
    /// Pending dropdown close; dropping it aborts the sleep.
    navbar_timer: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("products", &self.catalog.len())
            .field("catalog_error", &self.catalog_error)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            catalog: Catalog::default(),
            catalog_error: None,
            asset_root: PathBuf::from("."),
            route: Route::Home,
            screen: Screen::Home,
            navbar: navbar::State::new("/"),
            theme_mode: ThemeMode::System,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            config_warning: None,
            browser_timer: None,
            navbar_timer: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced requires `Fn` for boot; the flags are consumed exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Catalog source: the CLI flag wins over `[catalog] source`.
fn catalog_source(flags: &Flags, config: &Config) -> Option<PathBuf> {
    flags
        .catalog_path
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.catalog.source.clone())
}

/// Directory image sources are resolved against.
///
/// Defaults to the catalog directory (or the file's parent), then the
/// working directory for the bundled catalog.
fn asset_root(source: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(root) = &config.catalog.asset_root {
        return root.clone();
    }
    match source {
        Some(path) if path.is_dir() => path.to_path_buf(),
        Some(path) => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => PathBuf::from("."),
    }
}

impl App {
    /// Loads configuration and the catalog, then mounts the initial route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let source = catalog_source(&flags, &config);
        let loaded = match &source {
            Some(path) => loader::load_from_path(path),
            None => loader::load_bundled(),
        };
        let (catalog, catalog_error) = match loaded {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                tracing::error!(error = %err, "failed to load catalog");
                (Catalog::default(), Some(err))
            }
        };

        let route = Route::parse(flags.route.as_deref().unwrap_or("/"));
        let screen = if catalog_error.is_some() {
            Screen::CatalogError
        } else {
            Screen::mount(&route, &catalog, browser::Settings::from_config(&config), &i18n)
        };

        tracing::info!(
            route = %route,
            products = catalog.len(),
            locale = %i18n.current_locale(),
            "application started"
        );

        let app = App {
            asset_root: asset_root(source.as_deref(), &config),
            navbar: navbar::State::new(&route.path()),
            theme_mode: config.general.theme_mode,
            i18n,
            config,
            catalog,
            catalog_error,
            route,
            screen,
            config_warning,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page = match &self.screen {
            Screen::Home => return app_name,
            Screen::About => self.i18n.tr("nav-about"),
            Screen::Blog => self.i18n.tr("nav-blog"),
            Screen::Faq(_) => self.i18n.tr("nav-faq"),
            Screen::Shop {
                category: Some(category),
                ..
            } => crate::catalog::category_label(category),
            Screen::Shop { category: None, .. } => self.i18n.tr("nav-shop"),
            Screen::Product { category, slug, .. } => self
                .catalog
                .find(category, slug)
                .map(|product| product.title.clone())
                .unwrap_or_default(),
            Screen::NotFound(_) => self.i18n.tr("not-found-title"),
            Screen::CatalogError => self.i18n.tr("error-page-title"),
        };
        format!("{page} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let touch_sub = subscription::create_touch_subscription(self.screen.lightbox_open());
        let tick_sub = subscription::create_tick_subscription(self.screen.is_transitioning());

        Subscription::batch([event_sub, touch_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
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
        };

        match message {
            Message::Navigate(path) => update::navigate(&mut ctx, &path),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Browser(browser_message) => {
                update::handle_browser_message(&mut ctx, browser_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::PageScrolled(offset) => {
                update::handle_page_scrolled(&mut ctx, offset);
                Task::none()
            }
            Message::WindowResized(size) => {
                *ctx.window_width = size.width;
                Task::none()
            }
            Message::KeyPressed(key) => update::handle_key(&mut ctx, &key),
            Message::Tick(_instant) => update::handle_browser_message(
                &mut ctx,
                browser::component::Message::SpinnerTick,
            ),
            Message::DismissWarning => {
                *ctx.config_warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            catalog: &self.catalog,
            catalog_error: self.catalog_error.as_ref(),
            asset_root: &self.asset_root,
            route: &self.route,
            screen: &self.screen,
            navbar: &self.navbar,
            window_width: self.window_width,
            theme: self.theme(),
            config_warning: self.config_warning.as_deref(),
        })
    }
}
