// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: announcement strip, brand, menu entries with the shop
//! dropdown, and the full-screen mobile menu.
//!
//! The desktop dropdown opens on hover and closes a short delay after the
//! pointer leaves both the "Shop" entry and the panel. The delay runs in a
//! [`TimerSlot`], so re-entering before it elapses keeps the panel open.

use crate::app::route::Route;
use crate::catalog::resolve_asset;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::{TimerSlot, TimerToken};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image, mouse_area, opaque, row, scrollable, text, Column, Row,
};
use iced::{ContentFit, Element, Font, Length, Radians};
use std::path::Path;

pub const HOME_PATH: &str = "/";
pub const SHOP_PATH: &str = "/shop";

/// Top-level menu entry.
pub struct MenuEntry {
    pub label_key: &'static str,
    pub path: &'static str,
    pub has_dropdown: bool,
}

/// Shop sub-category shown in the dropdown.
pub struct DropdownItem {
    pub label_key: &'static str,
    pub image: Option<&'static str>,
    pub path: &'static str,
}

pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        label_key: "nav-about",
        path: "/about",
        has_dropdown: false,
    },
    MenuEntry {
        label_key: "nav-shop",
        path: SHOP_PATH,
        has_dropdown: true,
    },
    MenuEntry {
        label_key: "nav-blog",
        path: "/blog",
        has_dropdown: false,
    },
    MenuEntry {
        label_key: "nav-faq",
        path: "/faq",
        has_dropdown: false,
    },
];

pub const DROPDOWN: &[DropdownItem] = &[
    DropdownItem {
        label_key: "nav-tables",
        image: Some("/images/kursi-1.jpg"),
        path: "/shop/table",
    },
    DropdownItem {
        label_key: "nav-chairs",
        image: Some("/images/kursi-2.jpg"),
        path: "/shop/chair",
    },
    DropdownItem {
        label_key: "nav-cabinet",
        image: Some("/images/sofa-1.jpg"),
        path: "/shop/cabinet",
    },
    DropdownItem {
        label_key: "nav-shelf",
        image: Some("/images/sofa-2.jpg"),
        path: "/shop/shelf",
    },
    DropdownItem {
        label_key: "nav-couch",
        image: Some("/images/sofa-3.jpg"),
        path: "/shop/couch",
    },
    DropdownItem {
        label_key: "nav-others",
        image: None,
        path: SHOP_PATH,
    },
];

/// Whether the menu entry at `path` is highlighted on `current`.
///
/// `/` matches only itself. Other entries match by prefix, except that the
/// shop entry stays dark on a sub-category page listed in the dropdown.
#[must_use]
pub fn is_active(path: &str, current: &str) -> bool {
    if path == HOME_PATH {
        return current == HOME_PATH;
    }
    if !current.starts_with(path) {
        return false;
    }
    if path == SHOP_PATH && current != SHOP_PATH {
        return !DROPDOWN.iter().any(|item| item.path == current);
    }
    true
}

#[derive(Debug, Clone, Default)]
pub struct State {
    menu_open: bool,
    mobile_dropdown_open: bool,
    dropdown_open: bool,
    hover_close: TimerSlot,
    compact: bool,
    previous_path: String,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer entered the shop entry or the dropdown panel.
    DropdownEnter,
    /// Pointer left the shop entry or the dropdown panel.
    DropdownLeave,
    HoverCloseElapsed(TimerToken),
    ToggleMenu,
    ToggleMobileDropdown,
    Navigate(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Start the close delay; deliver `HoverCloseElapsed(token)` when done.
    ScheduleClose(TimerToken),
    /// The pending close delay is obsolete.
    CancelClose,
    Navigate(String),
}

impl State {
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        Self {
            previous_path: initial_path.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn mobile_dropdown_open(&self) -> bool {
        self.mobile_dropdown_open
    }

    #[must_use]
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DropdownEnter => {
                let had_timer = self.hover_close.is_pending();
                self.hover_close.cancel();
                self.dropdown_open = true;
                if had_timer {
                    Event::CancelClose
                } else {
                    Event::None
                }
            }
            Message::DropdownLeave => Event::ScheduleClose(self.hover_close.schedule()),
            Message::HoverCloseElapsed(token) => {
                if self.hover_close.fire(token) {
                    self.dropdown_open = false;
                }
                Event::None
            }
            Message::ToggleMenu => {
                // The sub-menu follows the menu when it is opened or closed.
                self.menu_open = !self.menu_open;
                self.mobile_dropdown_open = self.menu_open;
                Event::None
            }
            Message::ToggleMobileDropdown => {
                self.mobile_dropdown_open = !self.mobile_dropdown_open;
                Event::None
            }
            Message::Navigate(path) => {
                self.menu_open = false;
                self.mobile_dropdown_open = false;
                Event::Navigate(path)
            }
        }
    }

    /// Closes both dropdowns when `path` differs from the last one seen.
    ///
    /// Returns `true` if the path changed.
    pub fn route_changed(&mut self, path: &str) -> bool {
        if path == self.previous_path {
            return false;
        }
        self.dropdown_open = false;
        self.mobile_dropdown_open = false;
        self.hover_close.cancel();
        self.previous_path = path.to_string();
        true
    }

    /// Updates compact mode from the page scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f32, threshold: f32) {
        self.compact = offset > threshold;
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub route: &'a Route,
    pub desktop: bool,
    pub asset_root: &'a Path,
}

impl ViewContext<'_> {
    /// About page before scrolling, with the dropdown closed: menu on brand green.
    fn on_brand(&self) -> bool {
        matches!(self.route, Route::About) && !self.state.compact && !self.state.dropdown_open
    }
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Announcement strip and the header row.
pub fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    if !ctx.state.compact {
        content = content.push(announcement(ctx));
    }

    let brand = button(
        text(ctx.i18n.tr("app-brand"))
            .size(typography::TITLE_MD)
            .font(bold()),
    )
    .on_press(Message::Navigate(HOME_PATH.to_string()))
    .style(styles::button::nav_link(false, ctx.on_brand()));

    let trailing: Element<'a, Message> = if ctx.desktop {
        desktop_menu(ctx)
    } else {
        mobile_toggle(ctx)
    };

    let height = if ctx.state.compact {
        sizing::NAVBAR_COMPACT_HEIGHT
    } else {
        sizing::NAVBAR_HEIGHT
    };

    let bar = row![
        brand,
        container(trailing)
            .width(Length::Fill)
            .align_x(Horizontal::Right)
    ]
    .align_y(Vertical::Center)
    .padding([0.0, spacing::LG])
    .height(Length::Fixed(height));

    content = content.push(
        container(bar)
            .width(Length::Fill)
            .style(styles::container::navbar(ctx.state.compact, ctx.on_brand())),
    );

    content.into()
}

fn announcement<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let about = matches!(ctx.route, Route::About);
    let help = button(
        row![
            icons::sized(icons::question_circle(), sizing::ICON_SM),
            text(ctx.i18n.tr("nav-help-center")).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS)
        .align_y(Vertical::Center),
    )
    .on_press(Message::Navigate("/faq".to_string()))
    .padding([0.0, spacing::XS])
    .style(styles::button::nav_link(false, about));

    container(help)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ANNOUNCEMENT_HEIGHT))
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .style(styles::container::announcement(about))
        .into()
}

fn desktop_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.route.path();
    let light_text = ctx.on_brand();

    MENU.iter()
        .fold(Row::new().spacing(spacing::MD).align_y(Vertical::Center), |menu, entry| {
            let active = is_active(entry.path, &current);
            let label = text(ctx.i18n.tr(entry.label_key)).size(typography::BODY_LG);

            let item: Element<'a, Message> = if entry.has_dropdown {
                let content = row![
                    label,
                    icons::sized(icons::chevron_down(), sizing::ICON_SM)
                ]
                .spacing(spacing::XXS)
                .align_y(Vertical::Center);
                mouse_area(
                    button(content)
                        .on_press(Message::Navigate(entry.path.to_string()))
                        .style(styles::button::nav_link(active, light_text)),
                )
                .on_enter(Message::DropdownEnter)
                .on_exit(Message::DropdownLeave)
                .into()
            } else {
                button(label)
                    .on_press(Message::Navigate(entry.path.to_string()))
                    .style(styles::button::nav_link(active, light_text))
                    .into()
            };
            menu.push(item)
        })
        .into()
}

fn mobile_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let icon = if ctx.state.menu_open {
        icons::cross()
    } else {
        icons::hamburger()
    };

    button(icons::sized(icon, sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::ghost)
        .into()
}

fn dropdown_thumbnail<'a>(item: &DropdownItem, asset_root: &Path, size: f32) -> Element<'a, Message> {
    match item.image {
        Some(src) => image(Handle::from_path(resolve_asset(asset_root, src)))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => container(icons::sized(icons::plus(), sizing::ICON_LG))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    }
}

/// Desktop dropdown panel, or `None` while closed or on mobile.
pub fn dropdown<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.desktop || !ctx.state.dropdown_open {
        return None;
    }

    let items = DROPDOWN.iter().fold(Row::new().spacing(spacing::MD), |items, item| {
        let tile = column![
            dropdown_thumbnail(item, ctx.asset_root, sizing::DROPDOWN_IMAGE),
            text(ctx.i18n.tr(item.label_key)).size(typography::BODY),
        ]
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

        items.push(
            button(tile)
                .on_press(Message::Navigate(item.path.to_string()))
                .style(styles::button::ghost),
        )
    });

    let panel = mouse_area(
        container(items)
            .padding(spacing::MD)
            .style(styles::container::panel),
    )
    .on_enter(Message::DropdownEnter)
    .on_exit(Message::DropdownLeave);

    Some(
        container(opaque(panel))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into(),
    )
}

/// Full-screen mobile menu, or `None` while closed or on desktop.
pub fn mobile_sheet<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.desktop || !ctx.state.menu_open {
        return None;
    }

    let current = ctx.route.path();
    let mut entries = Column::new().spacing(spacing::SM).width(Length::Fill);

    for entry in MENU {
        let active = is_active(entry.path, &current);
        let label = text(ctx.i18n.tr(entry.label_key)).size(typography::TITLE_SM);

        if entry.has_dropdown {
            let chevron = icons::sized(icons::chevron_down(), sizing::ICON_MD).rotation(
                if ctx.state.mobile_dropdown_open {
                    Radians::PI
                } else {
                    Radians(0.0)
                },
            );
            entries = entries.push(
                row![
                    button(label)
                        .on_press(Message::Navigate(entry.path.to_string()))
                        .style(styles::button::nav_link(active, false))
                        .width(Length::Fill),
                    button(chevron)
                        .on_press(Message::ToggleMobileDropdown)
                        .style(styles::button::ghost),
                ]
                .align_y(Vertical::Center),
            );

            if ctx.state.mobile_dropdown_open {
                let sub_menu = DROPDOWN.iter().fold(
                    Row::new().spacing(spacing::SM),
                    |sub_menu, item| {
                        sub_menu.push(
                            button(
                                column![
                                    dropdown_thumbnail(item, ctx.asset_root, sizing::ICON_LG * 2.0),
                                    text(ctx.i18n.tr(item.label_key)).size(typography::BODY),
                                ]
                                .spacing(spacing::XXS)
                                .align_x(Horizontal::Center),
                            )
                            .on_press(Message::Navigate(item.path.to_string()))
                            .style(styles::button::ghost),
                        )
                    },
                );
                entries = entries.push(
                    scrollable(sub_menu).direction(scrollable::Direction::Horizontal(
                        scrollable::Scrollbar::default(),
                    )),
                );
            }
        } else {
            entries = entries.push(
                button(label)
                    .on_press(Message::Navigate(entry.path.to_string()))
                    .style(styles::button::nav_link(active, false))
                    .width(Length::Fill),
            );
        }
    }

    let footer = text(ctx.i18n.tr("nav-showroom-hours"))
        .size(typography::CAPTION)
        .color(palette::STONE_500);

    let sheet = container(
        column![scrollable(entries).height(Length::Fill), footer]
            .spacing(spacing::MD)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::sheet);

    Some(opaque(sheet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_active_only_on_home() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn prefix_entries_are_active() {
        assert!(is_active("/about", "/about"));
        assert!(is_active("/blog", "/blog"));
        assert!(!is_active("/blog", "/faq"));
    }

    #[test]
    fn shop_entry_defers_to_dropdown_items() {
        assert!(is_active("/shop", "/shop"));
        assert!(!is_active("/shop", "/shop/chair"));
        assert!(is_active("/shop", "/shop/chair/kursi-a"));
        assert!(is_active("/shop", "/shop/lamp"));
    }

    #[test]
    fn hover_leave_then_enter_keeps_dropdown_open() {
        let mut state = State::new("/");
        state.update(Message::DropdownEnter);
        let token = match state.update(Message::DropdownLeave) {
            Event::ScheduleClose(token) => token,
            other => panic!("expected ScheduleClose, got {other:?}"),
        };
        assert_eq!(state.update(Message::DropdownEnter), Event::CancelClose);
        state.update(Message::HoverCloseElapsed(token));
        assert!(state.dropdown_open());
    }

    #[test]
    fn hover_leave_closes_after_delay() {
        let mut state = State::new("/");
        state.update(Message::DropdownEnter);
        let Event::ScheduleClose(token) = state.update(Message::DropdownLeave) else {
            panic!("expected ScheduleClose");
        };
        state.update(Message::HoverCloseElapsed(token));
        assert!(!state.dropdown_open());
    }

    #[test]
    fn only_latest_close_timer_counts() {
        let mut state = State::new("/");
        state.update(Message::DropdownEnter);
        let Event::ScheduleClose(first) = state.update(Message::DropdownLeave) else {
            panic!("expected ScheduleClose");
        };
        let Event::ScheduleClose(second) = state.update(Message::DropdownLeave) else {
            panic!("expected ScheduleClose");
        };
        state.update(Message::HoverCloseElapsed(first));
        assert!(state.dropdown_open());
        state.update(Message::HoverCloseElapsed(second));
        assert!(!state.dropdown_open());
    }

    #[test]
    fn mobile_menu_opens_and_closes_sub_menu() {
        let mut state = State::new("/");
        state.update(Message::ToggleMenu);
        assert!(state.menu_open());
        assert!(state.mobile_dropdown_open());

        state.update(Message::ToggleMobileDropdown);
        assert!(!state.mobile_dropdown_open());
        assert!(state.menu_open());

        state.update(Message::ToggleMenu);
        assert!(!state.menu_open());
        assert!(!state.mobile_dropdown_open());
    }

    #[test]
    fn following_a_link_closes_mobile_menu() {
        let mut state = State::new("/");
        state.update(Message::ToggleMenu);
        let event = state.update(Message::Navigate("/faq".into()));
        assert_eq!(event, Event::Navigate("/faq".into()));
        assert!(!state.menu_open());
        assert!(!state.mobile_dropdown_open());
    }

    #[test]
    fn route_change_closes_dropdowns() {
        let mut state = State::new("/");
        state.update(Message::DropdownEnter);
        state.update(Message::ToggleMenu);
        assert!(state.route_changed("/shop/chair"));
        assert!(!state.dropdown_open());
        assert!(!state.mobile_dropdown_open());
        assert!(!state.route_changed("/shop/chair"));
    }

    #[test]
    fn compact_mode_follows_scroll_threshold() {
        let mut state = State::new("/");
        state.set_scroll_offset(80.0, 80.0);
        assert!(!state.is_compact());
        state.set_scroll_offset(81.0, 80.0);
        assert!(state.is_compact());
        state.set_scroll_offset(0.0, 80.0);
        assert!(!state.is_compact());
    }

    #[test]
    fn dropdown_lists_six_items() {
        assert_eq!(DROPDOWN.len(), 6);
        assert!(DROPDOWN.iter().filter(|item| item.image.is_none()).count() == 1);
    }
}
