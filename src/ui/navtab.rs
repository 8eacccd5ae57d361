// SPDX-License-Identifier: MPL-2.0
//! Single-selection tab list.

use crate::ui::design_tokens::{spacing, typography};
use iced::font::Weight;
use iced::widget::{button, text, Column};
use iced::{Element, Font, Length};

/// Tab names and the active index.
#[derive(Debug, Clone)]
pub struct State {
    tabs: Vec<String>,
    active: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(usize),
}

/// Events propagated to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Selected(usize),
}

impl State {
    /// The first tab starts active.
    #[must_use]
    pub fn new(tabs: Vec<String>) -> Self {
        Self { tabs, active: 0 }
    }

    /// Active index; `None` when there are no tabs.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (!self.tabs.is_empty()).then_some(self.active)
    }

    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Select(index) if index < self.tabs.len() && index != self.active => {
                self.active = index;
                Effect::Selected(index)
            }
            Message::Select(_) => Effect::None,
        }
    }
}

/// Renders the tabs as a vertical list; the active one is bold.
pub fn view(state: &State) -> Element<'_, Message> {
    state
        .tabs
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, name)| {
            let font = if index == state.active {
                Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }
            } else {
                Font::DEFAULT
            };

            column.push(
                button(text(name.as_str()).size(typography::BODY_LG).font(font))
                    .on_press(Message::Select(index))
                    .style(crate::ui::styles::button::nav_link(index == state.active, false))
                    .width(Length::Fill),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> State {
        State::new(vec!["orders".into(), "shipping".into(), "returns".into()])
    }

    #[test]
    fn first_tab_starts_active() {
        assert_eq!(tabs().active(), Some(0));
    }

    #[test]
    fn select_in_range_activates() {
        let mut state = tabs();
        assert_eq!(state.handle(Message::Select(2)), Effect::Selected(2));
        assert_eq!(state.active(), Some(2));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut state = tabs();
        assert_eq!(state.handle(Message::Select(3)), Effect::None);
        assert_eq!(state.active(), Some(0));
    }

    #[test]
    fn reselecting_active_tab_is_silent() {
        let mut state = tabs();
        assert_eq!(state.handle(Message::Select(0)), Effect::None);
    }

    #[test]
    fn empty_list_has_no_active_tab() {
        let mut state = State::new(Vec::new());
        assert_eq!(state.active(), None);
        assert_eq!(state.handle(Message::Select(0)), Effect::None);
    }
}
