//! Pure transitions of the phone state machine.

use crate::phone::intent::PhoneIntent;
use crate::phone::state::{PhoneState, Screen};
use crate::ui::mvi::Reducer;

/// Reducer for [`PhoneState`].
///
/// The confirm screen is only entered while the selection points at an item;
/// every path that would show it without one lands on the menu instead.
pub struct PhoneReducer;

impl Reducer for PhoneReducer {
    type State = PhoneState;
    type Intent = PhoneIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PhoneIntent::Build { brand } => PhoneState {
                brand,
                screen: Screen::Home,
                ..state
            },

            PhoneIntent::ShowText {
                is_message,
                is_sending,
            } => PhoneState {
                screen: Screen::Text,
                screen_text: String::new(),
                is_message,
                is_sending,
                ..state
            },

            PhoneIntent::AppendChar(ch) => {
                let mut state = state;
                state.screen_text.push(ch);
                state
            }

            PhoneIntent::ShowMenu { items } => PhoneState {
                menu_items: items,
                menu_selected: 0,
                screen: Screen::Menu,
                ..state
            },

            PhoneIntent::SetScreen(Screen::Confirm) if state.selected_item().is_none() => {
                PhoneState {
                    screen: Screen::Menu,
                    ..state
                }
            }

            PhoneIntent::SetScreen(screen) => PhoneState { screen, ..state },

            PhoneIntent::MoveUp => PhoneState {
                menu_selected: state.menu_selected.saturating_sub(1),
                ..state
            },

            PhoneIntent::MoveDown => {
                let last = state.menu_items.len().saturating_sub(1);
                PhoneState {
                    menu_selected: (state.menu_selected + 1).min(last),
                    ..state
                }
            }

            PhoneIntent::OpenConfirm => match state.selected_item() {
                Some(_) => PhoneState {
                    screen: Screen::Confirm,
                    ..state
                },
                None => state,
            },

            PhoneIntent::BackToMenu => PhoneState {
                screen: Screen::Menu,
                ..state
            },

            PhoneIntent::Reset => PhoneState::reset(state.brand),
        }
    }
}
