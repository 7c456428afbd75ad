//! Intents accepted by the phone reducer.

use crate::phone::state::{MenuItem, Screen};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum PhoneIntent {
    /// Host built the device with a brand label.
    Build { brand: String },

    /// Switch to the text screen with an empty buffer.
    /// Characters arrive afterwards through `AppendChar`.
    ShowText { is_message: bool, is_sending: bool },

    /// One typewriter step.
    AppendChar(char),

    /// Replace the menu and put the cursor on the first row.
    ShowMenu { items: Vec<MenuItem> },

    /// Host forced a screen.
    SetScreen(Screen),

    MoveUp,
    MoveDown,

    /// Leave the menu for the confirm screen of the selected item.
    OpenConfirm,

    /// Leave the confirm screen, keeping the selection.
    BackToMenu,

    /// Back to the baseline state. The brand survives.
    Reset,
}

impl Intent for PhoneIntent {}
