//! Key identifiers and the per-screen key table.

use crate::phone::state::Screen;

/// Symbols printed on the twelve-key pad, in display order.
pub const KEYPAD_SYMBOLS: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

/// A key of the simulated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKey {
    Up,
    Down,
    Call,
    Hang,
    /// One of `0-9`, `*` or `#`. Inert for now.
    Symbol(char),
    /// Global escape.
    Cancel,
}

impl PhoneKey {
    /// Keypad key for `ch`, if the pad has one.
    pub fn symbol(ch: char) -> Option<Self> {
        KEYPAD_SYMBOLS.contains(&ch).then_some(Self::Symbol(ch))
    }
}

/// What a key press means on the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    OpenConfirm,
    ConfirmOrder,
    BackToMenu,
    Close,
}

/// Resolve `key` against the table of `screen`.
///
/// Only the menu and confirm screens have entries. Cancel closes the device
/// from anywhere.
pub fn dispatch(screen: Screen, key: PhoneKey) -> Option<KeyAction> {
    if key == PhoneKey::Cancel {
        return Some(KeyAction::Close);
    }

    match screen {
        Screen::Menu => match key {
            PhoneKey::Up => Some(KeyAction::MoveUp),
            PhoneKey::Down => Some(KeyAction::MoveDown),
            PhoneKey::Call => Some(KeyAction::OpenConfirm),
            PhoneKey::Hang => Some(KeyAction::Close),
            _ => None,
        },
        Screen::Confirm => match key {
            PhoneKey::Call => Some(KeyAction::ConfirmOrder),
            PhoneKey::Hang => Some(KeyAction::BackToMenu),
            _ => None,
        },
        Screen::Home | Screen::Text => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_table() {
        assert_eq!(dispatch(Screen::Menu, PhoneKey::Up), Some(KeyAction::MoveUp));
        assert_eq!(dispatch(Screen::Menu, PhoneKey::Down), Some(KeyAction::MoveDown));
        assert_eq!(dispatch(Screen::Menu, PhoneKey::Call), Some(KeyAction::OpenConfirm));
        assert_eq!(dispatch(Screen::Menu, PhoneKey::Hang), Some(KeyAction::Close));
    }

    #[test]
    fn confirm_table() {
        assert_eq!(dispatch(Screen::Confirm, PhoneKey::Call), Some(KeyAction::ConfirmOrder));
        assert_eq!(dispatch(Screen::Confirm, PhoneKey::Hang), Some(KeyAction::BackToMenu));
        assert_eq!(dispatch(Screen::Confirm, PhoneKey::Up), None);
        assert_eq!(dispatch(Screen::Confirm, PhoneKey::Down), None);
    }

    #[test]
    fn home_and_text_are_inert() {
        for screen in [Screen::Home, Screen::Text] {
            for key in [PhoneKey::Up, PhoneKey::Down, PhoneKey::Call, PhoneKey::Hang] {
                assert_eq!(dispatch(screen, key), None);
            }
        }
    }

    #[test]
    fn keypad_symbols_are_inert_everywhere() {
        for screen in [Screen::Home, Screen::Text, Screen::Menu, Screen::Confirm] {
            for ch in KEYPAD_SYMBOLS {
                let key = PhoneKey::symbol(ch).expect("pad symbol");
                assert_eq!(dispatch(screen, key), None);
            }
        }
    }

    #[test]
    fn cancel_closes_from_any_screen() {
        for screen in [Screen::Home, Screen::Text, Screen::Menu, Screen::Confirm] {
            assert_eq!(dispatch(screen, PhoneKey::Cancel), Some(KeyAction::Close));
        }
    }

    #[test]
    fn symbol_rejects_characters_off_the_pad() {
        assert_eq!(PhoneKey::symbol('7'), Some(PhoneKey::Symbol('7')));
        assert_eq!(PhoneKey::symbol('a'), None);
    }
}
