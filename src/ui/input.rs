use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::demo;
use crate::host::message::RawMessage;
use crate::phone::keys::PhoneKey;

/// What a terminal key turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Quit,
    Phone(PhoneKey),
    /// Demo mode: feed a canned message through the host path.
    Inject(RawMessage),
}

/// Map a terminal key to a device key. Up/Down (or k/j) are the arrows,
/// Enter is CALL, Backspace is HANG, Esc is the cancel key and the keypad
/// symbols type themselves.
pub fn handle_key(key: KeyEvent, demo_mode: bool) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => InputAction::Phone(PhoneKey::Up),
        KeyCode::Down | KeyCode::Char('j') => InputAction::Phone(PhoneKey::Down),
        KeyCode::Enter => InputAction::Phone(PhoneKey::Call),
        KeyCode::Backspace => InputAction::Phone(PhoneKey::Hang),
        KeyCode::Esc => InputAction::Phone(PhoneKey::Cancel),
        KeyCode::Char(ch) => PhoneKey::symbol(ch)
            .map(InputAction::Phone)
            .unwrap_or(InputAction::None),
        KeyCode::F(n) if demo_mode => demo::for_function_key(n)
            .map(InputAction::Inject)
            .unwrap_or(InputAction::None),
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
