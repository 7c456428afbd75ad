//! State → markup.
//!
//! The chrome (speaker, brand, signal and battery bars, soft keys, keypad,
//! footer) never changes between screens. Only the `screen_content` region is
//! chosen by the active screen.

use crate::phone::keys::{PhoneKey, KEYPAD_SYMBOLS};
use crate::phone::state::{MenuItem, PhoneState, Screen};
use crate::ui::markup::Element;

pub const SIGNAL_BARS: usize = 5;
pub const BATTERY_BARS: usize = 5;

const HOME_ART: &str = "\
──▄────▄▄▄▄▄▄▄────▄───
─▀▀▄─▄█████████▄─▄▀▀──
─────██─▀███▀─██──────
───▄─▀████▀████▀─▄────
─▀█────██▀█▀██────█▀──";

pub fn render(state: &PhoneState) -> Element {
    Element::new("phone_container")
        .child(
            Element::new("screen_container")
                .child(header(&state.brand))
                .child(screen(state)),
        )
        .child(soft_keys())
        .child(keypad())
        .child(Element::new("footer").child(Element::new("btm_speaker")))
}

/// Content region of the active screen.
pub fn render_content(state: &PhoneState) -> Element {
    match state.screen {
        Screen::Home => render_home(),
        Screen::Text => render_text(state),
        Screen::Menu => render_menu(state),
        Screen::Confirm => match state.selected_item() {
            Some(item) => render_confirm(item),
            None => render_menu(state),
        },
    }
}

fn header(brand: &str) -> Element {
    Element::new("phone_header")
        .child(Element::new("top_speaker"))
        .child(Element::new("brand").child(brand))
}

fn screen(state: &PhoneState) -> Element {
    Element::new("screen")
        .child(bars("signal_bars", "signal_bar", SIGNAL_BARS))
        .child(bars("battery_bars", "battery_bar", BATTERY_BARS))
        .child(Element::new("screen_content").child(render_content(state)))
}

fn bars(class: &'static str, bar: &'static str, count: usize) -> Element {
    Element::new(class).children((0..count).map(|_| Element::new(bar)))
}

fn render_home() -> Element {
    Element::new("screen_wrapper").child(Element::new("pre").child(HOME_ART))
}

fn render_text(state: &PhoneState) -> Element {
    let display = Element::new("text_display").child(state.screen_text.as_str());
    if !state.is_message {
        return Element::new("screen_wrapper").child(display);
    }

    let footer = if state.is_sending { "SEND" } else { "REPLY" };
    Element::new("screen_wrapper")
        .child(Element::new("text_header").child("MESSAGES"))
        .child(display)
        .child(Element::new("text_footer").child(footer))
}

fn render_menu(state: &PhoneState) -> Element {
    let rows = state.menu_items.iter().enumerate().map(|(idx, item)| {
        Element::new("menu_item")
            .active(idx == state.menu_selected)
            .child(Element::new("menu_name").child(item.name.as_str()))
    });

    Element::new("screen_wrapper")
        .child(Element::new("menu_title").child("SELECT"))
        .child(Element::new("menu_list").children(rows))
}

fn render_confirm(item: &MenuItem) -> Element {
    Element::new("screen_wrapper")
        .child(Element::new("menu_title").child(item.name.as_str()))
        .child(
            Element::new("confirm_info")
                .child(info_row("Qty:", item.quantity.to_string()))
                .child(info_row("Price:", format!("${}", item.price))),
        )
}

fn info_row(label: &str, value: String) -> Element {
    Element::new("info_row")
        .child(Element::new("label").child(label))
        .child(Element::new("value").child(value))
}

fn soft_keys() -> Element {
    Element::new("soft_keys")
        .child(key_button(PhoneKey::Call, "call_btn", "CALL"))
        .child(
            Element::new("nav_wrap")
                .child(key_button(PhoneKey::Up, "nav_btn", "▲"))
                .child(key_button(PhoneKey::Down, "nav_btn", "▼")),
        )
        .child(key_button(PhoneKey::Hang, "hang_btn", "HANG"))
}

fn key_button(key: PhoneKey, class: &'static str, label: &str) -> Element {
    Element::new(class).key(key).child(label)
}

fn keypad() -> Element {
    let keys = KEYPAD_SYMBOLS.iter().map(|&symbol| {
        let button = Element::new("key")
            .key(PhoneKey::Symbol(symbol))
            .child(symbol.to_string());
        match keypad_letters(symbol) {
            Some(letters) => button.child(Element::new("letters").child(letters)),
            None => button,
        }
    });
    Element::new("keypad").children(keys)
}

fn keypad_letters(symbol: char) -> Option<&'static str> {
    match symbol {
        '1' => Some("∞"),
        '2' => Some("ABC"),
        '3' => Some("DEF"),
        '4' => Some("GHI"),
        '5' => Some("JKL"),
        '6' => Some("MNO"),
        '7' => Some("PQRS"),
        '8' => Some("TUV"),
        '9' => Some("WXYZ"),
        '0' => Some("+"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(state: &PhoneState) -> Element {
        render(state)
            .find("screen_content")
            .and_then(|region| region.elements().next().cloned())
            .expect("content wrapper")
    }

    #[test]
    fn home_shows_wallpaper() {
        let content = content(&PhoneState::default());
        assert!(content.find("pre").is_some());
    }

    #[test]
    fn info_rows_format_price_and_quantity() {
        let item = MenuItem {
            id: "coke".into(),
            name: "Coke".into(),
            price: 250.0,
            quantity: 2.0,
        };
        let confirm = render_confirm(&item);
        let rows: Vec<String> = confirm
            .find_all("info_row")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(rows, vec!["Qty:2".to_string(), "Price:$250".to_string()]);
    }

    #[test]
    fn keypad_has_twelve_keys_with_letters() {
        let pad = keypad();
        let keys = pad.find_all("key");
        assert_eq!(keys.len(), 12);
        assert_eq!(keys[1].text_content(), "2ABC");
        assert_eq!(keys[9].text_content(), "*");
        assert_eq!(keys[9].key, Some(PhoneKey::Symbol('*')));
    }

    #[test]
    fn soft_keys_carry_their_keys() {
        let keys: Vec<Option<PhoneKey>> = soft_keys()
            .find_all("nav_btn")
            .into_iter()
            .map(|button| button.key)
            .collect();
        assert_eq!(keys, vec![Some(PhoneKey::Up), Some(PhoneKey::Down)]);
        assert_eq!(
            soft_keys().find("call_btn").and_then(|b| b.key),
            Some(PhoneKey::Call)
        );
    }
}
