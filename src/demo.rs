//! Canned host messages for running the device without a host.
//!
//! `--demo` replays [`opening`] at startup and binds F1-F4 to the rest.

use serde_json::json;

use crate::host::message::RawMessage;

pub const OPENING_TEXT: &str = "Yo got supply in?";
pub const UNAVAILABLE_TEXT: &str = "NAH MAN COPS EVERYWHERE";

/// Boots the device as `brand` and shows an incoming message.
pub fn opening(brand: &str) -> Vec<RawMessage> {
    vec![
        RawMessage::new("build", json!({ "brand": brand })),
        RawMessage::new(
            "set_text",
            json!({ "text": OPENING_TEXT, "is_message": true, "send": true }),
        ),
    ]
}

pub fn sample_text() -> RawMessage {
    RawMessage::new("set_text", json!({ "text": OPENING_TEXT }))
}

pub fn sample_menu() -> RawMessage {
    let items = [
        ("weed", "Weed", 100, 10),
        ("coke", "Coke", 250, 2),
        ("heroin", "Heroin", 500, 3),
        ("mdma", "MDMA", 175, 5),
        ("meth", "Meth", 300, 1),
        ("meth2", "Meth", 300, 1),
        ("meth3", "Meth", 300, 1),
    ]
    .map(|(id, name, price, quantity)| {
        json!({ "id": id, "name": name, "price": price, "quantity": quantity })
    });
    RawMessage::new("set_menu", json!({ "items": items, "rep_level": 1 }))
}

pub fn unavailable() -> RawMessage {
    RawMessage::new("set_text", json!({ "text": UNAVAILABLE_TEXT }))
}

pub fn home() -> RawMessage {
    RawMessage::new("set_screen", json!({ "screen": "home" }))
}

/// Demo message bound to function key `n`.
pub fn for_function_key(n: u8) -> Option<RawMessage> {
    match n {
        1 => Some(sample_text()),
        2 => Some(sample_menu()),
        3 => Some(unavailable()),
        4 => Some(home()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::message::HostMessage;
    use crate::phone::state::DEFAULT_BRAND;

    #[test]
    fn every_demo_message_decodes() {
        let messages = opening(DEFAULT_BRAND)
            .into_iter()
            .chain((1..=4).filter_map(for_function_key));
        for raw in messages {
            let func = raw.func.clone();
            assert!(HostMessage::try_from(raw).is_ok(), "{func} should decode");
        }
    }

    #[test]
    fn sample_menu_has_seven_items() {
        match HostMessage::try_from(sample_menu()).expect("menu") {
            HostMessage::SetMenu { items, .. } => {
                assert_eq!(items.len(), 7);
                assert_eq!(items[1].id, "coke");
                assert_eq!(items[1].price, 250.0);
            }
            other => panic!("expected SetMenu, got {other:?}"),
        }
    }

    #[test]
    fn unbound_function_keys() {
        assert!(for_function_key(0).is_none());
        assert!(for_function_key(5).is_none());
    }
}
