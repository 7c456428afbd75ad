//! Host → device message schema.
//!
//! On the wire a message is one flat JSON object: the name in `func` and the
//! payload fields next to it.
//!
//! ```json
//! { "func": "set_text", "text": "Yo got supply in?", "is_message": true }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::phone::state::{MenuItem, DEFAULT_BRAND};

/// A message as received, before its name is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    pub func: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl RawMessage {
    pub fn new(func: impl Into<String>, payload: Value) -> Self {
        let payload = match payload {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            func: func.into(),
            payload,
        }
    }
}

/// Names the device understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageName {
    Build,
    SetText,
    SetMenu,
    SetScreen,
    ClosePhone,
}

impl MessageName {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "build" => Some(Self::Build),
            "set_text" => Some(Self::SetText),
            "set_menu" => Some(Self::SetMenu),
            "set_screen" => Some(Self::SetScreen),
            "close_phone" => Some(Self::ClosePhone),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::SetText => "set_text",
            Self::SetMenu => "set_menu",
            Self::SetScreen => "set_screen",
            Self::ClosePhone => "close_phone",
        }
    }
}

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Handler missing: {name}")]
    UnknownName { name: String },

    #[error("Invalid '{name}' payload: {source}")]
    InvalidPayload {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct BuildPayload {
    #[serde(default = "default_brand")]
    brand: String,
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

#[derive(Debug, Deserialize)]
struct SetTextPayload {
    text: String,
    #[serde(default)]
    is_message: Option<bool>,
    #[serde(default)]
    send: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct SetMenuPayload {
    items: Vec<MenuItem>,
    #[serde(default)]
    rep_level: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SetScreenPayload {
    screen: String,
}

/// A message with a resolved name and a decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    Build {
        brand: String,
    },
    SetText {
        text: String,
        is_message: bool,
        send: bool,
    },
    SetMenu {
        items: Vec<MenuItem>,
        /// Accepted for compatibility; the device does not use it.
        rep_level: Option<Value>,
    },
    SetScreen {
        screen: String,
    },
    ClosePhone,
}

impl HostMessage {
    pub fn name(&self) -> MessageName {
        match self {
            Self::Build { .. } => MessageName::Build,
            Self::SetText { .. } => MessageName::SetText,
            Self::SetMenu { .. } => MessageName::SetMenu,
            Self::SetScreen { .. } => MessageName::SetScreen,
            Self::ClosePhone => MessageName::ClosePhone,
        }
    }
}

impl TryFrom<RawMessage> for HostMessage {
    type Error = MessageError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let name = MessageName::parse(&raw.func)
            .ok_or_else(|| MessageError::UnknownName { name: raw.func })?;
        let payload = raw.payload;

        let message = match name {
            MessageName::Build => {
                let p: BuildPayload = decode(name, payload)?;
                HostMessage::Build { brand: p.brand }
            }
            MessageName::SetText => {
                let p: SetTextPayload = decode(name, payload)?;
                HostMessage::SetText {
                    text: p.text,
                    is_message: p.is_message.unwrap_or(false),
                    send: p.send.unwrap_or(false),
                }
            }
            MessageName::SetMenu => {
                let p: SetMenuPayload = decode(name, payload)?;
                HostMessage::SetMenu {
                    items: p.items,
                    rep_level: p.rep_level,
                }
            }
            MessageName::SetScreen => {
                let p: SetScreenPayload = decode(name, payload)?;
                HostMessage::SetScreen { screen: p.screen }
            }
            MessageName::ClosePhone => HostMessage::ClosePhone,
        };
        Ok(message)
    }
}

fn decode<T: DeserializeOwned>(
    name: MessageName,
    payload: Map<String, Value>,
) -> Result<T, MessageError> {
    serde_json::from_value(Value::Object(payload)).map_err(|source| {
        MessageError::InvalidPayload {
            name: name.as_str(),
            source,
        }
    })
}
