//! State owned by the phone controller.

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// Brand used when `build` carries none.
pub const DEFAULT_BRAND: &str = "CELLTOWA";

/// The four mutually exclusive display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Text,
    Menu,
    Confirm,
}

impl Screen {
    /// Resolve a host-supplied screen name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Self::Home),
            "text" => Some(Self::Text),
            "menu" => Some(Self::Menu),
            "confirm" => Some(Self::Confirm),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Text => "text",
            Self::Menu => "menu",
            Self::Confirm => "confirm",
        }
    }
}

/// A selectable entry pushed by the host.
///
/// Only `id` travels back to the host; the rest is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhoneState {
    pub brand: String,
    pub screen: Screen,
    pub menu_items: Vec<MenuItem>,
    /// Index into `menu_items`; kept in range whenever the menu is non-empty.
    pub menu_selected: usize,
    pub screen_text: String,
    pub is_message: bool,
    pub is_sending: bool,
}

impl Default for PhoneState {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            screen: Screen::Home,
            menu_items: Vec::new(),
            menu_selected: 0,
            screen_text: String::new(),
            is_message: false,
            is_sending: false,
        }
    }
}

impl UiState for PhoneState {}

impl PhoneState {
    /// The item under the cursor, if the selection points at one.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.menu_items.get(self.menu_selected)
    }

    /// Baseline after `close`: everything back to defaults except the brand.
    pub fn reset(brand: String) -> Self {
        Self {
            brand,
            ..Self::default()
        }
    }
}
