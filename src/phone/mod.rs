//! The device: state, transitions, keys and the text reveal.

pub mod controller;
pub mod intent;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod typewriter;

pub use controller::PhoneController;
pub use intent::PhoneIntent;
pub use keys::{KeyAction, PhoneKey};
pub use reducer::PhoneReducer;
pub use state::{MenuItem, PhoneState, Screen};
pub use typewriter::{RevealScheduler, TimerScheduler, Typewriter};
