//! Simulated burner phone driven by a host application.
//!
//! The host pushes text, menus and screen changes as messages; a human works
//! the device with a small keypad. [`phone::PhoneController`] owns the screen
//! state machine, [`ui::view`] turns its state into a markup tree, and
//! [`host`] couples the device to the host in both directions.

pub mod cli;
pub mod config;
pub mod demo;
pub mod host;
pub mod logging;
pub mod phone;
pub mod shutdown;
pub mod ui;
