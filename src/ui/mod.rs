//! Terminal front end: markup, view, surface and the event loop.

pub mod events;
pub mod input;
pub mod layout;
pub mod markup;
pub mod mvi;
pub mod runtime;
pub mod surface;
pub mod terminal_guard;
pub mod theme;
pub mod view;
