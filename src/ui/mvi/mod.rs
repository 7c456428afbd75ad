//! Model-View-Intent primitives for the device UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ view::render ──→ Markup
//!    ↑                                                │
//!    └──────────── keys / host messages ──────────────┘
//! ```
//!
//! - **State**: everything the view needs to draw one frame
//! - **Intent**: a host message or a key action, already decoded
//! - **Reducer**: pure `(State, Intent) -> State`; effects stay with the caller

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
