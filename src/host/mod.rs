//! Coupling between the device and its host application.
//!
//! Inbound: the host posts [`RawMessage`]s to the HTTP endpoint in [`server`];
//! the event loop hands them to [`router::dispatch`].
//! Outbound: the controller reports through a [`HostNotifier`].

pub mod message;
pub mod outbound;
pub mod router;
pub mod server;

pub use message::{HostMessage, MessageError, MessageName, RawMessage};
pub use outbound::{HostNotifier, HttpNotifier, LogNotifier, OutboundEvent};
