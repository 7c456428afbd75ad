//! Routes inbound host messages to controller entry points.

use crate::host::message::{HostMessage, MessageName, RawMessage};
use crate::host::outbound::HostNotifier;
use crate::phone::controller::PhoneController;
use crate::phone::state::Screen;
use crate::phone::typewriter::RevealScheduler;
use crate::ui::surface::RenderSurface;

/// Decode `raw` and apply it to `controller`.
///
/// Unknown names and undecodable payloads are logged and dropped without
/// touching the controller. Returns the name of the applied message.
pub fn dispatch<S, N, R>(
    controller: &mut PhoneController<S, N, R>,
    raw: RawMessage,
) -> Option<MessageName>
where
    S: RenderSurface,
    N: HostNotifier,
    R: RevealScheduler,
{
    match HostMessage::try_from(raw) {
        Ok(message) => {
            let name = message.name();
            apply(controller, message);
            Some(name)
        }
        Err(err) => {
            tracing::warn!(error = %err, "dropping host message");
            None
        }
    }
}

/// Apply an already decoded message.
pub fn apply<S, N, R>(controller: &mut PhoneController<S, N, R>, message: HostMessage)
where
    S: RenderSurface,
    N: HostNotifier,
    R: RevealScheduler,
{
    match message {
        HostMessage::Build { brand } => controller.build(brand),
        HostMessage::SetText {
            text,
            is_message,
            send,
        } => controller.set_text(&text, is_message, send),
        HostMessage::SetMenu { items, .. } => controller.set_menu(items),
        HostMessage::SetScreen { screen } => controller.set_screen(resolve_screen(&screen)),
        HostMessage::ClosePhone => controller.close(),
    }
}

/// Unknown screen names fall back to home, in state as well as on screen.
fn resolve_screen(name: &str) -> Screen {
    Screen::from_name(name).unwrap_or_else(|| {
        tracing::warn!(screen = name, "unknown screen, showing home");
        Screen::Home
    })
}
