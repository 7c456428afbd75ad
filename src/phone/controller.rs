//! The phone state machine and its side effects.

use std::time::Duration;

use crate::host::outbound::{HostNotifier, OutboundEvent};
use crate::phone::intent::PhoneIntent;
use crate::phone::keys::{self, KeyAction, PhoneKey};
use crate::phone::reducer::PhoneReducer;
use crate::phone::state::{MenuItem, PhoneState, Screen};
use crate::phone::typewriter::{RevealScheduler, Typewriter};
use crate::ui::mvi::Reducer;
use crate::ui::surface::RenderSurface;
use crate::ui::view;

/// Owns the [`PhoneState`] and is the only writer of it.
///
/// Transitions go through [`PhoneReducer`]; around each dispatch the
/// controller repaints the surface, schedules reveal steps and notifies the
/// host.
///
/// The device is *mounted* between `build` and `close`. While unmounted,
/// host messages still update state but nothing is painted and keys are
/// ignored.
pub struct PhoneController<S, N, R> {
    state: PhoneState,
    mounted: bool,
    typewriter: Typewriter,
    surface: S,
    notifier: N,
    scheduler: R,
}

impl<S, N, R> PhoneController<S, N, R>
where
    S: RenderSurface,
    N: HostNotifier,
    R: RevealScheduler,
{
    pub fn new(surface: S, notifier: N, scheduler: R, reveal_interval: Duration) -> Self {
        Self {
            state: PhoneState::default(),
            mounted: false,
            typewriter: Typewriter::new(reveal_interval),
            surface,
            notifier,
            scheduler,
        }
    }

    pub fn state(&self) -> &PhoneState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn scheduler(&self) -> &R {
        &self.scheduler
    }

    /// Generation of the latest reveal, for routing timer callbacks.
    pub fn reveal_generation(&self) -> u64 {
        self.typewriter.generation()
    }

    // ========================================================================
    // Host entry points
    // ========================================================================

    pub fn build(&mut self, brand: String) {
        tracing::debug!(%brand, "build");
        self.dispatch(PhoneIntent::Build { brand });
        self.mounted = true;
        self.paint();
    }

    /// Show `text` on the text screen, revealing it one character at a time.
    /// A reveal still running for an earlier call is abandoned.
    pub fn set_text(&mut self, text: &str, is_message: bool, is_sending: bool) {
        tracing::debug!(chars = text.chars().count(), is_message, is_sending, "set_text");
        self.dispatch(PhoneIntent::ShowText {
            is_message,
            is_sending,
        });
        self.paint();
        let generation = self.typewriter.start(text);
        self.on_reveal(generation);
    }

    pub fn set_menu(&mut self, items: Vec<MenuItem>) {
        tracing::debug!(items = items.len(), "set_menu");
        self.dispatch(PhoneIntent::ShowMenu { items });
        self.paint();
    }

    pub fn set_screen(&mut self, screen: Screen) {
        tracing::debug!(screen = screen.name(), "set_screen");
        self.dispatch(PhoneIntent::SetScreen(screen));
        self.paint();
    }

    /// Reset to the baseline, unmount, clear the surface and tell the host.
    pub fn close(&mut self) {
        tracing::debug!("close");
        self.typewriter.cancel();
        self.dispatch(PhoneIntent::Reset);
        self.mounted = false;
        self.surface.clear();
        self.notifier.notify(OutboundEvent::CloseBurner);
    }

    // ========================================================================
    // Device events
    // ========================================================================

    pub fn on_key(&mut self, key: PhoneKey) {
        if !self.mounted {
            return;
        }
        let Some(action) = keys::dispatch(self.state.screen, key) else {
            tracing::trace!(?key, screen = self.state.screen.name(), "key ignored");
            return;
        };
        self.apply(action);
    }

    /// One typewriter step of reveal `generation`. Stale generations are
    /// ignored.
    pub fn on_reveal(&mut self, generation: u64) {
        let Some(ch) = self.typewriter.next_char(generation) else {
            return;
        };
        self.dispatch(PhoneIntent::AppendChar(ch));
        self.paint();
        if self.typewriter.is_running() {
            self.scheduler
                .schedule(self.typewriter.interval(), generation);
        }
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveUp => self.move_selection(PhoneIntent::MoveUp),
            KeyAction::MoveDown => self.move_selection(PhoneIntent::MoveDown),
            KeyAction::OpenConfirm => {
                self.dispatch(PhoneIntent::OpenConfirm);
                self.paint();
            }
            KeyAction::ConfirmOrder => match self.state.selected_item() {
                Some(item) => {
                    let item_id = item.id.clone();
                    tracing::debug!(%item_id, "confirm_order");
                    self.notifier.notify(OutboundEvent::ConfirmOrder { item_id });
                }
                None => {
                    tracing::warn!(
                        selected = self.state.menu_selected,
                        items = self.state.menu_items.len(),
                        "confirm without a selected item"
                    );
                    self.dispatch(PhoneIntent::BackToMenu);
                    self.paint();
                }
            },
            KeyAction::BackToMenu => {
                self.dispatch(PhoneIntent::BackToMenu);
                self.paint();
            }
            KeyAction::Close => self.close(),
        }
    }

    fn move_selection(&mut self, intent: PhoneIntent) {
        self.dispatch(intent);
        self.paint();
        if self.mounted {
            self.surface.reveal_active();
        }
    }

    fn dispatch(&mut self, intent: PhoneIntent) {
        self.state = PhoneReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn paint(&mut self) {
        if self.mounted {
            self.surface.mount(view::render(&self.state));
        }
    }
}
