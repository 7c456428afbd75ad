//! Shared test doubles for the phone controller.

#![allow(dead_code, unused_imports)]

use burner_phone::host::{HostNotifier, OutboundEvent};
use burner_phone::phone::{MenuItem, PhoneController, RevealScheduler};
use burner_phone::ui::markup::Element;
use burner_phone::ui::surface::RenderSurface;
use parking_lot::Mutex;
use std::time::Duration;

pub type TestPhone = PhoneController<RecordingSurface, RecordingNotifier, ManualScheduler>;

pub const REVEAL_INTERVAL: Duration = Duration::from_millis(30);

/// Keeps the last mounted tree and counts the other calls.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub mounted: Option<Element>,
    pub mounts: usize,
    pub reveals: usize,
    pub clears: usize,
}

impl RenderSurface for RecordingSurface {
    fn mount(&mut self, markup: Element) {
        self.mounted = Some(markup);
        self.mounts += 1;
    }

    fn reveal_active(&mut self) {
        self.reveals += 1;
    }

    fn clear(&mut self) {
        self.mounted = None;
        self.clears += 1;
    }
}

impl RecordingSurface {
    /// Text of the first element with `class` in the mounted tree.
    pub fn text_of(&self, class: &str) -> Option<String> {
        self.mounted
            .as_ref()
            .and_then(|root| root.find(class))
            .map(Element::text_content)
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<OutboundEvent>>,
}

impl HostNotifier for RecordingNotifier {
    fn notify(&self, event: OutboundEvent) {
        self.events.lock().push(event);
    }
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<OutboundEvent> {
        self.events.lock().clone()
    }
}

/// Holds scheduled reveal steps until the test fires them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Mutex<Vec<(Duration, u64)>>,
}

impl RevealScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, generation: u64) {
        self.pending.lock().push((delay, generation));
    }
}

impl ManualScheduler {
    pub fn pending(&self) -> Vec<(Duration, u64)> {
        self.pending.lock().clone()
    }

    pub fn take(&self) -> Vec<u64> {
        self.pending
            .lock()
            .drain(..)
            .map(|(_, generation)| generation)
            .collect()
    }
}

pub fn phone() -> TestPhone {
    PhoneController::new(
        RecordingSurface::default(),
        RecordingNotifier::default(),
        ManualScheduler::default(),
        REVEAL_INTERVAL,
    )
}

/// A built (mounted) phone.
pub fn built_phone() -> TestPhone {
    let mut phone = phone();
    phone.build("CELLTOWA".to_string());
    phone
}

/// Fire up to `steps` scheduled reveal steps, one at a time.
pub fn fire_reveals(phone: &mut TestPhone, steps: usize) {
    for _ in 0..steps {
        let due = phone.scheduler().take();
        if due.is_empty() {
            return;
        }
        for generation in due {
            phone.on_reveal(generation);
        }
    }
}

/// Fire scheduled reveal steps until none are left.
pub fn finish_reveal(phone: &mut TestPhone) {
    fire_reveals(phone, usize::MAX);
}

pub fn item(id: &str, name: &str, price: f64, quantity: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        quantity,
    }
}

pub fn three_items() -> Vec<MenuItem> {
    vec![
        item("weed", "Weed", 100.0, 10.0),
        item("coke", "Coke", 250.0, 2.0),
        item("heroin", "Heroin", 500.0, 3.0),
    ]
}
