//! Character-by-character text reveal.
//!
//! A reveal is a queue of characters tagged with a generation number. Each
//! step pops one character and the caller schedules the next step through a
//! [`RevealScheduler`]. Starting a new reveal or cancelling bumps the
//! generation, so any step still in flight for an older one pops nothing.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

/// Delay between two revealed characters.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Debug)]
pub struct Typewriter {
    interval: Duration,
    generation: u64,
    pending: VecDeque<char>,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Typewriter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            pending: VecDeque::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin revealing `text`, abandoning any reveal in progress.
    /// Returns the generation of the new reveal.
    pub fn start(&mut self, text: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = text.chars().collect();
        self.generation
    }

    /// Abandon the current reveal.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending.clear();
    }

    /// Next character of reveal `generation`, or `None` when that reveal is
    /// finished or stale.
    pub fn next_char(&mut self, generation: u64) -> Option<char> {
        if generation != self.generation {
            return None;
        }
        self.pending.pop_front()
    }

    /// True while the current reveal still has characters left.
    pub fn is_running(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Defers a reveal step by `delay`.
///
/// Implementations must hand the generation back to the controller
/// asynchronously; calling the controller from inside `schedule` is not
/// allowed.
pub trait RevealScheduler {
    fn schedule(&self, delay: Duration, generation: u64);
}

/// Scheduler backed by tokio timers.
///
/// Each step sleeps on the runtime and then calls `wake` with its generation;
/// the runtime routes that back into the event loop.
pub struct TimerScheduler {
    handle: Handle,
    wake: Arc<dyn Fn(u64) + Send + Sync>,
}

impl TimerScheduler {
    pub fn new(handle: Handle, wake: Arc<dyn Fn(u64) + Send + Sync>) -> Self {
        Self { handle, wake }
    }
}

impl RevealScheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, generation: u64) {
        let wake = Arc::clone(&self.wake);
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            wake(generation);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn reveals_characters_in_order() {
        let mut typewriter = Typewriter::default();
        let generation = typewriter.start("héy");
        let mut out = String::new();
        while let Some(ch) = typewriter.next_char(generation) {
            out.push(ch);
        }
        assert_eq!(out, "héy");
        assert!(!typewriter.is_running());
    }

    #[test]
    fn restart_invalidates_previous_generation() {
        let mut typewriter = Typewriter::default();
        let first = typewriter.start("abc");
        assert_eq!(typewriter.next_char(first), Some('a'));

        let second = typewriter.start("xyz");
        assert_ne!(first, second);
        assert_eq!(typewriter.next_char(first), None);
        assert_eq!(typewriter.next_char(second), Some('x'));
    }

    #[test]
    fn cancel_stops_current_generation() {
        let mut typewriter = Typewriter::default();
        let generation = typewriter.start("abc");
        typewriter.cancel();
        assert_eq!(typewriter.next_char(generation), None);
        assert!(!typewriter.is_running());
    }

    #[test]
    fn empty_text_has_no_steps() {
        let mut typewriter = Typewriter::default();
        let generation = typewriter.start("");
        assert!(!typewriter.is_running());
        assert_eq!(typewriter.next_char(generation), None);
    }

    #[tokio::test]
    async fn timer_scheduler_wakes_with_generation() {
        let (tx, rx) = mpsc::channel();
        let tx = parking_lot::Mutex::new(tx);
        let scheduler = TimerScheduler::new(
            Handle::current(),
            Arc::new(move |generation: u64| {
                let _ = tx.lock().send(generation);
            }),
        );

        scheduler.schedule(Duration::from_millis(5), 7);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(rx.try_recv(), Ok(7));
    }
}
