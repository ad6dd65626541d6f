use super::MinuteWindow;
use crate::utils::WallClock;
use std::sync::Mutex;

/// Counter is one named entry of the store: a [`MinuteWindow`] behind a
/// mutex held only across the bucket arithmetic. A counter's lock is taken
/// strictly after any structural lock of the store, never the other way
/// around.
#[derive(Debug)]
pub struct Counter {
    name: String,
    window: Mutex<MinuteWindow>,
}

impl Counter {
    pub(crate) fn new(name: String) -> Self {
        Counter {
            name,
            window: Mutex::new(MinuteWindow::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `by` events at `clock` and return the new cumulative total.
    pub fn add(&self, clock: WallClock, by: u64) -> u64 {
        let mut window = self.window.lock().unwrap();
        window.observe(clock, by);
        window.total()
    }

    /// Read-only observation: advances the bucket bookkeeping and returns
    /// the trailing-minute rate without changing the total.
    pub fn rate(&self, clock: WallClock) -> u32 {
        self.window.lock().unwrap().observe(clock, 0)
    }

    /// A consistent (total, rate) pair under a single lock acquisition.
    pub fn sample(&self, clock: WallClock) -> (u64, u32) {
        let mut window = self.window.lock().unwrap();
        let rate = window.observe(clock, 0);
        (window.total(), rate)
    }
}
