//! Leading-edge throttle for bursty events such as resize.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    /// The 200 ms resize throttle used by the page layout.
    pub fn resize() -> Self {
        Self::new(Duration::from_millis(200))
    }

    /// Returns true (and records the call) if at least `delay` has passed
    /// since the last accepted call.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.delay => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
