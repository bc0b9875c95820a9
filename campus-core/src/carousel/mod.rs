//! Carousel state machine with auto-advance and a transition lock.
//!
//! States are `Idle` and `Transitioning { from, to, until }`. A navigation
//! request while a transition is in flight is dropped, never queued. The
//! auto-advance deadline is re-armed after every transition and on resume,
//! so the next automatic step is always a full interval away.
//!
//! Time is supplied by the caller (`now: Instant`) which keeps the machine
//! deterministic under test.

pub mod gesture;
pub mod layout;

use std::time::{Duration, Instant};

use tracing::debug;

pub use gesture::{Swipe, SwipeTracker};
pub use layout::{circular_offset, slide_layout, SlideLayout};

use crate::content::Slide;

/// Timing and gesture settings for one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Auto-advance period.
    pub interval: Duration,
    /// Length of the transition lock.
    pub transition: Duration,
    /// Minimum horizontal travel (px) for a swipe.
    pub swipe_threshold: f32,
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::banner()
    }
}

impl CarouselConfig {
    /// Hero banner: 6 s interval, 500 ms transition.
    pub fn banner() -> Self {
        Self {
            interval: Duration::from_millis(6000),
            transition: Duration::from_millis(500),
            swipe_threshold: 80.0,
            autoplay: true,
        }
    }

    /// News highlights: 5 s interval, 800 ms transition.
    pub fn news() -> Self {
        Self {
            interval: Duration::from_millis(5000),
            transition: Duration::from_millis(800),
            swipe_threshold: 80.0,
            autoplay: true,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}

/// Current phase of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning {
        from: usize,
        to: usize,
        until: Instant,
    },
}

/// What caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Auto,
    Next,
    Previous,
    Jump,
    Swipe,
}

/// A transition that was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub from: usize,
    pub to: usize,
    pub trigger: Trigger,
}

/// An ordered, circular list of items with one current item.
#[derive(Debug, Clone)]
pub struct Carousel<T = Slide> {
    items: Vec<T>,
    index: usize,
    phase: Phase,
    config: CarouselConfig,
    deadline: Option<Instant>,
    hovered: bool,
    swipe: SwipeTracker,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, config: CarouselConfig, now: Instant) -> Self {
        let mut carousel = Self {
            items,
            index: 0,
            phase: Phase::Idle,
            config,
            deadline: None,
            hovered: false,
            swipe: SwipeTracker::new(),
        };
        carousel.rearm(now);
        carousel
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// An empty carousel renders nothing and ignores every request.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Next automatic step, if auto-advance is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Transitioning { until, .. } if now < until)
    }

    /// Fraction of the in-flight transition that has elapsed, `1.0` when idle.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Transitioning { until, .. } if now < until => {
                let total = self.config.transition.as_secs_f32();
                if total <= f32::EPSILON {
                    return 1.0;
                }
                let remaining = (until - now).as_secs_f32();
                (1.0 - remaining / total).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.swipe.is_active()
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.swipe.is_active()
    }

    /// Auto-advance applies only to lists with more than one item.
    pub fn autoplay_enabled(&self) -> bool {
        self.config.autoplay && self.items.len() > 1
    }

    pub fn layout(&self, index: usize) -> SlideLayout {
        slide_layout(index, self.index, self.items.len())
    }

    /// Drive auto-advance. Late ticks are coalesced into a single step.
    pub fn tick(&mut self, now: Instant) -> Option<Change> {
        self.settle(now);
        if self.is_paused() || !self.autoplay_enabled() {
            return None;
        }
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        let to = (self.index + 1) % self.items.len();
        let change = self.begin(to, Trigger::Auto, now);
        // A step blocked by the lock still consumes this deadline.
        self.rearm(now);
        change
    }

    pub fn next(&mut self, now: Instant) -> Option<Change> {
        if self.is_empty() {
            return None;
        }
        let to = (self.index + 1) % self.items.len();
        self.navigate(to, Trigger::Next, now)
    }

    pub fn previous(&mut self, now: Instant) -> Option<Change> {
        if self.is_empty() {
            return None;
        }
        let len = self.items.len();
        let to = (self.index + len - 1) % len;
        self.navigate(to, Trigger::Previous, now)
    }

    /// Jump directly to `index`; out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<Change> {
        if index >= self.items.len() {
            return None;
        }
        self.navigate(index, Trigger::Jump, now)
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self, now: Instant) {
        if self.hovered {
            self.hovered = false;
            self.rearm(now);
        }
    }

    /// Start a drag at horizontal coordinate `x` (px).
    pub fn press(&mut self, x: f32) {
        if !self.is_empty() {
            self.swipe.press(x);
        }
    }

    pub fn drag_to(&mut self, x: f32) {
        self.swipe.move_to(x);
    }

    /// Finish a drag; a swipe past the threshold navigates once.
    pub fn release(&mut self, now: Instant) -> Option<Change> {
        if !self.swipe.is_active() {
            return None;
        }
        let swipe = self.swipe.release(self.config.swipe_threshold);
        self.rearm(now);
        let len = self.items.len();
        let to = match swipe? {
            Swipe::Left => (self.index + 1) % len,
            Swipe::Right => (self.index + len - 1) % len,
        };
        self.begin(to, Trigger::Swipe, now)
    }

    /// Abandon a drag without navigating (pointer left the surface).
    pub fn cancel_drag(&mut self, now: Instant) {
        if self.swipe.is_active() {
            self.swipe.cancel();
            self.rearm(now);
        }
    }

    fn navigate(&mut self, to: usize, trigger: Trigger, now: Instant) -> Option<Change> {
        if self.swipe.is_active() {
            return None;
        }
        self.begin(to, trigger, now)
    }

    fn begin(&mut self, to: usize, trigger: Trigger, now: Instant) -> Option<Change> {
        self.settle(now);
        if self.is_empty() || to == self.index || self.is_transitioning(now) {
            return None;
        }
        let from = self.index;
        self.index = to;
        self.phase = Phase::Transitioning {
            from,
            to,
            until: now + self.config.transition,
        };
        self.rearm(now);
        debug!(from, to, ?trigger, "carousel transition");
        Some(Change { from, to, trigger })
    }

    fn settle(&mut self, now: Instant) {
        if let Phase::Transitioning { until, .. } = self.phase {
            if now >= until {
                self.phase = Phase::Idle;
            }
        }
    }

    fn rearm(&mut self, now: Instant) {
        self.deadline = self
            .autoplay_enabled()
            .then(|| now + self.config.interval);
    }
}
