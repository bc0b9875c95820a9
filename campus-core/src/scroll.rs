//! Scroll-driven effects: navbar shading, back-to-top, progress, parallax.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Navbar switches to its scrolled style past this offset (px).
pub const NAVBAR_THRESHOLD: u32 = 20;
/// The back-to-top button appears past this offset (px).
pub const BACK_TO_TOP_THRESHOLD: u32 = 50;
/// Parallax stops moving past this offset (px).
pub const PARALLAX_LIMIT: u32 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub offset: u32,
    pub content_height: u32,
    pub viewport_height: u32,
}

impl ScrollState {
    pub fn new(offset: u32, content_height: u32, viewport_height: u32) -> Self {
        Self {
            offset,
            content_height,
            viewport_height,
        }
    }

    /// Largest offset that still shows content at the bottom.
    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Same state with the offset moved by `delta` and clamped.
    pub fn scrolled_by(self, delta: i64) -> Self {
        let target = (self.offset as i64 + delta).clamp(0, self.max_offset() as i64);
        Self {
            offset: target as u32,
            ..self
        }
    }

    pub fn scrolled_to(self, offset: u32) -> Self {
        Self {
            offset: offset.min(self.max_offset()),
            ..self
        }
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.offset > NAVBAR_THRESHOLD
    }

    pub fn show_back_to_top(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }

    /// Reading progress in percent, 0 when everything fits.
    pub fn progress(&self) -> f32 {
        let range = self.max_offset();
        if range == 0 {
            return 0.0;
        }
        (self.offset as f32 / range as f32 * 100.0).clamp(0.0, 100.0)
    }

    pub fn parallax(&self, factor: f32) -> f32 {
        parallax(self.offset, factor, PARALLAX_LIMIT)
    }
}

pub fn parallax(offset: u32, factor: f32, limit: u32) -> f32 {
    offset.min(limit) as f32 * factor
}

/// Tracks whether the user is actively scrolling.
#[derive(Debug, Clone)]
pub struct ScrollActivity {
    window: Duration,
    last: Option<Instant>,
}

impl Default for ScrollActivity {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

impl ScrollActivity {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn record(&mut self, now: Instant) {
        self.last = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.last
            .is_some_and(|last| now.saturating_duration_since(last) < self.window)
    }
}
