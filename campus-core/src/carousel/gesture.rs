//! Horizontal swipe/drag tracking.

/// Result of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer travelled left: show the next slide.
    Left,
    /// Pointer travelled right: show the previous slide.
    Right,
}

/// Tracks one press → move → release gesture on a single axis.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<f32>,
    last: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `x`; any gesture in progress is discarded.
    pub fn press(&mut self, x: f32) {
        self.start = Some(x);
        self.last = None;
    }

    /// Record the latest pointer coordinate. Ignored when not pressed.
    pub fn move_to(&mut self, x: f32) {
        if self.start.is_some() {
            self.last = Some(x);
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Signed travel so far (`last - start`), if the pointer has moved.
    pub fn displacement(&self) -> Option<f32> {
        Some(self.last? - self.start?)
    }

    /// End the gesture and classify it against `threshold`. Travel of
    /// exactly `threshold` counts as a swipe.
    pub fn release(&mut self, threshold: f32) -> Option<Swipe> {
        let displacement = self.displacement();
        self.cancel();
        let d = displacement?;
        if d <= -threshold {
            Some(Swipe::Left)
        } else if d >= threshold {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_swipe_at_threshold() {
        let mut t = SwipeTracker::new();
        t.press(200.0);
        t.move_to(120.0);
        assert_eq!(t.release(80.0), Some(Swipe::Left));
        assert!(!t.is_active());
    }

    #[test]
    fn just_under_threshold_is_no_swipe() {
        let mut t = SwipeTracker::new();
        t.press(200.0);
        t.move_to(121.0);
        assert_eq!(t.release(80.0), None);
    }

    #[test]
    fn right_swipe() {
        let mut t = SwipeTracker::new();
        t.press(10.0);
        t.move_to(150.0);
        assert_eq!(t.release(80.0), Some(Swipe::Right));
    }

    #[test]
    fn release_without_move_is_nothing() {
        let mut t = SwipeTracker::new();
        t.press(10.0);
        assert_eq!(t.release(80.0), None);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut t = SwipeTracker::new();
        t.move_to(500.0);
        assert_eq!(t.displacement(), None);
        assert_eq!(t.release(80.0), None);
    }
}
