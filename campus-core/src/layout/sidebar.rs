//! Off-canvas navigation panel for narrow viewports.
//!
//! The panel only exists in narrow bands: it opens on toggle or an
//! edge swipe, and any resize into a wider band closes it.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::debug;

use super::Band;
use crate::signal::{Signal, Subscription};

/// Swipes must start this close (px) to the left edge to open the panel.
pub const EDGE_ZONE: f32 = 50.0;

/// Horizontal travel (px) beyond which a swipe opens or closes the panel.
pub const SWIPE_DISTANCE: f32 = 40.0;

#[derive(Debug, Clone)]
pub struct SidebarController {
    open: bool,
    band: Band,
    touch_start: Option<f32>,
}

impl SidebarController {
    pub fn new(width: u32) -> Self {
        Self {
            open: false,
            band: Band::from_width(width),
            touch_start: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// Width of the panel for the current band.
    pub fn width(&self) -> u32 {
        self.band.sidebar_width()
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.set_open(false, "toggle");
        } else if self.band.is_narrow() {
            self.set_open(true, "toggle");
        }
    }

    pub fn close(&mut self) {
        self.set_open(false, "close");
    }

    pub fn backdrop_click(&mut self) {
        self.set_open(false, "backdrop");
    }

    /// A navigation click closes the panel in narrow bands.
    pub fn navigated(&mut self) {
        if self.band.is_narrow() {
            self.set_open(false, "navigate");
        }
    }

    /// Reclassify the viewport. Returns the new band when it changed.
    pub fn resize(&mut self, width: u32) -> Option<Band> {
        let band = Band::from_width(width);
        if !band.is_narrow() {
            self.touch_start = None;
            self.set_open(false, "resize");
        }
        if band == self.band {
            return None;
        }
        self.band = band;
        Some(band)
    }

    /// Touch/press at `x`. While closed only edge presses count.
    pub fn touch_start(&mut self, x: f32) {
        if !self.band.is_narrow() {
            return;
        }
        if self.open || x < EDGE_ZONE {
            self.touch_start = Some(x);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        let Some(start) = self.touch_start else {
            return;
        };
        let diff = x - start;
        if diff > SWIPE_DISTANCE && !self.open {
            self.touch_start = None;
            self.set_open(true, "swipe");
        } else if diff < -SWIPE_DISTANCE && self.open {
            self.touch_start = None;
            self.set_open(false, "swipe");
        }
    }

    pub fn touch_end(&mut self) {
        self.touch_start = None;
    }

    fn set_open(&mut self, open: bool, reason: &'static str) {
        if self.open != open {
            debug!(open, reason, band = %self.band, "sidebar");
            self.open = open;
        }
    }
}

/// A [`SidebarController`] that follows a viewport-width signal for as
/// long as it is alive.
#[derive(Debug)]
pub struct ResponsiveSidebar {
    controller: Rc<RefCell<SidebarController>>,
    _viewport: Subscription,
}

impl ResponsiveSidebar {
    pub fn attach(viewport: &Signal<u32>) -> Self {
        let controller = Rc::new(RefCell::new(SidebarController::new(viewport.get())));
        let handle = Rc::clone(&controller);
        let sub = viewport.subscribe(move |width| {
            if let Ok(mut sidebar) = handle.try_borrow_mut() {
                sidebar.resize(*width);
            }
        });
        Self {
            controller,
            _viewport: sub,
        }
    }

    pub fn get(&self) -> Ref<'_, SidebarController> {
        self.controller.borrow()
    }

    pub fn get_mut(&self) -> RefMut<'_, SidebarController> {
        self.controller.borrow_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_swipe_opens_in_narrow_band() {
        let mut s = SidebarController::new(400);
        s.touch_start(10.0);
        s.touch_move(45.0);
        assert!(!s.is_open());
        s.touch_move(51.0);
        assert!(s.is_open());
    }

    #[test]
    fn swipe_from_middle_does_not_open() {
        let mut s = SidebarController::new(400);
        s.touch_start(120.0);
        s.touch_move(300.0);
        assert!(!s.is_open());
    }

    #[test]
    fn swipe_ignored_in_wide_band() {
        let mut s = SidebarController::new(1024);
        s.touch_start(5.0);
        s.touch_move(200.0);
        assert!(!s.is_open());
        s.toggle();
        assert!(!s.is_open());
    }

    #[test]
    fn leftward_swipe_closes() {
        let mut s = SidebarController::new(320);
        s.toggle();
        assert!(s.is_open());
        s.touch_start(250.0);
        s.touch_move(200.0);
        assert!(!s.is_open());
    }

    #[test]
    fn resize_to_wide_closes() {
        let mut s = SidebarController::new(500);
        s.toggle();
        assert_eq!(s.resize(800), Some(Band::Lg));
        assert!(!s.is_open());
        assert_eq!(s.resize(900), None);
    }

    #[test]
    fn resize_within_narrow_keeps_open() {
        let mut s = SidebarController::new(300);
        s.toggle();
        assert_eq!(s.resize(500), Some(Band::Sm));
        assert!(s.is_open());
    }

    #[test]
    fn backdrop_and_navigation_close() {
        let mut s = SidebarController::new(300);
        s.toggle();
        s.backdrop_click();
        assert!(!s.is_open());
        s.toggle();
        s.navigated();
        assert!(!s.is_open());
    }

    #[test]
    fn touch_end_forgets_start() {
        let mut s = SidebarController::new(300);
        s.touch_start(5.0);
        s.touch_end();
        s.touch_move(100.0);
        assert!(!s.is_open());
    }

    #[test]
    fn responsive_sidebar_follows_viewport() {
        let viewport = Signal::new(400u32);
        let sidebar = ResponsiveSidebar::attach(&viewport);
        sidebar.get_mut().toggle();
        assert!(sidebar.get().is_open());

        viewport.set(700);
        assert!(!sidebar.get().is_open());
        assert_eq!(sidebar.get().band(), Band::Md);
        assert_eq!(viewport.subscriber_count(), 1);

        drop(sidebar);
        assert_eq!(viewport.subscriber_count(), 0);
    }
}
