//! Campus Portal Core: content model and UI state machines for the portal.
//!
//! This crate holds everything the front ends share:
//! - Literal content records (slides, news, services, specialties, departments)
//! - Carousel state machine with auto-advance, pause and swipe gestures
//! - Category/tab filters with free-text search
//! - Viewport bands and the off-canvas sidebar controller
//! - Scroll-driven effects (navbar shrink, progress, parallax)
//! - Theme context with pluggable persistence
//! - Subscription bus with scoped (drop-to-release) handlers
//! - Media fallback and the in-process router

pub mod carousel;
pub mod content;
pub mod error;
pub mod filter;
pub mod layout;
pub mod media;
pub mod nav;
pub mod scroll;
pub mod signal;
pub mod theme;

pub use error::{ContentError, StoreError, UnknownTheme};

#[cfg(test)]
mod tests {
    use super::*;

    /// Content and configuration records stay plain thread-safe data.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<content::SiteContent>();
        require_sync::<content::SiteContent>();
        require_send::<content::Slide>();
        require_sync::<content::Slide>();
        require_send::<carousel::CarouselConfig>();
        require_sync::<carousel::CarouselConfig>();
        require_send::<layout::Band>();
        require_sync::<layout::Band>();
        require_send::<scroll::ScrollState>();
        require_sync::<scroll::ScrollState>();
        require_send::<theme::ThemeMode>();
        require_sync::<theme::ThemeMode>();
    }

    #[test]
    fn default_site_is_valid() {
        let site = content::SiteContent::default_site();
        assert!(site.validate().is_ok());
    }
}
