//! Test helpers for building app state without a terminal.

use std::time::Instant;

use ratatui::layout::Rect;

use campus_core::content::SiteContent;
use campus_core::theme::{MemoryStore, ThemeContext};

use crate::app::AppState;
use crate::config::PortalConfig;
use crate::media::MediaLibrary;

/// A 100x40 light-theme app (800 px wide, the lg band).
pub fn app_at() -> (AppState, Instant) {
    let now = Instant::now();
    (app_with_size(100, 40, now), now)
}

pub fn app_with_size(width: u16, height: u16, now: Instant) -> AppState {
    let site = SiteContent::default_site();
    let media = MediaLibrary::trusting(site.media_refs());
    let theme = ThemeContext::init(Box::new(MemoryStore::new()), false);
    AppState::new(
        site,
        &PortalConfig::default(),
        theme,
        media,
        Rect::new(0, 0, width, height),
        now,
    )
}
