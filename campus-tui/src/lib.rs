//! Campus Portal TUI: the portal home page in the terminal.
//!
//! Sections scroll as one page under a navbar:
//! - Banner carousel with auto-advance, arrows, dots and swipe
//! - About tabs, department cards and the campus highlights coverflow
//! - News, specialty and service grids filtered by category tabs
//! - Off-canvas menu on narrow terminals, light/dark theme toggle

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod media;
pub mod page;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::PortalConfig;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
