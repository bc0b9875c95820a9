//! Responsive layout: viewport bands and the off-canvas sidebar.

pub mod sidebar;
pub mod throttle;

use serde::{Deserialize, Serialize};

pub use sidebar::{ResponsiveSidebar, SidebarController};
pub use throttle::Throttle;

/// Ordered viewport-width classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Band {
    pub const ALL: [Band; 6] = [Band::Xs, Band::Sm, Band::Md, Band::Lg, Band::Xl, Band::Xxl];

    /// Classify a viewport width in px.
    pub fn from_width(width: u32) -> Self {
        match width {
            w if w < 360 => Band::Xs,
            w if w < 640 => Band::Sm,
            w if w < 768 => Band::Md,
            w if w < 1024 => Band::Lg,
            w if w < 1280 => Band::Xl,
            _ => Band::Xxl,
        }
    }

    /// Lower bound (inclusive) of the band in px.
    pub fn min_width(self) -> u32 {
        match self {
            Band::Xs => 0,
            Band::Sm => 360,
            Band::Md => 640,
            Band::Lg => 768,
            Band::Xl => 1024,
            Band::Xxl => 1280,
        }
    }

    /// The two narrowest bands use the off-canvas sidebar.
    pub fn is_narrow(self) -> bool {
        matches!(self, Band::Xs | Band::Sm)
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Xs => "xs",
            Band::Sm => "sm",
            Band::Md => "md",
            Band::Lg => "lg",
            Band::Xl => "xl",
            Band::Xxl => "2xl",
        }
    }

    /// Horizontal container padding in spacing units.
    pub fn container_padding(self) -> u16 {
        match self {
            Band::Xs | Band::Sm => 4,
            Band::Md => 6,
            _ => 8,
        }
    }

    /// Sidebar panel width in px.
    pub fn sidebar_width(self) -> u32 {
        match self {
            Band::Xs => 280,
            Band::Sm => 300,
            _ => 320,
        }
    }

    /// Grid columns for card sections.
    pub fn columns(self) -> usize {
        match self {
            Band::Xs | Band::Sm => 1,
            Band::Md | Band::Lg => 2,
            Band::Xl | Band::Xxl => 3,
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
