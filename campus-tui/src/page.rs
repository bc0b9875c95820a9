//! Home page geometry: the vertical stack of sections in cell rows.
//!
//! Terminal cells stand in for CSS pixels at 8 px per column and 16 px per
//! row, so the core's px thresholds (bands, swipe distance, scroll
//! offsets) apply unchanged.

use campus_core::layout::Band;

use crate::app::Section;

pub const CELL_WIDTH_PX: u32 = 8;
pub const CELL_HEIGHT_PX: u32 = 16;

pub const BANNER_HEIGHT: u16 = 12;
pub const ABOUT_HEIGHT: u16 = 16;
pub const HIGHLIGHTS_HEIGHT: u16 = 10;
pub const FOOTER_HEIGHT: u16 = 3;

pub const DEPARTMENT_CARD_HEIGHT: u16 = 4;
pub const NEWS_CARD_HEIGHT: u16 = 5;
pub const SPECIALTY_CARD_HEIGHT: u16 = 5;
pub const SERVICE_CARD_HEIGHT: u16 = 4;

pub fn cols_to_px(cols: u16) -> u32 {
    cols as u32 * CELL_WIDTH_PX
}

pub fn rows_to_px(rows: u16) -> u32 {
    rows as u32 * CELL_HEIGHT_PX
}

pub fn px_to_rows(px: u32) -> u16 {
    (px / CELL_HEIGHT_PX).min(u16::MAX as u32) as u16
}

/// Item counts that drive the height of the grid sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub departments: usize,
    pub news: usize,
    pub specialties: usize,
    pub services: usize,
}

/// One section's vertical extent on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl Placement {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub band: Band,
    pub placements: Vec<Placement>,
}

impl PageLayout {
    pub fn compute(width: u16, counts: SectionCounts) -> Self {
        let band = Band::from_width(cols_to_px(width));
        let columns = band.columns();
        let mut placements = Vec::with_capacity(Section::ALL.len());
        let mut top: u16 = 0;
        for section in Section::ALL {
            let height = match section {
                Section::Banner => BANNER_HEIGHT,
                Section::About => ABOUT_HEIGHT,
                Section::Departments => grid(2, counts.departments, columns, DEPARTMENT_CARD_HEIGHT),
                Section::Highlights => HIGHLIGHTS_HEIGHT,
                Section::News => grid(3, counts.news, columns, NEWS_CARD_HEIGHT),
                Section::Specialties => grid(3, counts.specialties, columns, SPECIALTY_CARD_HEIGHT),
                Section::Services => grid(4, counts.services, columns, SERVICE_CARD_HEIGHT),
                Section::Footer => FOOTER_HEIGHT,
            };
            placements.push(Placement { section, top, height });
            top = top.saturating_add(height);
        }
        Self {
            width,
            band,
            placements,
        }
    }

    pub fn total_height(&self) -> u16 {
        self.placements.last().map_or(0, Placement::bottom)
    }

    pub fn placement(&self, section: Section) -> Option<Placement> {
        self.placements.iter().copied().find(|p| p.section == section)
    }

    /// Section covering page row `row`.
    pub fn at(&self, row: u16) -> Option<Placement> {
        self.placements.iter().copied().find(|p| p.contains(row))
    }

    pub fn columns(&self) -> usize {
        self.band.columns()
    }
}

/// Header rows plus card rows; an empty grid keeps room for one line of
/// "nothing here" text.
fn grid(header: u16, items: usize, columns: usize, card_height: u16) -> u16 {
    let columns = columns.max(1);
    let rows = items.div_ceil(columns).max(1) as u16;
    let body = if items == 0 { 2 } else { rows * card_height };
    header + body + 1
}
