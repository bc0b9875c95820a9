//! Top-level UI layout: navbar, scrolling page, status bar, overlays.
//!
//! Sections render at full height into their own off-screen buffers and the
//! rows inside the scroll window are copied onto the frame, so a section
//! cut by the top or bottom edge still draws correctly.

pub mod about;
pub mod carousel;
pub mod cards;
pub mod navbar;
pub mod overlays;
pub mod sidebar;
pub mod status_bar;
pub mod tabs;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Section};
use crate::page::Placement;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = app.palette();
    let area = f.area();
    f.render_widget(Block::default().style(theme.base()), area);

    let chrome = app.chrome();
    draw_page(f, chrome.page.intersection(area), app);
    navbar::render(f, chrome.navbar.intersection(area), app);
    status_bar::render(f, chrome.status.intersection(area), app);

    if app.sidebar.get().is_open() {
        sidebar::render(f, area, app);
    }

    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, area, app),
        Overlay::Help => overlays::render_help(f, area, app),
        Overlay::Search => overlays::render_search(f, area, app),
        Overlay::None => {}
    }
}

fn draw_page(f: &mut Frame, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let layout = app.page_layout();
    let start = app.scroll_row();
    let end = start.saturating_add(area.height);

    for placement in &layout.placements {
        if placement.bottom() <= start || placement.top >= end {
            continue;
        }
        let local = Rect::new(0, 0, area.width, placement.height);
        let mut buf = Buffer::empty(local);
        render_section(&mut buf, local, placement.section, app);
        blit(&buf, f.buffer_mut(), *placement, start, area);
    }
}

fn render_section(buf: &mut Buffer, area: Rect, section: Section, app: &AppState) {
    let theme = app.palette();
    Block::default().style(theme.base()).render(area, buf);
    match section {
        Section::Banner => carousel::render_banner(buf, area, app),
        Section::About => about::render(buf, area, app),
        Section::Departments => cards::render_departments(buf, area, app),
        Section::Highlights => carousel::render_highlights(buf, area, app),
        Section::News => cards::render_news(buf, area, app),
        Section::Specialties => cards::render_specialties(buf, area, app),
        Section::Services => cards::render_services(buf, area, app),
        Section::Footer => cards::render_footer(buf, area, app),
    }
}

/// Copy the rows of `src` that fall inside the scroll window onto `dst`.
fn blit(src: &Buffer, dst: &mut Buffer, placement: Placement, start: u16, area: Rect) {
    for row in 0..placement.height {
        let page_row = placement.top + row;
        if page_row < start || page_row - start >= area.height {
            continue;
        }
        let y = area.y + (page_row - start);
        for col in 0..area.width {
            if let (Some(cell), Some(target)) =
                (src.cell((col, row)), dst.cell_mut((area.x + col, y)))
            {
                *target = cell.clone();
            }
        }
    }
}

/// Screen rect of `section` clipped to the page area, with the section's
/// own first row as `(rect, rows_hidden_above)`.
pub fn section_on_screen(app: &AppState, section: Section) -> Option<(Rect, u16)> {
    let page = app.chrome().page;
    let placement = app.page_layout().placement(section)?;
    let start = app.scroll_row();
    let end = start.saturating_add(page.height);
    if placement.bottom() <= start || placement.top >= end {
        return None;
    }
    let visible_top = placement.top.max(start);
    let visible_bottom = placement.bottom().min(end);
    let rect = Rect::new(
        page.x,
        page.y + (visible_top - start),
        page.width,
        visible_bottom - visible_top,
    );
    Some((rect, visible_top - placement.top))
}

/// Section under screen cell `(col, row)` with section-local coordinates.
pub fn section_at(app: &AppState, col: u16, row: u16) -> Option<(Section, u16, u16)> {
    let page = app.chrome().page;
    if row < page.y || row >= page.y + page.height || col >= page.x + page.width {
        return None;
    }
    let page_row = app.scroll_row() + (row - page.y);
    let placement = app.page_layout().at(page_row)?;
    Some((placement.section, col - page.x, page_row - placement.top))
}

/// Rect of `height` rows starting `offset` rows into `area`, clipped.
pub fn rows(area: Rect, offset: u16, height: u16) -> Rect {
    let y = area.y.saturating_add(offset).min(area.bottom());
    let height = height.min(area.bottom().saturating_sub(y));
    Rect::new(area.x, y, area.width, height)
}

/// Horizontally inset `area` by `margin` columns on each side.
pub fn inset(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect::new(area.x + margin, area.y, area.width - 2 * margin, area.height)
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
