//! Off-canvas navigation panel for narrow terminals.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::page::CELL_WIDTH_PX;
use crate::ui::about::icon;

/// First item row below the panel top.
const ITEMS_ROW: u16 = 3;

/// Panel rect on `screen`, sized from the band's sidebar width.
pub fn panel_rect(app: &AppState, screen: Rect) -> Rect {
    let cols = (app.sidebar.get().width() / CELL_WIDTH_PX).min(u32::from(screen.width)) as u16;
    Rect::new(screen.x, screen.y, cols, screen.height)
}

/// Navigation item on panel row `row`.
pub fn item_at(app: &AppState, panel: Rect, col: u16, row: u16) -> Option<usize> {
    if col < panel.x || col >= panel.right() || row < panel.y + ITEMS_ROW {
        return None;
    }
    let i = usize::from(row - panel.y - ITEMS_ROW);
    (i < app.site.nav.len()).then_some(i)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.palette();
    let panel = panel_rect(app, area);

    // Backdrop
    let backdrop = Rect::new(panel.right(), area.y, area.width - panel.width, area.height);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.muted).add_modifier(Modifier::DIM)),
        backdrop,
    );

    f.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border(true))
        .style(theme.card());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" ◆ {}", app.site.title), theme.heading())),
        Line::from(Span::styled(" ─ menu ─", theme.muted())),
    ];
    for (i, item) in app.site.nav.iter().enumerate() {
        let active = app.router.is_active(&item.path);
        let glyph = item.icon.as_deref().map_or("•", icon);
        lines.push(Line::from(Span::styled(
            format!(" {glyph} {}  {}", i + 1, item.label),
            theme.tab(active),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Esc or click outside to close", theme.muted())));

    f.render_widget(Paragraph::new(lines).block(block), panel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::app_with_size;
    use std::time::Instant;

    #[test]
    fn panel_matches_band_width_and_items_stack() {
        let app = app_with_size(40, 30, Instant::now());
        let screen = app.screen;
        let panel = panel_rect(&app, screen);
        // 320 px is the xs band: 280 px panel.
        assert_eq!(panel.width, 35);
        assert_eq!(item_at(&app, panel, 2, 3), Some(0));
        assert_eq!(item_at(&app, panel, 2, 4), Some(1));
        assert_eq!(item_at(&app, panel, 2, 2), None);
        assert_eq!(item_at(&app, panel, 36, 3), None);
        assert_eq!(item_at(&app, panel, 2, 3 + app.site.nav.len() as u16), None);
    }

    #[test]
    fn panel_never_exceeds_screen() {
        let app = app_with_size(20, 10, Instant::now());
        assert_eq!(panel_rect(&app, app.screen).width, 20);
    }
}
