//! Top navigation bar. Tall at the top of the page, one row once scrolled.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use campus_core::theme::ThemeMode;

use crate::app::AppState;

/// A clickable navbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Item(usize),
    Menu,
    Theme,
}

const BUTTON_WIDTH: u16 = 3;

fn brand(app: &AppState) -> String {
    format!(" ◆ {} ", app.site.title)
}

fn item_label(index: usize, label: &str) -> String {
    format!(" {}:{} ", index + 1, label)
}

/// Row the controls sit on.
fn control_row(area: Rect) -> u16 {
    area.y + area.height.saturating_sub(1) / 2
}

/// Clickable rects in `area`, left to right. Items that do not fit are
/// dropped rather than wrapped.
pub fn targets(app: &AppState, area: Rect) -> Vec<(Rect, NavTarget)> {
    let mut out = Vec::new();
    if area.height == 0 || area.width < BUTTON_WIDTH * 2 {
        return out;
    }
    let y = control_row(area);
    let theme_x = area.right() - BUTTON_WIDTH - 1;
    let narrow = app.sidebar.get().band().is_narrow();

    if narrow {
        let menu_x = theme_x.saturating_sub(BUTTON_WIDTH + 1);
        out.push((Rect::new(menu_x, y, BUTTON_WIDTH, 1), NavTarget::Menu));
    } else {
        let mut x = area.x + Span::raw(brand(app)).width() as u16 + 1;
        for (i, item) in app.site.nav.iter().enumerate() {
            let width = Span::raw(item_label(i, &item.label)).width() as u16;
            if x + width >= theme_x {
                break;
            }
            out.push((Rect::new(x, y, width, 1), NavTarget::Item(i)));
            x += width;
        }
    }
    out.push((Rect::new(theme_x, y, BUTTON_WIDTH, 1), NavTarget::Theme));
    out
}

/// Navbar target under screen cell `(col, row)`.
pub fn target_at(app: &AppState, area: Rect, col: u16, row: u16) -> Option<NavTarget> {
    targets(app, area)
        .into_iter()
        .find(|(r, _)| row == r.y && col >= r.x && col < r.right())
        .map(|(_, t)| t)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let theme = app.palette();
    let compact = app.scroll().navbar_scrolled();
    let block = if compact {
        Block::default()
    } else {
        Block::default().borders(Borders::BOTTOM).border_style(theme.border(false))
    };
    f.render_widget(block.style(theme.card()), area);

    let brand_row = Rect::new(area.x, control_row(area), area.width, 1);
    f.render_widget(
        Paragraph::new(Span::styled(brand(app), theme.heading().add_modifier(Modifier::BOLD))),
        brand_row,
    );

    for (rect, target) in targets(app, area) {
        let span = match target {
            NavTarget::Item(i) => {
                let item = &app.site.nav[i];
                let active = app.router.is_active(&item.path);
                Span::styled(item_label(i, &item.label), theme.tab(active))
            }
            NavTarget::Menu => {
                let open = app.sidebar.get().is_open();
                Span::styled(if open { " ✕ " } else { " ≡ " }, theme.tab(open))
            }
            NavTarget::Theme => {
                let glyph = match app.env.theme.mode() {
                    ThemeMode::Light => " ☾ ",
                    ThemeMode::Dark => " ☀ ",
                };
                let animating = app.env.theme.is_animating(app.clock);
                Span::styled(glyph, theme.tab(animating))
            }
        };
        f.render_widget(Paragraph::new(span), rect.intersection(area));
    }
}
