use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};

const BACK_TO_TOP: &str = " ↑ top ";

/// Click target of the back-to-top button, shown once the page has
/// scrolled past its threshold.
pub fn back_to_top_rect(app: &AppState, area: Rect) -> Option<Rect> {
    let width = Span::raw(BACK_TO_TOP).width() as u16;
    if !app.scroll().show_back_to_top() || area.height == 0 || area.width < width {
        return None;
    }
    Some(Rect::new(area.right() - width, area.y, width, 1))
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let theme = app.palette();
    f.render_widget(Paragraph::new("").style(theme.card()), area);

    let left = match &app.status_message {
        Some((msg, level)) => {
            let color = match level {
                StatusLevel::Info => theme.positive,
                StatusLevel::Warning => theme.warning,
                StatusLevel::Error => theme.negative,
            };
            Line::from(Span::styled(format!(" {msg}"), Style::default().fg(color)))
        }
        None => Line::from(vec![
            Span::styled(" ?", theme.accent()),
            Span::styled(" help  ", theme.muted()),
            Span::styled("/", theme.accent()),
            Span::styled(" search  ", theme.muted()),
            Span::styled("t", theme.accent()),
            Span::styled(" theme  ", theme.muted()),
            Span::styled("q", theme.accent()),
            Span::styled(" quit", theme.muted()),
        ]),
    };
    f.render_widget(Paragraph::new(left), area);

    let scroll = app.scroll();
    let mut right = Vec::new();
    if app.scroll_activity.is_active(app.clock) {
        right.push(Span::styled("⇅ ", theme.accent()));
    }
    right.push(Span::styled(
        format!("{} · {:>3.0}% ", app.sidebar.get().band(), scroll.progress()),
        theme.muted(),
    ));
    let back = back_to_top_rect(app, area);
    let reserved = back.map_or(0, |r| r.width);
    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        Rect::new(area.x, area.y, area.width - reserved, 1),
    );
    if let Some(rect) = back {
        f.render_widget(Paragraph::new(Span::styled(BACK_TO_TOP, theme.tab(true))), rect);
    }
}
