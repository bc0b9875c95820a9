//! Overlay widgets: welcome, keyboard help, service search.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.palette();
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(format!(" Welcome to {} ", app.site.title))
        .title_style(theme.accent().add_modifier(Modifier::BOLD))
        .style(theme.card());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(app.site.tagline.clone(), theme.heading())),
        Line::from(""),
        Line::from(Span::styled("  Scroll with j/k, the wheel or PgUp/PgDn", theme.muted())),
        Line::from(Span::styled("  Jump to a page with 1-9", theme.muted())),
        Line::from(Span::styled("  Drag or use h/l on a carousel to change slides", theme.muted())),
        Line::from(Span::styled("  Press ? at any time for all keys", theme.muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme.body())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Keyboard reference.
pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.palette();
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Page", &theme);
    key(&mut lines, "j / k  ↓ / ↑", "Scroll one row", &theme);
    key(&mut lines, "PgDn / PgUp / Space", "Scroll one screen", &theme);
    key(&mut lines, "g / G", "Top / bottom of the page", &theme);
    key(&mut lines, "Tab / Shift+Tab", "Next / previous section", &theme);
    lines.push(Line::from(""));

    section(&mut lines, "Navigation", &theme);
    key(&mut lines, "1-9", "Open a navigation item", &theme);
    key(&mut lines, "Backspace", "Back to the previous page", &theme);
    key(&mut lines, "m", "Menu (narrow terminals)", &theme);
    lines.push(Line::from(""));

    section(&mut lines, "Focused section", &theme);
    key(&mut lines, "h / l  ← / →", "Previous / next slide or tab", &theme);
    key(&mut lines, "Enter", "Open the current slide", &theme);
    key(&mut lines, "/", "Search campus services", &theme);
    lines.push(Line::from(""));

    section(&mut lines, "General", &theme);
    key(&mut lines, "t", "Toggle light / dark theme", &theme);
    key(&mut lines, "?", "Toggle this help", &theme);
    key(&mut lines, "q", "Quit", &theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Keys [Esc]close ")
        .style(theme.card());
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Service search input.
pub fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.palette();
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Search services [Enter]keep [Esc]clear ")
        .style(theme.card());

    let matches = app.visible_services().len();
    let text = vec![
        Line::from(vec![
            Span::styled("> ", theme.accent()),
            Span::styled(app.service_query.clone(), theme.body()),
            Span::styled("█", theme.accent()),
        ]),
        Line::from(Span::styled(format!("{matches} match(es)"), theme.muted())),
    ];
    f.render_widget(Paragraph::new(text).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme.accent().add_modifier(Modifier::BOLD),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str, theme: &Theme) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme.accent()),
        Span::styled(desc.to_string(), theme.muted()),
    ]));
}
