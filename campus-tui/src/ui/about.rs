//! About section: introduction, mission pillars and the four about tabs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::app::{AppState, Section};
use crate::ui::{inset, rows, tabs};

/// Row of the tab strip inside the section.
pub const TAB_ROW: u16 = 1;

pub fn render(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    let about = &app.site.about;
    let body = inset(area, 2);

    Paragraph::new(Line::from(vec![
        Span::styled(Section::About.label(), theme.heading()),
        Span::styled(format!("  {}", app.site.tagline), theme.muted()),
    ]))
    .render(rows(body, 0, 1), buf);

    tabs::render(buf, rows(area, TAB_ROW, 1), &app.about_tabs, &theme);

    let mut lines: Vec<Line> = Vec::new();
    match app.about_tabs.active_id() {
        "history" => {
            for entry in &about.timeline {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>6}  ", entry.year), theme.accent()),
                    Span::styled(entry.title.as_str(), theme.heading()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("        {}", entry.description),
                    theme.body(),
                )));
            }
        }
        "philosophy" => {
            for p in &about.principles {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", icon(&p.icon)), theme.accent()),
                    Span::styled(p.title.as_str(), theme.heading()),
                    Span::styled(format!("  {}", p.description), theme.body()),
                ]));
            }
        }
        "achievements" => {
            for a in &about.achievements {
                lines.push(Line::from(vec![
                    Span::styled("★ ", theme.accent()),
                    Span::styled(a.title.as_str(), theme.heading()),
                    Span::styled(format!("  {}", a.description), theme.body()),
                ]));
            }
        }
        _ => {
            lines.push(Line::from(Span::styled(app.site.intro.as_str(), theme.body())));
            lines.push(Line::from(Span::styled(about.overview.as_str(), theme.body())));
            lines.push(Line::from(""));
            for pillar in &app.site.pillars {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", icon(&pillar.icon)), theme.accent()),
                    Span::styled(pillar.title.as_str(), theme.heading()),
                    Span::styled(format!("  {}", pillar.description), theme.body()),
                ]));
            }
        }
    }

    let content = rows(body, TAB_ROW + 2, area.height.saturating_sub(TAB_ROW + 2));
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(content, buf);
}

/// Single-cell glyph for an icon name; unknown names get a bullet.
pub fn icon(name: &str) -> &'static str {
    match name.trim_start_matches('/').trim_end_matches(".svg") {
        "home" => "⌂",
        "about" | "info" => "ℹ",
        "departments" | "users" => "☷",
        "activities" | "calendar" => "◷",
        "specialties" | "book" => "▤",
        "services" | "building" => "▦",
        "recruitment" => "✚",
        "heart" => "♥",
        "shield" => "⛨",
        "star" | "award" => "★",
        "target" => "◎",
        "eye" => "◉",
        "+" => "✚",
        "#" => "⌗",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::app_at;

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(c) = buf.cell((x, y)) {
                    out.push_str(c.symbol());
                }
            }
        }
        out
    }

    #[test]
    fn tab_switches_body() {
        let (mut app, _) = app_at();
        let area = Rect::new(0, 0, 100, crate::page::ABOUT_HEIGHT);

        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &app);
        let first_pillar = app.site.pillars[0].title.clone();
        assert!(text(&buf).contains(&first_pillar));

        app.select_tab(Section::About, 1);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &app);
        let year = app.site.about.timeline[0].year.clone();
        assert!(text(&buf).contains(&year));
    }

    #[test]
    fn icon_names() {
        assert_eq!(icon("/heart.svg"), "♥");
        assert_eq!(icon("home"), "⌂");
        assert_eq!(icon("unknown"), "•");
    }
}
