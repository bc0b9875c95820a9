//! Card grid sections: departments, news, specialties, services, footer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use campus_core::content::Tab;
use campus_core::media::MediaState;

use crate::app::{AppState, Section};
use crate::page::{
    DEPARTMENT_CARD_HEIGHT, NEWS_CARD_HEIGHT, SERVICE_CARD_HEIGHT, SPECIALTY_CARD_HEIGHT,
};
use crate::theme::Theme;
use crate::ui::about::icon;
use crate::ui::{inset, rows, tabs};

/// First grid row of each section.
pub const DEPARTMENTS_GRID_ROW: u16 = 2;
pub const NEWS_GRID_ROW: u16 = 3;
pub const SPECIALTIES_GRID_ROW: u16 = 3;
pub const SERVICES_GRID_ROW: u16 = 4;

/// Row of the tab strip in the news, specialties and services sections.
pub const TAB_ROW: u16 = 1;
pub const SEARCH_ROW: u16 = 2;

/// One-line stand-in for an image.
pub fn media_label(app: &AppState, src: &str) -> Span<'static> {
    let theme = app.palette();
    match app.media.state(src) {
        MediaState::Loading => Span::styled("░ loading", theme.muted()),
        state => {
            let glyph = if matches!(state, MediaState::Fallback) { "▢" } else { "▣" };
            let source = state.source().unwrap_or_default().to_string();
            Span::styled(format!("{glyph} {source}"), theme.muted())
        }
    }
}

/// Rect of grid cell `index` inside `body`.
pub fn grid_cell(body: Rect, columns: usize, card_height: u16, index: usize) -> Rect {
    let columns = columns.max(1) as u16;
    let col = index as u16 % columns;
    let row = index as u16 / columns;
    let width = body.width / columns;
    let extra = if col + 1 == columns { body.width % columns } else { 0 };
    let cell = Rect::new(
        body.x + col * width,
        body.y.saturating_add(row.saturating_mul(card_height)),
        width + extra,
        card_height,
    );
    cell.intersection(body)
}

fn heading(buf: &mut Buffer, area: Rect, app: &AppState, section: Section, theme: &Theme) {
    let marker = if app.focus == section { "▌" } else { " " };
    Paragraph::new(Line::from(vec![
        Span::styled(marker, theme.accent()),
        Span::styled(section.label(), theme.heading()),
    ]))
    .render(rows(inset(area, 1), 0, 1), buf);
}

fn empty(buf: &mut Buffer, body: Rect, message: &str, theme: &Theme) {
    Paragraph::new(Span::styled(message, theme.muted()))
        .alignment(Alignment::Center)
        .render(rows(body, 0, 1), buf);
}

fn card(title: Line<'static>, border: Style, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(theme.card())
        .title(title)
}

fn label_of<'a>(tabs: &'a [Tab], id: &'a str) -> &'a str {
    tabs.iter()
        .find(|t| t.id == id)
        .map(|t| t.label.as_str())
        .unwrap_or(id)
}

pub fn render_departments(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    heading(buf, area, app, Section::Departments, &theme);
    let body = inset(rows(area, DEPARTMENTS_GRID_ROW, area.height), 1);
    let columns = app.page_layout().columns();

    for (i, dept) in app.site.departments.iter().enumerate() {
        let cell = grid_cell(body, columns, DEPARTMENT_CARD_HEIGHT, i);
        let title = Line::from(vec![
            Span::styled(format!(" {} ", icon(&dept.icon)), theme.accent()),
            Span::styled(format!("{} ", dept.name), theme.heading()),
        ]);
        let block = card(title, theme.border(false), &theme);
        let inner = block.inner(cell);
        block.render(cell, buf);
        Paragraph::new(Span::styled(dept.description.clone(), theme.body()))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

pub fn render_news(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    heading(buf, area, app, Section::News, &theme);
    tabs::render(buf, rows(area, TAB_ROW, 1), &app.news_tabs, &theme);

    let body = inset(rows(area, NEWS_GRID_ROW, area.height), 1);
    let items = app.visible_news();
    if items.is_empty() {
        empty(buf, body, "No news in this category yet", &theme);
        return;
    }
    let columns = app.page_layout().columns();
    for (i, item) in items.into_iter().enumerate() {
        let cell = grid_cell(body, columns, NEWS_CARD_HEIGHT, i);
        let mut title = vec![Span::styled(format!(" {} ", item.title), theme.heading())];
        if item.important {
            title.insert(
                0,
                Span::styled(
                    " ! ",
                    Style::default()
                        .fg(theme.surface)
                        .bg(theme.negative)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }
        let block = card(Line::from(title), theme.border(false), &theme);
        let inner = block.inner(cell);
        block.render(cell, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(item.date.format("%Y-%m-%d").to_string(), theme.accent()),
                Span::styled(
                    format!("  {}", label_of(&app.site.news_categories, &item.category)),
                    theme.muted(),
                ),
            ]),
            Line::from(Span::styled(item.summary.clone(), theme.body())),
            Line::from(media_label(app, &item.media)),
        ];
        render_lines(buf, inner, lines);
    }
}

pub fn render_specialties(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    heading(buf, area, app, Section::Specialties, &theme);
    tabs::render(buf, rows(area, TAB_ROW, 1), &app.specialty_tabs, &theme);

    let body = inset(rows(area, SPECIALTIES_GRID_ROW, area.height), 1);
    let items = app.visible_specialties();
    if items.is_empty() {
        empty(buf, body, "No specialties in this category", &theme);
        return;
    }
    let columns = app.page_layout().columns();
    for (i, item) in items.into_iter().enumerate() {
        let cell = grid_cell(body, columns, SPECIALTY_CARD_HEIGHT, i);
        let title = Line::from(vec![
            Span::styled(format!(" {} ", icon(&item.icon)), theme.accent()),
            Span::styled(format!("{} ", item.name), theme.heading()),
        ]);
        let block = card(title, theme.border(false), &theme);
        let inner = block.inner(cell);
        block.render(cell, buf);
        let lines = vec![
            Line::from(Span::styled(
                label_of(&app.site.specialty_categories, &item.category).to_string(),
                theme.muted(),
            )),
            Line::from(Span::styled(item.description.clone(), theme.body())),
            Line::from(media_label(app, &item.media)),
        ];
        render_lines(buf, inner, lines);
    }
}

pub fn render_services(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    heading(buf, area, app, Section::Services, &theme);
    tabs::render(buf, rows(area, TAB_ROW, 1), &app.service_tabs, &theme);

    let search = if app.service_query.is_empty() {
        Line::from(Span::styled(" ⌕ press / to search services", theme.muted()))
    } else {
        Line::from(vec![
            Span::styled(" ⌕ ", theme.accent()),
            Span::styled(app.service_query.clone(), theme.body()),
        ])
    };
    Paragraph::new(search).render(rows(area, SEARCH_ROW, 1), buf);

    let featured: Vec<&str> = app
        .site
        .featured_services()
        .into_iter()
        .map(|s| s.title.as_str())
        .collect();
    if !featured.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(" ★ Featured: ", theme.accent()),
            Span::styled(featured.join(" · "), theme.body()),
        ]))
        .render(rows(area, SEARCH_ROW + 1, 1), buf);
    }

    let body = inset(rows(area, SERVICES_GRID_ROW, area.height), 1);
    let items = app.visible_services();
    if items.is_empty() {
        empty(buf, body, "No services match your search", &theme);
        return;
    }
    let columns = app.page_layout().columns();
    for (i, service) in items.into_iter().enumerate() {
        let cell = grid_cell(body, columns, SERVICE_CARD_HEIGHT, i);
        let category = app.site.service_categories.iter().find(|c| c.id == service.category);
        let color = theme.category_color(category.and_then(|c| c.color.as_deref()));
        let title = Line::from(vec![
            Span::styled(format!(" {} ", icon(&service.icon)), Style::default().fg(color)),
            Span::styled(format!("{} ", service.title), theme.heading()),
        ]);
        let block = card(title, Style::default().fg(color), &theme);
        let inner = block.inner(cell);
        block.render(cell, buf);
        let lines = vec![
            Line::from(Span::styled(service.description.clone(), theme.body())),
            Line::from(Span::styled(
                app.site.service_category_label(&service.category).to_string(),
                theme.muted(),
            )),
        ];
        render_lines(buf, inner, lines);
    }
}

pub fn render_footer(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    buf.set_style(area, Style::default().bg(theme.surface));
    let lines = vec![
        Line::from(Span::styled(app.site.title.clone(), theme.heading())),
        Line::from(Span::styled(app.site.tagline.clone(), theme.muted())),
        Line::from(Span::styled(app.site.footer.clone(), theme.muted())),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// One row per line, clipped to `inner`.
fn render_lines(buf: &mut Buffer, inner: Rect, lines: Vec<Line<'static>>) {
    for (i, line) in lines.into_iter().enumerate() {
        let row = rows(inner, i as u16, 1);
        if row.height == 0 {
            break;
        }
        Paragraph::new(line).render(row, buf);
    }
}
