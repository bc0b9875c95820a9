//! Banner and highlights carousels.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use campus_core::carousel::{circular_offset, Carousel, Phase};
use campus_core::content::Slide;

use crate::app::{AppState, Section};
use crate::theme::Theme;
use crate::ui::cards::media_label;
use crate::ui::rows;

/// What a click on a carousel surface lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselHit {
    Previous,
    Next,
    Dot(usize),
    Surface,
}

/// Hit-test a section-local cell against the arrow and dot controls.
pub fn hit(width: u16, height: u16, len: usize, x: u16, y: u16) -> CarouselHit {
    if height == 0 || width == 0 {
        return CarouselHit::Surface;
    }
    if y == height / 2 {
        if x <= 2 {
            return CarouselHit::Previous;
        }
        if x >= width.saturating_sub(3) {
            return CarouselHit::Next;
        }
    }
    if y == height - 1 {
        if let Some(i) = dot_columns(width, len).iter().position(|c| *c == x) {
            return CarouselHit::Dot(i);
        }
    }
    CarouselHit::Surface
}

/// Columns of the indicator dots: one per slide, a space apart, centered.
pub fn dot_columns(width: u16, len: usize) -> Vec<u16> {
    if len == 0 {
        return Vec::new();
    }
    let total = (len * 2 - 1).min(usize::from(u16::MAX)) as u16;
    let start = width.saturating_sub(total) / 2;
    (0..len)
        .map(|i| start.saturating_add((i * 2) as u16))
        .take_while(|c| *c < width)
        .collect()
}

/// Gradient stops for slides without background media.
fn gradient(index: usize, theme: &Theme) -> [Color; 2] {
    match index % 3 {
        0 => [theme.primary, theme.secondary],
        1 => [theme.secondary, theme.positive],
        _ => [theme.primary, theme.warning],
    }
}

fn controls(buf: &mut Buffer, area: Rect, carousel: &Carousel<Slide>, theme: &Theme) {
    if area.width < 6 || area.height < 3 {
        return;
    }
    let arrow = Style::default().fg(theme.surface).add_modifier(Modifier::BOLD);
    let mid = rows(area, area.height / 2, 1);
    Paragraph::new(Span::styled(" ‹", arrow)).render(Rect { width: 3, ..mid }, buf);
    Paragraph::new(Span::styled("› ", arrow))
        .alignment(Alignment::Right)
        .render(Rect { x: mid.right() - 3, width: 3, ..mid }, buf);

    let dots_row = rows(area, area.height - 1, 1);
    for (i, col) in dot_columns(area.width, carousel.len()).into_iter().enumerate() {
        let glyph = if i == carousel.index() { "●" } else { "○" };
        Paragraph::new(Span::styled(glyph, arrow))
            .render(Rect { x: dots_row.x + col, width: 1, ..dots_row }, buf);
    }

    if carousel.is_paused() {
        Paragraph::new(Span::styled("❚❚ ", arrow))
            .alignment(Alignment::Right)
            .render(rows(area, 0, 1), buf);
    }
}

pub fn render_banner(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    let carousel = &app.banner;
    let Some(slide) = carousel.current() else {
        Paragraph::new(Span::styled("No slides", theme.muted()))
            .alignment(Alignment::Center)
            .render(rows(area, area.height / 2, 1), buf);
        return;
    };

    // Split the surface in two colour bands; a parallax shift moves the
    // split as the page scrolls.
    let [top, bottom] = gradient(carousel.index(), &theme);
    let shift = (app.scroll().parallax(0.5) / crate::page::CELL_HEIGHT_PX as f32) as u16;
    let split = (area.height / 2).saturating_sub(shift.min(area.height / 2));
    buf.set_style(rows(area, 0, split), Style::default().bg(top));
    buf.set_style(rows(area, split, area.height), Style::default().bg(bottom));

    // Incoming text slides in from the side it came from.
    let progress = carousel.transition_progress(app.clock);
    let travel = ((1.0 - progress) * f32::from(area.width) / 4.0) as u16;
    let forward = match carousel.phase() {
        Phase::Transitioning { from, to, .. } => circular_offset(to, from, carousel.len()) >= 0,
        Phase::Idle => true,
    };
    let text_area = if forward {
        Rect {
            x: area.x + travel.min(area.width),
            width: area.width.saturating_sub(travel),
            ..area
        }
    } else {
        Rect {
            width: area.width.saturating_sub(travel),
            ..area
        }
    };

    let on_banner = Style::default().fg(theme.surface);
    let mid = area.height / 2;
    Paragraph::new(Span::styled(
        slide.title.as_str(),
        on_banner.add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(rows(text_area, mid.saturating_sub(2), 1), buf);

    if let Some(subtitle) = &slide.subtitle {
        Paragraph::new(Span::styled(subtitle.as_str(), on_banner))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows(text_area, mid, 2), buf);
    }

    if let Some(button) = &slide.button_text {
        let style = Style::default()
            .fg(theme.primary)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled(format!(" {button} ⏎ "), style)))
            .alignment(Alignment::Center)
            .render(rows(text_area, mid + 2, 1), buf);
    }

    if let Some(src) = &slide.media {
        Paragraph::new(media_label(app, src).style(on_banner))
            .render(rows(area, 0, 1), buf);
    }

    controls(buf, area, carousel, &theme);
}

pub fn render_highlights(buf: &mut Buffer, area: Rect, app: &AppState) {
    let theme = app.palette();
    let carousel = &app.highlights;

    Paragraph::new(Span::styled(Section::Highlights.label(), theme.heading()))
        .render(rows(area, 0, 1).intersection(Rect { x: area.x + 2, ..area }), buf);

    let stage = rows(area, 1, area.height.saturating_sub(2));
    if carousel.is_empty() || stage.height < 3 {
        return;
    }

    let base = (stage.width * 2 / 5).max(10).min(stage.width);
    let mid = i32::from(stage.x) + i32::from(stage.width) / 2;

    let mut order: Vec<usize> = (0..carousel.len())
        .filter(|i| carousel.layout(*i).position.abs() <= 1)
        .collect();
    order.sort_by_key(|i| carousel.layout(*i).z_index);

    for i in order {
        let layout = carousel.layout(i);
        let width = (f32::from(base) * layout.scale) as i32;
        let center = mid + (layout.translate_pct / 100.0 * f32::from(base) * 0.6) as i32;
        let left = (center - width / 2).max(i32::from(stage.x));
        let right = (center + width / 2).min(i32::from(stage.right()));
        if right - left < 4 {
            continue;
        }
        let shrink = u16::from(layout.position != 0);
        let card = Rect::new(
            left as u16,
            stage.y + shrink,
            (right - left) as u16,
            stage.height.saturating_sub(2 * shrink),
        )
        .intersection(area);

        let dim = layout.opacity < 1.0;
        let slide = &carousel.items()[i];
        render_card(buf, card, slide, app, &theme, dim);
    }

    controls(buf, stage, carousel, &theme);
}

fn render_card(buf: &mut Buffer, card: Rect, slide: &Slide, app: &AppState, theme: &Theme, dim: bool) {
    Clear.render(card, buf);
    let (border, text) = if dim {
        (theme.border(false), theme.muted())
    } else {
        (theme.border(true), theme.body())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(theme.card())
        .title(Span::styled(format!(" {} ", slide.title), if dim { text } else { theme.heading() }));
    let inner = block.inner(card);
    block.render(card, buf);

    let mut lines = Vec::new();
    if let Some(category) = &slide.category {
        lines.push(Line::from(Span::styled(category.as_str(), theme.accent())));
    }
    if let Some(subtitle) = &slide.subtitle {
        lines.push(Line::from(Span::styled(subtitle.as_str(), text)));
    }
    if let Some(src) = &slide.media {
        lines.push(Line::from(media_label(app, src)));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::BANNER_HEIGHT;
    use crate::test_helpers::app_at;

    #[test]
    fn dots_are_centered() {
        assert_eq!(dot_columns(11, 3), vec![3, 5, 7]);
        assert_eq!(dot_columns(10, 0), Vec::<u16>::new());
        assert_eq!(dot_columns(3, 4), vec![0, 2]);
    }

    #[test]
    fn arrows_and_dots_hit() {
        let h = BANNER_HEIGHT;
        assert_eq!(hit(80, h, 3, 1, h / 2), CarouselHit::Previous);
        assert_eq!(hit(80, h, 3, 78, h / 2), CarouselHit::Next);
        let dots = dot_columns(80, 3);
        assert_eq!(hit(80, h, 3, dots[2], h - 1), CarouselHit::Dot(2));
        assert_eq!(hit(80, h, 3, 40, 1), CarouselHit::Surface);
    }

    #[test]
    fn banner_shows_current_slide_and_pause_marker() {
        let (mut app, t0) = app_at();
        let area = Rect::new(0, 0, 100, BANNER_HEIGHT);
        app.set_hover(Some(crate::app::CarouselId::Banner), t0);

        let mut buf = Buffer::empty(area);
        render_banner(&mut buf, area, &app);
        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter_map(|p| buf.cell(p).map(|c| c.symbol().to_string()))
            .collect();
        let title = app.banner.current().map(|s| s.title.clone()).unwrap_or_default();
        assert!(text.contains(&title));
        assert!(text.contains("❚❚"));
        assert!(text.contains("●"));
    }

    #[test]
    fn highlights_fit_narrow_area() {
        let (app, _) = app_at();
        let area = Rect::new(0, 0, 12, crate::page::HIGHLIGHTS_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_highlights(&mut buf, area, &app);
    }
}
