//! Tab strip drawing and hit testing. Both walk the same geometry: one
//! column of margin, then ` label ` per tab separated by a single space.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use campus_core::filter::TabSet;

use crate::theme::Theme;

const MARGIN: u16 = 1;
const GAP: u16 = 1;

/// Column range of every tab, relative to the strip's left edge.
pub fn ranges(tabs: &TabSet) -> Vec<Range<u16>> {
    let mut x = MARGIN;
    tabs.tabs()
        .iter()
        .map(|tab| {
            let width = Span::raw(tab.label.as_str()).width() as u16 + 2;
            let range = x..x.saturating_add(width);
            x = range.end.saturating_add(GAP);
            range
        })
        .collect()
}

/// Tab under strip-relative column `x`.
pub fn tab_at(tabs: &TabSet, x: u16) -> Option<usize> {
    ranges(tabs).iter().position(|r| r.contains(&x))
}

pub fn render(buf: &mut Buffer, area: Rect, tabs: &TabSet, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let mut spans = vec![Span::raw(" ".repeat(MARGIN as usize))];
    for (i, tab) in tabs.tabs().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(GAP as usize)));
        }
        let active = i == tabs.active_index();
        spans.push(Span::styled(format!(" {} ", tab.label), theme.tab(active)));
    }
    Paragraph::new(Line::from(spans)).render(Rect { height: 1, ..area }, buf);
}
