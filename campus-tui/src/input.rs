//! Input dispatch: overlays first, then global keys, then the focused
//! section. Mouse events are mapped onto the same `AppState` operations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, CarouselId, Overlay, Section};
use crate::page::{self, HIGHLIGHTS_HEIGHT};
use crate::ui::carousel::{self, CarouselHit};
use crate::ui::{cards, navbar, section_at, sidebar, status_bar, tabs};

/// Rows moved per wheel notch.
const WHEEL_ROWS: i32 = 3;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme(now);
            return;
        }
        KeyCode::Char('m') => {
            app.toggle_sidebar();
            return;
        }
        KeyCode::Char('/') => {
            app.scroll_to_section(Section::Services, now);
            app.overlay = Overlay::Search;
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.navigate_index(index, now);
            return;
        }
        KeyCode::Backspace => {
            app.back(now);
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev(now);
            } else {
                app.focus_next(now);
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev(now);
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_by(1, now);
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_by(-1, now);
            return;
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.page_down(now);
            return;
        }
        KeyCode::PageUp => {
            app.page_up(now);
            return;
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.back_to_top(now);
            return;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_by(i32::from(u16::MAX), now);
            app.focus = Section::Footer;
            return;
        }
        KeyCode::Esc => {
            if app.sidebar.get().is_open() {
                app.sidebar.get_mut().close();
            } else {
                app.status_message = None;
            }
            return;
        }
        _ => {}
    }

    // 3. Focused-section keys.
    handle_section_key(app, key, now);
}

fn handle_section_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    let section = app.focus;
    let forward = match key.code {
        KeyCode::Char('l') | KeyCode::Right => true,
        KeyCode::Char('h') | KeyCode::Left => false,
        KeyCode::Enter => {
            if let Some(id) = CarouselId::for_section(section) {
                app.activate_slide(id, now);
            }
            return;
        }
        _ => return,
    };

    if let Some(id) = CarouselId::for_section(section) {
        let carousel = app.carousel_mut(id);
        if forward {
            carousel.next(now);
        } else {
            carousel.previous(now);
        }
    } else {
        app.cycle_tab(section, forward);
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.set_service_query("");
        }
        KeyCode::Enter => {
            app.overlay = Overlay::None;
            let count = app.visible_services().len();
            app.set_status(format!("{count} service(s) match \"{}\"", app.service_query));
        }
        KeyCode::Backspace => {
            let mut query = app.service_query.clone();
            query.pop();
            app.set_service_query(query);
        }
        KeyCode::Char(c) => {
            let mut query = app.service_query.clone();
            query.push(c);
            app.set_service_query(query);
        }
        _ => {}
    }
}

/// Handle a mouse event.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Instant) {
    let (col, row) = (mouse.column, mouse.row);
    let x_px = page::cols_to_px(col) as f32;

    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_ROWS, now),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_ROWS, now),
        MouseEventKind::Moved => {
            let target = section_at(app, col, row).and_then(|(s, _, _)| CarouselId::for_section(s));
            app.set_hover(target, now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.sidebar.get_mut().touch_start(x_px);
            click(app, col, row, x_px, now);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.sidebar.get_mut().touch_move(x_px);
            if let Some(id) = app.drag {
                let still_inside = section_at(app, col, row).is_some_and(|(s, _, _)| s == id.section());
                if still_inside {
                    app.drag_to(x_px);
                } else {
                    app.cancel_drag(now);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.sidebar.get_mut().touch_end();
            app.end_drag(now);
        }
        _ => {}
    }
}

fn click(app: &mut AppState, col: u16, row: u16, x_px: f32, now: Instant) {
    match app.overlay {
        Overlay::Welcome | Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Search => return,
        Overlay::None => {}
    }

    if app.sidebar.get().is_open() {
        let panel = sidebar::panel_rect(app, app.screen);
        if col < panel.right() {
            if let Some(i) = sidebar::item_at(app, panel, col, row) {
                app.navigate_index(i, now);
            }
        } else {
            app.sidebar.get_mut().backdrop_click();
        }
        return;
    }

    let chrome = app.chrome();
    if row >= chrome.navbar.y && row < chrome.navbar.bottom() {
        match navbar::target_at(app, chrome.navbar, col, row) {
            Some(navbar::NavTarget::Item(i)) => app.navigate_index(i, now),
            Some(navbar::NavTarget::Menu) => app.toggle_sidebar(),
            Some(navbar::NavTarget::Theme) => app.toggle_theme(now),
            None => {}
        }
        return;
    }
    if row >= chrome.status.y && row < chrome.status.bottom() {
        let on_button = status_bar::back_to_top_rect(app, chrome.status)
            .is_some_and(|r| col >= r.x && col < r.right());
        if on_button {
            app.back_to_top(now);
        }
        return;
    }

    let Some((section, local_x, local_row)) = section_at(app, col, row) else {
        return;
    };
    app.focus = section;

    if let Some(id) = CarouselId::for_section(section) {
        click_carousel(app, id, local_x, local_row, x_px, now);
        return;
    }

    if local_row == cards::TAB_ROW {
        let hit = app.tabs(section).and_then(|t| tabs::tab_at(t, local_x));
        if let Some(index) = hit {
            app.select_tab(section, index);
        }
    } else if section == Section::Services && local_row == cards::SEARCH_ROW {
        app.overlay = Overlay::Search;
    }
}

fn click_carousel(app: &mut AppState, id: CarouselId, x: u16, row: u16, x_px: f32, now: Instant) {
    let width = app.screen.width;
    let len = app.carousel(id).len();
    let hit = match id {
        CarouselId::Banner => carousel::hit(width, page::BANNER_HEIGHT, len, x, row),
        // Highlight controls sit on the stage below the heading row.
        CarouselId::Highlights if row >= 1 => {
            carousel::hit(width, HIGHLIGHTS_HEIGHT.saturating_sub(2), len, x, row - 1)
        }
        CarouselId::Highlights => CarouselHit::Surface,
    };
    let carousel = app.carousel_mut(id);
    match hit {
        CarouselHit::Previous => {
            carousel.previous(now);
        }
        CarouselHit::Next => {
            carousel.next(now);
        }
        CarouselHit::Dot(i) => {
            carousel.jump_to(i, now);
        }
        CarouselHit::Surface => app.begin_drag(id, x_px, now),
    }
}

/// Handle a terminal resize.
pub fn handle_resize(app: &mut AppState, width: u16, height: u16, now: Instant) {
    app.resize(width, height, now);
}
