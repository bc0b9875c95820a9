//! End-to-end flows through the public API: keyboard and mouse input,
//! drawing, and state that survives a restart.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use campus_core::content::SiteContent;
use campus_core::theme::{MemoryStore, ThemeContext, ThemeMode};
use campus_tui::app::{Overlay, Section};
use campus_tui::media::MediaLibrary;
use campus_tui::persistence::{self, FileThemeStore};
use campus_tui::{input, ui, AppState, PortalConfig};

fn build(theme: ThemeContext, width: u16, height: u16, now: Instant) -> AppState {
    let site = SiteContent::default_site();
    let media = MediaLibrary::trusting(site.media_refs());
    AppState::new(
        site,
        &PortalConfig::default(),
        theme,
        media,
        Rect::new(0, 0, width, height),
        now,
    )
}

fn app(now: Instant) -> AppState {
    build(ThemeContext::init(Box::new(MemoryStore::new()), false), 100, 40, now)
}

fn key(app: &mut AppState, code: KeyCode, now: Instant) {
    input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
}

fn screen(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(app.screen.width, app.screen.height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        out.push('\n');
    }
    out
}

#[test]
fn banner_auto_advances_and_hover_pauses() {
    let t0 = Instant::now();
    let mut app = app(t0);
    app.tick(t0 + Duration::from_millis(6_100));
    assert_eq!(app.banner.index(), 1);

    let page = app.chrome().page;
    let hovered = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 10,
        row: page.y + 2,
        modifiers: KeyModifiers::NONE,
    };
    input::handle_mouse(&mut app, hovered, t0 + Duration::from_millis(7_000));
    app.tick(t0 + Duration::from_millis(30_000));
    assert_eq!(app.banner.index(), 1);
}

#[test]
fn rapid_next_presses_respect_transition_lock() {
    let t0 = Instant::now();
    let mut app = app(t0);
    key(&mut app, KeyCode::Right, t0);
    key(&mut app, KeyCode::Right, t0 + Duration::from_millis(100));
    assert_eq!(app.banner.index(), 1);
    key(&mut app, KeyCode::Right, t0 + Duration::from_millis(2_000));
    assert_eq!(app.banner.index(), 2);
}

#[test]
fn theme_choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("state.json");
    let t0 = Instant::now();

    let theme = ThemeContext::init(Box::new(FileThemeStore::new(state_path.clone())), false);
    let mut first = build(theme, 100, 40, t0);
    key(&mut first, KeyCode::Char('t'), t0);
    assert_eq!(first.env.theme.mode(), ThemeMode::Dark);
    let session = persistence::extract(&first, persistence::load(&state_path));
    persistence::save(&state_path, &session).unwrap();

    let theme = ThemeContext::init(Box::new(FileThemeStore::new(state_path.clone())), false);
    let mut second = build(theme, 100, 40, t0);
    persistence::apply(&mut second, &persistence::load(&state_path));
    assert_eq!(second.env.theme.mode(), ThemeMode::Dark);
    assert_eq!(second.overlay, Overlay::None);
}

#[test]
fn first_run_shows_welcome_until_dismissed() {
    let t0 = Instant::now();
    let mut app = app(t0);
    persistence::apply(&mut app, &persistence::PersistedState::default());
    assert_eq!(app.overlay, Overlay::Welcome);
    assert!(screen(&app).contains("Welcome to"));
    key(&mut app, KeyCode::Char('j'), t0);
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.scroll_row(), 0);
}

#[test]
fn search_flow_renders_filtered_services() {
    let t0 = Instant::now();
    let mut app = app(t0);
    key(&mut app, KeyCode::Char('/'), t0);
    for c in "library".chars() {
        key(&mut app, KeyCode::Char(c), t0);
    }
    key(&mut app, KeyCode::Enter, t0);
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.focus, Section::Services);
    let text = screen(&app);
    assert!(text.contains("Library"));
    assert!(!text.contains("Gymnasium"));
}

#[test]
fn narrow_terminal_uses_menu_and_widening_closes_it() {
    let t0 = Instant::now();
    let mut app = build(ThemeContext::init(Box::new(MemoryStore::new()), false), 40, 30, t0);
    key(&mut app, KeyCode::Char('m'), t0);
    assert!(app.sidebar.get().is_open());
    assert!(screen(&app).contains("Esc or click outside to close"));

    input::handle_resize(&mut app, 120, 30, t0 + Duration::from_secs(1));
    assert!(!app.sidebar.get().is_open());
    assert_eq!(app.page_layout().columns(), 2);
}

#[test]
fn drag_leaving_the_banner_cancels_the_swipe() {
    let t0 = Instant::now();
    let mut app = app(t0);
    let y = app.chrome().page.y + 2;
    let at = |kind, column, row| MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    input::handle_mouse(&mut app, at(MouseEventKind::Down(MouseButton::Left), 60, y), t0);
    // Row 0 is the navbar, outside the banner.
    input::handle_mouse(&mut app, at(MouseEventKind::Drag(MouseButton::Left), 20, 0), t0);
    input::handle_mouse(&mut app, at(MouseEventKind::Up(MouseButton::Left), 20, 0), t0);
    assert_eq!(app.banner.index(), 0);
    assert!(app.drag.is_none());
}
