//! Property tests for mouse input over the whole page.
//!
//! Uses proptest to verify, for arbitrary Down/Drag/Up/Moved sequences:
//! 1. Each carousel's index stays in bounds
//! 2. At most one carousel is dragging, and only the one the app tracks
//! 3. No carousel is left dragging after the button goes up

use std::time::{Duration, Instant};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use proptest::prelude::*;
use ratatui::layout::Rect;

use campus_core::content::SiteContent;
use campus_core::theme::{MemoryStore, ThemeContext};
use campus_tui::app::CarouselId;
use campus_tui::media::MediaLibrary;
use campus_tui::{input, AppState, PortalConfig};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

#[derive(Debug, Clone)]
enum Gesture {
    Down(u16, u16),
    Drag(u16, u16),
    Up(u16, u16),
    Moved(u16, u16),
    Wheel(bool),
    Wait(u64),
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    let at = (0..WIDTH, 0..HEIGHT);
    prop_oneof![
        at.clone().prop_map(|(c, r)| Gesture::Down(c, r)),
        at.clone().prop_map(|(c, r)| Gesture::Drag(c, r)),
        at.clone().prop_map(|(c, r)| Gesture::Up(c, r)),
        at.prop_map(|(c, r)| Gesture::Moved(c, r)),
        any::<bool>().prop_map(Gesture::Wheel),
        (0u64..7000).prop_map(Gesture::Wait),
    ]
}

fn app(now: Instant) -> AppState {
    let site = SiteContent::default_site();
    let media = MediaLibrary::trusting(site.media_refs());
    let theme = ThemeContext::init(Box::new(MemoryStore::new()), false);
    AppState::new(
        site,
        &PortalConfig::default(),
        theme,
        media,
        Rect::new(0, 0, WIDTH, HEIGHT),
        now,
    )
}

fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn dragging(app: &AppState, id: CarouselId) -> bool {
    match id {
        CarouselId::Banner => app.banner.is_dragging(),
        CarouselId::Highlights => app.highlights.is_dragging(),
    }
}

proptest! {
    #[test]
    fn mouse_sequences_keep_carousels_consistent(
        gestures in prop::collection::vec(arb_gesture(), 1..80),
    ) {
        let t0 = Instant::now();
        let mut now = t0;
        let mut app = app(t0);

        for gesture in gestures {
            let released = matches!(gesture, Gesture::Up(..));
            match gesture {
                Gesture::Down(c, r) => input::handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), c, r), now),
                Gesture::Drag(c, r) => input::handle_mouse(&mut app, event(MouseEventKind::Drag(MouseButton::Left), c, r), now),
                Gesture::Up(c, r) => input::handle_mouse(&mut app, event(MouseEventKind::Up(MouseButton::Left), c, r), now),
                Gesture::Moved(c, r) => input::handle_mouse(&mut app, event(MouseEventKind::Moved, c, r), now),
                Gesture::Wheel(down) => {
                    let kind = if down { MouseEventKind::ScrollDown } else { MouseEventKind::ScrollUp };
                    input::handle_mouse(&mut app, event(kind, 0, 0), now);
                }
                Gesture::Wait(n) => {
                    now += Duration::from_millis(n);
                    app.tick(now);
                }
            }

            prop_assert!(app.banner.index() < app.banner.len());
            prop_assert!(app.highlights.index() < app.highlights.len());
            for id in [CarouselId::Banner, CarouselId::Highlights] {
                if dragging(&app, id) {
                    prop_assert_eq!(app.drag, Some(id));
                }
            }
            if released {
                prop_assert!(app.drag.is_none());
                prop_assert!(!app.banner.is_dragging());
                prop_assert!(!app.highlights.is_dragging());
            }
        }
    }
}
