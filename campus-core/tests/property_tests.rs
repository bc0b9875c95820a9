//! Property tests for the interaction state machines.
//!
//! Uses proptest to verify:
//! 1. Index bounds: the carousel index stays in `0..len` under any input
//! 2. Transition lock: no change starts while a transition is in flight
//! 3. Wrap-around: next/previous walk the list circularly, and T
//!    auto-advance ticks leave the index at T mod len
//! 4. Swipes shorter than the threshold never navigate
//! 5. Filtering: the `all` tab is the identity, any category is a subset
//! 6. Bands: classification is monotone in width

use std::time::{Duration, Instant};

use campus_core::carousel::{Carousel, CarouselConfig, Trigger};
use campus_core::content::SiteContent;
use campus_core::filter::{self, Query, ALL};
use campus_core::layout::Band;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Wait(u64),
    Next,
    Previous,
    Jump(usize),
    HoverEnter,
    HoverLeave,
    Press(f32),
    Drag(f32),
    Release,
    Cancel,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..7000).prop_map(Op::Wait),
        Just(Op::Next),
        Just(Op::Previous),
        (0usize..8).prop_map(Op::Jump),
        Just(Op::HoverEnter),
        Just(Op::HoverLeave),
        (0.0f32..1200.0).prop_map(Op::Press),
        (0.0f32..1200.0).prop_map(Op::Drag),
        Just(Op::Release),
        Just(Op::Cancel),
    ]
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── 1 & 2. Index bounds and transition lock ──────────────────────────

proptest! {
    #[test]
    fn index_stays_in_bounds_and_lock_holds(
        len in 1usize..6,
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let t0 = Instant::now();
        let mut now = t0;
        let mut c = Carousel::new((0..len).collect::<Vec<_>>(), CarouselConfig::banner(), t0);

        for op in ops {
            if let Op::Wait(n) = op {
                now += ms(n);
            }
            let locked = c.is_transitioning(now);
            let change = match op {
                Op::Wait(_) => c.tick(now),
                Op::Next => c.next(now),
                Op::Previous => c.previous(now),
                Op::Jump(i) => c.jump_to(i, now),
                Op::HoverEnter => { c.hover_enter(); None }
                Op::HoverLeave => { c.hover_leave(now); None }
                Op::Press(x) => { c.press(x); None }
                Op::Drag(x) => { c.drag_to(x); None }
                Op::Release => c.release(now),
                Op::Cancel => { c.cancel_drag(now); None }
            };

            prop_assert!(c.index() < len);
            if let Some(change) = change {
                prop_assert!(!locked, "change {:?} started during a transition", change);
                prop_assert_eq!(change.to, c.index());
                prop_assert_ne!(change.from, change.to);
                prop_assert!(c.is_transitioning(now));
            }
        }
    }
}

// ── 3. Wrap-around ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn next_and_previous_wrap(len in 2usize..8, steps in 1usize..20) {
        let t0 = Instant::now();
        let mut c = Carousel::new((0..len).collect::<Vec<_>>(), CarouselConfig::banner(), t0);
        let mut now = t0;
        for i in 1..=steps {
            // Step past the transition lock each time.
            now += ms(600);
            let change = c.next(now);
            prop_assert!(change.is_some());
            prop_assert_eq!(c.index(), i % len);
        }
        for _ in 0..steps {
            now += ms(600);
            let before = c.index();
            let change = c.previous(now).map(|ch| ch.trigger);
            prop_assert_eq!(change, Some(Trigger::Previous));
            prop_assert_eq!(c.index(), (before + len - 1) % len);
        }
    }
}

proptest! {
    #[test]
    fn auto_ticks_count_modulo_len(len in 1usize..6, t in 0u64..30) {
        let t0 = Instant::now();
        let config = CarouselConfig::banner();
        let interval = config.interval;
        let mut c = Carousel::new((0..len).collect::<Vec<_>>(), config, t0);
        for k in 1..=t {
            let change = c.tick(t0 + interval * k as u32);
            prop_assert_eq!(change.is_some(), len > 1);
        }
        let expected = if len > 1 { t as usize % len } else { 0 };
        prop_assert_eq!(c.index(), expected);
    }
}

// ── 4. Short swipes ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn short_swipes_never_navigate(start in 100.0f32..900.0, delta in -79.0f32..79.0) {
        let t0 = Instant::now();
        let mut c = Carousel::new(vec![1, 2, 3], CarouselConfig::banner(), t0);
        c.press(start);
        c.drag_to(start + delta);
        prop_assert_eq!(c.release(t0), None);
        prop_assert_eq!(c.index(), 0);
    }

    #[test]
    fn long_swipes_navigate_once(start in 200.0f32..900.0, extra in 1.0f32..150.0, left in any::<bool>()) {
        let t0 = Instant::now();
        let mut c = Carousel::new(vec![1, 2, 3], CarouselConfig::banner(), t0);
        let travel = 80.0 + extra;
        c.press(start);
        c.drag_to(if left { start - travel } else { start + travel });
        let change = c.release(t0);
        prop_assert!(change.is_some());
        prop_assert_eq!(c.index(), if left { 1 } else { 2 });
    }
}

// ── 5. Filtering ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn category_filter_is_ordered_subset(pick in 0usize..6, text in "[a-z ]{0,6}") {
        let site = SiteContent::default_site();
        let ids: Vec<&str> = std::iter::once(ALL)
            .chain(site.service_categories.iter().map(|c| c.id.as_str()))
            .collect();
        let id = ids[pick % ids.len()];

        let query = Query::category(id).with_text(text.clone());
        let visible = filter::apply(&site.services, &query);

        let mut last = None;
        for service in &visible {
            if id != ALL {
                prop_assert_eq!(service.category.as_str(), id);
            }
            prop_assert!(filter::matches_text(*service, &text));
            let pos = site.services.iter().position(|s| s.id == service.id);
            prop_assert!(pos > last, "order not preserved");
            last = pos;
        }
    }

    #[test]
    fn all_with_blank_text_is_identity(blank in "[ \t]{0,4}") {
        let site = SiteContent::default_site();
        let visible = filter::apply(&site.news, &Query::category(ALL).with_text(blank));
        prop_assert_eq!(visible.len(), site.news.len());
    }
}

// ── 6. Bands ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn bands_are_monotone(a in 0u32..4000, b in 0u32..4000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Band::from_width(lo) <= Band::from_width(hi));
    }
}
