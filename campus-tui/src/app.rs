//! Application state: single-owner, main-thread only.
//!
//! `AppState` composes the core components into the home page. Every
//! mutation goes through a method here so the keyboard and mouse paths in
//! `input` share one set of rules.

use std::time::Instant;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use campus_core::carousel::{Carousel, Change};
use campus_core::content::{NewsItem, Service, SiteContent, Slide, Specialty, Tab};
use campus_core::filter::{self, Query, TabSet};
use campus_core::layout::{ResponsiveSidebar, Throttle};
use campus_core::nav::Router;
use campus_core::scroll::{ScrollActivity, ScrollState};
use campus_core::signal::Environment;
use campus_core::theme::ThemeContext;

use crate::config::PortalConfig;
use crate::media::MediaLibrary;
use crate::page::{self, PageLayout, SectionCounts};
use crate::theme::Theme;

/// Home page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Banner,
    About,
    Departments,
    Highlights,
    News,
    Specialties,
    Services,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Banner,
        Section::About,
        Section::Departments,
        Section::Highlights,
        Section::News,
        Section::Specialties,
        Section::Services,
        Section::Footer,
    ];

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Section::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Banner => "Home",
            Section::About => "About us",
            Section::Departments => "Departments",
            Section::Highlights => "Campus highlights",
            Section::News => "News",
            Section::Specialties => "Specialties",
            Section::Services => "Campus services",
            Section::Footer => "Contact",
        }
    }

    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }

    /// Page anchor a navigation path scrolls to. Detail paths such as
    /// `/news/<id>` land on their listing section.
    pub fn for_path(path: &str) -> Option<Section> {
        let root = path.trim_start_matches('/').split('/').next().unwrap_or_default();
        match root {
            "" => Some(Section::Banner),
            "about" => Some(Section::About),
            "departments" => Some(Section::Departments),
            "activities" => Some(Section::Highlights),
            "recruitment" | "news" => Some(Section::News),
            "specialties" => Some(Section::Specialties),
            "services" => Some(Section::Services),
            "contact" => Some(Section::Footer),
            _ => None,
        }
    }

    pub fn is_carousel(self) -> bool {
        matches!(self, Section::Banner | Section::Highlights)
    }
}

/// Which of the two carousels an interaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselId {
    Banner,
    Highlights,
}

impl CarouselId {
    pub fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Banner => Some(CarouselId::Banner),
            Section::Highlights => Some(CarouselId::Highlights),
            _ => None,
        }
    }

    pub fn section(self) -> Section {
        match self {
            CarouselId::Banner => Section::Banner,
            CarouselId::Highlights => Section::Highlights,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
    Search,
}

/// Terminal rows above and below the scrolling page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub navbar: Rect,
    pub page: Rect,
    pub status: Rect,
}

/// Top-level application state.
pub struct AppState {
    pub site: SiteContent,
    pub env: Environment,
    pub router: Router,
    pub sidebar: ResponsiveSidebar,

    // Section state
    pub banner: Carousel<Slide>,
    pub highlights: Carousel<Slide>,
    pub about_tabs: TabSet,
    pub news_tabs: TabSet,
    pub specialty_tabs: TabSet,
    pub service_tabs: TabSet,
    pub service_query: String,
    pub media: MediaLibrary,

    // Interaction
    pub focus: Section,
    pub overlay: Overlay,
    pub hover: Option<CarouselId>,
    pub drag: Option<CarouselId>,
    pub scroll_activity: ScrollActivity,
    pub resize_throttle: Throttle,
    pub pending_viewport: Option<u32>,
    pub screen: Rect,
    /// Time of the latest tick; rendering reads transitions against it.
    pub clock: Instant,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(
        site: SiteContent,
        config: &PortalConfig,
        theme: ThemeContext,
        media: MediaLibrary,
        screen: Rect,
        now: Instant,
    ) -> Self {
        let env = Environment::new(page::cols_to_px(screen.width), theme);
        let sidebar = ResponsiveSidebar::attach(&env.viewport);

        let banner = Carousel::new(site.banner.clone(), config.banner(), now);
        let highlights = Carousel::new(site.highlights.clone(), config.news(), now);
        let about_tabs = TabSet::new(vec![
            Tab::new("overview", "Overview"),
            Tab::new("history", "History"),
            Tab::new("philosophy", "Philosophy"),
            Tab::new("achievements", "Achievements"),
        ]);
        let news_tabs = TabSet::with_all("All news", &site.news_categories);
        let specialty_tabs = TabSet::with_all("All specialties", &site.specialty_categories);
        let service_tabs = TabSet::with_all("All services", &site.service_categories);

        let mut app = Self {
            site,
            env,
            router: Router::default(),
            sidebar,
            banner,
            highlights,
            about_tabs,
            news_tabs,
            specialty_tabs,
            service_tabs,
            service_query: String::new(),
            media,
            focus: Section::Banner,
            overlay: Overlay::None,
            hover: None,
            drag: None,
            scroll_activity: ScrollActivity::default(),
            resize_throttle: Throttle::resize(),
            pending_viewport: None,
            screen,
            clock: now,
            status_message: None,
            running: true,
        };
        app.sync_scroll();
        app
    }

    pub fn palette(&self) -> Theme {
        Theme::for_mode(self.env.theme.mode())
    }

    // ── Geometry ─────────────────────────────────────────────────────

    pub fn scroll(&self) -> ScrollState {
        self.env.scroll.get()
    }

    /// First visible page row.
    pub fn scroll_row(&self) -> u16 {
        page::px_to_rows(self.scroll().offset)
    }

    pub fn chrome(&self) -> Chrome {
        let screen = self.screen;
        let navbar_height = if self.scroll().navbar_scrolled() { 1 } else { 3 };
        let navbar_height = navbar_height.min(screen.height);
        let status_height = u16::from(screen.height > navbar_height);
        let page_height = screen.height.saturating_sub(navbar_height + status_height);
        Chrome {
            navbar: Rect::new(screen.x, screen.y, screen.width, navbar_height),
            page: Rect::new(screen.x, screen.y + navbar_height, screen.width, page_height),
            status: Rect::new(
                screen.x,
                screen.y + navbar_height + page_height,
                screen.width,
                status_height,
            ),
        }
    }

    pub fn page_layout(&self) -> PageLayout {
        let counts = SectionCounts {
            departments: self.site.departments.len(),
            news: self.visible_news().len(),
            specialties: self.visible_specialties().len(),
            services: self.visible_services().len(),
        };
        PageLayout::compute(self.screen.width, counts)
    }

    /// Re-derive scroll extents from the current layout and clamp.
    pub fn sync_scroll(&mut self) {
        let content = page::rows_to_px(self.page_layout().total_height());
        let viewport = page::rows_to_px(self.chrome().page.height);
        let current = self.scroll();
        let next = ScrollState::new(current.offset, content, viewport).scrolled_to(current.offset);
        self.env.scroll.set(next);
    }

    // ── Filtered content ─────────────────────────────────────────────

    pub fn visible_news(&self) -> Vec<&NewsItem> {
        filter::apply(&self.site.news, &self.news_tabs.query())
    }

    pub fn visible_specialties(&self) -> Vec<&Specialty> {
        filter::apply(&self.site.specialties, &self.specialty_tabs.query())
    }

    pub fn service_filter(&self) -> Query {
        self.service_tabs.query().with_text(self.service_query.clone())
    }

    pub fn visible_services(&self) -> Vec<&Service> {
        filter::apply(&self.site.services, &self.service_filter())
    }

    // ── Time ─────────────────────────────────────────────────────────

    pub fn tick(&mut self, now: Instant) {
        self.clock = now;
        self.banner.tick(now);
        self.highlights.tick(now);

        let fallbacks = self.media.settle();
        if fallbacks > 0 {
            self.set_warning(format!("{fallbacks} media item(s) unavailable, showing placeholder"));
        }

        if let Some(width) = self.pending_viewport {
            if self.resize_throttle.ready(now) {
                self.pending_viewport = None;
                self.apply_viewport(width);
            }
        }
    }

    // ── Scrolling ────────────────────────────────────────────────────

    pub fn scroll_by(&mut self, rows: i32, now: Instant) {
        let delta = i64::from(rows) * i64::from(page::CELL_HEIGHT_PX);
        self.set_scroll(self.scroll().scrolled_by(delta), now);
    }

    pub fn scroll_to_row(&mut self, row: u16, now: Instant) {
        self.set_scroll(self.scroll().scrolled_to(page::rows_to_px(row)), now);
    }

    pub fn page_down(&mut self, now: Instant) {
        let rows = self.chrome().page.height.saturating_sub(1).max(1);
        self.scroll_by(i32::from(rows), now);
    }

    pub fn page_up(&mut self, now: Instant) {
        let rows = self.chrome().page.height.saturating_sub(1).max(1);
        self.scroll_by(-i32::from(rows), now);
    }

    pub fn back_to_top(&mut self, now: Instant) {
        self.scroll_to_row(0, now);
        self.focus = Section::Banner;
    }

    pub fn scroll_to_section(&mut self, section: Section, now: Instant) {
        if let Some(placement) = self.page_layout().placement(section) {
            self.scroll_to_row(placement.top, now);
        }
        self.focus = section;
    }

    fn set_scroll(&mut self, state: ScrollState, now: Instant) {
        let before = self.scroll();
        if self.env.scroll.set(state) {
            self.scroll_activity.record(now);
            // The navbar changes height when crossing the threshold.
            if before.navbar_scrolled() != state.navbar_scrolled() {
                self.sync_scroll();
            }
        }
    }

    // ── Focus & tabs ─────────────────────────────────────────────────

    pub fn focus_next(&mut self, now: Instant) {
        let next = self.focus.next();
        self.scroll_to_section(next, now);
    }

    pub fn focus_prev(&mut self, now: Instant) {
        let prev = self.focus.prev();
        self.scroll_to_section(prev, now);
    }

    pub fn tabs_mut(&mut self, section: Section) -> Option<&mut TabSet> {
        match section {
            Section::About => Some(&mut self.about_tabs),
            Section::News => Some(&mut self.news_tabs),
            Section::Specialties => Some(&mut self.specialty_tabs),
            Section::Services => Some(&mut self.service_tabs),
            _ => None,
        }
    }

    pub fn tabs(&self, section: Section) -> Option<&TabSet> {
        match section {
            Section::About => Some(&self.about_tabs),
            Section::News => Some(&self.news_tabs),
            Section::Specialties => Some(&self.specialty_tabs),
            Section::Services => Some(&self.service_tabs),
            _ => None,
        }
    }

    /// Select a tab; grids change height so scroll extents are re-derived.
    pub fn select_tab(&mut self, section: Section, index: usize) -> bool {
        let changed = self
            .tabs_mut(section)
            .is_some_and(|tabs| tabs.active_index() != index && tabs.select_index(index));
        if changed {
            self.sync_scroll();
        }
        changed
    }

    pub fn cycle_tab(&mut self, section: Section, forward: bool) {
        let Some(tabs) = self.tabs_mut(section) else {
            return;
        };
        if forward {
            tabs.next();
        } else {
            tabs.prev();
        }
        self.sync_scroll();
    }

    pub fn set_service_query(&mut self, query: impl Into<String>) {
        self.service_query = query.into();
        self.sync_scroll();
    }

    // ── Carousels ────────────────────────────────────────────────────

    pub fn carousel(&self, id: CarouselId) -> &Carousel<Slide> {
        match id {
            CarouselId::Banner => &self.banner,
            CarouselId::Highlights => &self.highlights,
        }
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> &mut Carousel<Slide> {
        match id {
            CarouselId::Banner => &mut self.banner,
            CarouselId::Highlights => &mut self.highlights,
        }
    }

    /// Move the pointer's hover to `target`, pausing and resuming
    /// auto-advance as it enters and leaves.
    pub fn set_hover(&mut self, target: Option<CarouselId>, now: Instant) {
        if self.hover == target {
            return;
        }
        if let Some(old) = self.hover.take() {
            self.carousel_mut(old).hover_leave(now);
        }
        if let Some(new) = target {
            self.carousel_mut(new).hover_enter();
        }
        self.hover = target;
    }

    /// Start a drag on `id`. A drag left open on the other carousel (its
    /// release was lost) is cancelled first.
    pub fn begin_drag(&mut self, id: CarouselId, x_px: f32, now: Instant) {
        if self.drag.is_some_and(|active| active != id) {
            self.cancel_drag(now);
        }
        self.carousel_mut(id).press(x_px);
        self.drag = Some(id);
    }

    pub fn drag_to(&mut self, x_px: f32) {
        if let Some(id) = self.drag {
            self.carousel_mut(id).drag_to(x_px);
        }
    }

    pub fn end_drag(&mut self, now: Instant) -> Option<Change> {
        let id = self.drag.take()?;
        self.carousel_mut(id).release(now)
    }

    pub fn cancel_drag(&mut self, now: Instant) {
        if let Some(id) = self.drag.take() {
            self.carousel_mut(id).cancel_drag(now);
        }
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Navigate to `path` and scroll to its anchor.
    pub fn navigate(&mut self, path: &str, now: Instant) {
        self.router.navigate(path);
        self.sidebar.get_mut().navigated();
        self.follow_route(now);
    }

    pub fn navigate_index(&mut self, index: usize, now: Instant) {
        if let Some(path) = self.site.nav.get(index).map(|n| n.path.clone()) {
            self.navigate(&path, now);
        }
    }

    pub fn back(&mut self, now: Instant) {
        if self.router.back().is_some() {
            self.follow_route(now);
        } else {
            self.set_warning("No previous page");
        }
    }

    /// Follow the current slide's link on the banner.
    pub fn activate_slide(&mut self, id: CarouselId, now: Instant) {
        let link = self.carousel(id).current().and_then(|s| s.link.clone());
        match link {
            Some(link) => self.navigate(&link, now),
            None => self.set_status("This slide has no link"),
        }
    }

    fn follow_route(&mut self, now: Instant) {
        let path = self.router.current().to_string();
        if path == "/recruitment" {
            self.news_tabs.select("recruitment");
            self.sync_scroll();
        }
        match Section::for_path(&path) {
            Some(section) => {
                self.scroll_to_section(section, now);
                self.set_status(format!("Viewing {}", section.label()));
            }
            None => self.set_warning(format!("No page at {path}")),
        }
    }

    // ── Theme & layout ───────────────────────────────────────────────

    pub fn toggle_theme(&mut self, now: Instant) {
        let mode = self.env.theme.toggle(now);
        info!(%mode, "theme toggled");
        self.set_status(format!("Switched to {mode} theme"));
    }

    pub fn toggle_sidebar(&mut self) {
        let mut sidebar = self.sidebar.get_mut();
        let was_open = sidebar.is_open();
        sidebar.toggle();
        let blocked = !was_open && !sidebar.is_open();
        drop(sidebar);
        if blocked {
            self.set_status("Menu is only available on narrow screens");
        }
    }

    /// Terminal resized. Geometry updates at once; the viewport signal
    /// (band, sidebar) is throttled.
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.screen = Rect::new(0, 0, width, height);
        self.sync_scroll();
        let px = page::cols_to_px(width);
        if self.resize_throttle.ready(now) {
            self.pending_viewport = None;
            self.apply_viewport(px);
        } else {
            self.pending_viewport = Some(px);
        }
    }

    fn apply_viewport(&mut self, px: u32) {
        if self.env.viewport.set(px) {
            debug!(px, band = %self.sidebar.get().band(), "viewport");
        }
    }

    // ── Status ───────────────────────────────────────────────────────

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{app_at, app_with_size};
    use campus_core::theme::ThemeMode;
    use std::time::Duration;

    #[test]
    fn section_cycle() {
        assert_eq!(Section::Banner.next(), Section::About);
        assert_eq!(Section::Footer.next(), Section::Banner);
        assert_eq!(Section::Banner.prev(), Section::Footer);
        for (i, s) in Section::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Section::from_index(i), Some(*s));
        }
        assert!(Section::from_index(Section::ALL.len()).is_none());
    }

    #[test]
    fn detail_paths_land_on_listing() {
        assert_eq!(Section::for_path("/news/award2024"), Some(Section::News));
        assert_eq!(Section::for_path("/services/library"), Some(Section::Services));
        assert_eq!(Section::for_path("/"), Some(Section::Banner));
        assert_eq!(Section::for_path("/login"), None);
    }

    #[test]
    fn every_nav_path_has_an_anchor() {
        let site = SiteContent::default_site();
        for item in &site.nav {
            assert!(Section::for_path(&item.path).is_some(), "{}", item.path);
        }
    }

    #[test]
    fn navigate_scrolls_to_anchor_and_back_returns() {
        let (mut app, t0) = app_at();
        app.navigate("/services", t0);
        assert_eq!(app.focus, Section::Services);
        let top = app.page_layout().placement(Section::Services).map(|p| p.top);
        assert!(app.scroll_row() > 0);
        assert!(Some(app.scroll_row()) <= top);

        app.back(t0);
        assert_eq!(app.router.current(), "/");
        assert_eq!(app.scroll_row(), 0);
    }

    #[test]
    fn recruitment_selects_news_tab() {
        let (mut app, t0) = app_at();
        app.navigate("/recruitment", t0);
        assert_eq!(app.news_tabs.active_id(), "recruitment");
        assert!(app.visible_news().iter().all(|n| n.category == "recruitment"));
    }

    #[test]
    fn scrolling_clamps_and_shrinks_navbar() {
        let (mut app, t0) = app_at();
        assert_eq!(app.chrome().navbar.height, 3);
        app.scroll_by(2, t0);
        assert!(app.scroll().navbar_scrolled());
        assert_eq!(app.chrome().navbar.height, 1);
        assert!(app.scroll_activity.is_active(t0));

        app.scroll_by(10_000, t0);
        let s = app.scroll();
        assert_eq!(s.offset, s.max_offset());
        assert_eq!(s.progress(), 100.0);

        app.back_to_top(t0);
        assert_eq!(app.scroll().offset, 0);
    }

    #[test]
    fn service_query_filters_and_relayouts() {
        let (mut app, _) = app_at();
        let all = app.visible_services().len();
        app.set_service_query("library");
        let some = app.visible_services().len();
        assert!(some < all);
        app.set_service_query("zzzz-no-match");
        assert!(app.visible_services().is_empty());
    }

    #[test]
    fn hover_pauses_only_the_hovered_carousel() {
        let (mut app, t0) = app_at();
        app.set_hover(Some(CarouselId::Banner), t0);
        assert!(app.banner.is_paused());
        assert!(!app.highlights.is_paused());
        app.set_hover(Some(CarouselId::Highlights), t0);
        assert!(!app.banner.is_paused());
        assert!(app.highlights.is_paused());
        app.set_hover(None, t0);
        assert!(!app.highlights.is_paused());
    }

    #[test]
    fn drag_swipe_advances_banner() {
        let (mut app, t0) = app_at();
        app.begin_drag(CarouselId::Banner, 400.0, t0);
        app.drag_to(300.0);
        let change = app.end_drag(t0);
        assert!(change.is_some());
        assert_eq!(app.banner.index(), 1);
        assert!(app.drag.is_none());
    }

    #[test]
    fn lost_release_does_not_stall_the_other_carousel() {
        let (mut app, t0) = app_at();
        app.begin_drag(CarouselId::Banner, 400.0, t0);
        app.begin_drag(CarouselId::Highlights, 300.0, t0);
        app.end_drag(t0 + Duration::from_millis(10));
        assert!(!app.banner.is_paused());
        assert!(app.drag.is_none());

        let change = app.banner.next(t0 + Duration::from_millis(20));
        assert!(change.is_some());
        assert_eq!(app.banner.index(), 1);
    }

    #[test]
    fn specialties_open_on_the_full_list() {
        let (app, _) = app_at();
        assert_eq!(app.specialty_tabs.active_id(), "all");
        let ids: Vec<&str> = app.visible_specialties().iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<&str> = app.site.specialties.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn sidebar_menu_only_on_narrow_terminal() {
        let (mut wide, t0) = app_at();
        wide.toggle_sidebar();
        assert!(!wide.sidebar.get().is_open());

        let mut narrow = app_with_size(40, 30, t0);
        narrow.toggle_sidebar();
        assert!(narrow.sidebar.get().is_open());
        // Widening closes the menu once the throttle lets it through.
        narrow.resize(120, 30, t0 + std::time::Duration::from_millis(500));
        assert!(!narrow.sidebar.get().is_open());
    }

    #[test]
    fn resize_throttles_viewport_signal() {
        let (mut app, t0) = app_at();
        app.resize(60, 30, t0);
        assert_eq!(app.env.viewport.get(), 480);
        app.resize(70, 30, t0 + std::time::Duration::from_millis(50));
        assert_eq!(app.env.viewport.get(), 480);
        assert_eq!(app.pending_viewport, Some(560));
        app.tick(t0 + std::time::Duration::from_millis(250));
        assert_eq!(app.env.viewport.get(), 560);
        assert_eq!(app.pending_viewport, None);
    }

    #[test]
    fn theme_toggle_flips_palette() {
        let (mut app, t0) = app_at();
        let before = app.palette();
        app.toggle_theme(t0);
        assert_eq!(app.env.theme.mode(), ThemeMode::Dark);
        assert_ne!(app.palette(), before);
    }
}
