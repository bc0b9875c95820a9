//! Light/dark theme with pluggable persistence.
//!
//! The stored preference wins over the system preference at start-up.
//! Toggling persists the new mode, notifies subscribers and opens a short
//! animation window the front end uses to soften the switch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StoreError, UnknownTheme};
use crate::signal::{Signal, Subscription};

/// Key the preference is stored under.
pub const STORAGE_KEY: &str = "theme";

/// Length of the toggle animation.
pub const TOGGLE_ANIMATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// External key-value persistence for preferences.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme, its persistence and change notification.
pub struct ThemeContext {
    mode: Signal<ThemeMode>,
    store: Box<dyn ThemeStore>,
    animating_until: Option<Instant>,
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode.get())
            .field("animating_until", &self.animating_until)
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    /// Resolve the initial mode: a parseable stored value, else the system
    /// preference.
    pub fn init(store: Box<dyn ThemeStore>, prefers_dark: bool) -> Self {
        let stored = store.get(STORAGE_KEY);
        let mode = match stored.as_deref().map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                warn!(error = %e, "ignoring stored theme");
                system_mode(prefers_dark)
            }
            None => system_mode(prefers_dark),
        };
        debug!(%mode, stored = stored.is_some(), "theme resolved");
        Self {
            mode: Signal::new(mode),
            store,
            animating_until: None,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Flip the mode. A failed write is logged and the in-memory mode still
    /// changes.
    pub fn toggle(&mut self, now: Instant) -> ThemeMode {
        let next = self.mode.get().toggled();
        self.apply(next, now);
        next
    }

    pub fn set_mode(&mut self, mode: ThemeMode, now: Instant) {
        if mode != self.mode.get() {
            self.apply(mode, now);
        }
    }

    pub fn subscribe(&self, handler: impl FnMut(&ThemeMode) + 'static) -> Subscription {
        self.mode.subscribe(handler)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animating_until.is_some_and(|until| now < until)
    }

    fn apply(&mut self, mode: ThemeMode, now: Instant) {
        if let Err(e) = self.store.set(STORAGE_KEY, mode.as_str()) {
            warn!(error = %e, %mode, "failed to persist theme");
        }
        self.animating_until = Some(now + TOGGLE_ANIMATION);
        self.mode.set(mode);
        debug!(%mode, "theme changed");
    }
}

fn system_mode(prefers_dark: bool) -> ThemeMode {
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Encode("read-only".into()))
        }
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light\n".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn stored_value_beats_system_preference() {
        let ctx = ThemeContext::init(Box::new(MemoryStore::with(STORAGE_KEY, "light")), true);
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn falls_back_to_system_preference() {
        let ctx = ThemeContext::init(Box::new(MemoryStore::new()), true);
        assert_eq!(ctx.mode(), ThemeMode::Dark);
        let ctx = ThemeContext::init(Box::new(MemoryStore::with(STORAGE_KEY, "bogus")), false);
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_notifies() {
        let store = MemoryStore::new();
        let mut ctx = ThemeContext::init(Box::new(store.clone()), false);
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = Rc::clone(&hits);
            ctx.subscribe(move |_| hits.set(hits.get() + 1))
        };

        let t0 = Instant::now();
        assert_eq!(ctx.toggle(t0), ThemeMode::Dark);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(hits.get(), 1);

        assert!(ctx.is_animating(t0 + Duration::from_millis(599)));
        assert!(!ctx.is_animating(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn set_mode_same_value_is_noop() {
        let store = MemoryStore::new();
        let mut ctx = ThemeContext::init(Box::new(store.clone()), false);
        ctx.set_mode(ThemeMode::Light, Instant::now());
        assert_eq!(store.get(STORAGE_KEY), None);
        assert!(!ctx.is_animating(Instant::now()));
    }

    #[test]
    fn failed_persist_still_toggles() {
        let mut ctx = ThemeContext::init(Box::new(FailingStore), false);
        ctx.toggle(Instant::now());
        assert_eq!(ctx.mode(), ThemeMode::Dark);
    }
}
