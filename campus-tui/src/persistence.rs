//! App state persistence: JSON save/load across restarts.
//!
//! The same file backs the [`ThemeStore`] preference map, so the theme
//! written on toggle and the session state written on exit share one
//! document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use campus_core::theme::ThemeStore;
use campus_core::StoreError;

use crate::app::{AppState, Overlay, Section};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Key-value preferences (the theme lives under `"theme"`).
    pub prefs: BTreeMap<String, String>,
    pub focus: Section,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            prefs: BTreeMap::new(),
            focus: Section::Banner,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    write(path, state)?;
    Ok(())
}

fn write(path: &Path, state: &PersistedState) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(state).map_err(|e| StoreError::Encode(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Session state from AppState, keeping the preferences already on disk.
pub fn extract(app: &AppState, on_disk: PersistedState) -> PersistedState {
    PersistedState {
        prefs: on_disk.prefs,
        focus: app.focus,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted session state to AppState.
pub fn apply(app: &mut AppState, state: &PersistedState) {
    app.focus = state.focus;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}

/// Preference store backed by the state file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        load(&self.path).prefs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut state = load(&self.path);
        state.prefs.insert(key.to_string(), value.to_string());
        write(&self.path, &state)
    }
}
