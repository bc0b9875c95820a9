//! In-process router with history.

use tracing::debug;

use crate::content::NavItem;

/// Oldest entries are dropped past this many.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: normalize(&start.into()),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Go to `path`. Returns false when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = normalize(path);
        if path == self.current {
            return false;
        }
        debug!(from = %self.current, to = %path, "navigate");
        let previous = std::mem::replace(&mut self.current, path);
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(previous);
        true
    }

    /// Return to the previous path, if any.
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Exact match only: `/about` is not active on `/about/team`.
    pub fn is_active(&self, path: &str) -> bool {
        normalize(path) == self.current
    }

    /// Index of the active entry in `items`.
    pub fn active_index(&self, items: &[NavItem]) -> Option<usize> {
        items.iter().position(|item| self.is_active(&item.path))
    }
}

/// Leading slash, no trailing slash (except for the root).
fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
