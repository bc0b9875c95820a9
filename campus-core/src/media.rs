//! Media references with a fixed placeholder on load failure.

use std::collections::HashSet;

/// Shown in place of any media that fails to load.
pub const PLACEHOLDER: &str = "/next.svg";

/// Decides whether a media reference can be loaded.
pub trait MediaCatalog {
    fn can_load(&self, src: &str) -> bool;
}

/// Catalog backed by a fixed set of known references.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    known: HashSet<String>,
}

impl StaticCatalog {
    pub fn new<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known.into_iter().map(Into::into).collect(),
        }
    }
}

impl MediaCatalog for StaticCatalog {
    fn can_load(&self, src: &str) -> bool {
        self.known.contains(src)
    }
}

/// Loading status driving skeleton rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaState {
    Loading,
    Loaded(String),
    Fallback,
}

impl MediaState {
    /// Reference to display for this state, `None` while loading.
    pub fn source(&self) -> Option<&str> {
        match self {
            MediaState::Loading => None,
            MediaState::Loaded(src) => Some(src),
            MediaState::Fallback => Some(PLACEHOLDER),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MediaState::Loading)
    }
}

/// One media slot: starts as loading and settles exactly once.
#[derive(Debug, Clone)]
pub struct Media {
    src: String,
    state: MediaState,
}

impl Media {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            state: MediaState::Loading,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn state(&self) -> &MediaState {
        &self.state
    }

    /// Settle the load against `catalog`. Once settled the result sticks.
    pub fn load(&mut self, catalog: &dyn MediaCatalog) -> &MediaState {
        if self.state.is_loading() {
            self.state = if catalog.can_load(&self.src) {
                MediaState::Loaded(self.src.clone())
            } else {
                tracing::debug!(src = %self.src, "media fallback");
                MediaState::Fallback
            };
        }
        &self.state
    }

    /// The source, or the placeholder when it cannot be loaded. No retry.
    pub fn resolve<'a>(src: &'a str, catalog: &dyn MediaCatalog) -> &'a str {
        if catalog.can_load(src) {
            src
        } else {
            PLACEHOLDER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_and_falls_back() {
        let catalog = StaticCatalog::new(["/img/banner-1.jpg"]);
        assert_eq!(Media::resolve("/img/banner-1.jpg", &catalog), "/img/banner-1.jpg");
        assert_eq!(Media::resolve("/img/missing.jpg", &catalog), PLACEHOLDER);
    }

    #[test]
    fn load_settles_once() {
        let good = StaticCatalog::new(["/a.png"]);
        let empty = StaticCatalog::default();

        let mut m = Media::new("/a.png");
        assert!(m.state().is_loading());
        assert_eq!(m.state().source(), None);
        assert_eq!(m.load(&good), &MediaState::Loaded("/a.png".into()));
        // A later failing check does not undo a successful load.
        assert_eq!(m.load(&empty).source(), Some("/a.png"));

        let mut broken = Media::new("/b.png");
        assert_eq!(broken.load(&empty), &MediaState::Fallback);
        // No retry even once the reference becomes loadable.
        let recovered = StaticCatalog::new(["/b.png"]);
        assert_eq!(broken.load(&recovered).source(), Some(PLACEHOLDER));
    }
}
