//! Media slots for every reference on the page.
//!
//! Terminals cannot show images, so a "loaded" reference is rendered as a
//! labelled frame and a failed one as the placeholder frame.

use std::collections::HashMap;
use std::path::PathBuf;

use campus_core::media::{Media, MediaCatalog, MediaState, StaticCatalog};
use tracing::info;

/// Resolves references against files under an asset directory.
#[derive(Debug, Clone)]
pub struct AssetDirCatalog {
    root: PathBuf,
}

impl AssetDirCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MediaCatalog for AssetDirCatalog {
    fn can_load(&self, src: &str) -> bool {
        let relative = src.trim_start_matches('/');
        !relative.is_empty() && !relative.contains("..") && self.root.join(relative).is_file()
    }
}

pub struct MediaLibrary {
    slots: HashMap<String, Media>,
    catalog: Box<dyn MediaCatalog>,
}

impl std::fmt::Debug for MediaLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaLibrary")
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl MediaLibrary {
    pub fn new<'a>(refs: impl IntoIterator<Item = &'a str>, catalog: Box<dyn MediaCatalog>) -> Self {
        let slots = refs
            .into_iter()
            .map(|src| (src.to_string(), Media::new(src)))
            .collect();
        Self { slots, catalog }
    }

    /// Every reference loads: used when no asset directory is configured.
    pub fn trusting<'a>(refs: impl IntoIterator<Item = &'a str> + Clone) -> Self {
        let catalog = StaticCatalog::new(refs.clone());
        Self::new(refs, Box::new(catalog))
    }

    /// Settle every slot still loading. Returns how many fell back.
    pub fn settle(&mut self) -> usize {
        let mut fallbacks = 0;
        let mut settled = 0;
        for media in self.slots.values_mut() {
            if media.state().is_loading() {
                settled += 1;
                if *media.load(self.catalog.as_ref()) == MediaState::Fallback {
                    fallbacks += 1;
                }
            }
        }
        if settled > 0 {
            info!(settled, fallbacks, "media resolved");
        }
        fallbacks
    }

    /// State of `src`. Unknown references count as failed loads.
    pub fn state(&self, src: &str) -> MediaState {
        self.slots
            .get(src)
            .map(|m| m.state().clone())
            .unwrap_or(MediaState::Fallback)
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|m| m.state().is_loading())
    }
}
