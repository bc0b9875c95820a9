//! Portal configuration: TOML with serde defaults, CLI overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use campus_core::carousel::CarouselConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Event poll timeout, i.e. the frame tick.
    pub tick_rate_ms: u64,
    pub banner_interval_ms: u64,
    pub news_interval_ms: u64,
    /// Minimum swipe travel in px (one column counts as 8 px).
    pub swipe_threshold_px: f32,
    /// Replacement site content (TOML).
    pub content: Option<PathBuf>,
    /// Directory media references are resolved against.
    pub assets_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    /// System colour-scheme preference used when no theme is stored.
    pub prefers_dark: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            banner_interval_ms: 6000,
            news_interval_ms: 5000,
            swipe_threshold_px: 80.0,
            content: None,
            assets_dir: None,
            log_dir: None,
            prefers_dark: false,
        }
    }
}

impl PortalConfig {
    /// `<config_dir>/campus-portal`.
    pub fn app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campus-portal")
    }

    pub fn default_path() -> PathBuf {
        Self::app_dir().join("config.toml")
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)
                .with_context(|| format!("invalid config {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("read config {}", path.display())),
        }
    }

    /// Dark preference from the config flag or the terminal's `COLORFGBG`.
    pub fn system_prefers_dark(&self) -> bool {
        self.prefers_dark
            || std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| dark_background(&v))
                .unwrap_or(false)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| Self::app_dir().join("logs"))
    }

    pub fn banner(&self) -> CarouselConfig {
        CarouselConfig::banner()
            .with_interval(Duration::from_millis(self.banner_interval_ms))
            .with_swipe_threshold(self.swipe_threshold_px)
    }

    pub fn news(&self) -> CarouselConfig {
        CarouselConfig::news()
            .with_interval(Duration::from_millis(self.news_interval_ms))
            .with_swipe_threshold(self.swipe_threshold_px)
    }
}

/// Reads `fg;bg` (or `fg;default;bg`). ANSI colours 0-6 and 8 are dark
/// backgrounds.
pub fn dark_background(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = PortalConfig::from_toml("banner_interval_ms = 3000\nprefers_dark = true\n").unwrap();
        assert_eq!(cfg.banner_interval_ms, 3000);
        assert!(cfg.prefers_dark);
        assert_eq!(cfg.news_interval_ms, 5000);
        assert_eq!(cfg.banner().interval, Duration::from_millis(3000));
        assert_eq!(cfg.banner().transition, Duration::from_millis(500));
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = PortalConfig::load(Path::new("/nonexistent/campus/config.toml")).unwrap();
        assert_eq!(cfg, PortalConfig::default());
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(PortalConfig::load(&path).is_err());
    }

    #[test]
    fn zero_tick_rate_is_clamped() {
        let cfg = PortalConfig {
            tick_rate_ms: 0,
            ..PortalConfig::default()
        };
        assert_eq!(cfg.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn colorfgbg_background_hint() {
        assert_eq!(dark_background("15;0"), Some(true));
        assert_eq!(dark_background("0;15"), Some(false));
        assert_eq!(dark_background("15;default;8"), Some(true));
        assert_eq!(dark_background("0;default;7"), Some(false));
        assert_eq!(dark_background("default"), None);
        assert_eq!(dark_background(""), None);
    }
}
