//! Site content: immutable literal records displayed by the portal.
//!
//! Content ships built in (`SiteContent::default_site`) and can be replaced
//! by a TOML file with the same shape. List order is display order.

mod defaults;

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::filter::{Filterable, ALL};

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Background media; `None` renders the gradient background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A filter tab or category: `{id, label, icon?, color?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            color: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Primary navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Mission card shown under the organisation introduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
}

/// Philosophy card (mission, vision, motto, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// Content behind the about section's four tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub overview: String,
    pub timeline: Vec<TimelineEntry>,
    pub principles: Vec<Principle>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub summary: String,
    pub media: String,
    #[serde(default)]
    pub important: bool,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    pub name: String,
    pub description: String,
    pub media: String,
    pub link: String,
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub link: String,
    #[serde(default)]
    pub featured: bool,
}

impl Filterable for NewsItem {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.summary]
    }
}

impl Filterable for Specialty {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

impl Filterable for Service {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

/// The complete content of the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub tagline: String,
    pub nav: Vec<NavItem>,
    /// Hero carousel at the top of the home page.
    pub banner: Vec<Slide>,
    pub intro: String,
    pub pillars: Vec<Pillar>,
    pub departments: Vec<Department>,
    pub about: AboutContent,
    /// Campus highlights carousel shown above the news grid.
    pub highlights: Vec<Slide>,
    pub news_categories: Vec<Tab>,
    pub news: Vec<NewsItem>,
    pub specialty_categories: Vec<Tab>,
    pub specialties: Vec<Specialty>,
    pub service_categories: Vec<Tab>,
    pub services: Vec<Service>,
    pub footer: String,
}

impl SiteContent {
    /// Built-in content.
    pub fn default_site() -> Self {
        defaults::site()
    }

    /// Load content from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse content from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ContentError> {
        toml::to_string_pretty(self).map_err(|e| ContentError::Serialize(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ContentError> {
        serde_json::to_string_pretty(self).map_err(|e| ContentError::Serialize(e.to_string()))
    }

    /// Check id uniqueness and category references.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.nav.is_empty() {
            return Err(ContentError::Empty { list: "nav" });
        }

        unique("nav", self.nav.iter().map(|n| n.path.as_str()))?;
        unique("banner", self.banner.iter().map(|s| s.id.as_str()))?;
        unique("highlights", self.highlights.iter().map(|s| s.id.as_str()))?;

        check_tabs("news_categories", &self.news_categories)?;
        check_tabs("specialty_categories", &self.specialty_categories)?;
        check_tabs("service_categories", &self.service_categories)?;

        unique("news", self.news.iter().map(|n| n.id.as_str()))?;
        unique("specialties", self.specialties.iter().map(|s| s.id.as_str()))?;
        unique("services", self.services.iter().map(|s| s.id.as_str()))?;

        references("news", &self.news_categories, self.news.iter().map(|n| (&n.id, &n.category)))?;
        references(
            "specialties",
            &self.specialty_categories,
            self.specialties.iter().map(|s| (&s.id, &s.category)),
        )?;
        references(
            "services",
            &self.service_categories,
            self.services.iter().map(|s| (&s.id, &s.category)),
        )?;

        Ok(())
    }

    /// Services flagged as featured, in display order.
    pub fn featured_services(&self) -> Vec<&Service> {
        self.services.iter().filter(|s| s.featured).collect()
    }

    /// Every media reference in display order, without duplicates.
    pub fn media_refs(&self) -> Vec<&str> {
        let slides = self.banner.iter().chain(&self.highlights);
        let refs = slides
            .filter_map(|s| s.media.as_deref())
            .chain(self.news.iter().map(|n| n.media.as_str()))
            .chain(self.specialties.iter().map(|s| s.media.as_str()));
        let mut seen = HashSet::new();
        refs.filter(|r| seen.insert(*r)).collect()
    }

    /// Label of a service category, or the generic fallback.
    pub fn service_category_label(&self, id: &str) -> &str {
        self.service_categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.label.as_str())
            .unwrap_or("Other services")
    }
}

fn unique<'a>(list: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                list,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_tabs(list: &'static str, tabs: &[Tab]) -> Result<(), ContentError> {
    if let Some(tab) = tabs.iter().find(|t| t.id == ALL) {
        return Err(ContentError::DuplicateId {
            list,
            id: tab.id.clone(),
        });
    }
    unique(list, tabs.iter().map(|t| t.id.as_str()))
}

fn references<'a>(
    list: &'static str,
    tabs: &[Tab],
    entries: impl Iterator<Item = (&'a String, &'a String)>,
) -> Result<(), ContentError> {
    for (id, category) in entries {
        if !tabs.iter().any(|t| &t.id == category) {
            return Err(ContentError::UnknownCategory {
                list,
                id: id.clone(),
                category: category.clone(),
            });
        }
    }
    Ok(())
}
