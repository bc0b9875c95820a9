//! Content tooling shared by the `campus` binary and its tests. Every
//! command writes its report to a caller-supplied writer.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use campus_core::content::SiteContent;
use campus_core::filter::{self, Query, TabSet, ALL};
use campus_core::layout::Band;

/// Output format for `dump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

/// Built-in content, or the file at `path`.
pub fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => {
            let site = SiteContent::from_file(path)?;
            info!(path = %path.display(), "content loaded");
            Ok(site)
        }
        None => Ok(SiteContent::default_site()),
    }
}

/// Validate content and summarise what it holds.
pub fn check(site: &SiteContent, out: &mut impl Write) -> Result<()> {
    site.validate().context("content is invalid")?;
    writeln!(out, "{}: ok", site.title)?;
    writeln!(out, "  nav items     {:>3}", site.nav.len())?;
    writeln!(out, "  banner slides {:>3}", site.banner.len())?;
    writeln!(out, "  highlights    {:>3}", site.highlights.len())?;
    writeln!(out, "  departments   {:>3}", site.departments.len())?;
    writeln!(out, "  news          {:>3}", site.news.len())?;
    writeln!(out, "  specialties   {:>3}", site.specialties.len())?;
    writeln!(out, "  services      {:>3}", site.services.len())?;
    let refs = site.media_refs();
    writeln!(out, "  media refs    {:>3}", refs.len())?;
    for src in refs {
        writeln!(out, "    {src}")?;
    }
    Ok(())
}

pub fn dump(site: &SiteContent, format: Format, out: &mut impl Write) -> Result<()> {
    let text = match format {
        Format::Toml => site.to_toml()?,
        Format::Json => site.to_json()?,
    };
    writeln!(out, "{text}")?;
    Ok(())
}

fn category_query(tabs: &TabSet, category: Option<&str>) -> Result<Query> {
    let id = category.unwrap_or(ALL);
    if !tabs.tabs().iter().any(|t| t.id == id) {
        let known: Vec<&str> = tabs.tabs().iter().map(|t| t.id.as_str()).collect();
        bail!("unknown category '{id}' (known: {})", known.join(", "));
    }
    Ok(Query::category(id))
}

/// Services matching a category tab and a free-text query.
pub fn services(
    site: &SiteContent,
    category: Option<&str>,
    text: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let tabs = TabSet::with_all("All services", &site.service_categories);
    let query = category_query(&tabs, category)?.with_text(text.unwrap_or_default());
    let matches = filter::apply(&site.services, &query);
    debug!(count = matches.len(), "services filtered");
    for s in &matches {
        let star = if s.featured { "*" } else { " " };
        writeln!(
            out,
            "{star} {:<20} {:<18} {}",
            s.title,
            site.service_category_label(&s.category),
            s.link
        )?;
    }
    writeln!(out, "{} of {} services", matches.len(), site.services.len())?;
    Ok(())
}

/// News items in a category, newest first as listed.
pub fn news(site: &SiteContent, category: Option<&str>, out: &mut impl Write) -> Result<()> {
    let tabs = TabSet::with_all("All news", &site.news_categories);
    let query = category_query(&tabs, category)?;
    let matches = filter::apply(&site.news, &query);
    for n in &matches {
        let flag = if n.important { "!" } else { " " };
        writeln!(out, "{flag} {}  {:<12} {}", n.date, n.category, n.title)?;
    }
    writeln!(out, "{} of {} items", matches.len(), site.news.len())?;
    Ok(())
}

/// Layout band for a viewport width in px.
pub fn band(width: u32, out: &mut impl Write) -> Result<()> {
    let band = Band::from_width(width);
    writeln!(out, "{width}px -> {band}")?;
    writeln!(out, "  min width       {}px", band.min_width())?;
    writeln!(out, "  grid columns    {}", band.columns())?;
    writeln!(out, "  padding         {}", band.container_padding())?;
    writeln!(out, "  off-canvas menu {}", if band.is_narrow() { "yes" } else { "no" })?;
    if band.is_narrow() {
        writeln!(out, "  menu width      {}px", band.sidebar_width())?;
    }
    Ok(())
}
