//! Category/tab filters over literal content lists.
//!
//! Filtering is pure and order preserving: the visible subset is recomputed
//! from the full list on every state change.

use crate::content::Tab;

/// Sentinel category meaning "no filtering applied".
pub const ALL: &str = "all";

/// An item that belongs to exactly one category and can be text-searched.
pub trait Filterable {
    fn category(&self) -> &str;

    /// Fields matched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;
}

/// Selected category plus optional free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub category: Option<String>,
    pub text: String,
}

impl Query {
    /// Build a query from a selected category id; the sentinel `all` clears it.
    pub fn category(id: &str) -> Self {
        Self {
            category: (id != ALL).then(|| id.to_string()),
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| item.category() == c);
        category_ok && matches_text(item, &self.text)
    }
}

/// Case-insensitive substring match against any search field.
/// An empty (or all-whitespace) query matches everything.
pub fn matches_text<T: Filterable>(item: &T, text: &str) -> bool {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Visible subset of `items` for `query`, in original order.
pub fn apply<'a, T: Filterable>(items: &'a [T], query: &Query) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

/// Ordered tab strip with one active tab. Index 0 is the `all` tab when
/// built with [`TabSet::with_all`].
#[derive(Debug, Clone)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabSet {
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self { tabs, active: 0 }
    }

    /// Prepend the sentinel `all` tab with the given label.
    pub fn with_all(all_label: &str, tabs: &[Tab]) -> Self {
        let mut list = Vec::with_capacity(tabs.len() + 1);
        list.push(Tab::new(ALL, all_label));
        list.extend_from_slice(tabs);
        Self::new(list)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_id(&self) -> &str {
        self.active().map(|t| t.id.as_str()).unwrap_or(ALL)
    }

    /// Select a tab by id. Returns false (and keeps the selection) for
    /// unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|t| t.id == id) {
            Some(i) => {
                self.active = i;
                true
            }
            None => false,
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.tabs.is_empty() {
            let len = self.tabs.len();
            self.active = (self.active + len - 1) % len;
        }
    }

    /// Query selecting the active tab's category.
    pub fn query(&self) -> Query {
        Query::category(self.active_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn all_returns_full_list_in_order() {
        let site = SiteContent::default_site();
        let visible = apply(&site.services, &Query::category(ALL));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<&str> = site.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn category_keeps_only_matches_in_order() {
        let site = SiteContent::default_site();
        let visible = apply(&site.services, &Query::category("academic"));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "7", "8"]);
    }

    #[test]
    fn text_search_is_case_insensitive() {
        let site = SiteContent::default_site();
        let visible = apply(&site.services, &Query::category(ALL).with_text("LIBRARY"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Library");
    }

    #[test]
    fn text_search_matches_description() {
        let site = SiteContent::default_site();
        let visible = apply(&site.services, &Query::category(ALL).with_text("vaccin"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "6");
    }

    #[test]
    fn combined_filter_is_intersection() {
        let site = SiteContent::default_site();
        // "centre" hits Career, Medical, Computer and Counselling centres.
        let support = apply(&site.services, &Query::category("support").with_text("centre"));
        let ids: Vec<&str> = support.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "9"]);
    }

    #[test]
    fn no_results_is_empty_not_error() {
        let site = SiteContent::default_site();
        let visible = apply(&site.services, &Query::category("academic").with_text("swimming"));
        assert!(visible.is_empty());
    }

    #[test]
    fn tabset_with_all_selects_sentinel_first() {
        let site = SiteContent::default_site();
        let tabs = TabSet::with_all("All", &site.news_categories);
        assert_eq!(tabs.active_id(), ALL);
        assert_eq!(tabs.tabs().len(), site.news_categories.len() + 1);
        assert_eq!(tabs.query(), Query::default());
    }

    #[test]
    fn tabset_select_and_cycle() {
        let mut tabs = TabSet::new(vec![Tab::new("a", "A"), Tab::new("b", "B"), Tab::new("c", "C")]);
        assert!(tabs.select("c"));
        assert_eq!(tabs.active_index(), 2);
        tabs.next();
        assert_eq!(tabs.active_id(), "a");
        tabs.prev();
        assert_eq!(tabs.active_id(), "c");
        assert!(!tabs.select("zzz"));
        assert_eq!(tabs.active_id(), "c");
    }

    #[test]
    fn empty_tabset_is_all() {
        let mut tabs = TabSet::new(Vec::new());
        tabs.next();
        tabs.prev();
        assert_eq!(tabs.active_id(), ALL);
    }
}
