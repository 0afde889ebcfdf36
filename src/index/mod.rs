//! In-memory search index
//!
//! Holds every searchable [`SearchItem`] for a session: the static catalog
//! seeded at start-up plus whatever the remote collection contributes later.
//! Items are only ever appended; [`SearchIndex::reinitialize`] is the one way
//! to drop them.

pub mod catalog;
pub mod remote;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ranking::{self, ScoredItem, ScoringProfile, ScoringStrategy};

pub use remote::{HttpCollection, PendingFetch, RemoteCollection, RemoteRecord};

/// Icon used when an item does not carry its own
pub const FALLBACK_IMAGE: &str = "assets/img/default-app.png";

/// A single searchable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub path: String,
    pub img: String,
}

impl SearchItem {
    /// Build an item, lowercasing and de-duplicating keywords.
    ///
    /// Keyword order is preserved; blank tokens are dropped.
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        keywords: I,
        path: impl Into<String>,
        img: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect();

        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            keywords,
            path: path.into(),
            img: img.into(),
        }
    }
}

/// Join a base URL and a relative target with exactly one slash between them
pub fn join_url(base: &str, target: &str) -> String {
    let base = base.trim_end_matches('/');
    let target = target.trim_start_matches('/');
    format!("{}/{}", base, target)
}

/// The session's search index
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    ids: HashSet<String>,
    base_url: String,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the index and seed it with the static catalog.
    ///
    /// Catalog targets are resolved against `base_url`, so calling this twice
    /// with the same URL yields the same index.
    pub fn initialize(&mut self, base_url: &str) {
        self.items.clear();
        self.ids.clear();
        self.base_url = base_url.trim_end_matches('/').to_string();

        for entry in catalog::ENTRIES {
            let item = entry.to_item(&self.base_url);
            self.insert(item);
        }

        info!(
            items = self.items.len(),
            base_url = %self.base_url,
            "Search index initialized from static catalog"
        );
    }

    /// Full reset: drops merged remote items and reseeds the catalog
    pub fn reinitialize(&mut self, base_url: &str) {
        debug!(dropped = self.items.len(), "Reinitializing search index");
        self.initialize(base_url);
    }

    /// Append an item unless its id is already present.
    ///
    /// Returns `true` when the item was added.
    pub fn insert(&mut self, item: SearchItem) -> bool {
        if self.ids.contains(&item.id) {
            debug!(id = %item.id, "Skipping duplicate item");
            return false;
        }
        self.ids.insert(item.id.clone());
        self.items.push(item);
        true
    }

    /// Merge records from the remote collection, first write wins.
    ///
    /// Records without an id or name are ignored. Returns how many items
    /// were appended.
    pub fn merge_remote<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = RemoteRecord>,
    {
        let mut added = 0;
        for record in records {
            if record.id.trim().is_empty() || record.name.trim().is_empty() {
                debug!(id = %record.id, "Ignoring remote record without id or name");
                continue;
            }
            if self.insert(record.into_item(&self.base_url)) {
                added += 1;
            }
        }
        added
    }

    /// Rank items against `query` with the given profile
    pub fn search(&self, query: &str, profile: ScoringProfile, limit: usize) -> Vec<ScoredItem<'_>> {
        self.search_with(query, profile.strategy(), limit)
    }

    /// Rank items against `query` with an arbitrary strategy
    pub fn search_with<S>(&self, query: &str, strategy: &S, limit: usize) -> Vec<ScoredItem<'_>>
    where
        S: ScoringStrategy + ?Sized,
    {
        ranking::rank(&self.items, query, strategy, limit)
    }

    pub fn get(&self, id: &str) -> Option<&SearchItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://hub.example.com";

    fn record(id: &str, name: &str) -> RemoteRecord {
        RemoteRecord {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keywords_are_lowercased_and_deduplicated() {
        let item = SearchItem::new("x", "X", "Tools", ["Foo", "foo", " BAR ", ""], "/x", "");
        assert_eq!(item.keywords, vec!["foo", "bar"]);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.io/", "/apps.html"), "https://a.io/apps.html");
        assert_eq!(join_url("https://a.io", "apps.html"), "https://a.io/apps.html");
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut first = SearchIndex::new();
        first.initialize(BASE);
        let mut second = SearchIndex::new();
        second.initialize(BASE);
        second.initialize(BASE);

        assert!(!first.is_empty());
        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn test_initialize_resolves_paths() {
        let mut index = SearchIndex::new();
        index.initialize("https://hub.example.com/");
        for item in index.items() {
            assert!(item.path.starts_with("https://hub.example.com/"), "{}", item.path);
            assert!(!item.path.contains(".com//"), "{}", item.path);
        }
    }

    #[test]
    fn test_merge_skips_existing_ids() {
        let mut index = SearchIndex::new();
        index.initialize(BASE);
        let before = index.len();
        let static_name = index.get("vlc-player").unwrap().name.clone();

        let added = index.merge_remote(vec![record("vlc-player", "Shadow VLC"), record("gimp", "GIMP")]);

        assert_eq!(added, 1);
        assert_eq!(index.len(), before + 1);
        assert_eq!(index.get("vlc-player").unwrap().name, static_name);
    }

    #[test]
    fn test_merge_twice_equals_once() {
        let records = vec![record("gimp", "GIMP"), record("obs", "OBS Studio")];

        let mut once = SearchIndex::new();
        once.initialize(BASE);
        once.merge_remote(records.clone());

        let mut twice = SearchIndex::new();
        twice.initialize(BASE);
        twice.merge_remote(records.clone());
        assert_eq!(twice.merge_remote(records), 0);

        assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn test_merge_ignores_blank_records() {
        let mut index = SearchIndex::new();
        index.initialize(BASE);
        assert_eq!(index.merge_remote(vec![record("", "Nameless"), record("no-name", " ")]), 0);
    }

    #[test]
    fn test_reinitialize_drops_remote_items() {
        let mut index = SearchIndex::new();
        index.initialize(BASE);
        let seeded = index.len();
        index.merge_remote(vec![record("gimp", "GIMP")]);
        assert!(index.contains("gimp"));

        index.reinitialize(BASE);
        assert_eq!(index.len(), seeded);
        assert!(!index.contains("gimp"));
    }
}
