//! Session-scoped suggestion cache.
//!
//! Keys are the exact query strings the requests were issued for; no
//! normalization is applied, so "paris" and "Paris" are separate entries.
//! Entries are written once and never evicted or replaced.

use std::collections::HashMap;

use crate::types::SuggestionList;

#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, SuggestionList>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list for `query`, sharing the stored allocation.
    pub fn get(&self, query: &str) -> Option<SuggestionList> {
        self.entries.get(query).cloned()
    }

    /// Store the first successful result for `query`. Later results for the
    /// same key are ignored and the original list is returned.
    pub fn insert(&mut self, query: impl Into<String>, list: SuggestionList) -> SuggestionList {
        self.entries.entry(query.into()).or_insert(list).clone()
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use std::sync::Arc;

    use super::*;
    use crate::types::Place;

    fn list(labels: &[&str]) -> SuggestionList {
        labels.iter().map(|l| Place::unresolved(*l)).collect()
    }

    #[test]
    fn test_hit_returns_identical_list() {
        let mut cache = SuggestionCache::new();
        let stored = list(&["Paris, France", "Paris, Texas"]);
        cache.insert("par", stored.clone());

        let hit = cache.get("par").unwrap();
        assert!(Arc::ptr_eq(&hit, &stored));
        assert_eq!(hit[1].label, "Paris, Texas");
    }

    #[test]
    fn test_keys_are_not_normalized() {
        let mut cache = SuggestionCache::new();
        cache.insert("par", list(&["Paris"]));

        assert!(cache.get("Par").is_none());
        assert!(cache.get("par ").is_none());
        assert!(cache.contains("par"));
    }

    #[test]
    fn test_entries_are_never_replaced() {
        let mut cache = SuggestionCache::new();
        let first = list(&["Lyon"]);
        cache.insert("ly", first.clone());
        let kept = cache.insert("ly", list(&["Lynchburg"]));

        assert!(Arc::ptr_eq(&kept, &first));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_results_are_cached() {
        let mut cache = SuggestionCache::new();
        assert!(cache.is_empty());
        cache.insert("zzq", list(&[]));
        assert_eq!(cache.get("zzq").map(|l| l.len()), Some(0));
    }
}
