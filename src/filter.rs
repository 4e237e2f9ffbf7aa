//! Catalog filtering for the list page.
//!
//! Filters combine conjunctively: an entry must match the generation filter, the type filter,
//! and the search term, each of which is skipped when empty.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::catalog::CatalogEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub generations: Vec<String>,
    pub types: Vec<String>,
    pub search: String,
}

impl CatalogFilter {
    /// Whether any criterion is set. An inactive filter returns the full list.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.generations.is_empty() || !self.types.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single entry passes every active criterion.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if !self.generations.is_empty() && !self.generations.contains(&entry.generation) {
            return false;
        }

        if !self.types.is_empty() && !entry.types.iter().any(|t| self.types.contains(t)) {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        if !term.is_empty()
            && !entry.name.to_lowercase().contains(&term)
            && !entry.korean_name.to_lowercase().contains(&term)
        {
            return false;
        }

        true
    }

    /// Entries passing the filter, in catalog order.
    pub fn apply<'e>(&self, entries: &'e [CatalogEntry]) -> Vec<&'e CatalogEntry> {
        if !self.is_active() {
            return entries.iter().collect();
        }

        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// Sorted, de-duplicated union of every entry's types.
pub fn available_types(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.types.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        id: u32,
        name: &str,
        korean_name: &str,
        generation: &str,
        types: &[&str],
    ) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            korean_name: korean_name.to_string(),
            image: String::new(),
            id,
            generation: generation.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry(1, "bulbasaur", "이상해씨", "1", &["grass", "poison"]),
            entry(4, "charmander", "파이리", "1", &["fire"]),
            entry(152, "chikorita", "치코리타", "2", &["grass"]),
            entry(155, "cyndaquil", "브케인", "2", &["fire"]),
        ]
    }

    fn ids(entries: Vec<&CatalogEntry>) -> Vec<u32> {
        entries.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn inactive_filter_returns_everything() {
        let entries = catalog();
        let filter = CatalogFilter {
            search: "   ".to_string(),
            ..Default::default()
        };

        assert!(!filter.is_active());
        assert_eq!(ids(filter.apply(&entries)), vec![1, 4, 152, 155]);
    }

    #[test]
    fn filters_by_generation_and_type() {
        let entries = catalog();
        let filter = CatalogFilter {
            generations: vec!["2".to_string()],
            types: vec!["fire".to_string(), "poison".to_string()],
            ..Default::default()
        };

        assert_eq!(ids(filter.apply(&entries)), vec![155]);
    }

    #[test]
    fn searches_english_and_korean_names() {
        let entries = catalog();

        let filter = CatalogFilter {
            search: " CHAR ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&entries)), vec![4]);

        let filter = CatalogFilter {
            search: "치코".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&entries)), vec![152]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let entries = catalog();
        let mut filter = CatalogFilter {
            search: "mewtwo".to_string(),
            ..Default::default()
        };

        assert!(filter.apply(&entries).is_empty());

        filter.clear();
        assert_eq!(filter.apply(&entries).len(), 4);
    }

    #[test]
    fn available_types_are_sorted_and_unique() {
        assert_eq!(
            available_types(&catalog()),
            vec!["fire".to_string(), "grass".to_string(), "poison".to_string()]
        );
        assert!(available_types(&[]).is_empty());
    }
}
