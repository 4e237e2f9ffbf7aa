//! Generation table and id-to-generation assignment.
//!
//! A generation is a contiguous range of national dex ids representing one release era. The
//! table is ordered and its ranges must tile ids `1..=total` without gaps or overlaps, which
//! [`GenerationTable::new`] enforces at construction.

use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

/// A contiguous id range expressed the way PokeAPI paginates: `limit` entries after `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRange {
    pub limit: u32,
    pub offset: u32,
}

impl GenerationRange {
    /// Whether the 1-based `id` falls inside this range.
    pub fn contains(&self, id: u32) -> bool {
        id > self.offset && id <= self.offset + self.limit
    }
}

/// Ordered mapping from generation label to its id range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationTable {
    entries: Vec<(String, GenerationRange)>,
}

const DEFAULT_GENERATIONS: [(&str, u32, u32); 9] = [
    ("1", 151, 0),
    ("2", 100, 151),
    ("3", 135, 251),
    ("4", 107, 386),
    ("5", 156, 493),
    ("6", 72, 649),
    ("7", 88, 721),
    ("8", 96, 809),
    ("9", 120, 905),
];

impl Default for GenerationTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_GENERATIONS
                .iter()
                .map(|&(label, limit, offset)| {
                    (label.to_string(), GenerationRange { limit, offset })
                })
                .collect(),
        }
    }
}

impl GenerationTable {
    /// Build a table from ordered `(label, range)` pairs.
    ///
    /// # Returns
    /// - `Ok(GenerationTable)` - ranges start at offset 0 and each offset equals the sum of
    ///   the preceding limits
    /// - `Err(ConfigError::InvalidGenerationTable)` - the table is empty, has an empty range,
    ///   a duplicate label, or a gap/overlap between consecutive ranges
    pub fn new(entries: Vec<(String, GenerationRange)>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::InvalidGenerationTable(
                "at least one generation is required".to_string(),
            ));
        }

        let mut expected_offset = 0;
        for (index, (label, range)) in entries.iter().enumerate() {
            if range.limit == 0 {
                return Err(ConfigError::InvalidGenerationTable(format!(
                    "generation {label} has an empty range"
                )));
            }
            if range.offset != expected_offset {
                return Err(ConfigError::InvalidGenerationTable(format!(
                    "generation {label} starts at offset {} but the previous range ends at {expected_offset}",
                    range.offset
                )));
            }
            if entries[..index].iter().any(|(other, _)| other == label) {
                return Err(ConfigError::InvalidGenerationTable(format!(
                    "generation {label} is declared more than once"
                )));
            }
            expected_offset += range.limit;
        }

        Ok(Self { entries })
    }

    /// Sum of every generation's `limit`, i.e. the size of the full catalog.
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|(_, range)| range.limit).sum()
    }

    /// Label of the first generation, used as the fallback assignment.
    pub fn first_label(&self) -> &str {
        // `new` and `default` both guarantee at least one entry
        self.entries
            .first()
            .map(|(label, _)| label.as_str())
            .unwrap_or_default()
    }

    /// Generation labels in declared order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Range configured for `label`, if any.
    pub fn range(&self, label: &str) -> Option<GenerationRange> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, range)| *range)
    }

    /// Determine which generation a national dex id belongs to.
    ///
    /// Walks the table in declared order accumulating limits; the id belongs to the first
    /// generation whose cumulative upper bound reaches it. Ids past the end of the table fall
    /// back to the first generation.
    pub fn determine_generation(&self, id: u32) -> &str {
        let mut offset = 0;
        for (label, range) in &self.entries {
            if id <= offset + range.limit {
                return label;
            }
            offset += range.limit;
        }

        self.first_label()
    }
}
