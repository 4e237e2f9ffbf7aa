//! Catalog types exposed by the bulk list loader.

use serde::{Deserialize, Serialize};

/// One Pokémon in the catalog list.
///
/// Serialized in camelCase so the cached payload keeps the same JSON blob shape the catalog
/// has always stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub korean_name: String,
    pub image: String,
    pub id: u32,
    pub generation: String,
    pub types: Vec<String>,
}

/// Number of entries merged so far out of the configured catalog size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProgress {
    pub current: usize,
    pub total: usize,
}

/// Snapshot of the catalog load published to the rendering layer.
///
/// - `is_loading`: nothing renderable yet (no cache hit, no batch merged)
/// - `full_loading`: the cold path is still merging batches
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    pub list: Vec<CatalogEntry>,
    pub is_loading: bool,
    pub full_loading: bool,
    pub progress: CatalogProgress,
    pub error: Option<String>,
    pub available_types: Vec<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            is_loading: true,
            full_loading: false,
            progress: CatalogProgress::default(),
            error: None,
            available_types: Vec::new(),
        }
    }
}
