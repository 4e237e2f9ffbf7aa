//! Bulk List Aggregator.
//!
//! Produces the full ordered catalog across every configured generation. A fresh cached copy
//! short-circuits the load with no network calls; otherwise the catalog index is fetched in
//! one call, enriched in sequential batches of concurrent per-item fetches, and each merged
//! batch is published as a snapshot so the list can render before the load completes. The
//! finished list is written back to the cache.

#[cfg(test)]
mod tests;

mod batch;

use chrono::Utc;
use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::{
    cache::{CatalogCache, KvStore},
    client::PokeApiClient,
    config::Config,
    error::Error,
    filter::available_types,
    model::catalog::{CatalogEntry, CatalogProgress, CatalogState},
    util::cancel::CancelFlag,
};

/// One item of the catalog index awaiting enrichment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IndexItem {
    pub name: String,
    pub id: u32,
}

pub struct CatalogService<'a, S> {
    client: &'a PokeApiClient,
    cache: &'a CatalogCache<S>,
    config: &'a Config,
}

impl<'a, S: KvStore> CatalogService<'a, S> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(client: &'a PokeApiClient, cache: &'a CatalogCache<S>, config: &'a Config) -> Self {
        Self {
            client,
            cache,
            config,
        }
    }

    /// Load the full catalog, publishing progressive snapshots into `state`.
    ///
    /// Snapshots are published after a cache hit, when the cold path starts, and after every
    /// merged batch. Once `cancel` is signaled no further snapshot is published, no further
    /// batch is started, and the cache is not written; requests already in flight complete and
    /// their results are discarded.
    ///
    /// # Returns
    /// - `Ok(Some(entries))` - The full catalog, from cache or freshly assembled
    /// - `Ok(None)` - The load was cancelled before it completed
    /// - `Err(Error)` - The catalog index could not be fetched; the error message is also
    ///   recorded in the published state
    pub async fn load(
        &self,
        state: &watch::Sender<CatalogState>,
        cancel: &CancelFlag,
    ) -> Result<Option<Vec<CatalogEntry>>, Error> {
        match self.fetch_catalog(state, cancel).await {
            Ok(entries) => Ok(entries),
            Err(e) => {
                if !cancel.is_cancelled() {
                    tracing::error!("Failed to load Pokémon catalog: {}", e);
                    state.send_modify(|s| {
                        s.is_loading = false;
                        s.full_loading = false;
                        s.error = Some(e.to_string());
                    });
                }
                Err(e)
            }
        }
    }

    async fn fetch_catalog(
        &self,
        state: &watch::Sender<CatalogState>,
        cancel: &CancelFlag,
    ) -> Result<Option<Vec<CatalogEntry>>, Error> {
        if let Some(record) = self.cache.load(Utc::now()).await {
            if cancel.is_cancelled() {
                return Ok(None);
            }
            if !record.payload.is_empty() {
                tracing::debug!("Serving {} Pokémon from catalog cache", record.payload.len());

                let count = record.payload.len();
                state.send_modify(|s| {
                    s.available_types = available_types(&record.payload);
                    s.list = record.payload.clone();
                    s.is_loading = false;
                    s.full_loading = false;
                    s.progress = CatalogProgress {
                        current: count,
                        total: count,
                    };
                    s.error = None;
                });

                return Ok(Some(record.payload));
            }
        }

        if cancel.is_cancelled() {
            return Ok(None);
        }

        let total_count = self.config.generations.total_count();
        state.send_modify(|s| {
            s.full_loading = true;
            s.error = None;
            s.progress = CatalogProgress {
                current: 0,
                total: total_count as usize,
            };
        });

        let index = self.client.get_pokemon_index(total_count).await?;
        if cancel.is_cancelled() {
            return Ok(None);
        }

        if index.results.len() != total_count as usize {
            tracing::warn!(
                "Catalog index returned {} entries, expected {}",
                index.results.len(),
                total_count
            );
        }

        let items: Vec<IndexItem> = index
            .results
            .into_iter()
            .enumerate()
            .map(|(position, resource)| IndexItem {
                name: resource.name,
                id: position as u32 + 1,
            })
            .collect();

        let mut processed: Vec<CatalogEntry> = Vec::with_capacity(items.len());

        for (batch_number, batch) in items.chunks(self.config.batch_size).enumerate() {
            if cancel.is_cancelled() {
                tracing::debug!("Catalog load cancelled before batch {}", batch_number + 1);
                return Ok(None);
            }

            let entries = self.fetch_batch(batch).await;
            if cancel.is_cancelled() {
                tracing::debug!("Catalog load cancelled during batch {}", batch_number + 1);
                return Ok(None);
            }

            processed.extend(entries);
            tracing::debug!(
                "Merged catalog batch {} ({}/{})",
                batch_number + 1,
                processed.len(),
                total_count
            );

            state.send_modify(|s| {
                s.list = processed.clone();
                s.available_types = available_types(&processed);
                s.is_loading = false;
                s.progress.current = processed.len();
            });
        }

        state.send_modify(|s| {
            s.is_loading = false;
            s.full_loading = false;
        });

        if processed.len() == total_count as usize {
            self.cache.save(&processed, Utc::now()).await;
            tracing::info!("Loaded and cached {} Pokémon", processed.len());
        } else {
            tracing::warn!(
                "Not caching incomplete catalog ({}/{} entries)",
                processed.len(),
                total_count
            );
        }

        Ok(Some(processed))
    }
}
