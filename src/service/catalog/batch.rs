use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    cache::KvStore,
    model::catalog::CatalogEntry,
    service::catalog::{CatalogService, IndexItem},
    util::format::{format_name, image_url},
};

impl<'a, S: KvStore> CatalogService<'a, S> {
    /// Enrich one batch of index items concurrently.
    ///
    /// Every item resolves to an entry, so the result has the same length and order as
    /// `batch`. Each item needs two records: the species record (localized name) and the
    /// detail record (type list). A failed species fetch falls back to the formatted slug; a
    /// failed detail fetch leaves the type list empty.
    pub(super) async fn fetch_batch(&self, batch: &[IndexItem]) -> Vec<CatalogEntry> {
        join_all(batch.iter().map(|item| self.fetch_entry(item))).await
    }

    async fn fetch_entry(&self, item: &IndexItem) -> CatalogEntry {
        let identifier = item.id.to_string();

        let (species, detail) = tokio::join!(
            self.client.get_species(&identifier),
            self.client.get_pokemon(&identifier)
        );

        let korean_name = match species {
            Ok(species) => species
                .localized_name(&self.config.language)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            Err(e) => {
                tracing::debug!("Species fetch failed for {} ({}): {}", item.name, item.id, e);
                None
            }
        }
        .unwrap_or_else(|| format_name(&item.name));

        let types = match detail {
            Ok(detail) => detail.types.into_iter().map(|slot| slot.kind.name).collect(),
            Err(e) => {
                tracing::debug!("Detail fetch failed for {} ({}): {}", item.name, item.id, e);
                Vec::new()
            }
        };

        CatalogEntry {
            name: item.name.clone(),
            korean_name,
            image: image_url(&self.config.image_base_url, item.id),
            id: item.id,
            generation: self.config.generations.determine_generation(item.id).to_string(),
            types,
        }
    }
}
