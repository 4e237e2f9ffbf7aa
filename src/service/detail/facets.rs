use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    error::Error,
    model::pokeapi::{Evolution, PokemonDetail, Species},
    service::detail::DetailService,
    util::localize::UNKNOWN_NAME,
};

impl<'a> DetailService<'a> {
    /// Fetch the evolution chain referenced by the species record.
    ///
    /// `Ok(None)` when the species has no chain reference.
    pub(super) async fn fetch_evolution(
        &self,
        species: &Species,
    ) -> Result<Option<Evolution>, Error> {
        let Some(chain) = species.evolution_chain.as_ref() else {
            return Ok(None);
        };

        let evolution = self.client.get_evolution_chain(&chain.url).await?;

        Ok(Some(evolution))
    }

    /// Localized names for every type, in slot order.
    ///
    /// Each lookup resolves on its own: a failed lookup or a record without the target
    /// language yields [`UNKNOWN_NAME`] for that type only.
    pub(super) async fn fetch_localized_types(&self, pokemon: &PokemonDetail) -> Vec<String> {
        join_all(pokemon.types.iter().map(|slot| async move {
            let url = if slot.kind.url.is_empty() {
                format!("{}/type/{}", self.client.base_url(), slot.kind.name)
            } else {
                slot.kind.url.clone()
            };

            match self.client.get_localized_names(&url).await {
                Ok(names) => names
                    .find(&self.config.language)
                    .unwrap_or(UNKNOWN_NAME)
                    .to_string(),
                Err(e) => {
                    tracing::warn!("Failed to load type name for {}: {}", slot.kind.name, e);
                    UNKNOWN_NAME.to_string()
                }
            }
        }))
        .await
    }

    /// Localized names for every ability, aligned with `pokemon.abilities`.
    ///
    /// `None` for an ability whose lookup failed or has no name in the target language.
    pub(super) async fn fetch_localized_abilities(
        &self,
        pokemon: &PokemonDetail,
    ) -> Vec<Option<String>> {
        join_all(pokemon.abilities.iter().map(|slot| async move {
            match self.client.get_ability_names(&slot.ability.name).await {
                Ok(names) => names.find(&self.config.language).map(str::to_string),
                Err(e) => {
                    tracing::warn!(
                        "Failed to load ability name for {}: {}",
                        slot.ability.name,
                        e
                    );
                    None
                }
            }
        }))
        .await
    }
}
