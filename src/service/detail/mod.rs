//! Detail Aggregator.
//!
//! Builds the complete view-model for a single Pokémon. The detail and species records are
//! mandatory and fetched together; if either fails the whole load fails. Three optional
//! facets follow concurrently (evolution chain, localized type names, localized ability
//! names). A failed chain leaves the evolution facets empty; a failed type or ability lookup
//! only falls back for that one name. When the evolution chain is
//! available its tree is built and every distinct species in it is enriched in parallel for
//! the evolution cards, with failed species simply left out.

#[cfg(test)]
mod tests;

pub mod evolution;
mod facets;
pub mod tracker;
pub mod view_model;

use std::collections::HashMap;

use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::{
    client::PokeApiClient,
    config::Config,
    error::Error,
    model::detail::{DetailState, PokemonDetailViewModel},
    service::{
        detail::{
            evolution::build_evolution_tree,
            tracker::DetailRequestTracker,
            view_model::{build_view_model, ViewModelParts},
        },
        settle::facet_or_default,
    },
};

pub struct DetailService<'a> {
    client: &'a PokeApiClient,
    config: &'a Config,
}

impl<'a> DetailService<'a> {
    /// Creates a new instance of [`DetailService`]
    pub fn new(client: &'a PokeApiClient, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// Load the detail view-model for a numeric id or species name.
    ///
    /// # Returns
    /// - `Ok(PokemonDetailViewModel)` - Mandatory records loaded; optional facets that failed
    ///   are empty
    /// - `Err(Error)` - The detail or species record could not be fetched
    pub async fn load_detail(&self, identifier: &str) -> Result<PokemonDetailViewModel, Error> {
        let (pokemon, species) = tokio::try_join!(
            self.client.get_pokemon(identifier),
            self.client.get_species(identifier)
        )?;

        let (evolution, localized_types, localized_abilities) = tokio::join!(
            self.fetch_evolution(&species),
            self.fetch_localized_types(&pokemon),
            self.fetch_localized_abilities(&pokemon)
        );

        let evolution = facet_or_default("evolution chain", evolution);

        let evolution_tree = evolution
            .as_ref()
            .map(|evolution| build_evolution_tree(&evolution.chain));

        let evolution_data = match &evolution_tree {
            Some(tree) => self.load_evolution_cards(tree).await,
            None => HashMap::new(),
        };

        Ok(build_view_model(
            ViewModelParts {
                pokemon,
                species,
                evolution,
                evolution_tree,
                localized_types,
                localized_abilities,
                evolution_data,
            },
            &self.config.language,
        ))
    }

    /// Load the detail view-model and publish it into `state` unless a newer request has
    /// started on `tracker` in the meantime.
    ///
    /// # Returns
    /// - `Ok(Some(view_model))` - Loaded and published
    /// - `Ok(None)` - Superseded by a newer request; nothing was published
    /// - `Err(Error)` - Mandatory records failed; the error message was published
    pub async fn load_into(
        &self,
        identifier: &str,
        state: &watch::Sender<DetailState>,
        tracker: &DetailRequestTracker,
    ) -> Result<Option<PokemonDetailViewModel>, Error> {
        let token = tracker.begin();
        state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.load_detail(identifier).await;

        if !tracker.is_current(token) {
            tracing::debug!("Discarding superseded detail load for {:?}", identifier);
            return Ok(None);
        }

        match result {
            Ok(view_model) => {
                state.send_modify(|s| {
                    s.view_model = Some(view_model.clone());
                    s.loading = false;
                    s.error = None;
                });
                Ok(Some(view_model))
            }
            Err(e) => {
                tracing::error!("Failed to load Pokémon detail for {:?}: {}", identifier, e);
                state.send_modify(|s| {
                    s.view_model = None;
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }
}
