//! Remote Catalog Client.
//!
//! A thin typed wrapper around `reqwest` for the PokeAPI endpoints the aggregators consume.
//! There is no retry or backoff here: any transport failure or non-success status surfaces
//! as an `Err` and the caller decides whether it is fatal. A per-request timeout bounds how
//! long a hung request can stall a batch.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{pokeapi::PokeApiError, Error},
    model::pokeapi::{Evolution, IndexResponse, LocalizedNames, PokemonDetail, Species},
};

/// Client for the PokeAPI REST service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Build a client from configuration (base URL, user agent, request timeout).
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self::new(http, &config.api_base_url))
    }

    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/pokemon?limit={limit}`: names and references for the first `limit` entries.
    pub async fn get_pokemon_index(&self, limit: u32) -> Result<IndexResponse, Error> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        self.get_json(&url).await
    }

    /// `GET {base}/pokemon/{id|name}`
    pub async fn get_pokemon(&self, identifier: &str) -> Result<PokemonDetail, Error> {
        let url = format!("{}/pokemon/{}", self.base_url, identifier);
        self.get_json(&url).await
    }

    /// `GET {base}/pokemon-species/{id|name}`
    pub async fn get_species(&self, identifier: &str) -> Result<Species, Error> {
        let url = format!("{}/pokemon-species/{}", self.base_url, identifier);
        self.get_json(&url).await
    }

    /// `GET {evolution_chain_url}` as referenced by a species record.
    pub async fn get_evolution_chain(&self, url: &str) -> Result<Evolution, Error> {
        self.get_json(url).await
    }

    /// `GET {base}/ability/{name}`
    pub async fn get_ability_names(&self, name: &str) -> Result<LocalizedNames, Error> {
        let url = format!("{}/ability/{}", self.base_url, name);
        self.get_json(&url).await
    }

    /// Any resource URL whose body carries a `names` array (e.g. a type reference).
    pub async fn get_localized_names(&self, url: &str) -> Result<LocalizedNames, Error> {
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        tracing::trace!("GET {}", url);

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokeApiError::from_status(url, status).into());
        }

        Ok(response.json::<T>().await?)
    }
}
