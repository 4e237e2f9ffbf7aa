//! Error types for the Pokédex data layer.
//!
//! This module provides the error taxonomy shared by the remote client, the cache store, and
//! both aggregators. Domain-specific errors (configuration, PokeAPI responses) live in their
//! own submodules and convert into the crate-wide [`Error`] through `thiserror`'s `#[from]`.
//!
//! Only mandatory-fetch failures ever leave an aggregator as an `Err`. Per-item, per-facet,
//! and per-node failures are recovered where they occur and only show up in logs.

pub mod config;
pub mod pokeapi;

use thiserror::Error;

use crate::error::{config::ConfigError, pokeapi::PokeApiError};

/// Main error type for the Pokédex data layer.
///
/// # Error Categories
/// - Configuration errors (invalid environment values, inconsistent generation table)
/// - PokeAPI errors (missing resources, unexpected status codes)
/// - External library errors (HTTP transport, JSON serialization, Redis)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable or generation table).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// PokeAPI returned a status the caller cannot use.
    #[error(transparent)]
    PokeApiError(#[from] PokeApiError),
    /// HTTP transport error (connection failure, timeout, body decoding).
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// JSON serialization error while reading or writing the cache payload.
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the data layer.
    #[error("Internal error in the Pokédex data layer, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Redis/Valkey cache store error (connection, command execution).
    #[cfg(feature = "redis")]
    #[error(transparent)]
    RedisError(#[from] fred::prelude::Error),
}
