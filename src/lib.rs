//! Data-aggregation layer for a Pokémon catalog.
//!
//! This crate assembles two views from the public PokeAPI service: the full catalog list,
//! loaded in batches with progressive snapshots and a time-bound local cache, and the detail
//! view-model for a single Pokémon, including its recursive evolution tree and the per-node
//! enrichment needed to render evolution cards. Rendering, routing, and the remote service
//! itself are external collaborators.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

pub use client::PokeApiClient;
pub use config::Config;
pub use error::Error;
