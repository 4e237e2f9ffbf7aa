//! Aggregation services.
//!
//! Services coordinate fan-out fetches against PokeAPI and merge the results into the shapes
//! the rendering layer consumes: [`catalog::CatalogService`] for the bulk list and
//! [`detail::DetailService`] for one Pokémon's detail page.

pub mod catalog;
pub mod detail;
pub mod settle;
