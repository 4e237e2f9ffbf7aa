//! Test fixture modules for PokeAPI response bodies.
//!
//! - `factory` - raw JSON builders (index pages, localized names, evolution chains)
//! - `pokemon` - detail record fixture
//! - `species` - species record fixture

pub mod factory;
pub mod pokemon;
pub mod species;

pub use pokemon::PokemonFixture;
pub use species::SpeciesFixture;
