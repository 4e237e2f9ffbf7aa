//! Data shapes consumed from PokeAPI and exposed to the rendering layer.

pub mod catalog;
pub mod detail;
pub mod pokeapi;
