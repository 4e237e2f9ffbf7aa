mod fetch_batch;

use chrono::Duration;
use pokedex_test_utils::prelude::*;

use super::*;
use crate::{
    cache::MemoryStore,
    util::test::{small_generations, TestSetupExt},
};

const TYPES: [&str; 5] = ["grass", "fire", "water", "grass", "bug"];

/// Configuration over [`small_generations`] (five Pokémon) in batches of two.
fn catalog_config(test: &TestSetup) -> Config {
    Config {
        batch_size: 2,
        generations: small_generations(),
        ..test.config()
    }
}

fn memory_cache() -> CatalogCache<MemoryStore> {
    CatalogCache::new(MemoryStore::new(), "pokemonList", Duration::days(7))
}

/// Register detail and species records for ids 1 through `count`.
fn with_catalog_records(
    mut builder: TestBuilder,
    count: u32,
    expected_requests: usize,
) -> TestBuilder {
    for id in 1..=count {
        let name = format!("pokemon-{}", id);
        let pokemon = PokemonFixture::new(id, &name).with_types(&[TYPES[(id as usize - 1) % 5]]);
        let korean = format!("포켓몬{}", id);

        builder = builder
            .with_pokemon_endpoint(id.to_string(), pokemon, expected_requests)
            .with_species_endpoint(
                id.to_string(),
                SpeciesFixture::named(&name, &korean),
                expected_requests,
            );
    }

    builder
}

fn cached_entries() -> Vec<CatalogEntry> {
    vec![CatalogEntry {
        name: "bulbasaur".to_string(),
        korean_name: "이상해씨".to_string(),
        image: "https://images.example.test/pokemon/001.png".to_string(),
        id: 1,
        generation: "1".to_string(),
        types: vec!["grass".to_string(), "poison".to_string()],
    }]
}
