
use pokedex_test_utils::prelude::*;
use serde_json::json;

use super::*;
use crate::{
    error::pokeapi::PokeApiError,
    model::detail::EvolutionValidation,
    util::{localize::PokemonType, test::TestSetupExt},
};

/// Register the mandatory records and the type/ability name endpoints for Bulbasaur,
/// requested by id `1`. The species references evolution chain `1`.
fn with_bulbasaur_records(builder: TestBuilder) -> TestBuilder {
    let pokemon = PokemonFixture::new(1, "bulbasaur")
        .with_types(&["grass", "poison"])
        .with_abilities(&[("overgrow", false), ("chlorophyll", true)])
        .with_stats(&[("hp", 45), ("special-attack", 65)])
        .with_sprites(json!({
            "front_default": "https://sprites.test/1.png",
            "back_default": "https://sprites.test/back/1.png",
            "front_shiny": null,
            "back_shiny": "",
            "other": {
                "official-artwork": { "front_default": "https://sprites.test/artwork/1.png" },
                "dream_world": { "front_default": null },
            },
        }));

    builder
        .with_pokemon_endpoint("1", pokemon, 1)
        .with_species_endpoint(
            "1",
            SpeciesFixture::named("Bulbasaur", "이상해씨").with_evolution_chain(1),
            1,
        )
        .with_type_names_endpoint("grass", &[("en", "Grass"), ("ko", "풀")], 1)
        .with_type_names_endpoint("poison", &[("en", "Poison"), ("ko", "독")], 1)
        .with_ability_names_endpoint("overgrow", &[("en", "Overgrow"), ("ko", "심록")], 1)
        .with_ability_names_endpoint("chlorophyll", &[("en", "Chlorophyll")], 1)
}

/// Bulbasaur's three-stage chain.
fn bulbasaur_chain() -> serde_json::Value {
    factory::evolution_node(
        "bulbasaur",
        vec![factory::evolution_node(
            "ivysaur",
            vec![factory::evolution_node("venusaur", vec![])],
        )],
    )
}

/// Register card lookups for every species in [`bulbasaur_chain`].
fn with_bulbasaur_cards(builder: TestBuilder, expected_requests: usize) -> TestBuilder {
    builder
        .with_pokemon_endpoint("bulbasaur", PokemonFixture::new(1, "bulbasaur"), expected_requests)
        .with_species_endpoint(
            "bulbasaur",
            SpeciesFixture::named("Bulbasaur", "이상해씨"),
            expected_requests,
        )
        .with_pokemon_endpoint("ivysaur", PokemonFixture::new(2, "ivysaur"), expected_requests)
        .with_species_endpoint(
            "ivysaur",
            SpeciesFixture::named("Ivysaur", "이상해풀"),
            expected_requests,
        )
        .with_pokemon_endpoint("venusaur", PokemonFixture::new(3, "venusaur"), expected_requests)
        .with_species_endpoint(
            "venusaur",
            SpeciesFixture::named("Venusaur", "이상해꽃"),
            expected_requests,
        )
}
