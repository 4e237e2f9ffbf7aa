//! Derived fields of the detail view-model.

use std::collections::HashMap;

use crate::{
    model::{
        detail::{
            AbilityInfo, BasicInfo, EvolutionCardData, EvolutionTree, EvolutionValidation,
            PokeStat, PokemonDetailViewModel, SpriteImage,
        },
        pokeapi::{Evolution, PokemonDetail, Species, Sprites, StatEntry},
    },
    util::localize::{stat_display_name, stat_max_value, type_color, SpriteSlot},
};

/// Fetched records and facets a view-model is derived from.
pub struct ViewModelParts {
    pub pokemon: PokemonDetail,
    pub species: Species,
    pub evolution: Option<Evolution>,
    pub evolution_tree: Option<EvolutionTree>,
    pub localized_types: Vec<String>,
    /// Aligned with `pokemon.abilities`.
    pub localized_abilities: Vec<Option<String>>,
    pub evolution_data: HashMap<String, EvolutionCardData>,
}

pub fn build_view_model(parts: ViewModelParts, language: &str) -> PokemonDetailViewModel {
    let ViewModelParts {
        pokemon,
        species,
        evolution,
        evolution_tree,
        localized_types,
        localized_abilities,
        evolution_data,
    } = parts;

    let korean_name = species
        .localized_name(language)
        .unwrap_or(&pokemon.name)
        .to_string();

    let type_colors = localized_types
        .iter()
        .map(|name| type_color(name).to_string())
        .collect();

    let abilities = pokemon
        .abilities
        .iter()
        .enumerate()
        .map(|(idx, slot)| AbilityInfo {
            name: slot.ability.name.clone(),
            korean_name: localized_abilities
                .get(idx)
                .cloned()
                .flatten()
                .unwrap_or_else(|| slot.ability.name.clone()),
            is_hidden: slot.is_hidden,
        })
        .collect();

    let basic_info = BasicInfo {
        height: f64::from(pokemon.height) / 10.0,
        weight: f64::from(pokemon.weight) / 10.0,
        abilities,
    };

    let evolution_validation = EvolutionValidation {
        contains_pokemon: evolution.is_some(),
        has_evolutions: evolution
            .as_ref()
            .is_some_and(|evolution| !evolution.chain.evolves_to.is_empty()),
    };

    PokemonDetailViewModel {
        pokemon_stats: format_stats(&pokemon.stats),
        representative_sprites: extract_sprites(&pokemon.sprites),
        korean_name,
        localized_types,
        type_colors,
        basic_info,
        evolution_tree,
        evolution_validation,
        evolution_data,
        evolution,
        species,
        pokemon,
    }
}

/// Non-empty sprites in gallery order.
pub fn extract_sprites(sprites: &Sprites) -> Vec<SpriteImage> {
    SpriteSlot::ORDERED
        .into_iter()
        .filter_map(|slot| {
            slot.url(sprites).map(|url| SpriteImage {
                name: slot.label().to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}

pub fn format_stats(stats: &[StatEntry]) -> Vec<PokeStat> {
    stats
        .iter()
        .map(|entry| {
            let name = stat_display_name(&entry.stat.name).to_string();
            PokeStat {
                max_value: stat_max_value(&name),
                original_name: entry.stat.name.clone(),
                value: entry.base_stat,
                name,
            }
        })
        .collect()
}
