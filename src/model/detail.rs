//! Detail view-model types exposed by the detail loader.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::pokeapi::{Evolution, NamedResource, PokemonDetail, Species};

/// Typed recursive evolution tree; `level` is the distance from the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTree {
    pub pokemon: NamedResource,
    pub evolutions: Vec<EvolutionTree>,
    pub level: u32,
}

/// Card data for one species appearing in an evolution tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionCardData {
    pub id: u32,
    pub korean_name: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteImage {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokeStat {
    pub name: String,
    pub original_name: String,
    pub value: u32,
    pub max_value: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityInfo {
    pub name: String,
    pub korean_name: String,
    pub is_hidden: bool,
}

/// Height in metres, weight in kilograms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub height: f64,
    pub weight: f64,
    pub abilities: Vec<AbilityInfo>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionValidation {
    pub contains_pokemon: bool,
    pub has_evolutions: bool,
}

/// Everything the detail page renders for one Pokémon. Rebuilt on every visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetailViewModel {
    pub pokemon: PokemonDetail,
    pub species: Species,
    pub evolution: Option<Evolution>,
    pub korean_name: String,
    pub localized_types: Vec<String>,
    pub type_colors: Vec<String>,
    pub basic_info: BasicInfo,
    pub pokemon_stats: Vec<PokeStat>,
    pub evolution_tree: Option<EvolutionTree>,
    pub evolution_validation: EvolutionValidation,
    pub representative_sprites: Vec<SpriteImage>,
    pub evolution_data: HashMap<String, EvolutionCardData>,
}

/// Detail load state published to the rendering layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailState {
    pub view_model: Option<PokemonDetailViewModel>,
    pub loading: bool,
    pub error: Option<String>,
}
