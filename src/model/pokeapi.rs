//! Raw PokeAPI response shapes.
//!
//! Only the fields the aggregators read are modeled; everything else in the responses is
//! ignored during deserialization. Optional sections default to empty so a sparse record
//! still decodes.

use serde::{Deserialize, Serialize};

/// `{name, url}` reference used throughout PokeAPI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon?limit=N`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub results: Vec<NamedResource>,
}

/// `GET /pokemon/{id|name}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<FrontSprite>,
    #[serde(default)]
    pub dream_world: Option<FrontSprite>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// One per-language entry of a `names` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

/// Any resource carrying a `names` array (`/type/{id}`, `/ability/{name}`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedNames {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

impl LocalizedNames {
    /// Name for the given language code, if present.
    pub fn find(&self, language: &str) -> Option<&str> {
        find_localized(&self.names, language)
    }
}

/// `{url}` pointer to another resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUrl {
    pub url: String,
}

/// `GET /pokemon-species/{id|name}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub evolution_chain: Option<ResourceUrl>,
}

impl Species {
    pub fn localized_name(&self, language: &str) -> Option<&str> {
        find_localized(&self.names, language)
    }
}

/// `GET {evolution_chain.url}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    pub chain: EvolutionNode,
}

/// One node of the raw evolution chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

fn find_localized<'a>(names: &'a [LocalizedName], language: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|n| n.language.name == language)
        .map(|n| n.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_detail_record() {
        let detail: PokemonDetail = serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "https://x/type/13/" } }],
            "sprites": { "front_default": "https://x/25.png", "back_default": null }
        }))
        .unwrap();

        assert_eq!(detail.types[0].kind.name, "electric");
        assert!(detail.abilities.is_empty());
        assert_eq!(detail.sprites.front_default.as_deref(), Some("https://x/25.png"));
        assert!(detail.sprites.other.is_none());
    }

    #[test]
    fn decodes_official_artwork_key() {
        let sprites: Sprites = serde_json::from_value(serde_json::json!({
            "other": {
                "official-artwork": { "front_default": "https://x/art.png" },
                "dream_world": { "front_default": null }
            }
        }))
        .unwrap();

        let other = sprites.other.unwrap();
        assert_eq!(
            other.official_artwork.unwrap().front_default.as_deref(),
            Some("https://x/art.png")
        );
        assert_eq!(other.dream_world.unwrap().front_default, None);
    }

    #[test]
    fn finds_localized_species_name() {
        let species: Species = serde_json::from_value(serde_json::json!({
            "names": [
                { "name": "Pikachu", "language": { "name": "en", "url": "" } },
                { "name": "피카츄", "language": { "name": "ko", "url": "" } }
            ],
            "evolution_chain": { "url": "https://x/evolution-chain/10/" }
        }))
        .unwrap();

        assert_eq!(species.localized_name("ko"), Some("피카츄"));
        assert_eq!(species.localized_name("ja"), None);
    }
}
