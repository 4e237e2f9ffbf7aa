use serde_json::{json, Value};

/// Detail record fixture for `GET /pokemon/{id|name}`.
///
/// Type references point back at the mock server's `/type/{key}` endpoints, so they can be
/// served with [`crate::TestBuilder::with_type_names_endpoint`].
#[derive(Clone, Debug)]
pub struct PokemonFixture {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<(String, bool)>,
    pub stats: Vec<(String, u32)>,
    pub sprites: Value,
}

impl PokemonFixture {
    /// Create a fixture with a single grass type, one ability, one stat and a front sprite.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            height: 7,
            weight: 69,
            types: vec!["grass".to_string()],
            abilities: vec![("overgrow".to_string(), false)],
            stats: vec![("hp".to_string(), 45)],
            sprites: json!({
                "front_default": format!("https://sprites.example.test/{}.png", id),
                "back_default": null,
                "front_shiny": null,
                "back_shiny": null,
            }),
        }
    }

    pub fn with_size(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_abilities(mut self, abilities: &[(&str, bool)]) -> Self {
        self.abilities = abilities
            .iter()
            .map(|(name, hidden)| (name.to_string(), *hidden))
            .collect();
        self
    }

    pub fn with_stats(mut self, stats: &[(&str, u32)]) -> Self {
        self.stats = stats
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        self
    }

    pub fn with_sprites(mut self, sprites: Value) -> Self {
        self.sprites = sprites;
        self
    }

    /// Render the response body; `base_url` is the mock server URL.
    pub fn to_json(&self, base_url: &str) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "height": self.height,
            "weight": self.weight,
            "types": self.types.iter().enumerate().map(|(idx, key)| json!({
                "slot": idx + 1,
                "type": { "name": key, "url": format!("{}/type/{}", base_url, key) },
            })).collect::<Vec<Value>>(),
            "abilities": self.abilities.iter().enumerate().map(|(idx, (name, hidden))| json!({
                "slot": idx + 1,
                "is_hidden": hidden,
                "ability": {
                    "name": name,
                    "url": format!("{}/ability/{}", base_url, name),
                },
            })).collect::<Vec<Value>>(),
            "stats": self.stats.iter().map(|(name, value)| json!({
                "base_stat": value,
                "effort": 0,
                "stat": {
                    "name": name,
                    "url": format!("https://pokeapi.co/api/v2/stat/{}/", name),
                },
            })).collect::<Vec<Value>>(),
            "sprites": self.sprites,
        })
    }
}
