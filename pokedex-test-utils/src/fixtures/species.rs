use serde_json::{json, Value};

use crate::fixtures::factory::localized_names;

/// Species record fixture for `GET /pokemon-species/{id|name}`.
#[derive(Clone, Debug, Default)]
pub struct SpeciesFixture {
    pub names: Vec<(String, String)>,
    pub evolution_chain_id: Option<u32>,
}

impl SpeciesFixture {
    /// Create a fixture with no localized names and no evolution chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fixture carrying an English and a Korean name.
    pub fn named(english: &str, korean: &str) -> Self {
        Self::new().with_name("en", english).with_name("ko", korean)
    }

    pub fn with_name(mut self, language: &str, name: &str) -> Self {
        self.names.push((language.to_string(), name.to_string()));
        self
    }

    /// Reference `/evolution-chain/{chain_id}` on the mock server.
    pub fn with_evolution_chain(mut self, chain_id: u32) -> Self {
        self.evolution_chain_id = Some(chain_id);
        self
    }

    /// Render the response body; `base_url` is the mock server URL.
    pub fn to_json(&self, base_url: &str) -> Value {
        let names: Vec<(&str, &str)> = self
            .names
            .iter()
            .map(|(language, name)| (language.as_str(), name.as_str()))
            .collect();

        json!({
            "names": localized_names(&names),
            "evolution_chain": self.evolution_chain_id.map(|id| json!({
                "url": format!("{}/evolution-chain/{}", base_url, id),
            })),
        })
    }
}
