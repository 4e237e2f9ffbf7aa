//! Declarative test builder.
//!
//! Endpoint methods only queue their configuration; the mock server is started and every
//! mock registered during the final `build()` call, once the server URL is known for
//! resource references embedded in fixture bodies.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::{factory, PokemonFixture, SpeciesFixture},
    setup::TestSetup,
};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Result<Mock, TestError>>;

/// Builder for declarative mock PokeAPI setup.
///
/// Every endpoint method takes `expected_requests`; [`TestSetup::assert_mocks`] verifies
/// each endpoint was called exactly that many times.
#[derive(Default)]
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the catalog index endpoint listing `pokemon-1` through `pokemon-{count}`.
    ///
    /// Only matches `GET /pokemon?limit={count}`.
    pub fn with_index_endpoint(self, count: usize, expected_requests: usize) -> Self {
        self.with_index_names_endpoint(factory::index_names(count), count, expected_requests)
    }

    /// Add the catalog index endpoint listing `names`, matched on `limit`.
    ///
    /// `limit` may differ from `names.len()` to simulate a short index.
    pub fn with_index_names_endpoint(
        self,
        names: Vec<String>,
        limit: usize,
        expected_requests: usize,
    ) -> Self {
        self.with_mock(move |server| {
            let body = serde_json::to_string(&factory::index(&names))?;

            Ok(server
                .mock("GET", "/pokemon")
                .match_query(Matcher::UrlEncoded("limit".into(), limit.to_string()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create())
        })
    }

    /// Add `GET /pokemon/{identifier}` returning `pokemon`.
    pub fn with_pokemon_endpoint(
        self,
        identifier: impl Into<String>,
        pokemon: PokemonFixture,
        expected_requests: usize,
    ) -> Self {
        let path = format!("/pokemon/{}", identifier.into());

        self.with_mock(move |server| {
            let body = serde_json::to_string(&pokemon.to_json(&server.url()))?;

            Ok(json_mock(server, &path, body, expected_requests))
        })
    }

    /// Add `GET /pokemon-species/{identifier}` returning `species`.
    pub fn with_species_endpoint(
        self,
        identifier: impl Into<String>,
        species: SpeciesFixture,
        expected_requests: usize,
    ) -> Self {
        let path = format!("/pokemon-species/{}", identifier.into());

        self.with_mock(move |server| {
            let body = serde_json::to_string(&species.to_json(&server.url()))?;

            Ok(json_mock(server, &path, body, expected_requests))
        })
    }

    /// Add `GET /evolution-chain/{chain_id}` returning a chain rooted at `root`.
    ///
    /// Build `root` with [`factory::evolution_node`].
    pub fn with_evolution_chain_endpoint(
        self,
        chain_id: u32,
        root: Value,
        expected_requests: usize,
    ) -> Self {
        let path = format!("/evolution-chain/{}", chain_id);

        self.with_mock(move |server| {
            let body = serde_json::to_string(&factory::evolution_chain(root))?;

            Ok(json_mock(server, &path, body, expected_requests))
        })
    }

    /// Add `GET /type/{key}` carrying the given localized names.
    pub fn with_type_names_endpoint(
        self,
        key: &str,
        names: &[(&str, &str)],
        expected_requests: usize,
    ) -> Self {
        self.with_names_endpoint(format!("/type/{}", key), names, expected_requests)
    }

    /// Add `GET /ability/{name}` carrying the given localized names.
    pub fn with_ability_names_endpoint(
        self,
        name: &str,
        names: &[(&str, &str)],
        expected_requests: usize,
    ) -> Self {
        self.with_names_endpoint(format!("/ability/{}", name), names, expected_requests)
    }

    /// Add a `GET {path}` endpoint answering with `status` and an empty JSON object.
    pub fn with_error_endpoint(self, path: &str, status: usize, expected_requests: usize) -> Self {
        let path = path.to_string();

        self.with_mock(move |server| {
            Ok(server
                .mock("GET", path.as_str())
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .expect(expected_requests)
                .create())
        })
    }

    /// Add a `GET {path}` endpoint answering 200 with `body` verbatim.
    pub fn with_raw_endpoint(self, path: &str, body: &str, expected_requests: usize) -> Self {
        let path = path.to_string();
        let body = body.to_string();

        self.with_mock(move |server| Ok(json_mock(server, &path, body, expected_requests)))
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Result<Mock, TestError> + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Running mock server with all endpoints registered
    /// - `Err(TestError::Json)` - A fixture body could not be serialized
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server)?;
            setup.mocks.push(mock);
        }

        Ok(setup)
    }

    fn with_names_endpoint(
        self,
        path: String,
        names: &[(&str, &str)],
        expected_requests: usize,
    ) -> Self {
        let body = factory::names_resource(names);

        self.with_mock(move |server| {
            let body = serde_json::to_string(&body)?;

            Ok(json_mock(server, &path, body, expected_requests))
        })
    }
}

fn json_mock(server: &mut ServerGuard, path: &str, body: String, expected_requests: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(expected_requests)
        .create()
}
