//! Test configuration constants for PokeAPI client setup.

/// User agent string for test PokeAPI client requests.
pub static TEST_USER_AGENT: &str =
    "pokedex-test/1.0 (contact@example.com; +https://github.com/example/pokedex)";

/// Card image base URL used when building test configurations.
///
/// Images are never fetched, so this does not point at the mock server.
pub static TEST_IMAGE_BASE_URL: &str = "https://images.example.test/pokemon";

/// Localization language requested by test configurations.
pub static TEST_LANGUAGE: &str = "ko";

/// Cache key used by test catalog caches.
pub static TEST_STORAGE_KEY: &str = "pokemonList";
