//! Redis/Valkey-backed [`KvStore`].

use fred::prelude::*;

use crate::error::Error;

use super::KvStore;

const DEFAULT_NAMESPACE: &str = "pokedex:cache";

/// [`KvStore`] over a `fred` connection pool. Keys are namespaced so several datasets (or
/// test runs) can share one server.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
    namespace: String,
}

impl RedisStore {
    pub fn new(pool: Pool) -> Self {
        Self::with_namespace(pool, DEFAULT_NAMESPACE.to_string())
    }

    /// Create a store with a custom key namespace (useful for testing)
    pub fn with_namespace(pool: Pool, namespace: String) -> Self {
        Self { pool, namespace }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let value: Option<String> = self.pool.get(self.namespaced(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Error> {
        let _: () = self
            .pool
            .set(self.namespaced(key), value, None, None, false)
            .await?;
        Ok(())
    }
}

#[cfg(all(test, feature = "redis-test"))]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        cache::CatalogCache, config::Config, model::catalog::CatalogEntry, startup,
    };

    async fn connect(namespace: &str) -> RedisStore {
        let config = Config {
            valkey_url: Some(
                std::env::var("VALKEY_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            ),
            ..Default::default()
        };
        let pool = startup::connect_to_cache_store(&config)
            .await
            .unwrap()
            .expect("VALKEY_URL is set");
        let suffix = Utc::now().timestamp_nanos_opt().unwrap_or_default();

        RedisStore::with_namespace(pool, format!("pokedex:test:{namespace}:{suffix}"))
    }

    /// Expect a saved catalog to be read back unchanged through Redis
    #[tokio::test]
    async fn round_trips_catalog_through_redis() {
        let store = connect("round_trip").await;
        let cache = CatalogCache::new(store, "pokemonList", chrono::Duration::days(7));
        let entries = vec![CatalogEntry {
            name: "bulbasaur".to_string(),
            korean_name: "이상해씨".to_string(),
            image: "https://img.test/001.png".to_string(),
            id: 1,
            generation: "1".to_string(),
            types: vec!["grass".to_string(), "poison".to_string()],
        }];

        let now = Utc::now();
        cache.save(&entries, now).await;
        let loaded = cache.load(now).await.unwrap();

        assert_eq!(loaded.payload, entries);
    }
}
