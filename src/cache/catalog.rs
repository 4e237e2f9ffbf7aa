use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::catalog::CatalogEntry,
    util::time::{is_fresh, parse_epoch_millis},
};

use super::KvStore;

/// A cached catalog and the time it was saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheRecord {
    pub payload: Vec<CatalogEntry>,
    pub stored_at_epoch_millis: i64,
}

/// Time-bound cache of the full catalog list over an injected [`KvStore`].
///
/// Records older than the freshness window are treated as absent. Read and write failures
/// are logged and swallowed: a broken cache only ever costs a cold load.
#[derive(Clone, Debug)]
pub struct CatalogCache<S> {
    store: S,
    key: String,
    ttl: Duration,
}

impl<S: KvStore> CatalogCache<S> {
    pub fn new(store: S, key: &str, ttl: Duration) -> Self {
        Self {
            store,
            key: key.to_string(),
            ttl,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key holding the payload's save time.
    pub fn time_key(&self) -> String {
        format!("{}_time", self.key)
    }

    /// Load the cached catalog if both keys are present and the record is fresh at `now`.
    pub async fn load(&self, now: DateTime<Utc>) -> Option<CacheRecord> {
        match self.try_load(now).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Ignoring unreadable catalog cache {:?}: {}", self.key, e);
                None
            }
        }
    }

    /// Persist `entries` stamped with `now`, writing the payload and timestamp keys together.
    pub async fn save(&self, entries: &[CatalogEntry], now: DateTime<Utc>) {
        if let Err(e) = self.try_save(entries, now).await {
            tracing::warn!("Failed to persist catalog cache {:?}: {}", self.key, e);
        }
    }

    async fn try_load(&self, now: DateTime<Utc>) -> Result<Option<CacheRecord>, Error> {
        let Some(payload) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        let Some(stored_at) = self.store.get(&self.time_key()).await? else {
            return Ok(None);
        };

        let stored_at_epoch_millis = parse_epoch_millis(&stored_at)?;
        if !is_fresh(stored_at_epoch_millis, now, self.ttl) {
            tracing::debug!("Catalog cache {:?} expired", self.key);
            return Ok(None);
        }

        let payload: Vec<CatalogEntry> = serde_json::from_str(&payload)?;

        Ok(Some(CacheRecord {
            payload,
            stored_at_epoch_millis,
        }))
    }

    async fn try_save(&self, entries: &[CatalogEntry], now: DateTime<Utc>) -> Result<(), Error> {
        let payload = serde_json::to_string(entries)?;

        self.store.set(&self.key, payload).await?;
        self.store
            .set(&self.time_key(), now.timestamp_millis().to_string())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;

    fn entry(id: u32, name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            korean_name: name.to_string(),
            image: format!("https://img.test/{id:03}.png"),
            id,
            generation: "1".to_string(),
            types: vec!["normal".to_string()],
        }
    }

    fn cache(store: MemoryStore) -> CatalogCache<MemoryStore> {
        CatalogCache::new(store, "pokemonList", Duration::days(7))
    }

    /// Expect an immediate load after save to return the same list
    #[tokio::test]
    async fn round_trips_without_advancing_clock() {
        let cache = cache(MemoryStore::new());
        let entries = vec![entry(1, "bulbasaur"), entry(2, "ivysaur")];
        let now = Utc::now();

        cache.save(&entries, now).await;
        let record = cache.load(now).await.unwrap();

        assert_eq!(record.payload, entries);
        assert_eq!(record.stored_at_epoch_millis, now.timestamp_millis());
    }

    /// Expect absence once the freshness window has elapsed
    #[tokio::test]
    async fn expires_after_ttl() {
        let cache = cache(MemoryStore::new());
        let now = Utc::now();

        cache.save(&[entry(1, "bulbasaur")], now).await;

        assert!(cache.load(now + Duration::days(6)).await.is_some());
        assert!(cache.load(now + Duration::days(7)).await.is_none());
        assert!(cache.load(now + Duration::days(8)).await.is_none());
    }

    /// Expect both logical keys to be written with the original blob layout
    #[tokio::test]
    async fn writes_payload_and_timestamp_keys() {
        let store = MemoryStore::new();
        let cache = cache(store.clone());
        let now = Utc::now();

        cache.save(&[entry(1, "bulbasaur")], now).await;

        let payload = store.get("pokemonList").await.unwrap().unwrap();
        let time = store.get("pokemonList_time").await.unwrap().unwrap();
        assert!(payload.contains("\"koreanName\":\"bulbasaur\""));
        assert_eq!(time, now.timestamp_millis().to_string());
    }

    /// Expect a payload without its timestamp to count as absent
    #[tokio::test]
    async fn missing_timestamp_is_absent() {
        let store = MemoryStore::new();
        store
            .set("pokemonList", "[]".to_string())
            .await
            .unwrap();

        assert!(cache(store).load(Utc::now()).await.is_none());
    }

    /// Expect corrupt cache contents to be ignored rather than surfaced
    #[tokio::test]
    async fn corrupt_contents_are_absent() {
        let store = MemoryStore::new();
        let now = Utc::now();
        store
            .set("pokemonList", "not json".to_string())
            .await
            .unwrap();
        store
            .set("pokemonList_time", now.timestamp_millis().to_string())
            .await
            .unwrap();

        assert!(cache(store.clone()).load(now).await.is_none());

        store
            .set("pokemonList", "[]".to_string())
            .await
            .unwrap();
        store
            .set("pokemonList_time", "garbage".to_string())
            .await
            .unwrap();

        assert!(cache(store).load(now).await.is_none());
    }

    /// Expect an extreme stored timestamp to count as stale instead of failing the load
    #[tokio::test]
    async fn extreme_timestamp_is_absent() {
        let store = MemoryStore::new();
        store
            .set("pokemonList", "[]".to_string())
            .await
            .unwrap();
        store
            .set("pokemonList_time", i64::MIN.to_string())
            .await
            .unwrap();

        assert!(cache(store).load(Utc::now()).await.is_none());
    }
}
