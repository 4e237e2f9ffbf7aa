//! Local Cache Store.
//!
//! The catalog is cached as two logical keys in a string key-value store: the JSON payload
//! under the configured key and its epoch-millisecond save time under `{key}_time`. Both are
//! read together and written together. [`KvStore`] is the injected persistence seam, with an
//! in-memory implementation for tests and embedding, and a Redis/Valkey implementation behind
//! the `redis` feature.

pub mod catalog;
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;

pub use catalog::{CacheRecord, CatalogCache};
pub use memory::MemoryStore;
#[cfg(feature = "redis")]
pub use redis::RedisStore;

use crate::error::Error;

/// String key-value persistence used by the catalog cache.
///
/// Last write wins; no locking discipline is expected beyond what the backend provides.
#[allow(async_fn_in_trait)]
pub trait KvStore {
    /// Read the value stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), Error>;
}
