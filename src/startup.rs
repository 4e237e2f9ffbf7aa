use dioxus_logger::tracing::Level;

use crate::{client::PokeApiClient, config::Config, error::Error};

/// Initialize the global logger at `level`.
pub fn init_logging(level: Level) -> Result<(), Error> {
    dioxus_logger::init(level).map_err(|e| Error::InternalError(e.to_string()))
}

/// Build the PokeAPI client with the configured user agent and timeout
pub fn build_pokeapi_client(config: &Config) -> Result<PokeApiClient, Error> {
    PokeApiClient::from_config(config)
}

/// Connect to Valkey/Redis for the shared catalog cache.
///
/// Returns `Ok(None)` when no `VALKEY_URL` is configured; callers fall back to the
/// in-process store.
#[cfg(feature = "redis")]
pub async fn connect_to_cache_store(config: &Config) -> Result<Option<fred::prelude::Pool>, Error> {
    use fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    let Some(valkey_url) = config.valkey_url.as_deref() else {
        return Ok(None);
    };

    let redis_config = RedisConfig::from_url(valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(Some(pool))
}
