use dioxus_logger::tracing::{self, Level};
use tokio::sync::watch;

use pokedex::{
    cache::{CatalogCache, KvStore, MemoryStore},
    model::{catalog::CatalogState, detail::DetailState},
    service::{
        catalog::CatalogService,
        detail::{tracker::DetailRequestTracker, DetailService},
    },
    startup,
    util::cancel::CancelFlag,
    Config, PokeApiClient,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_logging(Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let client = match startup::build_pokeapi_client(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build PokeAPI client: {}", e);
            std::process::exit(1);
        }
    };

    let succeeded = match std::env::args().nth(1) {
        Some(identifier) => show_detail(&client, &config, &identifier).await,
        None => load_catalog(&client, &config).await,
    };

    if !succeeded {
        std::process::exit(1);
    }
}

async fn show_detail(client: &PokeApiClient, config: &Config, identifier: &str) -> bool {
    let service = DetailService::new(client, config);
    let (state, _receiver) = watch::channel(DetailState::default());
    let tracker = DetailRequestTracker::new();

    match service.load_into(identifier, &state, &tracker).await {
        Ok(Some(view_model)) => match serde_json::to_string_pretty(&view_model) {
            Ok(json) => {
                println!("{}", json);
                true
            }
            Err(e) => {
                tracing::error!("Failed to serialize view-model: {}", e);
                false
            }
        },
        Ok(None) => true,
        Err(_) => false,
    }
}

async fn load_catalog(client: &PokeApiClient, config: &Config) -> bool {
    #[cfg(feature = "redis")]
    match startup::connect_to_cache_store(config).await {
        Ok(Some(pool)) => {
            let store = pokedex::cache::RedisStore::new(pool);
            return run_catalog(client, config, store).await;
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Falling back to in-memory catalog cache: {}", e),
    }

    run_catalog(client, config, MemoryStore::new()).await
}

async fn run_catalog<S: KvStore>(client: &PokeApiClient, config: &Config, store: S) -> bool {
    let cache = CatalogCache::new(store, &config.storage_key, config.cache_ttl);
    let service = CatalogService::new(client, &cache, config);
    let (state, mut receiver) = watch::channel(CatalogState::default());
    let cancel = CancelFlag::new();

    let progress = async {
        while receiver.changed().await.is_ok() {
            let snapshot = receiver.borrow_and_update().clone();
            if snapshot.full_loading {
                tracing::info!(
                    "Catalog progress: {}/{}",
                    snapshot.progress.current,
                    snapshot.progress.total
                );
            }
            if !snapshot.is_loading && !snapshot.full_loading {
                break;
            }
        }
    };

    let (result, _) = tokio::join!(service.load(&state, &cancel), progress);

    match result {
        Ok(Some(entries)) => {
            for label in config.generations.labels() {
                let count = entries.iter().filter(|e| e.generation == label).count();
                println!("Generation {}: {} Pokémon", label, count);
            }
            true
        }
        Ok(None) => true,
        Err(_) => false,
    }
}
