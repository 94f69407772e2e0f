use incident_search::{
    api::{build_router, AppState},
    config::Config,
    search::SearchService,
    state::{load_seed_file, InMemoryStore, IncidentStore, ResponseCache},
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "incident_search={},tower_http=info",
            config.observability.log_level
        )
        .into()
    });

    if config.observability.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting incident-search v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the store and seed it
    let store: Arc<dyn IncidentStore> = Arc::new(InMemoryStore::new());
    match &config.store.seed_path {
        Some(path) => {
            let (persons, incidents) = load_seed_file(store.as_ref(), path).await?;
            tracing::info!(persons, incidents, "Store seeded");
        }
        None => {
            tracing::warn!("No seed file configured; serving an empty store");
        }
    }

    // Initialize the search service with optional response caching
    let mut service = SearchService::new(store);
    if config.cache.enabled {
        service = service.with_cache(ResponseCache::new(
            config.cache.max_capacity,
            Duration::from_secs(config.cache.ttl_secs),
        ));
        tracing::info!(
            max_capacity = config.cache.max_capacity,
            ttl_secs = config.cache.ttl_secs,
            "Response cache enabled"
        );
    } else {
        tracing::info!("Response cache disabled in configuration");
    }

    // Build HTTP router
    let app_state = AppState::new(Arc::new(service));
    let app = build_router(app_state, &config.server);

    // Start HTTP server
    let addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP API server listening on http://{}", addr);
    tracing::info!("   Health check: http://{}/health", addr);
    tracing::info!("   Search API: http://{}/incidents", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                tracing::error!("HTTP server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}
