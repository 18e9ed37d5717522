use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::MemoryStore;
use tracing_subscriber::EnvFilter;

use veerpreps_admin::server::{
    config::Config,
    model::app::AppState,
    router, startup,
};

static DEFAULT_LOG_FILTER: &str = "veerpreps_admin=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app = router::routes().with_state(AppState::from(&config));

    let app = match config.valkey_url.as_deref() {
        Some(valkey_url) => match startup::connect_to_session_store(valkey_url).await {
            Ok(store) => app.layer(startup::session_layer(store)),
            Err(e) => {
                tracing::error!("Failed to connect to session store: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("VALKEY_URL is not set, sessions are kept in memory");
            app.layer(startup::session_layer(MemoryStore::default()))
        }
    };

    let app = app.layer(TraceLayer::new_for_http());

    let listener = match TcpListener::bind(config.server_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.server_address, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", config.server_address);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
