pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::LeitnerScheduler;
use crate::store::{CardStore, MemoryCardStore, PgCardStore};
use leitner_core::{Clock, SystemClock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CardStore>,
    pub scheduler: LeitnerScheduler,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn CardStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            scheduler: LeitnerScheduler::new(store.clone()),
            store,
            clock,
        }
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/cards", get(routes::cards::list).post(routes::cards::create))
        .route("/cards/quizz", get(routes::cards::quiz))
        .route("/cards/:card_id", get(routes::cards::get))
        .route("/cards/:card_id/answer", patch(routes::cards::answer))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn CardStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let store = PgCardStore::connect(database_url).await?;

            tracing::info!("Running migrations...");
            store.run_migrations().await?;

            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, cards are kept in memory only");
            Arc::new(MemoryCardStore::new())
        }
    };

    let clock = Arc::new(SystemClock::new(config.daily_reset_hour));
    let app = router(AppState::new(store, clock));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
