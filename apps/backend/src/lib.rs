pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use spelling_core::{IntervalScheduler, ReviewScheduler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub scheduler: Arc<dyn ReviewScheduler>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState {
        db: Arc::new(db),
        scheduler: Arc::new(IntervalScheduler::default()),
    };

    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router for the given state.
pub fn router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Profile routes
        .route("/api/profile/status", get(routes::profile::status))
        // Word list routes
        .route("/api/wordlists/import", post(routes::wordlists::import))
        .route("/api/wordlists", get(routes::wordlists::list))
        // Word routes
        .route("/api/words", get(routes::words::list))
        .route("/api/words/review", get(routes::words::review))
        .route("/api/words/progress", get(routes::words::progress))
        // Practice routes
        .route("/api/practice/queue", get(routes::practice::queue))
        .route("/api/practice/attempt", post(routes::practice::attempt))
        // Session routes
        .route("/api/sessions", post(routes::sessions::start))
        .route("/api/sessions", get(routes::sessions::list))
        .route("/api/sessions/:id", get(routes::sessions::get))
        .route("/api/sessions/:id/finish", post(routes::sessions::finish))
        // Settings routes
        .route("/api/settings", get(routes::settings::get))
        .route("/api/settings", put(routes::settings::update))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/profile/register", post(routes::profile::register))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
