//! Climate 2045 - Backend Server
//!
//! Projects present-day weather into a synthesized 2045 day under a chosen
//! emissions scenario and intervention basket.

use axum::{routing::get, Router};
use shared::AnomalyProvider;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use external::{OpenWeatherClient, WeatherSource};
use services::ProjectionService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub projection: Arc<ProjectionService>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "c45_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;
    config
        .projection
        .validate()
        .map_err(|e| error::AppError::Configuration(e.to_string()))?;

    tracing::info!("Starting Climate 2045 Server");
    tracing::info!("Environment: {}", config.environment);

    // Anomaly provider with optional bundled dataset
    let dataset = services::load_dataset(config.dataset.path.as_deref());
    let provider = match dataset {
        Some(dataset) => AnomalyProvider::with_dataset(config.projection, dataset)?,
        None => AnomalyProvider::new(config.projection)?,
    };

    let weather_source: Option<Arc<dyn WeatherSource>> = match &config.weather.api_key {
        Some(key) if !key.is_empty() => Some(Arc::new(OpenWeatherClient::new(
            key.clone(),
            config.weather.api_endpoint.clone(),
        ))),
        _ => {
            tracing::warn!(
                "No weather API key configured; current-conditions projections are disabled"
            );
            None
        }
    };

    let max_cards = config.impacts.max_cards.clamp(2, 4);
    let projection = ProjectionService::new(Arc::new(provider), weather_source, max_cards);

    // Create application state
    let state = AppState {
        projection: Arc::new(projection),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let ip = config
        .server
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|e| error::AppError::Configuration(format!("Invalid server.host: {}", e)))?;
    let addr = SocketAddr::from((ip, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Climate 2045 API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
