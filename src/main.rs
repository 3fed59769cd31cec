//! Gateway server entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::middleware;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use visual_forge::adapters::ai::{
    ClipdropConfig, ClipdropProvider, GeminiConfig, GeminiProvider,
};
use visual_forge::adapters::http::generate::{routes, GatewayAppState};
use visual_forge::adapters::http::middleware::rate_limit_middleware;
use visual_forge::adapters::rate_limiter::InMemoryRateLimiter;
use visual_forge::config::AppConfig;
use visual_forge::ports::RateLimiter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    if !config.ai.has_gemini() {
        tracing::warn!("no Gemini API key configured, prompt enhancement will use fallbacks");
    }
    if !config.ai.has_clipdrop() {
        tracing::warn!("no Clipdrop API key configured, image generation will be rejected");
    }

    let text_model = Arc::new(GeminiProvider::new(
        GeminiConfig::new(config.ai.gemini_api_key.clone())
            .with_model(config.ai.gemini_model.clone())
            .with_timeout(config.ai.text_timeout()),
    ));
    let image_model = Arc::new(ClipdropProvider::new(
        ClipdropConfig::new(config.ai.clipdrop_api_key.clone())
            .with_timeout(config.ai.image_timeout()),
    ));

    let state = GatewayAppState::new(text_model, image_model);

    let limiter: Arc<dyn RateLimiter> =
        Arc::new(InMemoryRateLimiter::new(config.rate_limit));

    let cors = build_cors_layer(&config);

    let app = routes()
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            limiter.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting gateway server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
