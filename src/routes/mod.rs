mod account;
mod extract;
mod health;
mod middlewares;
mod statement;
mod swagger;
use health::health_checker_handler;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;

/// Builds the full application router around an already constructed state
pub fn make_app(state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = build_cors(state.config.cors_origin.as_deref())?;

    let ret = Router::new()
        .route("/", get(health_checker_handler))
        .route("/health", get(health_checker_handler))
        .nest("/account", account::account_routes(state.clone()))
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(ret)
}

fn build_cors(origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Ok(match origin {
        Some(origin) => {
            info!("CORS restricted to {origin}");
            cors.allow_origin(HeaderValue::from_str(origin)?)
        }
        None => cors.allow_origin(Any),
    })
}
