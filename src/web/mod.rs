// Web service — the axum JSON API.
//
// One read endpoint: GET /trending collects the configured feeds and runs
// the detector per request. No state survives between requests; unknown
// paths fall through to a JSON 404 object.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feeds::source::FeedSource;
use crate::trends::analyzer::TextAnalyzer;

pub mod handlers;

/// Shared application state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn FeedSource>,
    pub analyzer: Arc<dyn TextAnalyzer>,
}

/// Start the web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Groundswell listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so tests can drive it without a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/trending", get(handlers::get_trending))
        .route("/health", get(handlers::health))
        .fallback(not_found)
        .layer(CorsLayer::new().allow_origin(tower_http::cors::Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> Response {
    api_error(StatusCode::NOT_FOUND, "Not Found")
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
