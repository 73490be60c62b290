// GET /trending — collect the configured feeds and rank trending phrases.
//
// The detection run is stateless: each request fetches fresh documents,
// builds its own aggregation map, and discards it with the response.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::feeds::collect::collect_documents;
use crate::trends::TrendDetector;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    /// Overrides the configured trend count for this request
    pub count: Option<usize>,
}

pub async fn get_trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Response {
    if let Err(e) = state.config.require_feeds() {
        return api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
    }

    let documents = collect_documents(state.source.as_ref(), &state.config.feed_urls).await;

    let detector = TrendDetector {
        max_order: state.config.ngram_max,
        include_descriptions: state.config.include_descriptions,
    };
    let count = query.count.unwrap_or(state.config.trend_count);
    let report = detector.detect(state.analyzer.as_ref(), &documents, count);

    info!(
        documents = documents.len(),
        trends = report.trends.len(),
        "Served trending request"
    );

    Json(serde_json::json!({
        "trends": report.trends,
        "document_count": documents.len(),
        "generated_at": Utc::now(),
    }))
    .into_response()
}

/// Liveness probe — always returns 200 OK.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}
