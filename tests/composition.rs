// Composition tests — the pipeline chained end to end without a network.
//
// Static feed XML -> parser -> documents -> detector -> report, and the
// axum router driven through tower::ServiceExt::oneshot with a stub
// FeedSource standing in for HTTP.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use groundswell::config::Config;
use groundswell::feeds::parse::parse_feed;
use groundswell::feeds::source::FeedSource;
use groundswell::trends::analyzer::EnglishAnalyzer;
use groundswell::trends::TrendDetector;
use groundswell::web::{build_router, AppState};

const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Wire</title>
    <item>
      <title>White house briefing on trade</title>
      <description>Officials hold a white house briefing</description>
    </item>
    <item>
      <title>Trade talks stall</title>
      <description><![CDATA[<p>Negotiators say <b>trade talks</b> stalled</p>]]></description>
    </item>
    <item>
      <title>White house briefing continues</title>
      <description></description>
    </item>
  </channel>
</rss>"#;

// ============================================================
// Chain: XML -> documents -> report
// ============================================================

#[test]
fn parsed_feed_produces_ranked_trends() {
    let documents = parse_feed(FEED_XML).unwrap();
    assert_eq!(documents.len(), 3);

    let analyzer = EnglishAnalyzer::new().unwrap();
    let detector = TrendDetector::default();
    let report = detector.detect(&analyzer, &documents, 3);

    assert!(!report.trends.is_empty());
    assert!(report.trends.len() <= 3);
    // "white house briefing" appears in three fields; some phrase containing
    // "briefing" must surface at the top.
    assert!(
        report.trends.iter().any(|t| t.contains("briefing")),
        "expected a briefing phrase in {:?}",
        report.trends
    );
    // No key is ever selected twice.
    let mut deduped = report.trends.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), report.trends.len());
}

// ============================================================
// Router — stubbed feed source
// ============================================================

/// Serves the canned XML for every URL.
struct StaticSource;

#[async_trait]
impl FeedSource for StaticSource {
    async fn fetch(&self, _url: &str) -> Result<String> {
        Ok(FEED_XML.to_string())
    }
}

/// Fails every fetch, like a dead upstream.
struct FailingSource;

#[async_trait]
impl FeedSource for FailingSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        anyhow::bail!("connection refused: {url}")
    }
}

fn test_config(feed_urls: Vec<String>) -> Config {
    Config {
        feed_urls,
        trend_count: 5,
        ngram_max: 3,
        include_descriptions: true,
    }
}

fn test_state(source: Arc<dyn FeedSource>, feed_urls: Vec<String>) -> AppState {
    AppState {
        config: Arc::new(test_config(feed_urls)),
        source,
        analyzer: Arc::new(EnglishAnalyzer::new().unwrap()),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = build_router(test_state(
        Arc::new(StaticSource),
        vec!["http://feeds.test/wire".to_string()],
    ));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn trending_returns_ranked_phrases() {
    let app = build_router(test_state(
        Arc::new(StaticSource),
        vec!["http://feeds.test/wire".to_string()],
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/trending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let trends = json["trends"].as_array().unwrap();
    assert!(!trends.is_empty());
    assert!(trends.len() <= 5);
    assert_eq!(json["document_count"], 3);
    assert!(json["generated_at"].is_string());
}

#[tokio::test]
async fn trending_count_parameter_overrides_config() {
    let app = build_router(test_state(
        Arc::new(StaticSource),
        vec!["http://feeds.test/wire".to_string()],
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/trending?count=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["trends"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn trending_malformed_count_is_rejected() {
    let app = build_router(test_state(
        Arc::new(StaticSource),
        vec!["http://feeds.test/wire".to_string()],
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/trending?count=lots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dead_feeds_degrade_to_an_empty_report() {
    let app = build_router(test_state(
        Arc::new(FailingSource),
        vec![
            "http://feeds.test/a".to_string(),
            "http://feeds.test/b".to_string(),
        ],
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/trending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["trends"].as_array().unwrap().is_empty());
    assert_eq!(json["document_count"], 0);
}

#[tokio::test]
async fn missing_feed_configuration_is_a_server_error() {
    let app = build_router(test_state(Arc::new(StaticSource), Vec::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/trending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn unknown_paths_get_a_json_404() {
    let app = build_router(test_state(
        Arc::new(StaticSource),
        vec!["http://feeds.test/wire".to_string()],
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not Found");
}
