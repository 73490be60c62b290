// Document collection — fan out over the configured feeds and flatten.

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::parse::parse_feed;
use super::source::FeedSource;
use super::Document;

/// How many feeds to fetch at a time.
const FETCH_CONCURRENCY: usize = 4;

/// Fetch and parse every configured feed, flattening the entries into one
/// document batch.
///
/// Fetches run concurrently but results are flattened in configured feed
/// order, so the batch is reproducible for fixed feed content. A feed that
/// fails to fetch or parse is logged and skipped — one bad feed never loses
/// the signal from the rest.
pub async fn collect_documents(source: &dyn FeedSource, urls: &[String]) -> Vec<Document> {
    let per_feed: Vec<Vec<Document>> = stream::iter(urls.iter().cloned())
        .map(|url| async move {
            match source.fetch(&url).await {
                Ok(xml) => match parse_feed(&xml) {
                    Ok(documents) => {
                        debug!(url = url.as_str(), entries = documents.len(), "Parsed feed");
                        documents
                    }
                    Err(e) => {
                        warn!(url = url.as_str(), error = %e, "Skipping unparseable feed");
                        Vec::new()
                    }
                },
                Err(e) => {
                    warn!(url = url.as_str(), error = %e, "Skipping unreachable feed");
                    Vec::new()
                }
            }
        })
        .buffered(FETCH_CONCURRENCY)
        .collect()
        .await;

    let documents: Vec<Document> = per_feed.into_iter().flatten().collect();

    info!(
        feeds = urls.len(),
        documents = documents.len(),
        "Collected feed documents"
    );

    documents
}
