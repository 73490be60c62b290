use std::env;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Nothing here
/// is secret — feed URLs and tuning knobs only.
pub struct Config {
    /// Feed URLs to collect (GROUNDSWELL_FEEDS, comma-separated)
    pub feed_urls: Vec<String>,
    /// How many trending phrases to return (GROUNDSWELL_TREND_COUNT)
    pub trend_count: usize,
    /// Highest n-gram order generated per text field (GROUNDSWELL_NGRAM_MAX)
    pub ngram_max: usize,
    /// Whether entry descriptions are analyzed alongside titles
    /// (GROUNDSWELL_INCLUDE_DESCRIPTIONS)
    pub include_descriptions: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the feed list — call `require_feeds`
    /// before any operation that collects documents.
    pub fn load() -> Result<Self> {
        let feed_urls = env::var("GROUNDSWELL_FEEDS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();

        let trend_count = parse_count("GROUNDSWELL_TREND_COUNT", 10)?;
        let ngram_max = parse_count("GROUNDSWELL_NGRAM_MAX", crate::trends::DEFAULT_MAX_ORDER)?;
        if ngram_max == 0 {
            anyhow::bail!("GROUNDSWELL_NGRAM_MAX must be at least 1");
        }

        let include_descriptions = match env::var("GROUNDSWELL_INCLUDE_DESCRIPTIONS").as_deref() {
            Ok("false") | Ok("0") | Ok("no") => false,
            _ => true,
        };

        Ok(Self {
            feed_urls,
            trend_count,
            ngram_max,
            include_descriptions,
        })
    }

    /// Check that at least one feed URL is configured.
    /// Call this before any operation that collects documents.
    pub fn require_feeds(&self) -> Result<()> {
        if self.feed_urls.is_empty() {
            anyhow::bail!(
                "GROUNDSWELL_FEEDS not set. Add a comma-separated list of feed URLs\n\
                 to your .env file, e.g.\n\
                 GROUNDSWELL_FEEDS=https://example.com/rss,https://example.org/atom.xml"
            );
        }
        Ok(())
    }
}

fn parse_count(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
