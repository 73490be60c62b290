// Trend detection engine — n-gram frequency analysis over a document batch.
//
// Pipeline: tokenize every configured text field, slide n-gram windows over
// the tokens, accumulate occurrence counts in a per-run map, score each
// record, then greedily select non-overlapping topics in descending score
// order. One synchronous batch computation; no I/O, no cross-run state.

pub mod aggregate;
pub mod analyzer;
pub mod ngram;
pub mod score;
pub mod select;

use std::collections::HashMap;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::feeds::Document;
use self::analyzer::TextAnalyzer;
use self::ngram::NgramRecord;

/// Default maximum n-gram order: tokens, bigrams, and trigrams.
pub const DEFAULT_MAX_ORDER: usize = 3;

/// Ranked result of one detection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    /// Selected phrases, most salient first
    pub trends: Vec<String>,
}

impl TrendReport {
    /// Display the report as a numbered list in the terminal.
    ///
    /// This is the output of `groundswell trends` — a quick way to check
    /// whether the configured feeds produce sensible phrases.
    pub fn display(&self, document_count: usize) {
        println!(
            "\n{}",
            format!("=== Trending now (from {document_count} documents) ===").bold()
        );
        println!();

        if self.trends.is_empty() {
            println!(
                "  {}",
                "No trends detected. Are the configured feeds reachable?".dimmed()
            );
            return;
        }

        for (i, trend) in self.trends.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, trend.bold());
        }
        println!();
    }
}

/// Batch trend detector.
///
/// Owns no state between runs — every call to `detect` builds its own
/// aggregation map and discards it with the returned report.
pub struct TrendDetector {
    /// Highest n-gram order generated per text field
    pub max_order: usize,
    /// Whether entry descriptions are analyzed alongside titles
    pub include_descriptions: bool,
}

impl Default for TrendDetector {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
            include_descriptions: true,
        }
    }
}

impl TrendDetector {
    /// Rank the `trend_count` most salient phrases across `documents`.
    ///
    /// An empty batch or a zero count yields an empty report; a count larger
    /// than the number of distinct eligible n-grams returns what exists.
    pub fn detect(
        &self,
        analyzer: &dyn TextAnalyzer,
        documents: &[Document],
        trend_count: usize,
    ) -> TrendReport {
        if documents.is_empty() || trend_count == 0 {
            return TrendReport { trends: Vec::new() };
        }

        let mut weights: HashMap<String, NgramRecord> = HashMap::new();
        for document in documents {
            for field in self.fields_of(document) {
                aggregate::accumulate(&mut weights, analyzer, field, self.max_order);
            }
        }

        let scored: HashMap<String, f64> = weights
            .values()
            .map(|record| (record.key.clone(), score::score_record(analyzer, record)))
            .collect();

        TrendReport {
            trends: select::select_topics(&scored, trend_count),
        }
    }

    /// The text fields of one document that contribute to the run.
    fn fields_of<'a>(&self, document: &'a Document) -> Vec<&'a str> {
        let mut fields = vec![document.title.as_str()];
        if self.include_descriptions {
            fields.push(document.description.as_str());
        }
        fields
    }
}
