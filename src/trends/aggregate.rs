// Frequency aggregation — folding n-grams into the per-run weight map.

use std::collections::HashMap;

use super::analyzer::TextAnalyzer;
use super::ngram::{generate_ngrams, NgramRecord};

/// Tokenize one text field and fold all its n-grams of order 1..=max_order
/// into the shared map.
///
/// Increment-or-insert on the canonical key. The map is owned by a single
/// detection run and updates are applied sequentially in document order, so
/// occurrence counts are reproducible for a fixed input.
pub fn accumulate(
    map: &mut HashMap<String, NgramRecord>,
    analyzer: &dyn TextAnalyzer,
    text: &str,
    max_order: usize,
) {
    let tokens = analyzer.tokenize(text);
    for n in 1..=max_order {
        for gram in generate_ngrams(&tokens, n) {
            let key = gram.join(" ");
            map.entry(key)
                .and_modify(|record| record.occurrences += 1)
                .or_insert_with_key(|key| NgramRecord {
                    occurrences: 1,
                    order: n,
                    key: key.clone(),
                    tokens: gram.to_vec(),
                });
        }
    }
}
