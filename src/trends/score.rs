// Salience scoring — occurrence count weighted by order and stop-word density.

use super::analyzer::TextAnalyzer;
use super::ngram::NgramRecord;

/// Score one aggregated n-gram.
///
/// `occurrences * order * (non-stop tokens / order)`: frequent phrases win,
/// longer phrases win, and phrases made mostly of stop words lose. An n-gram
/// that is all stop words scores exactly zero.
///
/// Keys of a single character are forced to zero regardless of frequency —
/// stray initials and possessive remnants slip past the stop list and would
/// otherwise outrank real phrases.
///
/// Pure function of the record; scores for different keys are independent.
pub fn score_record(analyzer: &dyn TextAnalyzer, record: &NgramRecord) -> f64 {
    // Char count, not byte length — the key may not be ASCII for every analyzer.
    if record.key.chars().count() <= 1 {
        return 0.0;
    }

    let non_stop = record
        .tokens
        .iter()
        .filter(|token| !analyzer.is_stop_word(token))
        .count();
    let stop_weight = non_stop as f64 / record.order as f64;

    record.occurrences as f64 * record.order as f64 * stop_weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::analyzer::EnglishAnalyzer;

    fn record(tokens: &[&str], occurrences: u64) -> NgramRecord {
        NgramRecord {
            order: tokens.len(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            key: tokens.join(" "),
            occurrences,
        }
    }

    #[test]
    fn frequency_order_and_stop_density_multiply() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        // 2 non-stop tokens of 2: 3 * 2 * 1.0
        let score = score_record(&analyzer, &record(&["white", "house"], 3));
        assert_eq!(score, 6.0);

        // 1 non-stop token of 2: 3 * 2 * 0.5
        let score = score_record(&analyzer, &record(&["the", "house"], 3));
        assert_eq!(score, 3.0);
    }

    #[test]
    fn all_stop_words_score_zero() {
        let analyzer = EnglishAnalyzer::new().unwrap();
        let score = score_record(&analyzer, &record(&["of", "the"], 50));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn single_character_keys_score_zero() {
        let analyzer = EnglishAnalyzer::new().unwrap();
        let score = score_record(&analyzer, &record(&["s"], 1000));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn two_character_keys_are_not_suppressed() {
        let analyzer = EnglishAnalyzer::new().unwrap();
        // "xi" is not in the stop list: 4 * 1 * 1.0
        let score = score_record(&analyzer, &record(&["xi"], 4));
        assert_eq!(score, 4.0);
    }
}
