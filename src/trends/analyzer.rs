// Text analysis seam — tokenization and stop-word lookup.
//
// The engine never splits text itself; everything it knows about words comes
// through this trait. The default implementation handles English using the
// stop-words crate's list and a pair of small regexes.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Tokenization and stop-word capability consumed by the trend engine.
pub trait TextAnalyzer: Send + Sync {
    /// Split text into lowercase word tokens.
    ///
    /// Must be pure and deterministic. Empty or word-less input yields an
    /// empty vec, never an error.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Whether a token is a high-frequency, low-information word.
    fn is_stop_word(&self, token: &str) -> bool;
}

/// Default English analyzer.
///
/// Tokenization lowercases the input, drops elisions ("house's" -> "house",
/// "don't" -> "don"), and extracts runs of letters optionally followed by
/// digits. Bare numbers and punctuation never become tokens.
pub struct EnglishAnalyzer {
    word: Regex,
    elision: Regex,
    stop_words: HashSet<String>,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        let word = Regex::new(r"[a-z][a-z0-9]*").context("Failed to compile word pattern")?;
        let elision = Regex::new(r"'[a-z]*").context("Failed to compile elision pattern")?;
        let stop_words = get(LANGUAGE::English).into_iter().collect();

        Ok(Self {
            word,
            elision,
            stop_words,
        })
    }
}

impl TextAnalyzer for EnglishAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.elision.replace_all(&lowered, "");
        self.word
            .find_iter(&stripped)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> EnglishAnalyzer {
        EnglishAnalyzer::new().unwrap()
    }

    #[test]
    fn tokenize_lowercases_and_splits() {
        let tokens = analyzer().tokenize("White House Briefing");
        assert_eq!(tokens, vec!["white", "house", "briefing"]);
    }

    #[test]
    fn tokenize_strips_elisions() {
        let tokens = analyzer().tokenize("the senator's aide isn't here");
        assert_eq!(tokens, vec!["the", "senator", "aide", "isn", "here"]);
    }

    #[test]
    fn tokenize_drops_punctuation_and_numbers() {
        let tokens = analyzer().tokenize("Markets fall 3.5% -- again!");
        assert_eq!(tokens, vec!["markets", "fall", "again"]);
    }

    #[test]
    fn tokenize_empty_yields_empty() {
        assert!(analyzer().tokenize("").is_empty());
        assert!(analyzer().tokenize("??? 123 ...").is_empty());
    }

    #[test]
    fn stop_word_lookup() {
        let a = analyzer();
        assert!(a.is_stop_word("the"));
        assert!(!a.is_stop_word("house"));
    }
}
