// N-gram generation and the aggregated record type.

/// One aggregated n-gram and its occurrence count across the whole batch.
///
/// `key` is the canonical form — tokens joined by single spaces — and is also
/// the aggregation map's key, so each distinct token sequence maps to exactly
/// one record per run.
#[derive(Debug, Clone)]
pub struct NgramRecord {
    /// Number of constituent tokens
    pub order: usize,
    /// The tokens, in document order
    pub tokens: Vec<String>,
    /// Tokens joined by single spaces
    pub key: String,
    /// Times this exact sequence appeared across all documents and fields
    pub occurrences: u64,
}

/// All contiguous n-grams of order `n`, at every start offset, left to right.
///
/// A sequence shorter than `n` yields nothing. `n` must be at least 1.
pub fn generate_ngrams<'a>(tokens: &'a [String], n: usize) -> impl Iterator<Item = &'a [String]> {
    debug_assert!(n >= 1, "n-gram order must be at least 1");
    tokens.windows(n)
}
