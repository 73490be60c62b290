// Feed acquisition — fetching, parsing, and normalizing syndicated feeds.

pub mod collect;
pub mod parse;
pub mod source;

use serde::{Deserialize, Serialize};

/// A normalized feed entry — just the fields the trend engine consumes.
///
/// Missing titles or descriptions become empty strings; empty text tokenizes
/// to nothing and contributes nothing downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub description: String,
}
