// Feed parsing — raw XML into normalized documents.
//
// feed-rs handles both RSS and Atom, including CDATA-wrapped titles and
// descriptions. Descriptions frequently carry embedded HTML; markup is
// stripped here so tags never reach the tokenizer.

use anyhow::{Context, Result};
use feed_rs::parser;
use regex_lite::Regex;

use super::Document;

/// Parse one feed body into documents.
///
/// Entries missing a title or description contribute empty strings rather
/// than failing the feed.
pub fn parse_feed(xml: &str) -> Result<Vec<Document>> {
    let feed = parser::parse(xml.as_bytes()).context("Failed to parse feed XML")?;
    let markup = Regex::new(r"<[^>]+>").context("Failed to compile markup pattern")?;

    let documents = feed
        .entries
        .into_iter()
        .map(|entry| Document {
            title: entry.title.map(|text| text.content).unwrap_or_default(),
            description: entry
                .summary
                .map(|text| strip_markup(&markup, &text.content))
                .unwrap_or_default(),
        })
        .collect();

    Ok(documents)
}

/// Replace HTML tags with spaces and decode the basic named entities.
///
/// `&amp;` is decoded last so "&amp;lt;" does not turn into a tag.
fn strip_markup(markup: &Regex, html: &str) -> String {
    let text = markup.replace_all(html, " ");
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
