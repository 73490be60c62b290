// Topic selection — greedy walk in descending score order with substring
// collision resolution.
//
// A high-order phrase and its fragments ("white house press briefing",
// "white house", "press") all accumulate independent scores. Without
// collision resolution the result would be a pile of overlapping variants of
// one story; the longer-wins rule keeps the specific phrase and lets the
// whole cluster consume a single slot.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Select up to `target_count` mutually non-overlapping topics from the
/// scored keys, highest score first.
///
/// Equal scores are selected in ascending lexicographic key order, so the
/// output is reproducible for a fixed input. Returns fewer than
/// `target_count` topics when candidates run out.
pub fn select_topics(scored: &HashMap<String, f64>, target_count: usize) -> Vec<String> {
    // Ascending sort; candidates are popped from the end. The secondary key
    // is reversed so that among ties the lexicographically smallest pops first.
    let mut ranked: Vec<&str> = scored.keys().map(String::as_str).collect();
    ranked.sort_by(|a, b| {
        scored[*a]
            .partial_cmp(&scored[*b])
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.cmp(a))
    });

    let mut topics: Vec<String> = Vec::new();
    let mut remaining = target_count;

    while remaining > 0 {
        let Some(candidate) = ranked.pop() else { break };
        if place_topic(&mut topics, candidate) {
            remaining -= 1;
        }
    }

    topics
}

/// Try to add `candidate` to the topic list.
///
/// A collision is any substring containment in either direction, at any
/// offset — "ash" collides with "cash". On the first collision the longer of
/// the two strings takes the colliding topic's slot (equal lengths keep the
/// existing topic), the list size is unchanged, and scanning stops. Returns
/// true when the candidate occupied a new slot.
fn place_topic(topics: &mut Vec<String>, candidate: &str) -> bool {
    for i in 0..topics.len() {
        if topics[i].contains(candidate) || candidate.contains(topics[i].as_str()) {
            if candidate.len() > topics[i].len() {
                topics[i] = candidate.to_string();
            }
            return false;
        }
    }
    topics.push(candidate.to_string());
    true
}
