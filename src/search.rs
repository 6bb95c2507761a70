//! Linear-scan relevance search over a phrase catalog.
//!
//! One pass over the full entry collection per call: every entry is checked
//! against the query independently, matched entries are scored, and the
//! whole set is sorted by score. No index, no early exit — the entire set
//! must be scored before it can be ranked, and at catalog sizes of a few
//! thousand entries the scan comfortably beats the cost of maintaining an
//! index that would be rebuilt on every keystroke anyway.
//!
//! # Matching rules
//!
//! - Queries shorter than 2 characters are a passthrough: every entry comes
//!   back with score 0 and no matched fields, in input order.
//! - A pure-digit query matches entry ids exactly and never falls through to
//!   matching the digits as text against the id.
//! - Digits embedded in a longer query ("pua 123") match ids too.
//! - Text fields match when the normalized field contains every word of the
//!   normalized query, in any order, anywhere. Deliberate: "aloha aina"
//!   matches "papale ai aina, ku u aloha" even though the words are not
//!   adjacent.
//! - Tags are checked one by one, not concatenated; any hit marks the entry.

use crate::normalize::normalize;
use crate::scoring::relevance_score;
use crate::types::{Entry, MatchedField, SearchResult};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Word-boundary-delimited digit runs, for queries mixing numbers with text.
fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d+\b").unwrap())
}

/// Extract standalone positive integers embedded in a query.
fn embedded_numbers(query: &str) -> Vec<u32> {
    number_re()
        .find_iter(query)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .collect()
}

/// Whether a normalized field satisfies the query word set.
///
/// A single word is a substring test; multiple words must all be present
/// anywhere in the field. An empty word set matches nothing.
fn matches_query(normalized_text: &str, query_words: &[&str]) -> bool {
    match query_words {
        [] => false,
        [word] => normalized_text.contains(word),
        words => words.iter().all(|word| normalized_text.contains(word)),
    }
}

/// Search entries for a free-text query, returning scored results sorted by
/// descending relevance (ties broken by ascending id).
///
/// Deterministic, single pass, fully materialized. Entries with no matching
/// field are absent from the output entirely.
pub fn search(entries: &[Entry], query: &str) -> Vec<SearchResult> {
    // Below the minimum query length there is nothing to rank: pass the
    // whole collection through unscored, preserving input order.
    if query.chars().count() < 2 {
        return entries
            .iter()
            .map(|entry| SearchResult {
                entry: entry.clone(),
                relevance_score: 0,
                matched_fields: Vec::new(),
            })
            .collect();
    }

    let norm_query = normalize(query);
    let query_words: Vec<&str> = norm_query.split(' ').filter(|w| !w.is_empty()).collect();

    let trimmed = query.trim();
    let is_pure_number = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit());
    let pure_number: Option<u32> = if is_pure_number {
        trimmed.parse().ok()
    } else {
        None
    };
    // Only consulted for mixed queries; a pure-number query matches ids
    // exactly or not at all.
    let query_numbers: Vec<u32> = if is_pure_number {
        Vec::new()
    } else {
        embedded_numbers(query)
    };

    let mut results: Vec<SearchResult> = Vec::new();

    for entry in entries {
        let mut matched: Vec<MatchedField> = Vec::new();

        if is_pure_number {
            if pure_number == Some(entry.id) {
                matched.push(MatchedField::Id);
            }
        } else if query_numbers.contains(&entry.id) {
            matched.push(MatchedField::Id);
        }

        let norm_primary = normalize(&entry.primary_text);
        if matches_query(&norm_primary, &query_words) {
            matched.push(MatchedField::Primary);
        }

        let norm_translation = entry.translation.as_deref().map(normalize);
        if let Some(translation) = norm_translation.as_deref() {
            if matches_query(translation, &query_words) {
                matched.push(MatchedField::Translation);
            }
        }

        if let Some(gloss) = entry.gloss.as_deref() {
            if matches_query(&normalize(gloss), &query_words) {
                matched.push(MatchedField::Gloss);
            }
        }

        if entry
            .tags
            .iter()
            .any(|tag| matches_query(&normalize(tag), &query_words))
        {
            matched.push(MatchedField::Tags);
        }

        if matched.is_empty() {
            continue;
        }

        let score = relevance_score(
            &matched,
            &norm_query,
            &norm_primary,
            norm_translation.as_deref(),
        );
        results.push(SearchResult {
            entry: entry.clone(),
            relevance_score: score,
            matched_fields: matched,
        });
    }

    results.sort_by(|a, b| match b.relevance_score.cmp(&a.relevance_score) {
        Ordering::Equal => a.entry.id.cmp(&b.entry.id),
        other => other,
    });

    results
}
