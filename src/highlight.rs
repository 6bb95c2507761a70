//! Query highlighting that survives normalization.
//!
//! Matching happens in normalized space ("aloha aina"), but highlights must
//! land on the original text ("aloha ʻāina"). Normalization changes string
//! length — diacritics vanish, apostrophe variants collapse, space runs
//! shrink — so a match offset in the normalized string cannot be used on the
//! original directly. Instead this module re-derives the normalization one
//! character at a time, recording which original character produced each
//! normalized character, and maps match spans back through that table.
//!
//! The mapping is guarded twice: a cheap whole-query reject up front (never
//! highlight "had" when searching "happy"), and a per-span re-normalization
//! check before a span is accepted. Index arithmetic is never trusted bare.
//!
//! Overlapping spans from different query words are resolved by processing
//! spans in order of descending start position and keeping the first span
//! accepted — which favors the later-starting span. That mirrors the
//! behavior highlight consumers have always seen; see DESIGN.md.

use crate::normalize::{fold_char, normalize};

/// The pair of strings wrapped around each highlighted span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    open: String,
    close: String,
}

impl Marker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Marker {
            open: open.into(),
            close: close.into(),
        }
    }

    /// HTML `<mark>` tags, the shape web consumers render directly.
    pub fn html() -> Self {
        Marker::new("<mark>", "</mark>")
    }
}

/// Find `needle` in `haystack` starting at `from`, by character index.
fn find_sub(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Build the normalized-index → original-index table by replaying the
/// per-character fold against the already-normalized text.
///
/// The replay applies the same space-collapse rule as `normalize` and
/// cross-checks every produced character against the normalized text; on any
/// disagreement the affected character is skipped and the hole stays `None`,
/// to be rejected later by span validation rather than mapped wrongly.
fn position_map(text_chars: &[char], norm_chars: &[char]) -> Vec<Option<usize>> {
    let mut map: Vec<Option<usize>> = vec![None; norm_chars.len()];
    let mut norm_pos = 0usize;
    let mut last_was_space = false;
    let mut buf = String::new();

    for (orig_pos, &c) in text_chars.iter().enumerate() {
        if norm_pos >= norm_chars.len() {
            break;
        }
        buf.clear();
        fold_char(c, &mut buf);
        for folded in buf.chars() {
            if folded == ' ' {
                if last_was_space {
                    continue;
                }
                last_was_space = true;
            } else {
                last_was_space = false;
            }
            if norm_pos < norm_chars.len() && norm_chars[norm_pos] == folded {
                map[norm_pos] = Some(orig_pos);
                norm_pos += 1;
            } else {
                // Drift (e.g. the leading space trimmed by normalize).
                break;
            }
        }
    }

    map
}

/// Wrap every query match in `text` with the marker, leaving the text
/// untouched when the query is too short or not present.
///
/// Matching is diacritic- and case-insensitive: a plain-ASCII query
/// highlights the corresponding accented span in the original. Each word of
/// a multi-word query is highlighted independently once the whole query has
/// passed the containment check.
pub fn highlight(text: &str, query: &str, marker: &Marker) -> String {
    if query.chars().count() < 2 {
        return text.to_string();
    }

    let norm_query = normalize(query);
    let norm_text = normalize(text);

    // Whole-query reject: multi-word per-word highlighting below would
    // otherwise mark partial hits in text the full query never matched.
    if norm_query.is_empty() || !norm_text.contains(&norm_query) {
        return text.to_string();
    }

    let query_words: Vec<Vec<char>> = norm_query
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(|w| w.chars().collect())
        .collect();
    if query_words.is_empty() {
        return text.to_string();
    }

    let text_chars: Vec<char> = text.chars().collect();
    let norm_chars: Vec<char> = norm_text.chars().collect();
    let map = position_map(&text_chars, &norm_chars);

    // Collect candidate spans in original-text coordinates, end-exclusive.
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for word in &query_words {
        let word_str: String = word.iter().collect();
        if !norm_text.contains(&word_str) {
            continue;
        }
        let mut search_pos = 0usize;
        while let Some(pos) = find_sub(&norm_chars, word, search_pos) {
            let start = map.get(pos).copied().flatten();
            let end = map.get(pos + word.len() - 1).copied().flatten();
            if let (Some(start), Some(end)) = (start, end) {
                if start <= end && end < text_chars.len() {
                    // Re-validate against drift: the original slice must
                    // still normalize to something containing the word.
                    let original: String = text_chars[start..=end].iter().collect();
                    if normalize(&original).contains(&word_str) {
                        spans.push((start, end + 1));
                    }
                }
            }
            // Advance by one so overlapping occurrences are all visited.
            search_pos = pos + 1;
        }
    }

    if spans.is_empty() {
        return text.to_string();
    }

    // Descending start order; first accepted span wins on overlap.
    spans.sort_by(|a, b| b.0.cmp(&a.0));
    let mut accepted: Vec<(usize, usize)> = Vec::new();
    for span in spans {
        let overlaps = accepted
            .iter()
            .any(|kept| span.0 < kept.1 && kept.0 < span.1);
        if !overlaps {
            accepted.push(span);
        }
    }

    // Insert rear-to-front so earlier offsets stay valid. `accepted` is
    // already in descending start order.
    let mut out = text_chars;
    for (start, end) in accepted {
        out.splice(end..end, marker.close.chars().collect::<Vec<_>>());
        out.splice(start..start, marker.open.chars().collect::<Vec<_>>());
    }
    out.into_iter().collect()
}
