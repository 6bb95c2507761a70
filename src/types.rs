//! The building blocks of a phrase catalog search.
//!
//! These types define how entries, filters, and ranked results fit together.
//! Everything here is plain data: the engine borrows entries and filter state,
//! never mutates them, and allocates fresh outputs per call.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Entry**: `id` is unique and stable for the lifetime of a search
//!   session; `primary_text` is non-empty. Ids need not be contiguous.
//! - **SearchResult**: `matched_fields` is non-empty whenever the result came
//!   from a scoring search — unmatched entries are dropped, never
//!   scored-but-hidden. Each field is checked exactly once per entry, so
//!   duplicates cannot occur.
//! - **NumericRange**: `min <= max`, inclusive on both ends. The parser in
//!   `number_range` only constructs ranges satisfying this.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static mapping from tag to category name.
///
/// Loaded once per process and injected into the filter engine as read-only
/// configuration. Category values are compared case-insensitively.
pub type TagCategoryMap = HashMap<String, String>;

/// One catalog record: a short annotated text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, stable numeric id. Sort tiebreak and the unit of numeric filtering.
    pub id: u32,
    /// Required primary text of the entry.
    pub primary_text: String,
    /// Optional translation of the primary text.
    #[serde(default)]
    pub translation: Option<String>,
    /// Optional free-form gloss (meaning / usage note).
    #[serde(default)]
    pub gloss: Option<String>,
    /// Free-form tags, insertion order preserved for display.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Precomputed classification of the leading grapheme of `primary_text`.
    /// Derived by the catalog loader when absent from the source data.
    #[serde(default)]
    pub index_letter: Option<String>,
}

/// A field of an [`Entry`] that caused it to match a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    /// The numeric id matched (pure-number query or embedded number).
    Id,
    /// The primary text matched.
    Primary,
    /// The translation matched.
    Translation,
    /// The gloss matched.
    Gloss,
    /// At least one tag matched.
    Tags,
}

/// An entry paired with its relevance score and match metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub entry: Entry,
    /// Additive relevance rank; see the `scoring` module for the weights.
    pub relevance_score: u32,
    /// Fields that matched, in check order. Empty only for the short-query
    /// passthrough where every entry is returned unscored.
    pub matched_fields: Vec<MatchedField>,
}

/// An inclusive range of entry ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: u32,
    pub max: u32,
}

impl NumericRange {
    /// Whether `n` falls within the range, inclusive on both ends.
    #[inline]
    pub fn contains(self, n: u32) -> bool {
        n >= self.min && n <= self.max
    }
}

/// Current filter selections, owned by the calling UI layer.
///
/// The engine reads this by reference and never mutates it. `page` is
/// 1-based; page 0 is treated as page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected primary-alphabet letters (matched against `Entry::index_letter`).
    pub letters: Vec<String>,
    /// Selected index letters (matched against tag first characters).
    pub index_letters: Vec<String>,
    /// Selected categories; an entry must have a tag in every one (AND).
    pub categories: Vec<String>,
    /// Selected tags; an entry must carry every one (AND, exact).
    pub tags: Vec<String>,
    /// Raw numeric-filter string ("100", "1-100", "1 to 100", "1,2,3").
    pub id_query: String,
    /// Free-text query; ignored below 2 characters.
    pub query: String,
    /// 1-based page number. Out-of-range pages are the caller's to clamp.
    pub page: usize,
}

/// Facet values still selectable given the current filtered+searched set.
///
/// Recomputed per call so the UI never offers a dead-end selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    /// Title-cased category names, sorted.
    pub categories: Vec<String>,
    /// Tags present on at least one surviving entry, sorted.
    pub tags: Vec<String>,
    /// Primary-alphabet letters present on surviving entries, sorted.
    pub letters: Vec<String>,
    /// ASCII first letters of surviving tags, sorted.
    pub index_letters: Vec<String>,
}

/// Output of the filter/facet engine: one page of results plus totals and facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// The requested page of the filtered, ranked result set.
    pub page: Vec<SearchResult>,
    /// Size of the whole filtered set before pagination.
    pub total_filtered: usize,
    /// `ceil(total_filtered / PAGE_SIZE)`; zero when nothing survived.
    pub total_pages: usize,
    pub facets: FacetOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_range_is_inclusive() {
        let range = NumericRange { min: 1, max: 100 };
        assert!(range.contains(1));
        assert!(range.contains(50));
        assert!(range.contains(100));
        assert!(!range.contains(0));
        assert!(!range.contains(101));
    }

    #[test]
    fn matched_field_serializes_lowercase() {
        let json = serde_json::to_string(&MatchedField::Primary).unwrap();
        assert_eq!(json, "\"primary\"");
    }

    #[test]
    fn entry_deserializes_with_missing_optionals() {
        let entry: Entry = serde_json::from_str(r#"{"id": 7, "primary_text": "Aloha"}"#).unwrap();
        assert_eq!(entry.id, 7);
        assert!(entry.translation.is_none());
        assert!(entry.tags.is_empty());
        assert!(entry.index_letter.is_none());
    }
}
