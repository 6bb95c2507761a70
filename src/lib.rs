//! In-memory search and faceted filtering for a Hawaiian phrase catalog.
//!
//! The catalog is small (thousands of entries) and fully resident, so search
//! is a linear scan with additive relevance scoring rather than an index.
//! Matching is diacritic- and ʻokina-insensitive: "aloha aina" finds "Aloha
//! ʻāina", and highlighting maps matches back onto the original accented
//! text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ normalize.rs │────▶│  search.rs   │────▶│  scoring.rs  │
//! │ (fold, index │     │ (linear scan,│     │ (weights,    │
//! │   letters)   │     │  field match)│     │   bonuses)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────┐     ┌──────────────────────────────────┐
//! │ highlight.rs │     │             facet.rs             │
//! │ (span remap) │     │ (filter pipeline, facet options, │
//! └──────────────┘     │          pagination)             │
//!                      └──────────────────────────────────┘
//! ```
//!
//! The filter pipeline in `facet` applies structural filters (letters, index
//! letters, categories, tags, numeric id) before the text search, then
//! recomputes facet options from whatever survived. `number_range` parses
//! the numeric id filter; `catalog` loads entries and the tag→category map
//! from JSON.
//!
//! # Usage
//!
//! ```
//! use huli::{search, FilterState, apply_filters};
//! # use huli::testing::{fixture_entries, fixture_tag_categories};
//!
//! let entries = fixture_entries();
//! let results = search(&entries, "aloha aina");
//! assert_eq!(results[0].entry.id, 1);
//!
//! let state = FilterState {
//!     categories: vec!["Arts".to_string()],
//!     page: 1,
//!     ..FilterState::default()
//! };
//! let outcome = apply_filters(&entries, &state, &fixture_tag_categories());
//! assert_eq!(outcome.page[0].entry.id, 2);
//! ```

pub mod catalog;
mod facet;
mod highlight;
mod normalize;
mod number_range;
mod scoring;
mod search;
#[doc(hidden)]
pub mod testing;
mod types;

pub use facet::{apply_filters, PAGE_SIZE};
pub use highlight::{highlight, Marker};
pub use normalize::{index_letter, is_valid_phrase_text, normalize, OKINA, PRIMARY_ALPHABET};
pub use number_range::{matches_id, parse_id_query};
pub use scoring::{
    field_weight, EXACT_BONUS, GLOSS_WEIGHT, ID_WEIGHT, PREFIX_BONUS, PRIMARY_WEIGHT, TAG_WEIGHT,
    TRANSLATION_WEIGHT,
};
pub use search::search;
pub use types::{
    Entry, FacetOptions, FilterOutcome, FilterState, MatchedField, NumericRange, SearchResult,
    TagCategoryMap,
};
