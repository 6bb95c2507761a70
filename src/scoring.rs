//! Relevance weights for search results.
//!
//! Scores are additive: each matched field contributes its weight, and two
//! whole-query bonuses stack on top. An exact whole-string match of the
//! normalized primary or translation is also a prefix match, so such entries
//! collect both bonuses (+7) — intentional, and relied on by ranking tests.
//!
//! # Field hierarchy
//!
//! ```text
//! id (5) > primary (3) > translation (2) > gloss (1) = tags (1)
//! ```
//!
//! An id match outranks any single text field; a primary-text match outranks
//! a translation match. Ties are broken by ascending id at sort time.

use crate::types::MatchedField;

/// Weight for an exact numeric id match.
pub const ID_WEIGHT: u32 = 5;
/// Weight for a primary-text match.
pub const PRIMARY_WEIGHT: u32 = 3;
/// Weight for a translation match.
pub const TRANSLATION_WEIGHT: u32 = 2;
/// Weight for a gloss match.
pub const GLOSS_WEIGHT: u32 = 1;
/// Weight for a tag match (any number of matching tags counts once).
pub const TAG_WEIGHT: u32 = 1;

/// Bonus when the normalized primary or translation equals the normalized
/// query exactly.
pub const EXACT_BONUS: u32 = 5;
/// Bonus when the normalized primary or translation starts with the
/// normalized query. Stacks with [`EXACT_BONUS`].
pub const PREFIX_BONUS: u32 = 2;

/// The score contribution of a single matched field.
pub fn field_weight(field: MatchedField) -> u32 {
    match field {
        MatchedField::Id => ID_WEIGHT,
        MatchedField::Primary => PRIMARY_WEIGHT,
        MatchedField::Translation => TRANSLATION_WEIGHT,
        MatchedField::Gloss => GLOSS_WEIGHT,
        MatchedField::Tags => TAG_WEIGHT,
    }
}

/// Compute the relevance score for an entry with at least one matched field.
///
/// `norm_primary` and `norm_translation` are the entry's already-normalized
/// text fields; `norm_query` is the normalized whole query (not split into
/// words — the bonuses reward whole-query placement, not word placement).
pub(crate) fn relevance_score(
    matched: &[MatchedField],
    norm_query: &str,
    norm_primary: &str,
    norm_translation: Option<&str>,
) -> u32 {
    let mut score: u32 = matched.iter().map(|&f| field_weight(f)).sum();

    let translation = norm_translation.unwrap_or("");
    if norm_primary == norm_query || translation == norm_query {
        score += EXACT_BONUS;
    }
    if norm_primary.starts_with(norm_query) || translation.starts_with(norm_query) {
        score += PREFIX_BONUS;
    }

    score
}
