//! Structural filters, facet recomputation, and pagination.
//!
//! Filters apply in a fixed order — primary-letter membership, index letters
//! over tag first-characters, categories, tags, numeric id, then text search.
//! The order matters because facet options (which categories, tags, and
//! letters remain selectable) are recomputed from the filtered-then-searched
//! set, never from the raw collection: the UI must never offer a selection
//! that would produce zero results.
//!
//! Category names are compared case-insensitively and emitted Title Cased.
//! The tag→category mapping is injected per call; it is configuration, not
//! global state, so tests can run against fixture mappings.

use crate::number_range::{matches_id, parse_id_query};
use crate::search::search;
use crate::types::{
    Entry, FacetOptions, FilterOutcome, FilterState, SearchResult, TagCategoryMap,
};
use std::collections::BTreeSet;

/// Fixed page size for filter output.
pub const PAGE_SIZE: usize = 10;

/// Canonical form for category comparison.
#[inline]
fn canonical_category(name: &str) -> String {
    name.to_lowercase()
}

/// Title Case a category name for display ("land and sky" → "Land And Sky").
pub(crate) fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased first character of a tag, if any.
fn tag_first_letter(tag: &str) -> Option<String> {
    let first = tag.chars().next()?;
    Some(first.to_lowercase().collect())
}

/// Apply the full filter pipeline to the entry collection.
///
/// Returns the requested page of results (1-based; the engine does not clamp
/// an out-of-range page — it yields an empty page), the total filtered
/// count, the page count, and the recomputed facet options.
pub fn apply_filters(
    entries: &[Entry],
    state: &FilterState,
    tag_categories: &TagCategoryMap,
) -> FilterOutcome {
    let mut filtered: Vec<&Entry> = entries.iter().collect();

    // Primary-alphabet letter membership.
    if !state.letters.is_empty() {
        let selected: Vec<String> = state.letters.iter().map(|l| l.to_lowercase()).collect();
        filtered.retain(|entry| {
            entry
                .index_letter
                .as_deref()
                .is_some_and(|letter| selected.contains(&letter.to_lowercase()))
        });
    }

    // Index letters over tag first-characters. Entries without tags are
    // never excluded here; when categories are selected, only tags in a
    // selected category are considered, and an entry whose tags all fall
    // outside those categories passes through.
    if !state.index_letters.is_empty() {
        let selected: Vec<String> = state
            .index_letters
            .iter()
            .map(|l| l.to_lowercase())
            .collect();
        let selected_categories: Vec<String> = state
            .categories
            .iter()
            .map(|c| canonical_category(c))
            .collect();
        filtered.retain(|entry| {
            if entry.tags.is_empty() {
                return true;
            }
            let considered: Vec<&String> = if selected_categories.is_empty() {
                entry.tags.iter().collect()
            } else {
                let scoped: Vec<&String> = entry
                    .tags
                    .iter()
                    .filter(|tag| {
                        tag_categories
                            .get(tag.as_str())
                            .is_some_and(|cat| selected_categories.contains(&canonical_category(cat)))
                    })
                    .collect();
                if scoped.is_empty() {
                    return true;
                }
                scoped
            };
            considered.iter().any(|tag| {
                tag_first_letter(tag).is_some_and(|letter| selected.contains(&letter))
            })
        });
    }

    // Categories: for every selected category the entry needs at least one
    // tag mapping to it (AND across categories, OR within one).
    if !state.categories.is_empty() {
        let selected: Vec<String> = state
            .categories
            .iter()
            .map(|c| canonical_category(c))
            .collect();
        filtered.retain(|entry| {
            !entry.tags.is_empty()
                && selected.iter().all(|category| {
                    entry.tags.iter().any(|tag| {
                        tag_categories
                            .get(tag.as_str())
                            .is_some_and(|cat| canonical_category(cat) == *category)
                    })
                })
        });
    }

    // Tags: every selected tag must be present, exactly.
    if !state.tags.is_empty() {
        filtered.retain(|entry| state.tags.iter().all(|tag| entry.tags.contains(tag)));
    }

    // Numeric id filter. An unparseable filter string matches nothing.
    if !state.id_query.trim().is_empty() {
        match parse_id_query(&state.id_query) {
            Some(ranges) => filtered.retain(|entry| matches_id(entry.id, &ranges)),
            None => filtered.clear(),
        }
    }

    // Text search replaces the structural set with a ranked subset; without
    // a search the structural set is resorted by ascending id.
    let results: Vec<SearchResult> = if state.query.chars().count() >= 2 {
        let owned: Vec<Entry> = filtered.into_iter().cloned().collect();
        search(&owned, &state.query)
    } else {
        let mut unscored: Vec<SearchResult> = filtered
            .into_iter()
            .map(|entry| SearchResult {
                entry: entry.clone(),
                relevance_score: 0,
                matched_fields: Vec::new(),
            })
            .collect();
        unscored.sort_by_key(|result| result.entry.id);
        unscored
    };

    let facets = recompute_facets(&results, state, tag_categories);

    let total_filtered = results.len();
    let total_pages = total_filtered.div_ceil(PAGE_SIZE);
    let page_number = state.page.max(1);
    let start = (page_number - 1) * PAGE_SIZE;
    let page: Vec<SearchResult> = results.into_iter().skip(start).take(PAGE_SIZE).collect();

    FilterOutcome {
        page,
        total_filtered,
        total_pages,
        facets,
    }
}

/// Derive the facet options still reachable from the surviving result set.
///
/// When tags are selected, category options narrow further to only the
/// categories of the selected tags — selecting a tag must not leave sibling
/// categories dangling as dead ends.
fn recompute_facets(
    results: &[SearchResult],
    state: &FilterState,
    tag_categories: &TagCategoryMap,
) -> FacetOptions {
    let selected_tag_categories: BTreeSet<String> = state
        .tags
        .iter()
        .filter_map(|tag| tag_categories.get(tag.as_str()))
        .map(|cat| canonical_category(cat))
        .collect();

    let mut categories: BTreeSet<String> = BTreeSet::new();
    let mut tags: BTreeSet<String> = BTreeSet::new();
    let mut letters: BTreeSet<String> = BTreeSet::new();
    let mut index_letters: BTreeSet<String> = BTreeSet::new();

    for result in results {
        let entry = &result.entry;
        if let Some(letter) = &entry.index_letter {
            letters.insert(letter.to_lowercase());
        }
        for tag in &entry.tags {
            tags.insert(tag.clone());
            if let Some(letter) = tag_first_letter(tag) {
                if letter.chars().all(|c| c.is_ascii_alphabetic()) {
                    index_letters.insert(letter);
                }
            }
            if let Some(cat) = tag_categories.get(tag.as_str()) {
                let canonical = canonical_category(cat);
                if state.tags.is_empty() || selected_tag_categories.contains(&canonical) {
                    categories.insert(canonical);
                }
            }
        }
    }

    FacetOptions {
        categories: categories.iter().map(|c| title_case(c)).collect(),
        tags: tags.into_iter().collect(),
        letters: letters.into_iter().collect(),
        index_letters: index_letters.into_iter().collect(),
    }
}
