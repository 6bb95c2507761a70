//! Filter pipeline and facet behavior across the public API.

mod common;

use common::{fixture_entries, fixture_tag_categories, make_entry_full};
use huli::{apply_filters, Entry, FilterOutcome, FilterState, PAGE_SIZE};

fn page_ids(outcome: &FilterOutcome) -> Vec<u32> {
    outcome.page.iter().map(|r| r.entry.id).collect()
}

fn base_state() -> FilterState {
    FilterState {
        page: 1,
        ..FilterState::default()
    }
}

#[test]
fn unfiltered_catalog_comes_back_in_id_order() {
    let outcome = apply_filters(&fixture_entries(), &base_state(), &fixture_tag_categories());
    assert_eq!(page_ids(&outcome), vec![1, 2, 100, 123]);
    assert!(outcome.page.iter().all(|r| r.relevance_score == 0));
}

#[test]
fn every_filter_is_an_and_with_the_others() {
    let mut state = base_state();
    state.letters = vec!["a".into(), "l".into()];
    state.categories = vec!["emotions".into()];
    state.tags = vec!["peace".into()];
    let outcome = apply_filters(&fixture_entries(), &state, &fixture_tag_categories());
    // Letters keep 1 and 100; category "emotions" keeps both; tag "peace"
    // keeps only 100.
    assert_eq!(page_ids(&outcome), vec![100]);
}

#[test]
fn numeric_filter_combines_with_text_search() {
    let mut state = base_state();
    state.id_query = "1-100".into();
    state.query = "hula".into();
    let outcome = apply_filters(&fixture_entries(), &state, &fixture_tag_categories());
    assert_eq!(page_ids(&outcome), vec![2]);
}

#[test]
fn unparseable_numeric_filter_yields_nothing() {
    let mut state = base_state();
    state.id_query = "one hundred".into();
    let outcome = apply_filters(&fixture_entries(), &state, &fixture_tag_categories());
    assert_eq!(outcome.total_filtered, 0);
    assert!(outcome.facets.tags.is_empty());
}

#[test]
fn untagged_entries_survive_index_letter_filters() {
    let mut entries = fixture_entries();
    entries.push(make_entry_full(300, "ua mau", None, None, &[]));
    let mut state = base_state();
    state.index_letters = vec!["d".into()];
    let outcome = apply_filters(&entries, &state, &fixture_tag_categories());
    // "d" matches "dance" on entry 2; untagged 300 passes through.
    assert_eq!(page_ids(&outcome), vec![2, 300]);
}

#[test]
fn facets_narrow_as_filters_stack() {
    let map = fixture_tag_categories();
    let entries = fixture_entries();

    let open = apply_filters(&entries, &base_state(), &map);
    assert_eq!(open.facets.tags.len(), 11);
    assert_eq!(
        open.facets.categories,
        vec!["Arts", "Emotions", "Land And Sky", "Plants", "Values"]
    );

    let mut state = base_state();
    state.categories = vec!["arts".into()];
    let narrowed = apply_filters(&entries, &state, &map);
    assert_eq!(narrowed.facets.tags, vec!["dance", "hula", "tradition"]);
    assert_eq!(narrowed.facets.letters, vec!["h"]);
}

#[test]
fn selecting_a_tag_restricts_category_options_to_its_categories() {
    let mut state = base_state();
    state.tags = vec!["peace".into()];
    let outcome = apply_filters(&fixture_entries(), &state, &fixture_tag_categories());
    // Entry 100 survives with tags in both "emotions" and "plants", but only
    // the selected tag's category remains offered.
    assert_eq!(page_ids(&outcome), vec![100]);
    assert_eq!(outcome.facets.categories, vec!["Emotions"]);
}

#[test]
fn pagination_covers_the_whole_result_set_without_overlap() {
    let entries: Vec<Entry> = (1..=37)
        .map(|id| make_entry_full(id, "mele", None, None, &[]))
        .collect();
    let map = fixture_tag_categories();

    let first = apply_filters(&entries, &base_state(), &map);
    assert_eq!(first.total_filtered, 37);
    assert_eq!(first.total_pages, 4);

    let mut seen: Vec<u32> = Vec::new();
    for page in 1..=first.total_pages {
        let mut state = base_state();
        state.page = page;
        let outcome = apply_filters(&entries, &state, &map);
        assert!(outcome.page.len() <= PAGE_SIZE);
        seen.extend(page_ids(&outcome));
    }
    assert_eq!(seen, (1..=37).collect::<Vec<u32>>());
}

#[test]
fn search_ranking_carries_through_pagination_metadata() {
    let mut state = base_state();
    state.query = "aloha".into();
    let outcome = apply_filters(&fixture_entries(), &state, &fixture_tag_categories());
    assert_eq!(outcome.total_filtered, 1);
    assert_eq!(outcome.total_pages, 1);
    assert!(outcome.page[0].relevance_score > 0);
}
