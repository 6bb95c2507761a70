//! Shared test fixtures and entry constructors.
//!
//! Not part of the public API surface; exposed so integration tests and
//! benchmarks can build catalogs without duplicating setup.

use crate::normalize::index_letter;
use crate::types::{Entry, TagCategoryMap};

/// Build a minimal entry: id and primary text only, index letter derived.
pub fn make_entry(id: u32, primary_text: &str) -> Entry {
    make_entry_full(id, primary_text, None, None, &[])
}

/// Build an entry with every field populated. The index letter is derived
/// from the primary text the way the catalog loader derives it.
pub fn make_entry_full(
    id: u32,
    primary_text: &str,
    translation: Option<&str>,
    gloss: Option<&str>,
    tags: &[&str],
) -> Entry {
    Entry {
        id,
        primary_text: primary_text.to_string(),
        translation: translation.map(str::to_string),
        gloss: gloss.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        index_letter: index_letter(primary_text),
    }
}

/// A small catalog exercising diacritics, the ʻokina, multi-digit ids, and
/// tags spread across several categories.
pub fn fixture_entries() -> Vec<Entry> {
    vec![
        make_entry_full(
            1,
            "Aloha ʻāina",
            Some("Love of the land"),
            Some("Deep connection to the land"),
            &["land", "love", "nature"],
        ),
        make_entry_full(
            2,
            "Hula kahiko",
            Some("Ancient hula"),
            Some("Traditional hula dance"),
            &["dance", "tradition", "hula"],
        ),
        make_entry_full(
            100,
            "Lai lai",
            Some("Peaceful"),
            Some("Calm and peaceful"),
            &["peace", "calm", "lai"],
        ),
        make_entry_full(
            123,
            "Mālama pono",
            Some("Take care"),
            Some("Be careful"),
            &["care", "safety"],
        ),
    ]
}

/// Tag→category mapping covering every tag in [`fixture_entries`].
pub fn fixture_tag_categories() -> TagCategoryMap {
    [
        ("land", "land and sky"),
        ("love", "emotions"),
        ("nature", "land and sky"),
        ("dance", "arts"),
        ("tradition", "arts"),
        ("hula", "arts"),
        ("peace", "emotions"),
        ("calm", "emotions"),
        ("lai", "plants"),
        ("care", "values"),
        ("safety", "values"),
    ]
    .into_iter()
    .map(|(tag, category)| (tag.to_string(), category.to_string()))
    .collect()
}
