//! Shared test utilities and fixtures.

#![allow(dead_code)]

use huli::SearchResult;

// Re-export canonical fixtures from huli::testing
pub use huli::testing::{fixture_entries, fixture_tag_categories, make_entry, make_entry_full};

/// Entry ids of a result list, in output order.
pub fn ids(results: &[SearchResult]) -> Vec<u32> {
    results.iter().map(|r| r.entry.id).collect()
}
