//! Loading catalog data from JSON files.
//!
//! Two inputs: the entry collection and the tag→category map. Both are plain
//! JSON produced by an export step upstream; loading validates the shape,
//! rejects duplicate ids, and backfills missing index letters so the filter
//! engine never has to derive them per call.

use crate::normalize::index_letter;
use crate::types::{Entry, TagCategoryMap};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Load the entry collection from a JSON array file.
///
/// Entries missing an `index_letter` get one derived from their primary
/// text. Duplicate ids and empty primary text are data errors, reported as
/// `InvalidData` with the offending id.
pub fn load_entries(path: &Path) -> io::Result<Vec<Entry>> {
    let file = File::open(path)?;
    let mut entries: Vec<Entry> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {e}", path.display())))?;

    let mut seen: HashSet<u32> = HashSet::with_capacity(entries.len());
    for entry in &mut entries {
        if !seen.insert(entry.id) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("duplicate entry id {}", entry.id),
            ));
        }
        if entry.primary_text.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("entry {} has empty primary text", entry.id),
            ));
        }
        if entry.index_letter.is_none() {
            entry.index_letter = index_letter(&entry.primary_text);
        }
    }

    Ok(entries)
}

/// Load the tag→category map from a JSON object file.
pub fn load_tag_categories(path: &Path) -> io::Result<TagCategoryMap> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {e}", path.display())))
}

/// Summary counts over a loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub entries: usize,
    pub with_translation: usize,
    pub with_gloss: usize,
    pub tagged: usize,
    pub distinct_tags: usize,
}

/// Compute summary counts for `inspect`-style reporting.
pub fn catalog_stats(entries: &[Entry]) -> CatalogStats {
    let mut tags: HashSet<&str> = HashSet::new();
    for entry in entries {
        for tag in &entry.tags {
            tags.insert(tag.as_str());
        }
    }
    CatalogStats {
        entries: entries.len(),
        with_translation: entries.iter().filter(|e| e.translation.is_some()).count(),
        with_gloss: entries.iter().filter(|e| e.gloss.is_some()).count(),
        tagged: entries.iter().filter(|e| !e.tags.is_empty()).count(),
        distinct_tags: tags.len(),
    }
}
