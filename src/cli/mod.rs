//! CLI definitions for the huli command-line interface.
//!
//! Two subcommands: `search` to query a catalog with the full filter
//! pipeline, and `inspect` to summarize a catalog file. Every filter the
//! engine supports is exposed as a repeatable flag so shell pipelines can
//! reproduce any UI state.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "huli",
    about = "Diacritic-insensitive search over a Hawaiian phrase catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search and filter a catalog, one page of ranked results at a time
    Search {
        /// Path to the catalog JSON file (array of entries)
        catalog: String,

        /// Free-text query; diacritic- and ʻokina-insensitive
        #[arg(default_value = "")]
        query: String,

        /// Path to the tag→category map JSON file
        #[arg(long)]
        tag_map: Option<String>,

        /// Restrict to a category (repeatable; entries need a tag in every one)
        #[arg(short, long)]
        category: Vec<String>,

        /// Restrict to a tag (repeatable; entries need every one)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Restrict to entries whose primary text starts with a letter
        /// of the alphabet (repeatable)
        #[arg(short, long)]
        letter: Vec<String>,

        /// Restrict by tag first letter (repeatable)
        #[arg(long)]
        index_letter: Vec<String>,

        /// Numeric id filter: "100", "1-100", "1 to 100", or "1,2,3"
        #[arg(short, long)]
        number: Option<String>,

        /// Page of results to show (1-based, clamped to the last page)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Print facet options (categories, tags, letters) under the results
        #[arg(long)]
        facets: bool,
    },

    /// Summarize a catalog file: entry counts, field coverage, tags
    Inspect {
        /// Path to the catalog JSON file
        catalog: String,
    },
}
