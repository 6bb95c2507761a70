//! Terminal display utilities for the huli CLI.
//!
//! Plain ANSI styling with the standard escape codes. Respects `NO_COLOR`
//! and non-TTY detection for pipelines; when colors are off, output is plain
//! text with no markers at all.

use huli::{MatchedField, Marker};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Marker pair for highlighting query hits in result text. Bold yellow on a
/// TTY, invisible in pipelines.
pub fn highlight_marker() -> Marker {
    if use_colors() {
        Marker::new(format!("{}{}", BOLD, YELLOW), RESET)
    } else {
        Marker::new("", "")
    }
}

/// Color-coded relevance score: brighter means a stronger match.
pub fn score_value(score: u32) -> String {
    if !use_colors() {
        return format!("{:>3}", score);
    }
    let c = if score >= 10 {
        GREEN
    } else if score >= 5 {
        YELLOW
    } else {
        GRAY
    };
    format!("{}{:>3}{}", c, score, RESET)
}

/// Color-coded matched-field badge
pub fn field_badge(field: MatchedField) -> String {
    let label = match field {
        MatchedField::Id => "ID",
        MatchedField::Primary => "TEXT",
        MatchedField::Translation => "TRANS",
        MatchedField::Gloss => "GLOSS",
        MatchedField::Tags => "TAG",
    };
    if !use_colors() {
        return format!("[{}]", label);
    }
    let c = match field {
        MatchedField::Id => MAGENTA,
        MatchedField::Primary => GREEN,
        MatchedField::Translation => BLUE,
        MatchedField::Gloss => CYAN,
        MatchedField::Tags => YELLOW,
    };
    format!("{}[{}]{}", c, label, RESET)
}
