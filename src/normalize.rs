//! Text normalization for diacritic-insensitive matching.
//!
//! Catalog text carries macrons (kahakō) and a glottal-stop letter (ʻokina,
//! U+02BB) that users rarely type. Normalization folds both sides of a match
//! into a canonical form so "aloha aina" finds "aloha ʻāina":
//!
//! 1. Apostrophe-like characters (curly quotes, modifier apostrophe, straight
//!    apostrophe) are canonicalized to the ʻokina.
//! 2. Lowercase.
//! 3. NFD decomposition separates base letters from combining marks; the
//!    marks are dropped ("ā" → "a").
//! 4. The ʻokina becomes a space — it is a word-boundary-equivalent phoneme,
//!    not a letter, for matching purposes.
//! 5. Whitespace runs collapse to a single space; the result is trimmed.
//!
//! The per-character fold is exposed crate-internally so the highlighter can
//! rebuild the exact normalized string character by character and map match
//! offsets back to the original text.

use unicode_normalization::UnicodeNormalization;

/// Canonical glottal-stop character (U+02BB, ʻokina).
pub const OKINA: char = '\u{02BB}';

/// The primary alphabet, in traditional order: vowels, consonants, ʻokina.
pub const PRIMARY_ALPHABET: [&str; 13] = [
    "a", "e", "i", "o", "u", "h", "k", "l", "m", "n", "p", "w", "\u{02BB}",
];

/// Map apostrophe variants (curly quotes, modifier apostrophe, straight
/// apostrophe) to the canonical ʻokina. Other characters pass through.
#[inline]
fn canonical_okina(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{02BC}' | '\'' => OKINA,
        _ => c,
    }
}

/// Check if a character is a combining mark (diacritic).
///
/// Covers the common combining diacritical mark blocks; the macron (U+0304)
/// produced by NFD-decomposing kahakō vowels lives in the first range.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Fold one character of source text into its normalized representation,
/// appending to `out`. Produces zero or more characters: diacritics vanish,
/// the ʻokina (and every whitespace character) becomes a plain space.
///
/// Space-run collapsing and trimming are the caller's concern — [`normalize`]
/// and the highlighter's position map both layer them on top of this fold so
/// the two can never disagree.
pub(crate) fn fold_char(c: char, out: &mut String) {
    let c = canonical_okina(c);
    if c == OKINA || c.is_whitespace() {
        out.push(' ');
        return;
    }
    for lower in c.to_lowercase() {
        for decomposed in std::iter::once(lower).nfd() {
            if !is_combining_mark(decomposed) {
                out.push(decomposed);
            }
        }
    }
}

/// Normalize text for matching: canonical ʻokina handling, lowercase,
/// diacritics stripped, ʻokina treated as a word boundary, whitespace
/// collapsed and trimmed.
///
/// Pure and total: never fails on any Unicode input. Idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut folded);
    }

    let mut out = String::with_capacity(folded.len());
    let mut last_was_space = false;
    for c in folded.chars() {
        if c == ' ' {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

/// Classify the leading grapheme of a phrase into the primary alphabet.
///
/// The first character is okina-canonicalized and lowercased; anything
/// outside the alphabet (digits, punctuation, macron vowels) yields `None`.
pub fn index_letter(text: &str) -> Option<String> {
    let first = canonical_okina(text.trim().chars().next()?);
    let lower: String = first.to_lowercase().collect();
    if PRIMARY_ALPHABET.contains(&lower.as_str()) {
        Some(lower)
    } else {
        None
    }
}

/// Whether a word contains only valid phrase characters: ASCII letters,
/// ʻokina, modifier or straight apostrophes, hyphens, and spaces.
pub fn is_valid_phrase_text(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphabetic()
                || c == OKINA
                || c == '\u{02BC}'
                || c == '\''
                || c == '-'
                || c == ' '
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_macrons() {
        assert_eq!(normalize("Mālama pono"), "malama pono");
        assert_eq!(normalize("kahakō"), "kahako");
    }

    #[test]
    fn okina_variants_fold_to_word_boundary() {
        assert_eq!(normalize("aloha ʻāina"), "aloha aina");
        assert_eq!(normalize("aloha 'aina"), "aloha aina");
        assert_eq!(normalize("aloha \u{2019}aina"), "aloha aina");
        assert_eq!(normalize("aloha \u{02BC}aina"), "aloha aina");
    }

    #[test]
    fn variant_spellings_normalize_identically() {
        let canonical = normalize("Aloha ʻĀina");
        assert_eq!(canonical, normalize("aloha aina"));
        assert_eq!(canonical, normalize("ALOHA 'AINA"));
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  kaʻu   mea  "), "ka u mea");
        assert_eq!(normalize("a\t\nb"), "a b");
    }

    #[test]
    fn idempotent() {
        for text in ["Aloha ʻĀina", "  Hula  kahiko ", "Mālama", "", "ʻʻʻ", "café"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn total_over_arbitrary_input() {
        // Scripts without diacritics pass through lowercased, never panic.
        assert_eq!(normalize("ΑΛΟΧΑ"), "αλοχα");
        assert_eq!(normalize("日本語"), "日本語");
    }

    #[test]
    fn index_letter_classifies_leading_grapheme() {
        assert_eq!(index_letter("Aloha ʻāina"), Some("a".to_string()));
        assert_eq!(index_letter("ʻohana"), Some("\u{02BB}".to_string()));
        assert_eq!(index_letter("'ohana"), Some("\u{02BB}".to_string()));
        assert_eq!(index_letter("  hula"), Some("h".to_string()));
        // Macron vowels and non-alphabet characters are unclassified.
        assert_eq!(index_letter("Āina"), None);
        assert_eq!(index_letter("42 things"), None);
        assert_eq!(index_letter(""), None);
    }

    #[test]
    fn phrase_text_validation() {
        assert!(is_valid_phrase_text("aloha ʻaina"));
        assert!(is_valid_phrase_text("ka-u mea"));
        assert!(!is_valid_phrase_text("aloha!"));
        assert!(!is_valid_phrase_text(""));
    }
}
