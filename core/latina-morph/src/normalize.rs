//! Diacritic-insensitive text handling.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips macrons and every other combining mark: `"puellā"` → `"puella"`.
///
/// Text is decomposed (NFD) first so precomposed letters such as `ā` split
/// into base letter plus mark. Idempotent.
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalization for user input: trimmed, macron-free, lowercase.
pub fn clean_input(text: &str) -> String {
    normalize(text.trim()).to_lowercase()
}

/// Compares two forms ignoring macrons, case and surrounding whitespace.
pub fn forms_match(a: &str, b: &str) -> bool {
    clean_input(a) == clean_input(b)
}

/// Removes the digits that tell homographs apart (`dīcō1` → `dīcō`).
pub fn strip_homograph_digits(word: &str) -> &str {
    word.trim().trim_end_matches(|c: char| c.is_ascii_digit())
}
