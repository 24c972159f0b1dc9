//! Transliteration selection
//!
//! Transliteration candidates are tagged by a small integer language id
//! enumerating the target script. Well-formed corpus data carries at most
//! one candidate per language per line, so selection is a plain scan.

use crate::db::models::TransliterationRecord;

/// Latin-script transliteration
pub const ENGLISH: i64 = 1;
/// Devanagari-script transliteration
pub const DEVANAGARI: i64 = 4;
/// Urdu-script transliteration
pub const URDU: i64 = 5;

/// Select the candidate for the requested language id
///
/// Returns an empty string if the line has no transliteration in that
/// script. On (malformed) duplicates, the first in storage-return order
/// wins.
pub fn select_transliteration(candidates: &[TransliterationRecord], language_id: i64) -> String {
    candidates
        .iter()
        .find(|c| c.language_id == language_id)
        .map(|c| c.transliteration.clone())
        .unwrap_or_default()
}
