//! Translation source selection
//!
//! Each line carries an unordered set of translation candidates tagged by
//! publisher source id. One candidate is chosen per target language by
//! scanning that language's priority list (preferred publisher first) and
//! taking the first source id present in the set.

use crate::db::models::TranslationRecord;

/// English translation sources, preferred first
pub const ENGLISH_SOURCES: &[i64] = &[1, 6];

/// Punjabi translation sources, preferred first
pub const PUNJABI_SOURCES: &[i64] = &[2, 7];

/// Spanish translation sources, preferred first
pub const SPANISH_SOURCES: &[i64] = &[3];

/// Select the highest-priority translation present among the candidates
///
/// Returns an empty string when no candidate matches any priority entry;
/// a missing translation for a language is common and not an error. If the
/// corpus (malformed) carries two candidates with the same source id, the
/// first in storage-return order wins.
pub fn select_translation(candidates: &[TranslationRecord], priority: &[i64]) -> String {
    priority
        .iter()
        .find_map(|source_id| {
            candidates
                .iter()
                .find(|c| c.translation_source_id == *source_id)
        })
        .map(|c| c.translation.clone())
        .unwrap_or_default()
}
