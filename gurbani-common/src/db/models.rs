//! Raw corpus records
//!
//! Immutable snapshots of the storage rows, fetched once per request and
//! handed to the view builders. Field names follow the corpus schema.

use serde::{Deserialize, Serialize};

/// A scripture collection (e.g. one granth)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub name_gurmukhi: String,
    pub name_english: String,
    /// Total page count of the collection
    pub length: i64,
    pub page_name_gurmukhi: String,
    pub page_name_english: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterRecord {
    pub id: i64,
    pub name_gurmukhi: String,
    pub name_english: String,
}

/// A raag/section grouping with its page bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: i64,
    pub name_gurmukhi: String,
    pub name_english: String,
    pub start_page: i64,
    pub end_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShabadRecord {
    pub id: String,
    pub source_id: String,
    pub writer_id: i64,
    pub section_id: i64,
    /// Position in the canonical corpus order; dense and strictly increasing
    pub order_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: String,
    pub shabad_id: String,
    /// Raw scripture text in the ASCII font encoding, vishraam marks included
    pub gurmukhi: String,
    pub source_page: i64,
    pub source_line: i64,
    pub first_letters: String,
}

/// One translation candidate, tagged by publisher/author source id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub line_id: String,
    pub translation_source_id: i64,
    pub translation: String,
}

/// One transliteration candidate, tagged by target-script language id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationRecord {
    pub line_id: String,
    pub language_id: i64,
    pub transliteration: String,
}

/// A line with its candidate sets and full parent context, as fetched for
/// the standalone line view
#[derive(Debug, Clone)]
pub struct LineBundle {
    pub line: LineRecord,
    pub translations: Vec<TranslationRecord>,
    pub transliterations: Vec<TransliterationRecord>,
    pub shabad: ShabadRecord,
    pub source: SourceRecord,
    pub writer: WriterRecord,
    pub section: SectionRecord,
}

/// A line with its candidate sets, as carried inside a shabad fetch
#[derive(Debug, Clone)]
pub struct ShabadLineBundle {
    pub line: LineRecord,
    pub translations: Vec<TranslationRecord>,
    pub transliterations: Vec<TransliterationRecord>,
}

/// A shabad with related metadata and its ordered line collection
#[derive(Debug, Clone)]
pub struct ShabadBundle {
    pub shabad: ShabadRecord,
    pub source: SourceRecord,
    pub writer: WriterRecord,
    pub section: SectionRecord,
    /// Ordered by source line number ascending; never empty
    pub lines: Vec<ShabadLineBundle>,
}
