//! Presentation views
//!
//! Read-only objects assembled fresh per request from raw corpus records.
//! Serialized field names and nesting are a contract with downstream
//! consumers; the `#[serde(rename)]` attributes pin the wire shape.

pub mod line;
pub mod shabad;

pub use line::{build_line_view, get_line_view, LineView};
pub use shabad::{build_shabad_view, get_shabad_view, ShabadInfo, ShabadView};

use crate::db::models::{SectionRecord, SourceRecord, TranslationRecord, TransliterationRecord, WriterRecord};
use crate::text::{
    select_translation, select_transliteration, strip_vishraams, to_larivaar,
    transliteration, ENGLISH_SOURCES, PUNJABI_SOURCES, SPANISH_SOURCES,
};
use gurbani_script::{to_ascii, to_unicode};
use serde::Serialize;

/// A string in both script encodings
#[derive(Debug, Clone, Serialize)]
pub struct ScriptPair {
    pub akhar: String,
    pub unicode: String,
}

/// Selected translations for the three target languages
#[derive(Debug, Clone, Serialize)]
pub struct TranslationBlock {
    pub english: String,
    pub punjabi: PunjabiTranslation,
    pub spanish: String,
}

/// Punjabi prose is stored in Unicode; the akhar form is derived from it
#[derive(Debug, Clone, Serialize)]
pub struct PunjabiTranslation {
    pub akhar: String,
    pub unicode: String,
}

/// Transliterations for the three target scripts
#[derive(Debug, Clone, Serialize)]
pub struct TransliterationBlock {
    pub english: TransliterationPair,
    pub devanagari: TransliterationPair,
    pub urdu: TransliterationPair,
}

/// One transliteration in standard and larivaar renderings
#[derive(Debug, Clone, Serialize)]
pub struct TransliterationPair {
    pub text: String,
    pub larivaar: String,
}

/// Scripture collection metadata
#[derive(Debug, Clone, Serialize)]
pub struct SourceView {
    pub id: String,
    pub akhar: String,
    pub unicode: String,
    pub english: String,
    pub length: i64,
    #[serde(rename = "pageName")]
    pub page_name: PageNameView,
}

/// What a "page" is called in this collection, in all three renderings
#[derive(Debug, Clone, Serialize)]
pub struct PageNameView {
    pub akhar: String,
    pub unicode: String,
    pub english: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WriterView {
    pub id: i64,
    pub akhar: String,
    pub unicode: String,
    pub english: String,
}

/// Raag/section metadata with the formatted page-range label
#[derive(Debug, Clone, Serialize)]
pub struct RaagView {
    pub id: i64,
    pub akhar: String,
    pub unicode: String,
    pub english: String,
    #[serde(rename = "startang")]
    pub start_ang: i64,
    #[serde(rename = "endang")]
    pub end_ang: i64,
    #[serde(rename = "raagwithpage")]
    pub raag_with_page: String,
}

/// Both renderings of an akhar string (no stripping; strip first)
pub(crate) fn script_pair(akhar: &str) -> ScriptPair {
    ScriptPair {
        akhar: akhar.to_string(),
        unicode: to_unicode(akhar),
    }
}

/// Larivaar renderings of already-stripped text: reflow the akhar form
/// directly, and reflow the Unicode conversion for the unicode form
pub(crate) fn larivaar_pair(stripped: &str) -> ScriptPair {
    ScriptPair {
        akhar: to_larivaar(stripped),
        unicode: to_larivaar(&to_unicode(stripped)),
    }
}

pub(crate) fn translation_block(candidates: &[TranslationRecord]) -> TranslationBlock {
    let punjabi = select_translation(candidates, PUNJABI_SOURCES);
    TranslationBlock {
        english: select_translation(candidates, ENGLISH_SOURCES),
        punjabi: PunjabiTranslation {
            akhar: to_ascii(&punjabi),
            unicode: punjabi,
        },
        spanish: select_translation(candidates, SPANISH_SOURCES),
    }
}

pub(crate) fn transliteration_block(
    candidates: &[TransliterationRecord],
) -> TransliterationBlock {
    TransliterationBlock {
        english: transliteration_pair(candidates, transliteration::ENGLISH),
        devanagari: transliteration_pair(candidates, transliteration::DEVANAGARI),
        urdu: transliteration_pair(candidates, transliteration::URDU),
    }
}

/// Selected transliteration, stripped of vishraam marks, with its larivaar
/// variant
fn transliteration_pair(
    candidates: &[TransliterationRecord],
    language_id: i64,
) -> TransliterationPair {
    let text = strip_vishraams(&select_transliteration(candidates, language_id));
    TransliterationPair {
        larivaar: to_larivaar(&text),
        text,
    }
}

pub(crate) fn source_view(record: &SourceRecord) -> SourceView {
    SourceView {
        id: record.id.clone(),
        akhar: record.name_gurmukhi.clone(),
        unicode: to_unicode(&record.name_gurmukhi),
        english: record.name_english.clone(),
        length: record.length,
        page_name: PageNameView {
            akhar: record.page_name_gurmukhi.clone(),
            unicode: to_unicode(&record.page_name_gurmukhi),
            english: record.page_name_english.clone(),
        },
    }
}

pub(crate) fn writer_view(record: &WriterRecord) -> WriterView {
    WriterView {
        id: record.id,
        akhar: record.name_gurmukhi.clone(),
        unicode: to_unicode(&record.name_gurmukhi),
        english: record.name_english.clone(),
    }
}

pub(crate) fn raag_view(record: &SectionRecord) -> RaagView {
    RaagView {
        id: record.id,
        akhar: record.name_gurmukhi.clone(),
        unicode: to_unicode(&record.name_gurmukhi),
        english: record.name_english.clone(),
        start_ang: record.start_page,
        end_ang: record.end_page,
        raag_with_page: format!(
            "{} ({}-{})",
            record.name_english, record.start_page, record.end_page
        ),
    }
}
