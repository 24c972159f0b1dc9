//! Standalone line view
//!
//! One line with its full parent context (source, writer, raag), as served
//! by the line endpoint.

use crate::db::models::LineBundle;
use crate::db::queries::fetch_line_by_id;
use crate::text::strip_vishraams;
use crate::views::{
    larivaar_pair, raag_view, script_pair, source_view, translation_block,
    transliteration_block, writer_view, RaagView, ScriptPair, SourceView, TranslationBlock,
    TransliterationBlock, WriterView,
};
use crate::Result;
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize)]
pub struct LineView {
    pub id: String,
    #[serde(rename = "shabadid")]
    pub shabad_id: String,
    pub gurmukhi: ScriptPair,
    pub larivaar: ScriptPair,
    pub translation: TranslationBlock,
    pub transliteration: TransliterationBlock,
    pub source: SourceView,
    pub writer: WriterView,
    pub raag: RaagView,
    #[serde(rename = "pageNum")]
    pub page_num: i64,
    #[serde(rename = "lineNum")]
    pub line_num: i64,
    #[serde(rename = "firstletters")]
    pub first_letters: ScriptPair,
}

/// Compose a line view from an eagerly-fetched bundle
///
/// Pure: all storage access happened at fetch time. The raw text is
/// stripped of vishraam marks once, and every rendering derives from the
/// stripped form.
pub fn build_line_view(bundle: &LineBundle) -> LineView {
    let stripped = strip_vishraams(&bundle.line.gurmukhi);

    LineView {
        id: bundle.line.id.clone(),
        shabad_id: bundle.line.shabad_id.clone(),
        gurmukhi: script_pair(&stripped),
        larivaar: larivaar_pair(&stripped),
        translation: translation_block(&bundle.translations),
        transliteration: transliteration_block(&bundle.transliterations),
        source: source_view(&bundle.source),
        writer: writer_view(&bundle.writer),
        raag: raag_view(&bundle.section),
        page_num: bundle.line.source_page,
        line_num: bundle.line.source_line,
        first_letters: script_pair(&bundle.line.first_letters),
    }
}

/// Fetch a line by id and assemble its view
pub async fn get_line_view(db: &SqlitePool, line_id: &str) -> Result<LineView> {
    let bundle = fetch_line_by_id(db, line_id).await?;
    Ok(build_line_view(&bundle))
}
