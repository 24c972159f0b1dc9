//! Shabad view
//!
//! Shabad-level metadata plus the ordered line collection, as served by the
//! shabad endpoint. Per-line bodies omit the parent context that already
//! sits in the header.

use crate::db::models::{ShabadBundle, ShabadLineBundle};
use crate::db::queries::fetch_shabad_by_id;
use crate::navigation::{resolve_neighbors, Neighbors};
use crate::text::strip_vishraams;
use crate::views::{
    larivaar_pair, raag_view, script_pair, source_view, translation_block,
    transliteration_block, writer_view, RaagView, ScriptPair, SourceView, TranslationBlock,
    TransliterationBlock, WriterView,
};
use crate::{Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize)]
pub struct ShabadView {
    #[serde(rename = "shabadinfo")]
    pub shabad_info: ShabadInfo,
    pub shabad: Vec<ShabadLineEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShabadInfo {
    #[serde(rename = "shabadid")]
    pub shabad_id: String,
    /// By convention a shabad is addressed by its first line's page
    #[serde(rename = "pageno")]
    pub page_no: i64,
    pub source: SourceView,
    pub writer: WriterView,
    pub raag: RaagView,
    pub navigation: NavigationView,
    pub count: i64,
}

/// Neighboring shabads in canonical order; null at corpus boundaries
#[derive(Debug, Clone, Serialize)]
pub struct NavigationView {
    pub previous: Option<NeighborView>,
    pub next: Option<NeighborView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborView {
    pub id: String,
}

/// One line of the shabad, wrapped to match the wire shape
#[derive(Debug, Clone, Serialize)]
pub struct ShabadLineEntry {
    pub line: ShabadLine,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShabadLine {
    pub id: String,
    pub gurmukhi: ScriptPair,
    pub larivaar: ScriptPair,
    pub translation: TranslationBlock,
    pub transliteration: TransliterationBlock,
    #[serde(rename = "lineNum")]
    pub line_num: i64,
    #[serde(rename = "firstletters")]
    pub first_letters: ScriptPair,
}

/// Compose a shabad view from an eagerly-fetched bundle and its resolved
/// neighbors
///
/// Pure: all storage access happened at fetch time. Line order is the
/// bundle's order (source line number ascending). An empty line collection
/// is a data-integrity failure since the header page number comes from the
/// first line.
pub fn build_shabad_view(bundle: &ShabadBundle, neighbors: Neighbors) -> Result<ShabadView> {
    let first_line = bundle.lines.first().ok_or_else(|| {
        Error::DataIntegrity(format!("shabad {} has no lines", bundle.shabad.id))
    })?;

    let lines: Vec<ShabadLineEntry> = bundle
        .lines
        .iter()
        .map(|line| ShabadLineEntry {
            line: shabad_line(line),
        })
        .collect();

    Ok(ShabadView {
        shabad_info: ShabadInfo {
            shabad_id: bundle.shabad.id.clone(),
            page_no: first_line.line.source_page,
            source: source_view(&bundle.source),
            writer: writer_view(&bundle.writer),
            raag: raag_view(&bundle.section),
            navigation: NavigationView {
                previous: neighbors.previous.map(|id| NeighborView { id }),
                next: neighbors.next.map(|id| NeighborView { id }),
            },
            count: bundle.lines.len() as i64,
        },
        shabad: lines,
    })
}

fn shabad_line(bundle: &ShabadLineBundle) -> ShabadLine {
    let stripped = strip_vishraams(&bundle.line.gurmukhi);

    ShabadLine {
        id: bundle.line.id.clone(),
        gurmukhi: script_pair(&stripped),
        larivaar: larivaar_pair(&stripped),
        translation: translation_block(&bundle.translations),
        transliteration: transliteration_block(&bundle.transliterations),
        line_num: bundle.line.source_line,
        first_letters: script_pair(&bundle.line.first_letters),
    }
}

/// Fetch a shabad by id, resolve its neighbors, and assemble the view
pub async fn get_shabad_view(db: &SqlitePool, shabad_id: &str) -> Result<ShabadView> {
    let bundle = fetch_shabad_by_id(db, shabad_id).await?;
    let neighbors = resolve_neighbors(db, bundle.shabad.order_id).await?;
    build_shabad_view(&bundle, neighbors)
}
