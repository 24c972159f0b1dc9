//! Corpus fetch operations
//!
//! Each fetch returns an eagerly-populated bundle: the requested record plus
//! every related row the view builders need. A missing requested id is
//! `NotFound`; a missing *related* row (dangling writer/section/source
//! reference, shabad without lines) is `DataIntegrity`, since the corpus
//! guarantees those relations.

use crate::db::models::*;
use crate::{Error, Result};
use sqlx::{Row, SqlitePool};
use sqlx::sqlite::SqliteRow;

/// Fetch a line with its candidate sets and parent shabad context
pub async fn fetch_line_by_id(db: &SqlitePool, line_id: &str) -> Result<LineBundle> {
    let row = sqlx::query(
        "SELECT id, shabad_id, gurmukhi, source_page, source_line, first_letters
         FROM lines WHERE id = ?",
    )
    .bind(line_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| Error::NotFound(format!("line {}", line_id)))?;

    let line = line_from_row(&row);

    let shabad = shabad_record(db, &line.shabad_id)
        .await?
        .ok_or_else(|| integrity("line", &line.id, "shabad", &line.shabad_id))?;
    let (source, writer, section) = related_metadata(db, &shabad).await?;

    Ok(LineBundle {
        translations: translations_for(db, &line.id).await?,
        transliterations: transliterations_for(db, &line.id).await?,
        line,
        shabad,
        source,
        writer,
        section,
    })
}

/// Fetch a shabad with related metadata and its ordered line collection
pub async fn fetch_shabad_by_id(db: &SqlitePool, shabad_id: &str) -> Result<ShabadBundle> {
    let shabad = shabad_record(db, shabad_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("shabad {}", shabad_id)))?;

    let (source, writer, section) = related_metadata(db, &shabad).await?;

    let line_rows = sqlx::query(
        "SELECT id, shabad_id, gurmukhi, source_page, source_line, first_letters
         FROM lines WHERE shabad_id = ?
         ORDER BY source_line ASC",
    )
    .bind(&shabad.id)
    .fetch_all(db)
    .await?;

    if line_rows.is_empty() {
        return Err(Error::DataIntegrity(format!(
            "shabad {} has no lines",
            shabad.id
        )));
    }

    let mut lines = Vec::with_capacity(line_rows.len());
    for row in &line_rows {
        let line = line_from_row(row);
        lines.push(ShabadLineBundle {
            translations: translations_for(db, &line.id).await?,
            transliterations: transliterations_for(db, &line.id).await?,
            line,
        });
    }

    Ok(ShabadBundle {
        shabad,
        source,
        writer,
        section,
        lines,
    })
}

/// Look up the shabad id at a canonical order position
///
/// `None` means the position is past a corpus boundary; that is a normal
/// outcome for navigation, not an error.
pub async fn fetch_shabad_id_by_order(db: &SqlitePool, order_id: i64) -> Result<Option<String>> {
    let id = sqlx::query_scalar::<_, String>("SELECT id FROM shabads WHERE order_id = ?")
        .bind(order_id)
        .fetch_optional(db)
        .await?;
    Ok(id)
}

async fn shabad_record(db: &SqlitePool, shabad_id: &str) -> Result<Option<ShabadRecord>> {
    let row = sqlx::query(
        "SELECT id, source_id, writer_id, section_id, order_id
         FROM shabads WHERE id = ?",
    )
    .bind(shabad_id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(|row| ShabadRecord {
        id: row.get("id"),
        source_id: row.get("source_id"),
        writer_id: row.get("writer_id"),
        section_id: row.get("section_id"),
        order_id: row.get("order_id"),
    }))
}

/// Resolve a shabad's source, writer and section rows
async fn related_metadata(
    db: &SqlitePool,
    shabad: &ShabadRecord,
) -> Result<(SourceRecord, WriterRecord, SectionRecord)> {
    let source = sqlx::query(
        "SELECT id, name_gurmukhi, name_english, length,
                page_name_gurmukhi, page_name_english
         FROM sources WHERE id = ?",
    )
    .bind(&shabad.source_id)
    .fetch_optional(db)
    .await?
    .map(|row| SourceRecord {
        id: row.get("id"),
        name_gurmukhi: row.get("name_gurmukhi"),
        name_english: row.get("name_english"),
        length: row.get("length"),
        page_name_gurmukhi: row.get("page_name_gurmukhi"),
        page_name_english: row.get("page_name_english"),
    })
    .ok_or_else(|| integrity("shabad", &shabad.id, "source", &shabad.source_id))?;

    let writer = sqlx::query("SELECT id, name_gurmukhi, name_english FROM writers WHERE id = ?")
        .bind(shabad.writer_id)
        .fetch_optional(db)
        .await?
        .map(|row| WriterRecord {
            id: row.get("id"),
            name_gurmukhi: row.get("name_gurmukhi"),
            name_english: row.get("name_english"),
        })
        .ok_or_else(|| {
            integrity("shabad", &shabad.id, "writer", &shabad.writer_id.to_string())
        })?;

    let section = sqlx::query(
        "SELECT id, name_gurmukhi, name_english, start_page, end_page
         FROM sections WHERE id = ?",
    )
    .bind(shabad.section_id)
    .fetch_optional(db)
    .await?
    .map(|row| SectionRecord {
        id: row.get("id"),
        name_gurmukhi: row.get("name_gurmukhi"),
        name_english: row.get("name_english"),
        start_page: row.get("start_page"),
        end_page: row.get("end_page"),
    })
    .ok_or_else(|| {
        integrity("shabad", &shabad.id, "section", &shabad.section_id.to_string())
    })?;

    Ok((source, writer, section))
}

/// Translation candidates in storage-return order
async fn translations_for(db: &SqlitePool, line_id: &str) -> Result<Vec<TranslationRecord>> {
    let rows = sqlx::query(
        "SELECT line_id, translation_source_id, translation
         FROM translations WHERE line_id = ?",
    )
    .bind(line_id)
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| TranslationRecord {
            line_id: row.get("line_id"),
            translation_source_id: row.get("translation_source_id"),
            translation: row.get("translation"),
        })
        .collect())
}

/// Transliteration candidates in storage-return order
async fn transliterations_for(
    db: &SqlitePool,
    line_id: &str,
) -> Result<Vec<TransliterationRecord>> {
    let rows = sqlx::query(
        "SELECT line_id, language_id, transliteration
         FROM transliterations WHERE line_id = ?",
    )
    .bind(line_id)
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| TransliterationRecord {
            line_id: row.get("line_id"),
            language_id: row.get("language_id"),
            transliteration: row.get("transliteration"),
        })
        .collect())
}

fn line_from_row(row: &SqliteRow) -> LineRecord {
    LineRecord {
        id: row.get("id"),
        shabad_id: row.get("shabad_id"),
        gurmukhi: row.get("gurmukhi"),
        source_page: row.get("source_page"),
        source_line: row.get("source_line"),
        first_letters: row.get("first_letters"),
    }
}

fn integrity(kind: &str, id: &str, missing: &str, missing_id: &str) -> Error {
    Error::DataIntegrity(format!(
        "{} {} references missing {} {}",
        kind, id, missing, missing_id
    ))
}
