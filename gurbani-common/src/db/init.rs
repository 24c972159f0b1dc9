//! Database connection
//!
//! The scripture corpus is an immutable artifact shipped to the host; every
//! connection is opened read-only.

use crate::{Error, Result};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Connect to the scripture database in read-only mode
///
/// mode=ro rejects writes; immutable=1 tells SQLite the file cannot change
/// underneath it, so no locking or journal files are needed.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::Config(format!(
            "scripture database not found: {}",
            db_path.display()
        )));
    }

    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());
    let pool = SqlitePool::connect(&db_url).await?;

    info!("Opened scripture database (read-only): {}", db_path.display());

    Ok(pool)
}
