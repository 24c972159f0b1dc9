//! Canonical-order navigation
//!
//! Shabads form a dense, strictly increasing sequence of order positions
//! across the whole corpus: the previous shabad sits at exactly one less,
//! the next at exactly one more.

use crate::db::queries::fetch_shabad_id_by_order;
use crate::Result;
use sqlx::SqlitePool;

/// Neighboring shabad ids in canonical order
///
/// Either side is `None` at a corpus boundary.
#[derive(Debug, Clone, Default)]
pub struct Neighbors {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Locate the shabads immediately before and after an order position
///
/// The two lookups are independent; a missing neighbor is a normal boundary
/// outcome, never an error.
pub async fn resolve_neighbors(db: &SqlitePool, order_id: i64) -> Result<Neighbors> {
    let previous = fetch_shabad_id_by_order(db, order_id - 1).await?;
    let next = fetch_shabad_id_by_order(db, order_id + 1).await?;
    Ok(Neighbors { previous, next })
}
