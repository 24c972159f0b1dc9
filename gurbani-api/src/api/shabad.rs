//! Shabad endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use gurbani_common::views::{get_shabad_view, ShabadView};
use tracing::debug;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/shabad/:id
///
/// Full shabad: header metadata, navigation neighbors, and the ordered
/// line collection.
pub async fn get_shabad(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShabadView>, ApiError> {
    debug!("shabad request: {}", id);
    let view = get_shabad_view(&state.db, &id).await?;
    Ok(Json(view))
}
