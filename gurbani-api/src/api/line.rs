//! Line endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use gurbani_common::views::{get_line_view, LineView};
use tracing::debug;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/line/:id
///
/// One line of scripture with every rendering populated.
pub async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LineView>, ApiError> {
    debug!("line request: {}", id);
    let view = get_line_view(&state.db, &id).await?;
    Ok(Json(view))
}
