use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use folio_storage::Storage;

#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Delete a stored file and its metadata entry.
///
/// The file is removed first; only then is the metadata entry dropped. A
/// nonexistent filename fails the whole operation and leaves the metadata
/// document untouched.
#[utoipa::path(
    delete,
    path = "/delete/{filename}",
    tag = "media",
    params(
        ("filename" = String, Path, description = "Stored filename")
    ),
    responses(
        (status = 200, description = "File and metadata removed", body = DeleteResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_media", filename = %filename))]
pub async fn delete_media(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.media.storage.delete(&filename).await?;
    state.media.catalog.remove(&filename).await?;

    tracing::info!(file = %filename, "Media deleted");

    Ok(Json(DeleteResponse { success: true }))
}
