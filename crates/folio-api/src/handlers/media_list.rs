use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::catalog::MediaCatalog;
use crate::state::AppState;
use folio_storage::Storage;

#[derive(Serialize, ToSchema)]
pub struct MediaListResponse {
    /// Stored filenames, unordered. The store documents themselves are
    /// never included.
    pub files: Vec<String>,
}

/// List stored media files.
#[utoipa::path(
    get,
    path = "/media",
    tag = "media",
    responses(
        (status = 200, description = "Stored filenames", body = MediaListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_media"))]
pub async fn list_media(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let files = state
        .media
        .storage
        .list()
        .await
        .map_err(HttpAppError::from)?
        .into_iter()
        .filter(|name| !MediaCatalog::is_reserved(name))
        .collect();

    Ok(Json(MediaListResponse { files }))
}
