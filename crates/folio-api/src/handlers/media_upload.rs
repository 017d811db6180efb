use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::persist_upload;
use crate::state::AppState;
use crate::utils::upload::{extract_upload_form, validate_file_size};
use folio_core::models::{parse_tags, MediaEntry};

#[derive(Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// The stored filename; also the key of the metadata entry.
    pub file: String,
}

/// Upload a media file.
///
/// Multipart form: `file` (required), `tags` (optional comma-separated),
/// `link` (optional). The file is persisted under a unique name and a
/// metadata entry is recorded for it.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "media",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_media"))]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = extract_upload_form(multipart).await?;
    validate_file_size(form.data.len(), state.media.max_upload_size)?;

    let entry = MediaEntry {
        tags: parse_tags(form.tags.as_deref().unwrap_or_default()),
        link: form.link.filter(|l| !l.trim().is_empty()),
    };

    let stored = persist_upload(&state.media, &form.original_filename, form.data, entry).await?;

    tracing::info!(file = %stored.filename, "Media uploaded");

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        file: stored.filename,
    }))
}
