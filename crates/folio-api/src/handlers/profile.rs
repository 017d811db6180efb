use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::store_file;
use crate::state::AppState;
use crate::utils::upload::{extract_profile_form, validate_file_size};
use folio_core::models::{Profile, ProfileLinks};

#[derive(Serialize, ToSchema)]
pub struct SaveProfileResponse {
    pub success: bool,
}

/// Fetch the profile. Returns the empty record when none was saved yet.
#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Current profile", body = Profile),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_profile"))]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let profile = state.profile.document.read().await?;
    Ok(Json(profile))
}

/// Save the profile, overwriting the whole record.
///
/// Multipart form: `name`, `bio`, `instagram`, `linkedin`, `email`, plus an
/// optional `avatar` file. A new avatar goes through the same storage
/// mechanism as general uploads, becomes current, and is appended to the
/// avatar history unless already present; without one the previous avatar
/// and history carry over unchanged.
#[utoipa::path(
    post,
    path = "/profile",
    tag = "profile",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile saved", body = SaveProfileResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "Avatar too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "save_profile"))]
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = extract_profile_form(multipart).await?;

    let new_avatar = match form.avatar {
        Some((original_filename, data)) => {
            validate_file_size(data.len(), state.media.max_upload_size)?;
            let stored = store_file(state.media.storage.as_ref(), &original_filename, data).await?;
            tracing::info!(file = %stored.filename, "Avatar uploaded");
            Some(stored.filename)
        }
        None => None,
    };

    state
        .profile
        .document
        .update(move |profile: &mut Profile| {
            profile.name = form.name;
            profile.bio = form.bio;
            profile.links = ProfileLinks {
                instagram: form.instagram,
                linkedin: form.linkedin,
                email: form.email,
            };
            if let Some(filename) = new_avatar {
                profile.record_avatar(filename);
            }
        })
        .await?;

    Ok(Json(SaveProfileResponse { success: true }))
}
