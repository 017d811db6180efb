use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use folio_core::models::ContactMessage;
use folio_core::AppError;

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
}

/// Relay a contact-form message to the operator by mail.
///
/// All three fields are required; validation failures never reach the mail
/// sender. One send attempt, no retry.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message relayed", body = ContactResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Send failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, message), fields(operation = "send_contact"))]
pub async fn send_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(message): ValidatedJson<ContactMessage>,
) -> Result<impl IntoResponse, HttpAppError> {
    message.validate()?;

    let mailer = state.contact.mailer.as_ref().ok_or_else(|| {
        AppError::Mail("Contact relay is not configured (missing SMTP settings)".to_string())
    })?;
    let recipient = state.contact.recipient.as_deref().ok_or_else(|| {
        AppError::Mail("Contact relay has no recipient address configured".to_string())
    })?;

    mailer
        .send_contact(recipient, &message)
        .await
        .map_err(AppError::Mail)?;

    Ok(Json(ContactResponse { success: true }))
}
