use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// A contact-form submission. Transient: validated, relayed by mail, never
/// persisted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// All three fields are required and must be non-blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
