//! Multipart form helpers shared by the upload and profile handlers.

use axum::extract::Multipart;
use folio_core::AppError;

/// Fields of a `POST /upload` form.
pub struct UploadForm {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub tags: Option<String>,
    pub link: Option<String>,
}

/// Fields of a `POST /profile` form.
#[derive(Default)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    pub instagram: String,
    pub linkedin: String,
    pub email: String,
    /// `(original filename, bytes)` of a newly uploaded avatar, if any.
    pub avatar: Option<(String, Vec<u8>)>,
}

/// Extract the upload form: one `file` field plus optional `tags` / `link`.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut tags: Option<String> = None;
    let mut link: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                if file.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                let filename = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;
                file = Some((filename, data.to_vec()));
            }
            "tags" => {
                tags = Some(read_text_field(field).await?);
            }
            "link" => {
                link = Some(read_text_field(field).await?);
            }
            _ => {}
        }
    }

    let (original_filename, data) =
        file.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    Ok(UploadForm {
        data,
        original_filename,
        tags,
        link,
    })
}

/// Extract the profile form: text fields plus an optional `avatar` file.
pub async fn extract_profile_form(mut multipart: Multipart) -> Result<ProfileForm, AppError> {
    let mut form = ProfileForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "avatar" => {
                let filename = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "avatar".to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read avatar data: {}", e))
                })?;
                // An avatar input left empty submits a zero-length part
                if !data.is_empty() {
                    form.avatar = Some((filename, data.to_vec()));
                }
            }
            "name" => form.name = read_text_field(field).await?,
            "bio" => form.bio = read_text_field(field).await?,
            "instagram" => form.instagram = read_text_field(field).await?,
            "linkedin" => form.linkedin = read_text_field(field).await?,
            "email" => form.email = read_text_field(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read form field: {}", e)))
}

/// Validate file size against the configured limit.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Sanitize a client-supplied filename down to a safe flat name.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_names() {
        assert_eq!(sanitize_filename("photo-1.jpg").unwrap(), "photo-1.jpg");
    }

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("dir/sub/a b.png").unwrap(), "a_b.png");
        assert_eq!(sanitize_filename("shot!(1).gif").unwrap(), "shot__1_.gif");
    }

    #[test]
    fn sanitize_rejects_traversal() {
        assert!(sanitize_filename("..").is_err());
    }

    #[test]
    fn sanitize_empty_falls_back_to_generic_name() {
        assert_eq!(sanitize_filename("").unwrap(), "file");
    }

    #[test]
    fn file_size_limit_is_enforced() {
        assert!(validate_file_size(10, 100).is_ok());
        assert!(validate_file_size(101, 100).is_err());
    }
}
