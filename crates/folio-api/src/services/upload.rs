//! Media upload flow: unique naming, blob persistence, metadata recording.

use folio_core::models::MediaEntry;
use folio_core::AppError;
use folio_storage::Storage;
use uuid::Uuid;

use crate::error::app_error_from_storage;
use crate::state::MediaState;
use crate::utils::upload::sanitize_filename;

/// A file persisted to storage.
pub struct StoredFile {
    pub filename: String,
    pub url: String,
}

/// Generate the stored name for an upload: a uuid prefix joined to the
/// sanitized original name. The uuid makes the name collision-resistant;
/// the original name keeps listings readable.
pub fn unique_media_filename(original_filename: &str) -> Result<String, AppError> {
    let safe = sanitize_filename(original_filename)?;
    Ok(format!("{}-{}", Uuid::new_v4().simple(), safe))
}

/// Persist file bytes under a freshly generated unique name.
pub async fn store_file(
    storage: &dyn Storage,
    original_filename: &str,
    data: Vec<u8>,
) -> Result<StoredFile, AppError> {
    let filename = unique_media_filename(original_filename)?;
    let url = storage
        .store(&filename, data)
        .await
        .map_err(app_error_from_storage)?;
    Ok(StoredFile { filename, url })
}

/// Persist an upload and record its metadata entry.
///
/// The file is written first, then the metadata document. If the document
/// write fails the stored file is deleted best-effort in the background, so
/// the "every metadata key has a file" invariant cannot break in that
/// direction, and the client sees the failure.
pub async fn persist_upload(
    media: &MediaState,
    original_filename: &str,
    data: Vec<u8>,
    entry: MediaEntry,
) -> Result<StoredFile, AppError> {
    let stored = store_file(media.storage.as_ref(), original_filename, data).await?;

    if let Err(e) = media.catalog.insert(stored.filename.clone(), entry).await {
        let storage = media.storage.clone();
        let filename = stored.filename.clone();
        tokio::spawn(async move {
            if let Err(cleanup_err) = storage.delete(&filename).await {
                tracing::warn!(
                    error = %cleanup_err,
                    filename = %filename,
                    "Failed to cleanup stored file after metadata error"
                );
            }
        });
        return Err(app_error_from_storage(e));
    }

    Ok(stored)
}
