//! Storage setup: the media directory backs both the blob storage and the
//! JSON document store.

use anyhow::Result;
use folio_core::Config;
use folio_storage::{DocumentStore, LocalDocumentStore, LocalStorage, Storage};
use std::sync::Arc;

pub async fn setup_storage(
    config: &Config,
) -> Result<(Arc<dyn Storage>, Arc<dyn DocumentStore>)> {
    let storage =
        LocalStorage::new(config.media_dir(), config.public_base_url().to_string()).await?;
    let documents = LocalDocumentStore::new(config.media_dir()).await?;

    tracing::info!(media_dir = %config.media_dir(), "Local storage initialized");

    Ok((Arc::new(storage), Arc::new(documents)))
}
