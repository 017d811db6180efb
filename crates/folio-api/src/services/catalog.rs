//! Media catalog: typed access to the metadata document.
//!
//! The catalog owns the `metadata.json` document and is the only writer to
//! it. Every mutation is a full load-mutate-save cycle under the document's
//! mutex (see `JsonDocument`).

use std::sync::Arc;

use folio_core::constants::{METADATA_DOCUMENT, RESERVED_DOCUMENTS};
use folio_core::models::{MediaEntry, MetadataDocument};
use folio_storage::{DocumentStore, JsonDocument, StorageResult};

pub struct MediaCatalog {
    document: JsonDocument<MetadataDocument>,
}

impl MediaCatalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        MediaCatalog {
            document: JsonDocument::new(store, METADATA_DOCUMENT),
        }
    }

    /// Insert or overwrite the entry for a stored filename.
    pub async fn insert(&self, filename: String, entry: MediaEntry) -> StorageResult<()> {
        self.document
            .update(|doc| {
                doc.insert(filename, entry);
            })
            .await
    }

    /// Remove the entry for a filename. Returns the removed entry, `None`
    /// when the filename had no entry (uploads that never carried metadata,
    /// e.g. avatars).
    pub async fn remove(&self, filename: &str) -> StorageResult<Option<MediaEntry>> {
        self.document.update(|doc| doc.remove(filename)).await
    }

    /// Current full document.
    pub async fn entries(&self) -> StorageResult<MetadataDocument> {
        self.document.read().await
    }

    /// Whether a filename is one of the reserved store documents, which
    /// never appear in media listings.
    pub fn is_reserved(filename: &str) -> bool {
        RESERVED_DOCUMENTS.contains(&filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::MemoryDocumentStore;

    fn catalog() -> MediaCatalog {
        MediaCatalog::new(Arc::new(MemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn insert_then_entries_round_trips() {
        let catalog = catalog();
        catalog
            .insert(
                "u1-a.png".to_string(),
                MediaEntry {
                    tags: vec!["art".to_string()],
                    link: Some("https://example.com".to_string()),
                },
            )
            .await
            .unwrap();

        let entries = catalog.entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["u1-a.png"].tags, vec!["art"]);
    }

    #[tokio::test]
    async fn remove_returns_removed_entry() {
        let catalog = catalog();
        catalog
            .insert("u1-a.png".to_string(), MediaEntry::default())
            .await
            .unwrap();

        let removed = catalog.remove("u1-a.png").await.unwrap();
        assert!(removed.is_some());
        assert!(catalog.entries().await.unwrap().is_empty());

        let removed_again = catalog.remove("u1-a.png").await.unwrap();
        assert!(removed_again.is_none());
    }

    #[test]
    fn reserved_names_are_detected() {
        assert!(MediaCatalog::is_reserved("metadata.json"));
        assert!(MediaCatalog::is_reserved("profile.json"));
        assert!(!MediaCatalog::is_reserved("photo.jpg"));
    }
}
