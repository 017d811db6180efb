//! In-memory storage backend, used by tests to exercise handlers and
//! services without touching the filesystem.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use bytes::Bytes;

use crate::local::validate_filename;
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};

/// Map-backed `Storage` implementation.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    base_url: String,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryStorage {
            files: Arc::new(RwLock::new(HashMap::new())),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn store(&self, filename: &str, data: Vec<u8>) -> StorageResult<String> {
        validate_filename(filename)?;
        self.files
            .write()
            .expect("memory storage lock poisoned")
            .insert(filename.to_string(), data);
        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            filename
        ))
    }

    async fn read(&self, filename: &str) -> StorageResult<Vec<u8>> {
        validate_filename(filename)?;
        self.files
            .read()
            .expect("memory storage lock poisoned")
            .get(filename)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(filename.to_string()))
    }

    async fn read_stream(&self, filename: &str) -> StorageResult<ByteStream> {
        let data = self.read(filename).await?;
        let stream = futures::stream::once(async move { Ok(Bytes::from(data)) });
        Ok(Box::pin(stream))
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        validate_filename(filename)?;
        self.files
            .write()
            .expect("memory storage lock poisoned")
            .remove(filename)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(filename.to_string()))
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        validate_filename(filename)?;
        Ok(self
            .files
            .read()
            .expect("memory storage lock poisoned")
            .contains_key(filename))
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        Ok(self
            .files
            .read()
            .expect("memory storage lock poisoned")
            .keys()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_read_delete_cycle() {
        let storage = MemoryStorage::new("http://test/uploads");
        let url = storage.store("a.txt", b"abc".to_vec()).await.unwrap();
        assert_eq!(url, "http://test/uploads/a.txt");
        assert_eq!(storage.read("a.txt").await.unwrap(), b"abc");

        storage.delete("a.txt").await.unwrap();
        assert!(matches!(
            storage.read("a.txt").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_an_error() {
        let storage = MemoryStorage::new("http://test/uploads");
        assert!(matches!(
            storage.delete("missing.txt").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn rejects_traversal_keys() {
        let storage = MemoryStorage::new("http://test/uploads");
        assert!(matches!(
            storage.store("../x", b"x".to_vec()).await,
            Err(StorageError::InvalidKey(_))
        ));
    }
}
