//! JSON document persistence
//!
//! The two application documents (media metadata and profile) are whole-file
//! JSON reads and replaces - no incremental update, no versioning. The
//! `DocumentStore` trait abstracts the byte-level persistence so tests can
//! substitute the in-memory backend; `JsonDocument` layers typed access and
//! a per-document mutex on top, so every load-mutate-save cycle is mutually
//! exclusive within the process.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::local::validate_filename;
use crate::traits::{StorageError, StorageResult};

/// Byte-level persistence for named JSON documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load a document's raw bytes; `None` when the document was never saved.
    async fn load_bytes(&self, name: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Overwrite a document with the given bytes.
    async fn save_bytes(&self, name: &str, bytes: Vec<u8>) -> StorageResult<()>;
}

/// Filesystem-backed document store. Documents live alongside the uploaded
/// files inside the media directory.
#[derive(Clone)]
pub struct LocalDocumentStore {
    base_path: PathBuf,
}

impl LocalDocumentStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create document directory {}: {}",
                base_path.display(),
                e
            ))
        })?;
        Ok(LocalDocumentStore { base_path })
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn load_bytes(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_filename(name)?;
        let path = self.base_path.join(name);
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(None);
        }
        let bytes = fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!(
                "Failed to read document {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(bytes))
    }

    async fn save_bytes(&self, name: &str, bytes: Vec<u8>) -> StorageResult<()> {
        validate_filename(name)?;
        let path = self.base_path.join(name);
        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to create document {}: {}",
                path.display(),
                e
            ))
        })?;
        file.write_all(&bytes).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to write document {}: {}",
                path.display(),
                e
            ))
        })?;
        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to sync document {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

/// Map-backed document store for tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: std::sync::RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load_bytes(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self
            .docs
            .read()
            .expect("document store lock poisoned")
            .get(name)
            .cloned())
    }

    async fn save_bytes(&self, name: &str, bytes: Vec<u8>) -> StorageResult<()> {
        self.docs
            .write()
            .expect("document store lock poisoned")
            .insert(name.to_string(), bytes);
        Ok(())
    }
}

/// Typed handle to one named JSON document.
///
/// `read` returns the default value when the document was never saved;
/// malformed content surfaces as a `Serialization` error (callers do not
/// recover from this - it becomes a request-level 500). `update` runs the
/// whole load-mutate-save cycle under the document's mutex, so concurrent
/// writers within the process cannot lose each other's updates.
pub struct JsonDocument<T> {
    store: Arc<dyn DocumentStore>,
    name: String,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default + Send,
{
    pub fn new(store: Arc<dyn DocumentStore>, name: impl Into<String>) -> Self {
        JsonDocument {
            store,
            name: name.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    async fn load_unlocked(&self) -> StorageResult<T> {
        match self.store.load_bytes(&self.name).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(T::default()),
        }
    }

    /// Load and deserialize the current document.
    pub async fn read(&self) -> StorageResult<T> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Load, mutate in memory, serialize, and overwrite - atomically with
    /// respect to other `update`/`read` calls on this handle.
    pub async fn update<R, F>(&self, mutate: F) -> StorageResult<R>
    where
        F: FnOnce(&mut T) -> R + Send,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.load_unlocked().await?;
        let result = mutate(&mut doc);
        let bytes = serde_json::to_vec_pretty(&doc)?;
        self.store.save_bytes(&self.name, bytes).await?;
        Ok(result)
    }
}
