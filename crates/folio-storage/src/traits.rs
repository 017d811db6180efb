//! Storage abstraction traits
//!
//! This module defines the `Storage` trait that media-blob backends must
//! implement, and the error type shared with the document stores.

use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A stream of file content chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Media-blob storage abstraction
///
/// Handlers work against this trait so tests can substitute an in-memory
/// implementation. Keys are flat filenames; see the crate root documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a file under the given name and return its public URL.
    async fn store(&self, filename: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read a file's full contents.
    async fn read(&self, filename: &str) -> StorageResult<Vec<u8>>;

    /// Read a file as a stream of chunks (for the static passthrough).
    async fn read_stream(&self, filename: &str) -> StorageResult<ByteStream>;

    /// Delete a file. Fails with `StorageError::NotFound` when the file does
    /// not exist - deletion of a missing file is a reportable failure, not a
    /// no-op.
    async fn delete(&self, filename: &str) -> StorageResult<()>;

    /// Check if a file exists.
    async fn exists(&self, filename: &str) -> StorageResult<bool>;

    /// Enumerate stored filenames (regular files only, unordered).
    async fn list(&self) -> StorageResult<Vec<String>>;
}
