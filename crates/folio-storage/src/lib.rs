//! Folio Storage Library
//!
//! Storage abstractions and implementations for Folio: the `Storage` trait
//! for media blobs with a local-filesystem backend, and the `DocumentStore`
//! trait for the JSON documents (metadata, profile) with local and
//! in-memory backends.
//!
//! # Key format
//!
//! Media keys are flat filenames inside the media directory. Keys must not
//! contain path separators, `..`, or a leading `/`; every backend validates
//! this before touching the filesystem.

pub mod document;
pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use document::{DocumentStore, JsonDocument, LocalDocumentStore, MemoryDocumentStore};
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use traits::{Storage, StorageError, StorageResult};
