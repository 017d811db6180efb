//! Data models for the application
//!
//! Each sub-module covers one domain area: uploaded media metadata, the
//! singleton profile record, and transient contact-form messages.

mod contact;
mod media;
mod profile;

pub use contact::ContactMessage;
pub use media::{parse_tags, MediaEntry, MetadataDocument};
pub use profile::{Profile, ProfileLinks};
