//! Application-wide constants.

/// Filename of the media metadata document inside the media directory.
pub const METADATA_DOCUMENT: &str = "metadata.json";

/// Filename of the profile document inside the media directory.
pub const PROFILE_DOCUMENT: &str = "profile.json";

/// Document filenames that never appear in media listings.
pub const RESERVED_DOCUMENTS: [&str; 2] = [METADATA_DOCUMENT, PROFILE_DOCUMENT];
