//! Application state and sub-states.
//!
//! AppState is split into domain sub-states so each handler reaches only for
//! what it needs, and tests can assemble states with in-memory backends.

use std::sync::Arc;

use folio_core::models::Profile;
use folio_core::Config;
use folio_storage::{JsonDocument, Storage};

use crate::services::catalog::MediaCatalog;
use crate::services::email::EmailService;

/// Media blobs, their metadata document, and upload limits.
#[derive(Clone)]
pub struct MediaState {
    pub storage: Arc<dyn Storage>,
    pub catalog: Arc<MediaCatalog>,
    pub max_upload_size: usize,
}

/// The singleton profile document.
#[derive(Clone)]
pub struct ProfileState {
    pub document: Arc<JsonDocument<Profile>>,
}

/// Contact relay: mail sender plus the fixed operator address.
/// `mailer` is `None` when SMTP is unconfigured; the relay then fails with a
/// mail error rather than silently dropping messages.
#[derive(Clone)]
pub struct ContactState {
    pub mailer: Option<EmailService>,
    pub recipient: Option<String>,
}

/// Top-level application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub media: MediaState,
    pub profile: ProfileState,
    pub contact: ContactState,
}
