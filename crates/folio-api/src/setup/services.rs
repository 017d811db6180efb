//! Service initialization and state assembly.

use anyhow::Result;
use folio_core::constants::PROFILE_DOCUMENT;
use folio_core::Config;
use folio_storage::{DocumentStore, JsonDocument, Storage};
use std::sync::Arc;

use crate::services::catalog::MediaCatalog;
use crate::services::email::EmailService;
use crate::state::{AppState, ContactState, MediaState, ProfileState};

pub fn initialize_services(
    config: &Config,
    storage: Arc<dyn Storage>,
    documents: Arc<dyn DocumentStore>,
) -> Result<Arc<AppState>> {
    let catalog = Arc::new(MediaCatalog::new(documents.clone()));
    let profile_document = Arc::new(JsonDocument::new(documents, PROFILE_DOCUMENT));

    let mailer = EmailService::from_config(config);
    if mailer.is_none() {
        tracing::warn!("SMTP not configured - contact relay disabled");
    }

    let state = AppState {
        config: config.clone(),
        media: MediaState {
            storage,
            catalog,
            max_upload_size: config.max_upload_size_bytes(),
        },
        profile: ProfileState {
            document: profile_document,
        },
        contact: ContactState {
            mailer,
            recipient: config.contact_recipient().map(String::from),
        },
    };

    Ok(Arc::new(state))
}
