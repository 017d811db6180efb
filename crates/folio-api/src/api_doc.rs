//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use folio_core::models::{ContactMessage, MediaEntry, Profile, ProfileLinks};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "Personal-portfolio backend: file uploads, media listing and deletion, a singleton profile record, and a contact-form mail relay."
    ),
    paths(
        handlers::media_upload::upload_media,
        handlers::media_list::list_media,
        handlers::media_delete::delete_media,
        handlers::media_file::get_media_file,
        handlers::profile::get_profile,
        handlers::profile::save_profile,
        handlers::contact::send_contact,
        handlers::health::health_check,
    ),
    components(schemas(
        ErrorResponse,
        MediaEntry,
        Profile,
        ProfileLinks,
        ContactMessage,
    )),
    tags(
        (name = "media", description = "Upload, list, delete, and fetch media files"),
        (name = "profile", description = "The site owner's profile record"),
        (name = "contact", description = "Contact-form relay"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;
