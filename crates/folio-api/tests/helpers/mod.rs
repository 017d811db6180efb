//! Test helpers: build the application and a test server over temp-dir
//! storage.
//!
//! Run from workspace root: `cargo test -p folio-api`.

use axum_test::TestServer;
use folio_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the owned media directory.
pub struct TestApp {
    pub server: TestServer,
    pub media_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Parse the on-disk metadata document.
    pub fn metadata_document(&self) -> serde_json::Value {
        let path = self.media_dir.join("metadata.json");
        if !path.exists() {
            return serde_json::json!({});
        }
        let raw = std::fs::read_to_string(path).expect("read metadata document");
        serde_json::from_str(&raw).expect("parse metadata document")
    }
}

/// Config pointing at a temp media directory, SMTP unconfigured.
pub fn test_config(media_dir: &Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        media_dir: media_dir.to_string_lossy().into_owned(),
        public_base_url: "http://localhost:3000/uploads".to_string(),
        max_upload_size_bytes: 8 * 1024 * 1024,
        smtp_host: None,
        smtp_port: None,
        smtp_user: None,
        smtp_password: None,
        smtp_from: None,
        smtp_tls: true,
        contact_recipient: None,
    }
}

/// Setup a test application with isolated temp-dir storage.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let media_dir = temp_dir.path().join("uploads");
    let config = test_config(&media_dir);

    let (storage, documents) = folio_api::setup::storage::setup_storage(&config)
        .await
        .expect("Failed to setup storage");
    let state = folio_api::setup::services::initialize_services(&config, storage, documents)
        .expect("Failed to initialize services");
    let router =
        folio_api::setup::routes::setup_routes(&config, state).expect("Failed to setup routes");

    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        media_dir,
        _temp_dir: temp_dir,
    }
}
