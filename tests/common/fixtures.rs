//! Test fixtures and data factories

use super::analyzer::ScriptedAnalyzer;
use super::database::TestDatabase;
use resale_catalog::config::Config;
use resale_catalog::server::AppState;
use resale_catalog::storage::{ImageStore, StorageLayer};
use std::sync::Arc;
use tempfile::TempDir;

pub const BOUNDARY: &str = "catalog-test-boundary";

/// Application state over an in-memory database and a temporary image dir
pub struct TestApp {
    pub state: AppState,
    pub database: TestDatabase,
    pub analyzer: Arc<ScriptedAnalyzer>,
    pub images_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_analyzer(ScriptedAnalyzer::new()).await
    }

    pub async fn with_analyzer(analyzer: ScriptedAnalyzer) -> Self {
        let database = TestDatabase::new().await;
        let images_dir = TempDir::new().expect("Failed to create image dir");
        let images = ImageStore::new(images_dir.path())
            .await
            .expect("Failed to create image store");

        let mut config = Config::default();
        config.catalog.batch.item_delay_ms = 0;

        let analyzer = Arc::new(analyzer);
        let storage = StorageLayer::from_parts(database.db_arc(), Arc::new(images));
        let state = AppState::with_analyzer(config, storage, analyzer.clone());

        Self {
            state,
            database,
            analyzer,
            images_dir,
        }
    }

    pub fn image_exists(&self, filename: &str) -> bool {
        self.images_dir.path().join(filename).exists()
    }
}

/// Fake JPEG payload of an exact size
pub fn jpeg_bytes(size: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; size];
    let header = [0xFF, 0xD8, 0xFF, 0xE0];
    let len = header.len().min(size);
    bytes[..len].copy_from_slice(&header[..len]);
    bytes
}

/// Hand-assembled `multipart/form-data` body
#[derive(Debug, Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(self, field: &str, filename: &str, content: &[u8]) -> Self {
        self.part(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/jpeg\r\n",
                field, filename
            ),
            content,
        )
    }

    pub fn text(self, field: &str, value: &str) -> Self {
        self.part(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n", field),
            value.as_bytes(),
        )
    }

    fn part(mut self, headers: String, content: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        self.body.extend_from_slice(headers.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        self.body
    }
}
