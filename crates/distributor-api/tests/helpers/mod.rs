//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p distributor-api`.

pub mod backends;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use distributor_api::setup::routes;
use distributor_api::state::AppState;
use distributor_core::{BackendKind, BaseConfig, Config, GatewayConfig};
use distributor_services::{ChunkBackend, ChunkDistributor};
use distributor_storage::MemoryBackend;
use std::sync::Arc;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Test application: server plus handles on what sits behind it.
pub struct TestApp {
    pub server: TestServer,
    pub distributor: ChunkDistributor,
    pub memory: Vec<Arc<MemoryBackend>>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config(backend_count: usize, max_upload_size_bytes: usize) -> Config {
    Config(Box::new(GatewayConfig {
        base: BaseConfig {
            server_port: 0,
            environment: "test".to_string(),
        },
        backend_kind: BackendKind::Memory,
        backend_addresses: (0..backend_count).map(|i| format!("slot-{}", i)).collect(),
        backend_timeout_secs: 5,
        max_upload_size_bytes,
    }))
}

/// Six in-memory backends, 1 MiB upload limit.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_limit(6, DEFAULT_MAX_UPLOAD_BYTES)
}

pub fn setup_test_app_with_limit(backend_count: usize, max_upload_size_bytes: usize) -> TestApp {
    let memory: Vec<Arc<MemoryBackend>> = (0..backend_count)
        .map(|i| Arc::new(MemoryBackend::new(format!("slot-{}", i))))
        .collect();
    let backends = memory
        .iter()
        .map(|b| b.clone() as Arc<dyn ChunkBackend>)
        .collect();

    let mut app = build_app(backends, max_upload_size_bytes);
    app.memory = memory;
    app
}

/// Router over an arbitrary backend set.
pub fn build_app(backends: Vec<Arc<dyn ChunkBackend>>, max_upload_size_bytes: usize) -> TestApp {
    let config = test_config(backends.len(), max_upload_size_bytes);
    let distributor =
        ChunkDistributor::new(backends).expect("Failed to create chunk distributor");
    let state = Arc::new(AppState::new(distributor.clone(), config.clone()));
    let router = routes::setup_routes(&config, state);

    TestApp {
        server: TestServer::new(router).expect("Failed to create test server"),
        distributor,
        memory: Vec::new(),
    }
}

pub fn file_form(file_name: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data)
            .file_name(file_name)
            .mime_type("application/octet-stream"),
    )
}

/// Upload `data` and return the parsed receipt body.
pub async fn upload(server: &TestServer, file_name: &str, data: Vec<u8>) -> serde_json::Value {
    let response = server
        .post("/upload")
        .multipart(file_form(file_name, data))
        .await;
    assert_eq!(response.status_code(), 201, "upload failed: {}", response.text());
    response.json::<serde_json::Value>()
}
