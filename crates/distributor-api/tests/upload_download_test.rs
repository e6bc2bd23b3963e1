//! Upload/download integration tests.
//!
//! Run with: `cargo test -p distributor-api --test upload_download_test`

mod helpers;

use distributor_services::ChunkBackend;
use distributor_storage::MemoryBackend;
use helpers::backends::{FailingBackend, WriteOnlyBackend};
use helpers::{build_app, file_form, setup_test_app, upload};
use std::sync::Arc;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[tokio::test]
async fn test_upload_then_download_round_trip() {
    let app = setup_test_app();
    let client = app.client();
    let data = sample(4096);

    let receipt = upload(client, "report.txt", data.clone()).await;
    let resource_id = receipt["resource"].as_str().unwrap().to_string();
    assert_eq!(receipt["checksum"].as_str().unwrap().len(), 64);

    let response = client
        .get("/download")
        .add_query_param("resource_id", &resource_id)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), data.as_slice());
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"report.txt\""
    );
    assert_eq!(response.header("content-type"), "application/octet-stream");
    assert_eq!(response.header("content-length"), "4096");
}

#[tokio::test]
async fn test_601_bytes_split_across_six_backends() {
    let app = setup_test_app();
    let receipt = upload(app.client(), "data.bin", sample(601)).await;
    let resource_id = receipt["resource"].as_str().unwrap();

    let mut sizes = Vec::new();
    for backend in &app.memory {
        let chunk = backend.get_chunk(resource_id).await.unwrap();
        sizes.push(chunk.data.len());
    }
    assert_eq!(sizes, vec![100, 100, 100, 100, 100, 101]);

    let entry = app
        .distributor
        .registry()
        .get(&resource_id.into())
        .await
        .unwrap();
    assert!(entry.is_committed());
    assert_eq!(entry.records.len(), 6);
}

#[tokio::test]
async fn test_checksum_matches_content() {
    let app = setup_test_app();

    let receipt = upload(app.client(), "abc.txt", b"abc".to_vec()).await;

    assert_eq!(
        receipt["checksum"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[tokio::test]
async fn test_file_smaller_than_backend_count() {
    let app = setup_test_app();
    let client = app.client();

    let receipt = upload(client, "tiny.txt", b"hi".to_vec()).await;
    let response = client
        .get("/download")
        .add_query_param("resource_id", receipt["resource"].as_str().unwrap())
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), b"hi");
}

#[tokio::test]
async fn test_empty_file_round_trip() {
    let app = setup_test_app();
    let client = app.client();

    let receipt = upload(client, "empty.txt", Vec::new()).await;
    let response = client
        .get("/download")
        .add_query_param("resource_id", receipt["resource"].as_str().unwrap())
        .await;

    assert_eq!(response.status_code(), 200);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_concurrent_uploads_are_independent() {
    let app = setup_test_app();
    let client = app.client();
    let first = vec![b'a'; 1000];
    let second = vec![b'b'; 1003];

    let (a, b) = tokio::join!(
        async { upload(client, "a.txt", first.clone()).await },
        async { upload(client, "b.txt", second.clone()).await },
    );
    assert_ne!(a["resource"], b["resource"]);

    for (receipt, expected, name) in [(&a, &first, "a.txt"), (&b, &second, "b.txt")] {
        let response = client
            .get("/download")
            .add_query_param("resource_id", receipt["resource"].as_str().unwrap())
            .await;
        assert_eq!(response.as_bytes().as_ref(), expected.as_slice());
        assert_eq!(
            response.header("content-disposition"),
            format!("attachment; filename=\"{}\"", name).as_str()
        );
    }
}

#[tokio::test]
async fn test_backend_failure_returns_500() {
    let mut backends: Vec<Arc<dyn ChunkBackend>> = (0..6)
        .map(|i| Arc::new(MemoryBackend::new(format!("slot-{}", i))) as Arc<dyn ChunkBackend>)
        .collect();
    backends[3] = Arc::new(FailingBackend);
    let app = build_app(backends, helpers::DEFAULT_MAX_UPLOAD_BYTES);

    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("data.bin", sample(601)))
        .await;

    assert_eq!(response.status_code(), 500);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Failed to access storage");
    assert!(body.get("details").is_none());

    // The failed upload keeps its entry, but nothing about it is downloadable.
    let registry = app.distributor.registry();
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn test_download_unknown_resource_is_404() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/download")
        .add_query_param("resource_id", "does-not-exist")
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<serde_json::Value>()["error"], "File not found");
}

#[tokio::test]
async fn test_download_read_failure_is_500() {
    let backends: Vec<Arc<dyn ChunkBackend>> = vec![
        Arc::new(MemoryBackend::new("slot-0")),
        Arc::new(WriteOnlyBackend::new("slot-1")),
    ];
    let app = build_app(backends, helpers::DEFAULT_MAX_UPLOAD_BYTES);
    let client = app.client();
    let receipt = upload(client, "a.txt", sample(10)).await;

    let response = client
        .get("/download")
        .add_query_param("resource_id", receipt["resource"].as_str().unwrap())
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Failed to access storage"
    );
}
