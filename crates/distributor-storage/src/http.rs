use crate::protocol::{GET_CHUNK_PATH, ORDER_HEADER, SAVE_CHUNK_PATH};
use crate::traits::{validate_name, Chunk, ChunkBackend, StorageError, StorageResult};
use crate::BackendKind;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Network backend talking to a storage node
///
/// Writes are `POST {addr}/save-chunk?name=..&order=..&size=..` with the raw
/// chunk as an `application/octet-stream` body. Reads are
/// `GET {addr}/get-chunk?name=..`, answered with the raw bytes and the chunk
/// order in the `X-Chunk-Order` header. Any 2xx status is success.
#[derive(Clone)]
pub struct HttpBackend {
    addr: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend for the node at `addr` sharing an existing
    /// connection pool
    ///
    /// # Arguments
    /// * `addr` - Node base URL (e.g., "http://localhost:8081")
    /// * `client` - Client carrying the per-request timeout
    pub fn with_client(addr: impl Into<String>, client: reqwest::Client) -> Self {
        HttpBackend {
            addr: addr.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}

#[async_trait]
impl ChunkBackend for HttpBackend {
    async fn save_chunk(&self, name: &str, order: u32, data: Bytes) -> StorageResult<()> {
        validate_name(name)?;

        let size = data.len();
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(self.url(SAVE_CHUNK_PATH))
            .query(&[
                ("name", name.to_string()),
                ("order", order.to_string()),
                ("size", size.to_string()),
            ])
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::UploadFailed(format!(
                "failed to store chunk on {}: {} - {}",
                self.addr, status, error_text
            )));
        }

        tracing::debug!(
            resource_id = %name,
            order,
            chunk_size = size,
            backend = %self.addr,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Chunk stored on node"
        );

        Ok(())
    }

    async fn get_chunk(&self, name: &str) -> StorageResult<Chunk> {
        validate_name(name)?;

        let response = self
            .client
            .get(self.url(GET_CHUNK_PATH))
            .query(&[("name", name)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(format!(
                "resource {:?} not found on {}",
                name, self.addr
            )));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::DownloadFailed(format!(
                "failed to get chunk from {}: {} - {}",
                self.addr, status, error_text
            )));
        }

        let order = response
            .headers()
            .get(ORDER_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok())
            .ok_or_else(|| {
                StorageError::DownloadFailed(format!(
                    "node {} answered without a valid {} header",
                    self.addr, ORDER_HEADER
                ))
            })?;

        let data = response.bytes().await?;

        tracing::debug!(
            resource_id = %name,
            order,
            chunk_size = data.len(),
            backend = %self.addr,
            "Chunk fetched from node"
        );

        Ok(Chunk { order, data })
    }

    fn location(&self) -> String {
        self.addr.clone()
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Http
    }
}
