//! jsonbin.io storage implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::Storage;
use crate::entities::Task;
use crate::errors::{TrackerError, TrackerResult};

const JSONBIN_API_BASE: &str = "https://api.jsonbin.io/v3";
const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// Hosted storage backed by a jsonbin.io bin.
///
/// The whole task list lives in one bin as a plain array. Reads fetch the
/// bin record, writes replace it, and every request carries the master key
/// header. The service itself holds no state between requests, so any
/// number of replicas can point at the same bin.
#[derive(Debug, Clone)]
pub struct JsonBinStorage {
    client: Client,
    api_key: String,
    bin_id: String,
    base_url: String,
}

/// Read envelope returned by the bin API.
#[derive(Debug, Deserialize)]
struct BinRecord {
    record: Vec<Task>,
}

/// Error envelope returned by the bin API.
#[derive(Debug, Deserialize)]
struct BinError {
    message: String,
}

impl JsonBinStorage {
    /// Create a jsonbin storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is empty or the HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>, bin_id: impl Into<String>) -> TrackerResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TrackerError::Config(
                "jsonbin master key is required".to_string(),
            ));
        }

        let bin_id = bin_id.into();
        if bin_id.is_empty() {
            return Err(TrackerError::Config(
                "jsonbin bin id is required".to_string(),
            ));
        }

        let client = Client::builder().user_agent("tracker/0.1.0").build()?;

        Ok(Self {
            client,
            api_key,
            bin_id,
            base_url: JSONBIN_API_BASE.to_string(),
        })
    }

    /// Override the API base URL. Tests point this at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn bin_url(&self) -> String {
        format!("{}/b/{}", self.base_url, self.bin_id)
    }

    fn bin_api_error(status: u16, body: &str) -> TrackerError {
        if let Ok(error) = serde_json::from_str::<BinError>(body) {
            return TrackerError::BinApi {
                status,
                message: error.message,
            };
        }
        TrackerError::BinApi {
            status,
            message: body.to_string(),
        }
    }
}

#[async_trait]
impl Storage for JsonBinStorage {
    async fn initialize(&self) -> TrackerResult<()> {
        // Probe the bin so bad credentials fail at startup
        self.load_tasks().await?;
        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "jsonbin"
    }

    async fn load_tasks(&self) -> TrackerResult<Vec<Task>> {
        let url = self.bin_url();
        debug!(url = %url, "Fetching tasks from bin");

        let response = self
            .client
            .get(&url)
            .header(MASTER_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::bin_api_error(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let envelope: BinRecord = serde_json::from_str(&body)?;
        Ok(envelope.record)
    }

    async fn save_tasks(&self, tasks: &[Task]) -> TrackerResult<()> {
        let url = self.bin_url();
        debug!(url = %url, count = tasks.len(), "Replacing bin record");

        let response = self
            .client
            .put(&url)
            .header(MASTER_KEY_HEADER, &self.api_key)
            .json(&tasks)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::bin_api_error(status.as_u16(), &body));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};

    use super::*;
    use crate::entities::TaskStatus;

    #[derive(Clone, Default)]
    struct BinState {
        master_keys: Arc<Mutex<Vec<String>>>,
        saved: Arc<Mutex<Option<serde_json::Value>>>,
    }

    fn record_key(state: &BinState, headers: &HeaderMap) {
        if let Some(value) = headers.get(MASTER_KEY_HEADER) {
            state
                .master_keys
                .lock()
                .unwrap()
                .push(value.to_str().unwrap().to_string());
        }
    }

    async fn read_bin(
        State(state): State<BinState>,
        headers: HeaderMap,
    ) -> Json<serde_json::Value> {
        record_key(&state, &headers);
        Json(serde_json::json!({
            "record": [{"id": 1, "title": "From the bin", "status": "pending"}],
            "metadata": {"id": "abc123", "private": true}
        }))
    }

    async fn update_bin(
        State(state): State<BinState>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        record_key(&state, &headers);
        *state.saved.lock().unwrap() = Some(body.clone());
        Json(serde_json::json!({ "record": body }))
    }

    async fn spawn_bin_server(state: BinState) -> String {
        let app = Router::new()
            .route("/b/{bin_id}", get(read_bin).put(update_bin))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_new_requires_master_key() {
        let result = JsonBinStorage::new("", "abc123");
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_new_requires_bin_id() {
        let result = JsonBinStorage::new("key", "");
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_bin_url_joins_base_and_bin() {
        let storage = JsonBinStorage::new("key", "abc123").unwrap();
        assert_eq!(storage.bin_url(), "https://api.jsonbin.io/v3/b/abc123");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let storage = JsonBinStorage::new("key", "abc123")
            .unwrap()
            .with_base_url("http://127.0.0.1:9/");
        assert_eq!(storage.bin_url(), "http://127.0.0.1:9/b/abc123");
    }

    #[tokio::test]
    async fn test_load_unwraps_record_envelope() {
        let state = BinState::default();
        let base = spawn_bin_server(state.clone()).await;
        let storage = JsonBinStorage::new("secret-key", "abc123")
            .unwrap()
            .with_base_url(base);

        let tasks = storage.load_tasks().await.unwrap();

        assert_eq!(tasks, vec![Task::new(1, "From the bin", TaskStatus::Pending)]);
        assert_eq!(state.master_keys.lock().unwrap().as_slice(), ["secret-key"]);
    }

    #[tokio::test]
    async fn test_save_puts_bare_array() {
        let state = BinState::default();
        let base = spawn_bin_server(state.clone()).await;
        let storage = JsonBinStorage::new("secret-key", "abc123")
            .unwrap()
            .with_base_url(base);

        storage
            .save_tasks(&[Task::new(2, "Ship it", TaskStatus::Done)])
            .await
            .unwrap();

        let saved = state.saved.lock().unwrap().clone().unwrap();
        assert_eq!(
            saved,
            serde_json::json!([{"id": 2, "title": "Ship it", "status": "done"}])
        );
        assert_eq!(state.master_keys.lock().unwrap().as_slice(), ["secret-key"]);
    }

    #[tokio::test]
    async fn test_error_body_maps_to_bin_api_error() {
        let app = Router::new().route(
            "/b/{bin_id}",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({"message": "Invalid X-Master-Key"})),
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let storage = JsonBinStorage::new("wrong-key", "abc123")
            .unwrap()
            .with_base_url(format!("http://{addr}"));

        let err = storage.load_tasks().await.unwrap_err();
        match err {
            TrackerError::BinApi { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid X-Master-Key");
            }
            other => panic!("expected BinApi error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_initialize_probes_the_bin() {
        let state = BinState::default();
        let base = spawn_bin_server(state.clone()).await;
        let storage = JsonBinStorage::new("secret-key", "abc123")
            .unwrap()
            .with_base_url(base);

        storage.initialize().await.unwrap();

        assert_eq!(state.master_keys.lock().unwrap().len(), 1);
    }
}
