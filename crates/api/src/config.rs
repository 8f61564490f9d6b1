//! Configuration for the task tracker service.

use std::env;

use tracker::{StorageConfig, TrackerError, TrackerResult};

/// Task tracker service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Storage backend selection.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown `TRACKER_STORAGE` value or missing
    /// jsonbin credentials.
    pub fn from_env() -> TrackerResult<Self> {
        Ok(Self {
            port: env::var("TRACKER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            storage: storage_from_env()?,
        })
    }
}

fn storage_from_env() -> TrackerResult<StorageConfig> {
    let kind = env::var("TRACKER_STORAGE").unwrap_or_else(|_| "memory".to_string());

    match kind.as_str() {
        "memory" => Ok(StorageConfig::Memory),
        "file" => Ok(StorageConfig::File {
            path: env::var("TRACKER_TASKS_FILE").unwrap_or_else(|_| "tasks.json".to_string()),
        }),
        "jsonbin" => {
            let api_key = env::var("JSONBIN_API_KEY").map_err(|_| {
                TrackerError::Config("JSONBIN_API_KEY environment variable not set".to_string())
            })?;
            let bin_id = env::var("JSONBIN_BIN_ID").map_err(|_| {
                TrackerError::Config("JSONBIN_BIN_ID environment variable not set".to_string())
            })?;
            let base_url = env::var("JSONBIN_BASE_URL")
                .unwrap_or_else(|_| "https://api.jsonbin.io/v3".to_string());

            Ok(StorageConfig::JsonBin {
                api_key,
                bin_id,
                base_url,
            })
        }
        other => Err(TrackerError::Config(format!(
            "Unknown TRACKER_STORAGE value: {other}"
        ))),
    }
}
