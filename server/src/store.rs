use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::Event;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read events from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse events from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only event collection backed by a JSON array file.
///
/// The file is read again on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct JsonFileEventStore {
    path: PathBuf,
}

impl JsonFileEventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every event in file order.
    pub async fn load_all(&self) -> Result<Vec<Event>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let events: Vec<Event> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = events.len(), "Parsed events");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_all_preserves_file_order() {
        let file = write_temp(
            r#"[
                {"id":"b","name":"Second event","venue":{"name":"V","location":"L"},"description":"d","date":"2024-01-01T00:00:00Z"},
                {"id":"a","name":"First event","venue":{"name":"V","location":"L"},"description":"d","date":"2024-01-01T00:00:00Z"}
            ]"#,
        );

        let events = JsonFileEventStore::new(file.path()).load_all().await.unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_empty_array_loads_as_empty() {
        let file = write_temp("[]");
        let events = JsonFileEventStore::new(file.path()).load_all().await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileEventStore::new(dir.path().join("absent.json"));

        let err = store.load_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let file = write_temp(r#"{"not": "an array"}"#);
        let err = JsonFileEventStore::new(file.path())
            .load_all()
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
