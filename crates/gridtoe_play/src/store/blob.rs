//! Key-value blob stores.

use super::StoreError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Opaque string blobs stored under string keys.
pub trait BlobStore {
    /// Reads the blob under `key`, or `None` if nothing is stored there.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn blobs(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StoreError> {
        self.blobs
            .lock()
            .map_err(|e| StoreError::new(format!("Memory store lock poisoned: {}", e)))
    }
}

impl BlobStore for MemoryBlobStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs()?.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.blobs()?.insert(key.to_string(), value.to_string());
        debug!(key, "Blob stored in memory");
        Ok(())
    }
}

/// Store backed by a single JSON object file mapping keys to blobs.
///
/// The file is created on first write.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    /// Creates a store that reads and writes `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Opening file blob store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file, or `None` if it does not exist yet.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file does not exist yet");
                Ok(None)
            }
            Err(e) => Err(StoreError::new(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn parse(&self, content: &str) -> Result<Map<String, Value>, StoreError> {
        serde_json::from_str(content).map_err(|e| {
            StoreError::new(format!("Failed to parse '{}': {}", self.path.display(), e))
        })
    }
}

impl BlobStore for FileBlobStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let Some(content) = self.read_raw()? else {
            return Ok(None);
        };
        Ok(self.parse(&content)?.remove(key).map(|value| match value {
            Value::String(blob) => blob,
            other => other.to_string(),
        }))
    }

    /// Writes `value` under `key`, keeping every other entry in the file.
    ///
    /// A file that cannot be read is an error. A file that reads but is not
    /// a JSON object is replaced.
    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut blobs = match self.read_raw()? {
            Some(content) => self.parse(&content).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding unparseable store contents");
                Map::new()
            }),
            None => Map::new(),
        };
        blobs.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&blobs)?)?;

        info!(key, "Blob written to store file");
        Ok(())
    }
}
