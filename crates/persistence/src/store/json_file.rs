//! JSON file backed state store.

use async_trait::async_trait;
use domain::models::StateRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use super::StateStore;
use crate::error::PersistenceError;
use crate::metrics::{record_corrupt_load, record_write_failure, StoreTimer};

/// Keeps the state record in a single pretty-printed JSON file.
///
/// Saves write to a temporary sibling file, sync it to disk and then rename
/// it over the target, so a crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "state.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Reads the stored record. `Ok(None)` when no file exists yet.
    async fn read_record(&self) -> Result<Option<StateRecord>, PersistenceError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(PersistenceError::Corrupt(err.to_string())),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| PersistenceError::Corrupt(e.to_string()))
    }

    fn write_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Write {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Writes `bytes` to the temporary file, syncs it, renames it over the
    /// target and syncs the parent directory.
    async fn write_atomic(&self, bytes: &[u8]) -> Result<(), PersistenceError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
        if let Some(parent) = &parent {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let tmp_path = self.tmp_path();
        if let Err(err) = write_and_sync(&tmp_path, bytes).await {
            remove_tmp(&tmp_path).await;
            return Err(self.write_error(err));
        }
        if let Err(err) = tokio::fs::rename(&tmp_path, &self.path).await {
            remove_tmp(&tmp_path).await;
            return Err(self.write_error(err));
        }

        sync_dir(parent.as_deref().unwrap_or_else(|| Path::new("."))).await;
        Ok(())
    }
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

async fn remove_tmp(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        if err.kind() != ErrorKind::NotFound {
            debug!(path = %path.display(), error = %err, "Could not remove temporary file");
        }
    }
}

/// Best-effort directory sync so the rename itself survives a crash.
#[cfg(unix)]
async fn sync_dir(dir: &Path) {
    let result = match tokio::fs::File::open(dir).await {
        Ok(handle) => handle.sync_all().await,
        Err(err) => Err(err),
    };
    if let Err(err) = result {
        debug!(path = %dir.display(), error = %err, "Directory sync failed");
    }
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) {}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> StateRecord {
        let timer = StoreTimer::new("load");
        let record = match self.read_record().await {
            Ok(Some(mut record)) => {
                let added = record.backfill_default_locations();
                if !added.is_empty() {
                    info!(?added, "Restored missing default locations");
                }
                record
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "No state file yet, using defaults");
                StateRecord::default()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Stored state unreadable, falling back to defaults"
                );
                record_corrupt_load();
                StateRecord::default()
            }
        };
        timer.record();
        record
    }

    async fn save(&self, record: &StateRecord) -> Result<(), PersistenceError> {
        let timer = StoreTimer::new("save");
        let result = match serde_json::to_vec_pretty(record) {
            Ok(bytes) => self.write_atomic(&bytes).await,
            Err(err) => Err(err.into()),
        };
        timer.record();

        if let Err(err) = &result {
            record_write_failure();
            warn!(path = %self.path.display(), error = %err, "Failed to save state");
        } else {
            debug!(
                path = %self.path.display(),
                history_len = record.history.len(),
                "Saved state"
            );
        }
        result
    }
}
