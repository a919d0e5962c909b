//! File-backed implementation of the bounded log store port.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use sensorpad_app::ports::{HISTORY_LIMIT, LogStore};
use sensorpad_domain::error::SensorPadError;

use crate::error::StorageError;

/// A bounded record history persisted as one JSON array file.
///
/// Every append is a whole-file read-modify-write. The internal mutex
/// serializes those cycles so concurrent appends through the same store
/// cannot interleave and silently drop a record. Nothing guards against a
/// second process writing the same file.
pub struct JsonLogFile<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonLogFile<R>
where
    R: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Create a store for the log file at `path`. The file itself is only
    /// touched by [`Self::ensure_initialized`] and the port operations.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Path of the underlying log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `seed` as the initial content iff the file does not exist yet.
    /// Creates missing parent directories. Idempotent; never overwrites.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when directory creation, the existence
    /// probe, or the initial write fails.
    pub async fn ensure_initialized(&self, seed: &[R]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        self.write_records(seed).await
    }

    async fn read_records(&self) -> Result<Vec<R>, StorageError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_records(&self, records: &[R]) -> Result<(), StorageError> {
        let content = serde_json::to_string(records)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

impl<R> LogStore<R> for JsonLogFile<R>
where
    R: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn read_all(&self) -> Result<Vec<R>, SensorPadError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_records().await?)
    }

    async fn append(&self, record: R) -> Result<R, SensorPadError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        records.push(record.clone());
        let excess = records.len().saturating_sub(HISTORY_LIMIT);
        records.drain(..excess);
        self.write_records(&records).await?;
        Ok(record)
    }

    async fn latest(&self) -> Result<Option<R>, SensorPadError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        Ok(records.pop())
    }
}
