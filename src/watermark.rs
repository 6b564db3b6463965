// src/watermark.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::{fs, sync::Mutex};

use crate::error::WatcherError;

/// File-backed last-check timestamp.
///
/// Every read and write goes through one store value and its internal lock,
/// so concurrent requests serialize instead of racing on the file. `advance`
/// re-reads under the lock and only ever moves the value forward.
pub struct WatermarkStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl WatermarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current watermark. A missing file means first run: the store is
    /// initialized to `now` and that value returned. A file that exists but
    /// does not parse is reported as corrupt, never silently reset.
    pub async fn load(&self, now: i64) -> Result<i64, WatcherError> {
        let _guard = self.lock.lock().await;
        match self.read_value().await? {
            Some(v) => Ok(v),
            None => {
                self.write_value(now).await?;
                Ok(now)
            }
        }
    }

    /// Move the watermark forward to `to`, never backward. Returns the value
    /// actually stored.
    pub async fn advance(&self, to: i64) -> Result<i64, WatcherError> {
        let _guard = self.lock.lock().await;
        let current = self.read_value().await?;
        let next = current.map_or(to, |c| c.max(to));
        if current != Some(next) {
            self.write_value(next).await?;
        }
        Ok(next)
    }

    async fn read_value(&self) -> Result<Option<i64>, WatcherError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(WatcherError::CorruptWatermark {
                path: self.path.clone(),
                raw: trimmed.to_string(),
            }),
        }
    }

    async fn write_value(&self, v: i64) -> Result<(), WatcherError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(&self.path, v.to_string()).await?;
        Ok(())
    }
}
