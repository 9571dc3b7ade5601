//! File-backed implementation of the core snapshot store trait.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

use holdfolio_core::errors::{Error, Result};
use holdfolio_core::snapshot::{PortfolioSnapshot, SnapshotError, SnapshotStoreTrait};

/// Snapshot store over a single JSON document on disk.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStoreTrait for FileSnapshotStore {
    fn load(&self) -> Result<Option<PortfolioSnapshot>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let snapshot = serde_json::from_str(&content)
                    .map_err(|e| Error::Snapshot(SnapshotError::Serialization(e.to_string())))?;
                debug!("Loaded snapshot from {}", self.path.display());
                Ok(Some(snapshot))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Snapshot(SnapshotError::Io(e.to_string()))),
        }
    }

    fn save(&self, snapshot: &PortfolioSnapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| Error::Snapshot(SnapshotError::Serialization(e.to_string())))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::Snapshot(SnapshotError::Io(e.to_string())))?;
            }
        }
        fs::write(&self.path, content)
            .map_err(|e| Error::Snapshot(SnapshotError::Io(e.to_string())))?;
        debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Snapshot(SnapshotError::Io(e.to_string()))),
        }
    }
}
