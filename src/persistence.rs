//! Store backends.
//!
//! `DATABASE_URL` selects where documents live:
//!
//! - unset or `memory://`: process memory only, lost on exit
//! - `file://<path>`: process memory mirrored to a JSON snapshot at `<path>`,
//!   read once at start-up and rewritten after every insert

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::actor_framework::RawDocument;
use crate::error::{ConfigurationError, StoreError};
use crate::messages::StoreResult;

const MEMORY_SCHEME: &str = "memory://";
const FILE_SCHEME: &str = "file://";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Memory,
    File(PathBuf),
}

impl FromStr for StoreBackend {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == MEMORY_SCHEME {
            return Ok(Self::Memory);
        }
        match trimmed.strip_prefix(FILE_SCHEME) {
            Some(path) if !path.is_empty() => Ok(Self::File(PathBuf::from(path))),
            _ => Err(ConfigurationError::UnsupportedDatabaseUrl(value.to_string())),
        }
    }
}

/// JSON snapshot of every collection, keyed by collection name.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is an empty store.
    pub async fn load(&self) -> StoreResult<BTreeMap<String, Vec<RawDocument>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(StoreError::Persistence(e.to_string())),
        };
        let collections: BTreeMap<String, Vec<RawDocument>> = serde_json::from_slice(&bytes)?;
        info!(
            path = %self.path.display(),
            collections = collections.len(),
            "Snapshot loaded"
        );
        Ok(collections)
    }

    /// Writes the snapshot through a sibling temporary file so a crash never
    /// leaves a truncated snapshot behind.
    pub async fn save(&self, collections: &BTreeMap<&str, &[RawDocument]>) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(collections)?;
        let staging = self.path.with_extension("json.tmp");

        tokio::fs::write(&staging, &bytes)
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Snapshot written");
        Ok(())
    }
}
