//! Persisted client-side session snapshot.
//!
//! One JSON file holds the opaque bearer token and the serialized identity
//! together: written together, cleared together, read once at startup to
//! avoid an extra round trip.

use crate::{AuthError, Result as AuthErrorResult};

use tl_core::Identity;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub token: String,
    /// Cached identity record; absent snapshots fall back to a profile fetch
    pub identity: Option<Identity>,
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    pub fn new(token: String, identity: Option<Identity>) -> Self {
        Self {
            token,
            identity,
            saved_at: Utc::now(),
        }
    }
}

/// Single-file snapshot persistence with atomic writes.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the snapshot.
    ///
    /// Returns:
    /// - `Ok(Some(...))` - loaded successfully
    /// - `Ok(None)` - file doesn't exist (signed out), or file corrupted
    ///   (logged and treated as signed out)
    pub fn load(&self) -> AuthErrorResult<Option<SessionSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| AuthError::snapshot_read(self.path.clone(), e))?;

        match serde_json::from_str::<SessionSnapshot>(&contents) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!("Session snapshot corrupted at {:?}: {e}", self.path);
                Ok(None)
            }
        }
    }

    /// Save the snapshot using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    ///
    /// This prevents corruption if the process dies mid-write.
    pub fn save(&self, snapshot: &SessionSnapshot) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::snapshot_write(parent.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| AuthError::decode(format!("snapshot: {e}")))?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::snapshot_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::snapshot_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::snapshot_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            AuthError::snapshot_write(self.path.clone(), e)
        })?;

        info!("Saved session snapshot to {:?}", self.path);
        Ok(())
    }

    /// Remove the snapshot; already-absent is fine.
    pub fn clear(&self) -> AuthErrorResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session snapshot at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::snapshot_write(self.path.clone(), e)),
        }
    }
}
