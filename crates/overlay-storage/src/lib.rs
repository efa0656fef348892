//! Sidecar-file persistence endpoint.
//!
//! Stores overlay parameter records as a versioned JSON sidecar next to the
//! document. This is the local reference implementation of
//! [`overlay_core::PersistenceEndpoint`]; a host talking to a remote
//! endpoint supplies its own.

use overlay_core::{IntentAction, PersistenceEndpoint};
use overlay_model::{OverlayId, ParameterRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SIDECAR_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct SidecarEnvelope {
    version: u32,
    records: BTreeMap<OverlayId, ParameterRecord>,
}

/// Get the sidecar path for a document path.
///
/// The overlay set is stored with the same name as the document plus an
/// `.overlays.json` suffix.
pub fn sidecar_path(document_path: &Path) -> PathBuf {
    let mut path = document_path.as_os_str().to_owned();
    path.push(".overlays.json");
    PathBuf::from(path)
}

/// JSON sidecar store of overlay parameter records.
#[derive(Debug)]
pub struct SidecarStore {
    path: PathBuf,
    records: BTreeMap<OverlayId, ParameterRecord>,
}

impl SidecarStore {
    /// Open the sidecar for `document_path`, loading any existing records.
    /// A missing sidecar file yields an empty store.
    pub fn open(document_path: &Path) -> Result<Self, StorageError> {
        let path = sidecar_path(document_path);
        let records = if path.exists() {
            let bytes = fs::read(&path)?;
            let envelope: SidecarEnvelope = serde_json::from_slice(&bytes)?;
            envelope.records
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the record set atomically: temp file in place, then rename.
    fn flush(&self) -> Result<(), StorageError> {
        let envelope = SidecarEnvelope {
            version: SIDECAR_SCHEMA_VERSION,
            records: self.records.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&envelope)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl PersistenceEndpoint for SidecarStore {
    fn load_all(&mut self) -> anyhow::Result<Vec<ParameterRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn apply_intent(&mut self, action: IntentAction, record: &ParameterRecord) {
        match action {
            IntentAction::Add | IntentAction::Update => {
                self.records.insert(record.id.clone(), record.clone());
            }
            IntentAction::Delete => {
                self.records.remove(&record.id);
            }
        }
        // Fire-and-forget from the core's perspective; a failed flush is
        // logged, not propagated.
        if let Err(error) = self.flush() {
            tracing::warn!(path = %self.path.display(), %error, "failed to flush overlay sidecar");
        }
    }
}
