use super::types::Document;
use crate::error::StoreError;

use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// File name of the store document inside the data directory.
pub const DOCUMENT_FILE: &str = "db.json";

/// Owns the on-disk JSON document.
///
/// Nothing is cached between calls: every `read`/`update` loads the full document
/// from disk, and every `update` rewrites it wholesale. The internal mutex makes
/// load-mutate-save atomic with respect to other callers of the same store.
pub struct DocumentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// Prepares `data_dir` (created recursively if absent). The document itself is
    /// created lazily on first load.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: data_dir.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: data_dir.join(DOCUMENT_FILE),
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current document, initializing and persisting an empty one if the
    /// file does not exist yet.
    pub async fn load(&self) -> Result<Document, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let document = Document::default();
                self.save(&document).await?;
                tracing::info!("Initialized empty store document at {}", self.path.display());
                Ok(document)
            }
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrites the document on disk. Writes a sibling temp file first and renames
    /// it into place.
    pub async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, payload)
            .await
            .map_err(|source| StoreError::Io {
                path: temp_path.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }

    /// Loads the document and hands it to `operation`. Nothing is written back
    /// (except the initial empty document on first access).
    pub async fn read<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;
        operation(&document)
    }

    /// Load, mutate, save under the store lock. If `operation` fails the document is
    /// left untouched on disk.
    pub async fn update<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let result = operation(&mut document)?;
        self.save(&document).await?;
        Ok(result)
    }
}
