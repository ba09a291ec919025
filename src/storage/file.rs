// ABOUTME: JSON file-backed key-value storage with atomic rewrites
// ABOUTME: Keeps a cached copy in memory and rewrites the whole file on each mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Durable key-value store persisted as a single JSON object
///
/// The file holds `{ "key": "value", ... }`. Every mutation writes a sibling
/// temporary file and renames it over the original, so a crash mid-write
/// leaves either the old or the new content, never a truncated file. The
/// in-memory copy is only updated after the rename succeeds.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl FileStore {
    /// Open the store at `path`, creating nothing until the first write
    ///
    /// A missing file is treated as an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of strings
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::serialization(format!(
                    "Storage file {} is not a JSON object of strings: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened file storage");

        Ok(Self {
            path: Arc::new(path),
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let serialized = serde_json::to_vec_pretty(entries)?;
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, self.path.as_path()).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Apply `mutate` to a copy of the entries, persist it, then commit it
    async fn update<F>(&self, mutate: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) + Send,
    {
        let mut guard = self.entries.write().await;
        let mut next = guard.clone();
        mutate(&mut next);
        self.flush(&next).await?;
        *guard = next;
        drop(guard);
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let key = key.to_owned();
        self.update(move |entries| {
            entries.insert(key, value);
        })
        .await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        if !self.entries.read().await.contains_key(key) {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
        .await
    }

    async fn clear(&self) -> AppResult<()> {
        self.update(BTreeMap::clear).await
    }

    async fn health_check(&self) -> AppResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && parent.exists() => {
                let metadata = tokio::fs::metadata(parent).await?;
                if metadata.permissions().readonly() {
                    return Err(AppError::storage(format!(
                        "Storage directory {} is read-only",
                        parent.display()
                    )));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
