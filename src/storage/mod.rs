// ABOUTME: Key-value storage abstraction mirroring registry state across restarts
// ABOUTME: Pluggable backends (in-memory, JSON file) selected from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage factory for configuration-driven backend selection
pub mod factory;
/// JSON file-backed storage
pub mod file;
/// In-memory storage
pub mod memory;

use crate::constants::env_vars;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// String key-value persistence capability
///
/// Values are opaque strings; callers own their encoding. Every backend must
/// make a completed `set` visible to later `get` calls on any clone of the
/// same store.
///
/// # Examples
///
/// ```rust,no_run
/// use heart_monitor::storage::{memory::InMemoryStore, KeyValueStore};
/// # async fn example() -> heart_monitor::errors::AppResult<()> {
/// let store = InMemoryStore::new();
/// store.set("users", "[]".to_owned()).await?;
/// assert_eq!(store.get("users").await?.as_deref(), Some("[]"));
///
/// store.remove("users").await?;
/// assert!(store.get("users").await?.is_none());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Remove `key`; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn clear(&self) -> AppResult<()>;

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn health_check(&self) -> AppResult<()>;
}

/// Which storage backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local map, lost on exit
    Memory,
    /// JSON file on disk
    #[default]
    File,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "Unknown storage backend '{other}', expected 'memory' or 'file'"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,
    /// File used by the file backend
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the backend name is not recognised
    pub fn from_env() -> AppResult<Self> {
        let backend = match env::var(env_vars::STORAGE_BACKEND) {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };
        let path = env::var(env_vars::STORAGE_PATH)
            .map_or_else(|_| default_storage_path(), PathBuf::from);
        Ok(Self { backend, path })
    }
}

/// Platform data directory location of the storage file
#[must_use]
pub fn default_storage_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("heart-monitor")
        .join("storage.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("FILE".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_default_path_is_under_app_dir() {
        let path = default_storage_path();
        assert!(path.ends_with("heart-monitor/storage.json"));
    }
}
