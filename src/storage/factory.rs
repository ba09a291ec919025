// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Wraps the concrete backends behind one cloneable KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{file::FileStore, memory::InMemoryStore, KeyValueStore, StorageBackend, StorageConfig};
use crate::errors::AppResult;
use tracing::info;

/// Unified storage handle
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local storage
    Memory(InMemoryStore),
    /// JSON file storage
    File(FileStore),
}

impl Storage {
    /// Create a storage instance based on configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend cannot be opened
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory storage");
                Ok(Self::Memory(InMemoryStore::new()))
            }
            StorageBackend::File => {
                info!(path = %config.path.display(), "Initializing file storage");
                Ok(Self::File(FileStore::open(config.path.clone()).await?))
            }
        }
    }

    /// Backend in use
    #[must_use]
    pub const fn backend(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::File(_) => StorageBackend::File,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }

    async fn clear(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.clear().await,
            Self::File(store) => store.clear().await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.health_check().await,
            Self::File(store) => store.health_check().await,
        }
    }
}
