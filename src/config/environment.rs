// ABOUTME: Environment configuration for the registry, storage, and heart-rate defaults
// ABOUTME: Parses HEART_MONITOR_* variables into one typed application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::env_vars;
use crate::errors::AppResult;
use crate::intelligence::MaxHrAlgorithm;
use crate::registry::RegistryConfig;
use crate::storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Environment type, read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed build
    Production,
    /// Test harness
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Where profiles and the session marker are kept
    pub storage: StorageConfig,
    /// Registry behaviour
    pub registry: RegistryConfig,
    /// Formula used when a caller does not pick one
    pub max_hr_algorithm: MaxHrAlgorithm,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults; set but unparseable ones
    /// are an error.
    ///
    /// # Errors
    ///
    /// Returns a configuration or validation error naming the offending variable
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let max_hr_algorithm = match env::var(env_vars::MAX_HR_ALGORITHM) {
            Ok(raw) => raw.parse()?,
            Err(_) => MaxHrAlgorithm::default(),
        };

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            storage: StorageConfig::from_env()?,
            registry: RegistryConfig::from_env()?,
            max_hr_algorithm,
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Heart Monitor Configuration:\n\
             - Environment: {}\n\
             - Storage Backend: {}\n\
             - Storage Path: {}\n\
             - Simulated Latency: {}ms\n\
             - Seed Defaults: {}\n\
             - Max HR Algorithm: {} ({})",
            self.environment,
            self.storage.backend,
            self.storage.path.display(),
            self.registry.simulated_latency.as_millis(),
            self.registry.seed_defaults,
            self.max_hr_algorithm,
            self.max_hr_algorithm.formula(),
        )
    }
}
