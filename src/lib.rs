// ABOUTME: Main library entry point for the heart monitor session registry
// ABOUTME: Profile registration, sign-in, persisted sessions, and heart-rate zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Heart Monitor
//!
//! Local profile registry for a heart-rate monitoring app. Users register a
//! profile (email, password, body measurements, activity level), sign in,
//! and stay signed in across restarts; heart-rate readings are then judged
//! against the signed-in profile's estimated maximum heart rate.
//!
//! ## Architecture
//!
//! - **Storage**: string key-value stores (in-memory or a JSON file)
//! - **Registry**: the session registry that owns profiles and the session
//! - **Intelligence**: max heart rate formulas, zones, and recommendations
//! - **Config**: environment-only configuration
//! - **Logging**: `tracing` setup with PII redaction
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use heart_monitor::config::AppConfig;
//! use heart_monitor::errors::AppResult;
//! use heart_monitor::registry::SessionRegistry;
//! use heart_monitor::storage::factory::Storage;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let store = Storage::new(&config.storage).await?;
//!     let registry = SessionRegistry::load(store, config.registry).await?;
//!
//!     match registry.current_user().await {
//!         Some(profile) => println!("Signed in as {}", profile.email),
//!         None => println!("Not signed in"),
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Storage keys, limits, and user-facing messages
pub mod constants;

/// Unified error handling
pub mod errors;

/// Max heart rate, zones, and recommendations
pub mod intelligence;

/// Structured logging and PII redaction
pub mod logging;

/// Profile data models
pub mod models;

/// Session registry
pub mod registry;

/// Key-value storage backends
pub mod storage;
