// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, registration fixtures, and registry construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `heart_monitor`

use anyhow::Result;
use heart_monitor::{
    models::RegistrationRequest,
    registry::{RegistryConfig, SessionRegistry},
    storage::{memory::InMemoryStore, KeyValueStore},
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The reference profile: a@a.com / 123456, 70 kg, 175 cm, 25, male, moderate
pub fn sample_request() -> RegistrationRequest {
    request_for("a@a.com")
}

/// A valid request for `email`
pub fn request_for(email: &str) -> RegistrationRequest {
    RegistrationRequest {
        email: email.to_owned(),
        password: "123456".to_owned(),
        weight: "70".to_owned(),
        height: "175".to_owned(),
        age: "25".to_owned(),
        gender: "male".to_owned(),
        activity_level: "moderate".to_owned(),
    }
}

/// Registry configuration without seeded profiles or latency
pub fn empty_config() -> RegistryConfig {
    RegistryConfig {
        seed_defaults: false,
        ..RegistryConfig::default()
    }
}

/// Empty registry over `store`
pub async fn registry_over<S: KeyValueStore + Clone + 'static>(store: &S) -> Result<SessionRegistry<S>> {
    init_test_logging();
    Ok(SessionRegistry::load(store.clone(), empty_config()).await?)
}

/// Empty registry over a fresh in-memory store, plus the store
pub async fn memory_registry() -> Result<(SessionRegistry<InMemoryStore>, InMemoryStore)> {
    let store = InMemoryStore::new();
    let registry = registry_over(&store).await?;
    Ok((registry, store))
}
