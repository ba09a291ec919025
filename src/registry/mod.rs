// ABOUTME: Session registry owning registered profiles and the signed-in profile
// ABOUTME: Validates sign-up and sign-in, and mirrors state to key-value storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Registry
//!
//! The registry is the single owner of the profile collection and of the
//! current-profile pointer. Storage is a mirror: once loaded, in-memory state
//! is authoritative and every change is written through under the same lock
//! that guards the in-memory mutation.
//!
//! A registry is either *Anonymous* (`current_user()` is `None`) or
//! *Authenticated*. Successful `register`/`authenticate` move it to
//! Authenticated (replacing any previous profile); `sign_out`/`reset_all`
//! move it back. A failed call never changes state.
//!
//! ```rust,no_run
//! use heart_monitor::models::RegistrationRequest;
//! use heart_monitor::registry::SessionRegistry;
//! use heart_monitor::storage::memory::InMemoryStore;
//! # async fn example() -> heart_monitor::errors::AppResult<()> {
//! let registry = SessionRegistry::new(InMemoryStore::new()).await?;
//! let profile = registry
//!     .register(RegistrationRequest {
//!         email: "a@a.com".into(),
//!         password: "123456".into(),
//!         weight: "70".into(),
//!         height: "175".into(),
//!         age: "25".into(),
//!         gender: "male".into(),
//!         activity_level: "moderate".into(),
//!     })
//!     .await?;
//! assert_eq!(registry.current_user().await, Some(profile));
//! # Ok(())
//! # }
//! ```

/// Bundled profiles used to seed an empty storage
pub mod seed;
/// Registration and login input validation
pub mod validation;

use crate::constants::{env_vars, messages, storage_keys};
use crate::errors::{AppError, AppResult};
use crate::logging::redaction::{mask_email, redact_passwords};
use crate::logging::AppLogger;
use crate::models::{RegistrationRequest, UserProfile};
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::env;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Registry behaviour knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Delay applied before `register` and `authenticate` resolve
    pub simulated_latency: Duration,
    /// Seed an empty storage with the bundled profiles
    pub seed_defaults: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            seed_defaults: true,
        }
    }
}

impl RegistryConfig {
    /// Load registry configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set to an unparseable value
    pub fn from_env() -> AppResult<Self> {
        let simulated_latency = match env::var(env_vars::SIMULATED_LATENCY_MS) {
            Ok(raw) => Duration::from_millis(raw.trim().parse().map_err(|_| {
                AppError::config(format!(
                    "{} must be a whole number of milliseconds, got '{raw}'",
                    env_vars::SIMULATED_LATENCY_MS
                ))
            })?),
            Err(_) => Duration::ZERO,
        };
        let seed_defaults = match env::var(env_vars::SEED_DEFAULTS) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "{} must be true or false, got '{raw}'",
                    env_vars::SEED_DEFAULTS
                ))
            })?,
            Err(_) => true,
        };
        Ok(Self {
            simulated_latency,
            seed_defaults,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    profiles: BTreeMap<String, UserProfile>,
    current: Option<UserProfile>,
}

/// Registry of user profiles and the signed-in profile
///
/// Cloning is cheap and every clone shares the same state, so one instance
/// built at startup can be handed to every consumer.
#[derive(Clone)]
pub struct SessionRegistry<S: KeyValueStore> {
    store: S,
    state: Arc<RwLock<RegistryState>>,
    config: RegistryConfig,
}

impl<S: KeyValueStore + Clone + 'static> SessionRegistry<S> {
    /// Load a registry over `store` with default configuration
    ///
    /// # Errors
    ///
    /// See [`SessionRegistry::load`]
    pub async fn new(store: S) -> AppResult<Self> {
        Self::load(store, RegistryConfig::default()).await
    }

    /// Load the persisted profile collection, seeding it on first run
    ///
    /// When storage holds no collection, the bundled profiles (or nothing, if
    /// seeding is disabled) become the collection and are persisted at once.
    /// The signed-in profile is not read here; `current_user` hydrates it
    /// lazily.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written, or if the
    /// persisted collection cannot be decoded
    pub async fn load(store: S, config: RegistryConfig) -> AppResult<Self> {
        let profiles = if let Some(raw) = store.get(storage_keys::USERS).await? {
            let profiles = decode_profiles(&raw)?;
            debug!(count = profiles.len(), "Loaded persisted profiles");
            profiles
        } else {
            let seeded = if config.seed_defaults {
                seed::default_profiles()?
            } else {
                Vec::new()
            };
            store
                .set(storage_keys::USERS, serde_json::to_string(&seeded)?)
                .await?;
            info!(count = seeded.len(), "Seeded profile storage");
            seeded
        };

        let mut by_email = BTreeMap::new();
        for profile in profiles {
            if by_email.contains_key(&profile.email) {
                warn!(
                    email = %mask_email(&profile.email),
                    "Ignoring duplicate persisted profile"
                );
                continue;
            }
            by_email.insert(profile.email.clone(), profile);
        }

        Ok(Self {
            store,
            state: Arc::new(RwLock::new(RegistryState {
                profiles: by_email,
                current: None,
            })),
            config,
        })
    }

    /// Register a new profile and sign it in
    ///
    /// Checks run in order and the first failure wins: required fields,
    /// email shape, password length, email uniqueness, then the gender and
    /// activity level values.
    ///
    /// Once the simulated latency has elapsed the call commits on its own
    /// task, so dropping the returned future cannot leave storage and memory
    /// out of step.
    ///
    /// # Errors
    ///
    /// - validation error for missing fields, bad email, short password, or an
    ///   unknown gender / activity level
    /// - conflict error if the email is already registered
    /// - storage error if the mirror cannot be written, in which case the
    ///   registry is left as it was before the call
    pub async fn register(&self, request: RegistrationRequest) -> AppResult<UserProfile> {
        self.simulate_latency().await;
        let registry = self.clone();
        detach(async move { registry.commit_registration(request).await }).await
    }

    /// Sign in with an email and password
    ///
    /// Unknown email and wrong password fail with the same message.
    ///
    /// # Errors
    ///
    /// - validation error if either credential is empty
    /// - auth error if no profile matches both
    /// - storage error if the signed-in marker cannot be written
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        self.simulate_latency().await;
        let registry = self.clone();
        let (email, password) = (email.to_owned(), password.to_owned());
        detach(async move { registry.commit_sign_in(&email, &password).await }).await
    }

    /// The signed-in profile, if any
    ///
    /// Falls back to the persisted marker when nothing is cached in memory,
    /// and caches what it finds. Never fails: unreadable or undecodable
    /// storage is logged and treated as signed out.
    pub async fn current_user(&self) -> Option<UserProfile> {
        if let Some(profile) = self.state.read().await.current.clone() {
            return Some(profile);
        }

        let mut state = self.state.write().await;
        if let Some(profile) = state.current.clone() {
            return Some(profile);
        }

        let hydrated = self.read_current_marker().await;
        state.current.clone_from(&hydrated);
        drop(state);
        hydrated
    }

    /// True when a profile is signed in
    pub async fn is_authenticated(&self) -> bool {
        self.current_user().await.is_some()
    }

    /// Sign the current profile out; a no-op when nobody is signed in
    ///
    /// # Errors
    ///
    /// Returns a storage error if the marker cannot be removed, in which case
    /// the in-memory session is kept
    pub async fn sign_out(&self) -> AppResult<()> {
        let registry = self.clone();
        detach(async move { registry.commit_sign_out().await }).await
    }

    /// Forget every profile and the session, in memory and in storage
    ///
    /// Diagnostic facility for test harnesses; not reachable from the CLI.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either key cannot be removed, in which case
    /// the persisted collection is restored and memory is untouched
    pub async fn reset_all(&self) -> AppResult<()> {
        let registry = self.clone();
        detach(async move { registry.commit_reset().await }).await
    }

    /// Number of registered profiles
    pub async fn profile_count(&self) -> usize {
        self.state.read().await.profiles.len()
    }

    /// True when a profile is registered under `email`
    pub async fn contains_email(&self, email: &str) -> bool {
        self.state.read().await.profiles.contains_key(email)
    }

    async fn commit_registration(&self, request: RegistrationRequest) -> AppResult<UserProfile> {
        let masked = mask_email(&request.email);

        if let Err(e) = validation::validate_registration(&request) {
            AppLogger::log_auth_event(&masked, "register", false, Some(&e.message));
            return Err(e);
        }

        let mut state = self.state.write().await;
        if state.profiles.contains_key(&request.email) {
            AppLogger::log_auth_event(&masked, "register", false, Some(messages::EMAIL_IN_USE));
            return Err(AppError::conflict(messages::EMAIL_IN_USE));
        }

        let profile = UserProfile::from_request(request)?;
        let mut profiles = state.profiles.clone();
        profiles.insert(profile.email.clone(), profile.clone());

        self.persist_profiles(&profiles).await?;
        if let Err(e) = self.persist_current(&profile).await {
            if let Err(rollback) = self.persist_profiles(&state.profiles).await {
                warn!(error = %rollback, "Failed to roll back persisted profiles");
            }
            return Err(e);
        }

        state.profiles = profiles;
        state.current = Some(profile.clone());
        drop(state);

        AppLogger::log_auth_event(&masked, "register", true, None);
        Ok(profile)
    }

    async fn commit_sign_in(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        let masked = mask_email(email);

        validation::validate_credentials(email, password)?;

        let mut state = self.state.write().await;
        let Some(profile) = state
            .profiles
            .get(email)
            .filter(|candidate| candidate.password == password)
            .cloned()
        else {
            AppLogger::log_auth_event(&masked, "sign_in", false, Some("credential mismatch"));
            return Err(AppError::auth_invalid(messages::INVALID_CREDENTIALS));
        };

        self.persist_current(&profile).await?;
        state.current = Some(profile.clone());
        drop(state);

        AppLogger::log_auth_event(&masked, "sign_in", true, None);
        Ok(profile)
    }

    async fn commit_sign_out(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        self.remove_key(storage_keys::CURRENT_USER).await?;
        if let Some(previous) = state.current.take() {
            AppLogger::log_auth_event(&mask_email(&previous.email), "sign_out", true, None);
        }
        drop(state);
        Ok(())
    }

    async fn commit_reset(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        self.remove_key(storage_keys::USERS).await?;
        if let Err(e) = self.remove_key(storage_keys::CURRENT_USER).await {
            if let Err(restore) = self.persist_profiles(&state.profiles).await {
                warn!(error = %restore, "Failed to restore persisted profiles");
            }
            return Err(e);
        }
        state.profiles.clear();
        state.current = None;
        drop(state);
        warn!("Profile registry reset");
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }

    async fn persist_profiles(&self, profiles: &BTreeMap<String, UserProfile>) -> AppResult<()> {
        let collection: Vec<&UserProfile> = profiles.values().collect();
        let serialized = serde_json::to_string(&collection)?;
        let result = self.store.set(storage_keys::USERS, serialized).await;
        AppLogger::log_storage_operation("set", storage_keys::USERS, result.is_ok());
        result
    }

    async fn persist_current(&self, profile: &UserProfile) -> AppResult<()> {
        let serialized = serde_json::to_string(profile)?;
        let result = self.store.set(storage_keys::CURRENT_USER, serialized).await;
        AppLogger::log_storage_operation("set", storage_keys::CURRENT_USER, result.is_ok());
        result
    }

    async fn remove_key(&self, key: &str) -> AppResult<()> {
        let result = self.store.remove(key).await;
        AppLogger::log_storage_operation("remove", key, result.is_ok());
        result
    }

    async fn read_current_marker(&self) -> Option<UserProfile> {
        let raw = match self.store.get(storage_keys::CURRENT_USER).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Could not read signed-in profile marker");
                return None;
            }
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => {
                debug!(email = %mask_email(&profile.email), "Restored signed-in profile");
                Some(profile)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    marker = %redact_passwords(&raw),
                    "Ignoring undecodable signed-in profile marker"
                );
                None
            }
        }
    }
}

/// Run a registry mutation to completion on its own task
///
/// The caller may stop waiting; the mutation still finishes and releases the
/// state lock.
async fn detach<T>(task: impl Future<Output = AppResult<T>> + Send + 'static) -> AppResult<T>
where
    T: Send + 'static,
{
    tokio::spawn(task).await.map_err(|e| {
        AppError::internal(format!("Registry operation did not complete: {e}")).with_source(e)
    })?
}

fn decode_profiles(raw: &str) -> AppResult<Vec<UserProfile>> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::serialization(format!("Persisted profile collection is invalid: {e}"))
            .with_source(e)
    })
}
