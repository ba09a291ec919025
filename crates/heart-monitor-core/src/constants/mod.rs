// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, validation limits, user-facing messages, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Keys under which the registry mirrors its state in key-value storage
pub mod storage_keys {
    /// Serialized array of every registered profile
    pub const USERS: &str = "users";
    /// Serialized snapshot of the signed-in profile, absent when signed out
    pub const CURRENT_USER: &str = "currentUser";
}

/// Registration and login validation limits
pub mod limits {
    /// Minimum accepted password length, in characters
    pub const MIN_PASSWORD_LENGTH: usize = 6;
    /// Youngest age accepted by heart-rate formulas
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Oldest age accepted by heart-rate formulas
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Messages surfaced directly to end users
pub mod messages {
    /// A registration field was left empty
    pub const ALL_FIELDS_REQUIRED: &str = "all fields required";
    /// Email does not look like `local@domain.tld`
    pub const INVALID_EMAIL_FORMAT: &str = "invalid email format";
    /// Password shorter than the minimum length
    pub const PASSWORD_TOO_SHORT: &str = "password too short";
    /// Another profile already owns this email
    pub const EMAIL_IN_USE: &str = "email already in use";
    /// Login attempted with an empty email or password
    pub const CREDENTIALS_REQUIRED: &str = "email and password required";
    /// Same text for unknown email and wrong password
    pub const INVALID_CREDENTIALS: &str = "invalid email or password";
    /// Gender outside {male, female, other}
    pub const INVALID_GENDER: &str = "invalid gender";
    /// Activity level outside the supported set
    pub const INVALID_ACTIVITY_LEVEL: &str = "invalid activity level";
    /// A command needs a signed-in profile and there is none
    pub const NOT_SIGNED_IN: &str = "not signed in";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Storage backend selector (`memory` or `file`)
    pub const STORAGE_BACKEND: &str = "HEART_MONITOR_STORAGE_BACKEND";
    /// Path of the JSON file used by the file backend
    pub const STORAGE_PATH: &str = "HEART_MONITOR_STORAGE_PATH";
    /// Artificial delay applied to register and authenticate, in milliseconds
    pub const SIMULATED_LATENCY_MS: &str = "HEART_MONITOR_SIMULATED_LATENCY_MS";
    /// Whether an empty storage is seeded with the bundled profiles
    pub const SEED_DEFAULTS: &str = "HEART_MONITOR_SEED_DEFAULTS";
    /// Max heart rate formula used for zones (`fox`, `tanaka`, `nes`, `gulati`)
    pub const MAX_HR_ALGORITHM: &str = "HEART_MONITOR_MAX_HR_ALGORITHM";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const HEART_MONITOR: &str = "heart-monitor";
}
