// ABOUTME: Bundled default profiles compiled into the binary
// ABOUTME: Used to make the first run over an empty storage deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;

const DEFAULT_USERS_JSON: &str = include_str!("../../data/default_users.json");

/// Decode the bundled profile dataset
///
/// # Errors
///
/// Returns a serialization error if the bundled JSON is malformed
pub fn default_profiles() -> AppResult<Vec<UserProfile>> {
    serde_json::from_str(DEFAULT_USERS_JSON).map_err(|e| {
        AppError::serialization(format!("Bundled default profiles are invalid: {e}"))
    })
}
