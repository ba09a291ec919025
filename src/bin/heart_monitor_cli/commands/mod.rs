// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for heart-monitor-cli
// ABOUTME: Provides access to profile/session and heart-rate commands

pub mod user;
pub mod zone;

use heart_monitor::{config::AppConfig, errors::AppResult, intelligence::MaxHrAlgorithm};

/// Use the formula named on the command line, else the configured default
pub fn resolve_algorithm(
    requested: Option<&str>,
    config: &AppConfig,
) -> AppResult<MaxHrAlgorithm> {
    requested.map_or(Ok(config.max_hr_algorithm), str::parse::<MaxHrAlgorithm>)
}
