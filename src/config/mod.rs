// ABOUTME: Configuration module for runtime settings loaded from the environment
// ABOUTME: Re-exports the application configuration and environment type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only: every knob is a `HEART_MONITOR_*`
//! variable with a default, so an unconfigured run uses the platform data
//! directory, no latency, seeded profiles, and the Fox formula.

/// Environment variable parsing
pub mod environment;

pub use environment::{AppConfig, Environment};
