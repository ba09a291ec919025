// ABOUTME: Profile data models re-exported from heart-monitor-core
// ABOUTME: Re-exports UserProfile, RegistrationRequest, Gender, and ActivityLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Profile types live in `heart-monitor-core` so they can be shared without
//! pulling in the async runtime; this module keeps `crate::models` paths stable.

pub use heart_monitor_core::models::*;
