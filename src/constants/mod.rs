// ABOUTME: Storage keys, limits, and user-facing messages re-exported from heart-monitor-core
// ABOUTME: Single source for the strings persisted to storage and shown to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use heart_monitor_core::constants::*;
