// ABOUTME: Unified error types re-exported from heart-monitor-core
// ABOUTME: Keeps crate::errors paths stable for the registry, storage, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in this crate returns [`AppResult`]. The
//! [`ErrorKind`] of an [`AppError`] tells callers which class of failure they
//! got; the message is the user-facing text.

pub use heart_monitor_core::errors::*;
