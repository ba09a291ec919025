// ABOUTME: Core types and constants for the heart monitor session registry
// ABOUTME: Foundation crate with error handling, profile models, and storage constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Heart Monitor Core
//!
//! Foundation crate providing shared types and constants for the heart monitor
//! session registry. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorKind`
//! - **constants**: Storage keys, validation limits, and user-facing messages
//! - **models**: `UserProfile`, `RegistrationRequest`, and the profile enumerations

/// Unified error handling system with standard error codes and kinds
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Profile data models (`UserProfile`, `Gender`, `ActivityLevel`)
pub mod models;
