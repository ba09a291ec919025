// ABOUTME: Profile data models shared by the registry and heart-rate helpers
// ABOUTME: Re-exports UserProfile, RegistrationRequest, Gender, and ActivityLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RegistrationRequest`: raw sign-up input, every field a string
//! - `UserProfile`: a registered profile as stored and persisted
//! - `PublicProfile`: a profile without its password, for display
//! - `Gender`, `ActivityLevel`: the enumerated profile attributes

mod profile;

pub use profile::{ActivityLevel, Gender, PublicProfile, RegistrationRequest, UserProfile};
