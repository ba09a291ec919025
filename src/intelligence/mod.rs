// ABOUTME: Heart-rate intelligence built on top of registered profiles
// ABOUTME: Max heart rate formulas, exertion zones, intensity advice, and training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure computations over a profile and heart-rate readings. Nothing here
//! touches storage or the session; callers pass in the profile they got from
//! the registry.

/// Age-predicted maximum heart rate formulas
pub mod maxhr;
/// Profile-based exercise and nutrition recommendations
pub mod recommendation;
/// Exertion zones and zone distributions
pub mod zones;

pub use maxhr::MaxHrAlgorithm;
pub use recommendation::{ExerciseRecommendation, IntensityAdvice, NutritionTip, RecommendationPlan};
pub use zones::{HeartRateZone, ZoneDistribution};
