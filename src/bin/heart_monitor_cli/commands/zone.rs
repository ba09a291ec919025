// ABOUTME: Heart-rate commands for heart-monitor-cli
// ABOUTME: Classifies readings into zones and prints profile-based recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use heart_monitor::{
    constants::messages,
    errors::{AppError, AppResult},
    intelligence::{HeartRateZone, IntensityAdvice, MaxHrAlgorithm, RecommendationPlan},
};
use tracing::debug;

use crate::helpers::display::{display_plan, display_zone};
use crate::Registry;

type Result<T> = AppResult<T>;

/// Classify `bpm` for an explicit age or the signed-in profile
pub async fn classify(
    registry: &Registry,
    bpm: f64,
    age: Option<u32>,
    algorithm: MaxHrAlgorithm,
) -> Result<()> {
    if !bpm.is_finite() || bpm <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "bpm must be greater than zero, got {bpm}"
        )));
    }

    let profile = registry.current_user().await;
    let max_heart_rate = match (age, profile.as_ref()) {
        (Some(age), profile) => algorithm.estimate(age, profile.map(|p| p.gender))?,
        (None, Some(profile)) => algorithm.estimate_for(profile)?,
        (None, None) => {
            return Err(AppError::auth_invalid(format!(
                "{}: sign in or pass --age",
                messages::NOT_SIGNED_IN
            )))
        }
    };
    debug!(algorithm = %algorithm, max_heart_rate, "Estimated max heart rate");

    display_zone(
        bpm,
        max_heart_rate,
        HeartRateZone::classify(bpm, max_heart_rate),
        IntensityAdvice::classify(bpm, max_heart_rate),
    );
    Ok(())
}

/// Print the plan for the signed-in profile
pub async fn recommend(registry: &Registry, algorithm: MaxHrAlgorithm) -> Result<()> {
    let profile = registry
        .current_user()
        .await
        .ok_or_else(|| AppError::auth_invalid(messages::NOT_SIGNED_IN))?;
    let plan = RecommendationPlan::for_profile(&profile, algorithm)?;
    display_plan(&plan);
    Ok(())
}
