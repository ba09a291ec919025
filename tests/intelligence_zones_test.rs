// ABOUTME: Integration tests for heart-rate zones, advice, and recommendation plans
// ABOUTME: Exercises the intelligence helpers against profiles produced by the registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{memory_registry, sample_request};
use heart_monitor::intelligence::{
    HeartRateZone, IntensityAdvice, MaxHrAlgorithm, RecommendationPlan, ZoneDistribution,
};

#[tokio::test]
async fn test_zone_for_signed_in_profile() -> Result<()> {
    let (registry, _store) = memory_registry().await?;
    registry.register(sample_request()).await?;
    let profile = registry.current_user().await.unwrap();

    // 25 years old: Fox max is 195
    let max_hr = MaxHrAlgorithm::default().estimate_for(&profile)?;
    assert!((max_hr - 195.0).abs() < f64::EPSILON);

    assert_eq!(HeartRateZone::classify(90.0, max_hr), HeartRateZone::Rest);
    assert_eq!(HeartRateZone::classify(110.0, max_hr), HeartRateZone::WarmUp);
    assert_eq!(HeartRateZone::classify(130.0, max_hr), HeartRateZone::FatBurning);
    assert_eq!(HeartRateZone::classify(150.0, max_hr), HeartRateZone::Aerobic);
    assert_eq!(HeartRateZone::classify(170.0, max_hr), HeartRateZone::Anaerobic);
    assert_eq!(HeartRateZone::classify(190.0, max_hr), HeartRateZone::Red);
    assert_eq!(HeartRateZone::Red.to_string(), "Red Zone");
    Ok(())
}

#[test]
fn test_advice_messages() {
    let advice = IntensityAdvice::classify(190.0, 195.0);
    assert_eq!(advice, IntensityAdvice::Critical);
    assert_eq!(advice.message(), "Critical zone! Slow down immediately.");

    let advice = IntensityAdvice::classify(120.0, 195.0);
    assert_eq!(advice.message(), "You are in an optimal zone for endurance.");
}

#[test]
fn test_distribution_percentages_sum_to_hundred() {
    let samples = [60.0, 95.0, 125.0, 150.0, 165.0, 175.0, 182.0, 188.0, 195.0];
    let distribution = ZoneDistribution::from_samples(samples, 200.0);

    let total: f64 = HeartRateZone::ALL
        .iter()
        .map(|zone| distribution.percentage(*zone))
        .sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(distribution.dominant_zone(), Some(HeartRateZone::Red));
}

#[tokio::test]
async fn test_recommendation_plan_for_registered_profile() -> Result<()> {
    let (registry, _store) = memory_registry().await?;
    let profile = registry.register(sample_request()).await?;

    let plan = RecommendationPlan::for_profile(&profile, MaxHrAlgorithm::Fox)?;
    assert_eq!(plan.age, 25);
    assert!((plan.bmi - 22.857_142_857).abs() < 1e-6);

    let walking = &plan.exercises[0];
    assert_eq!(walking.name, "Walking");
    assert_eq!(walking.intensity, "Low");
    // 195 * 0.5 = 97.5 rounds up
    assert_eq!(walking.heart_rate_zone(), "98-117 BPM");

    let swimming = &plan.exercises[2];
    assert_eq!(swimming.duration, "30-45 minutes");
    assert_eq!(swimming.heart_rate_zone(), "137-156 BPM");

    let names: Vec<&str> = plan.nutrition.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["Pre-Workout Meal", "Post-Workout Recovery", "Daily Hydration"]
    );
    Ok(())
}
