// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for heart-monitor-cli
// ABOUTME: Provides consistent display functions for profiles, zones, and plans

use heart_monitor::{
    intelligence::{HeartRateZone, IntensityAdvice, RecommendationPlan},
    models::PublicProfile,
};

/// Display a profile without its password
pub fn display_profile(profile: &PublicProfile) {
    println!("{}", "=".repeat(50));
    println!("PROFILE:");
    println!("   Email: {}", profile.email);
    println!("   Weight: {} kg", profile.weight);
    println!("   Height: {} cm", profile.height);
    println!("   Age: {}", profile.age);
    println!("   Gender: {}", profile.gender);
    println!("   Activity Level: {}", profile.activity_level);
    println!("{}", "=".repeat(50));
}

/// Display a classified heart-rate reading
pub fn display_zone(bpm: f64, max_heart_rate: f64, zone: HeartRateZone, advice: IntensityAdvice) {
    println!("\nHeart Rate: {bpm:.0} BPM");
    println!("   Max Heart Rate: {max_heart_rate:.0} BPM");
    println!("   Effort: {:.0}% of max", bpm / max_heart_rate * 100.0);
    println!("   Zone: {zone}");
    if advice.is_alert() {
        println!("\nWARNING {}", advice.message());
    } else {
        println!("\n{}", advice.message());
    }
}

/// Display a training and nutrition plan
pub fn display_plan(plan: &RecommendationPlan) {
    println!("\nPersonalized Recommendations");
    println!(
        "Based on your profile: {} years old, {} activity level",
        plan.age, plan.activity_level
    );
    println!(
        "   BMI: {:.1}   Max Heart Rate: {:.0} BPM ({})",
        plan.bmi,
        plan.max_heart_rate,
        plan.algorithm.formula()
    );

    println!("\nRecommended Exercises");
    println!("{}", "=".repeat(50));
    for exercise in &plan.exercises {
        println!("{}", exercise.name);
        println!("   {}", exercise.description);
        println!("   Intensity: {}", exercise.intensity);
        println!("   Duration: {}", exercise.duration);
        println!("   Target: {}", exercise.heart_rate_zone());
    }

    println!("\nNutrition Tips");
    println!("{}", "=".repeat(50));
    for tip in &plan.nutrition {
        println!("{}", tip.name);
        println!("   {}", tip.description);
        println!("   Examples: {}", tip.examples);
    }
}
