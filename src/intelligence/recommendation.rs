// ABOUTME: Per-reading intensity advice and profile-based training recommendations
// ABOUTME: Derives BMI, max heart rate and target ranges from a registered profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::maxhr::MaxHrAlgorithm;
use crate::errors::AppResult;
use crate::models::{ActivityLevel, UserProfile};
use serde::{Deserialize, Serialize};

/// Coaching message for a single heart-rate reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityAdvice {
    /// Below 50% of max
    Rest,
    /// 50-70% of max
    Endurance,
    /// 70-85% of max
    Moderate,
    /// 85-95% of max
    Warning,
    /// 95% of max and above
    Critical,
}

impl IntensityAdvice {
    /// Pick the advice for `bpm` against `max_heart_rate`
    #[must_use]
    pub fn classify(bpm: f64, max_heart_rate: f64) -> Self {
        let ratio = bpm / max_heart_rate;
        if ratio < 0.5 {
            Self::Rest
        } else if ratio < 0.7 {
            Self::Endurance
        } else if ratio < 0.85 {
            Self::Moderate
        } else if ratio < 0.95 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    /// Message shown to the user
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Rest => "You are in the rest zone. Perfect for recovery.",
            Self::Endurance => "You are in an optimal zone for endurance.",
            Self::Moderate => "You are in a moderate intensity zone. Keep it up!",
            Self::Warning => "Warning, you are approaching your maximum zone. Slow down a bit.",
            Self::Critical => "Critical zone! Slow down immediately.",
        }
    }

    /// True for the two levels that ask the user to slow down
    #[must_use]
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Warning | Self::Critical)
    }
}

/// One suggested exercise with its target heart-rate range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
    /// Exercise name
    pub name: String,
    /// What the exercise is good for
    pub description: String,
    /// Effort label
    pub intensity: String,
    /// Suggested session length
    pub duration: String,
    /// Lower bound of the target range, rounded bpm
    pub target_bpm_low: u32,
    /// Upper bound of the target range, rounded bpm
    pub target_bpm_high: u32,
}

impl ExerciseRecommendation {
    /// Target range formatted as `"low-high BPM"`
    #[must_use]
    pub fn heart_rate_zone(&self) -> String {
        format!("{}-{} BPM", self.target_bpm_low, self.target_bpm_high)
    }
}

/// A nutrition suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTip {
    /// Meal or habit
    pub name: String,
    /// What to eat or drink
    pub description: String,
    /// Concrete examples
    pub examples: String,
}

/// Training and nutrition plan for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPlan {
    /// Profile age in years
    pub age: u32,
    /// Profile activity level
    pub activity_level: ActivityLevel,
    /// Formula used for `max_heart_rate`
    pub algorithm: MaxHrAlgorithm,
    /// Estimated maximum heart rate, bpm
    pub max_heart_rate: f64,
    /// Body mass index, kg/m^2
    pub bmi: f64,
    /// Suggested exercises, easiest first
    pub exercises: Vec<ExerciseRecommendation>,
    /// Nutrition suggestions
    pub nutrition: Vec<NutritionTip>,
}

struct ExerciseTemplate {
    name: &'static str,
    description: &'static str,
    intensity: &'static str,
    duration: &'static str,
    low_fraction: f64,
    high_fraction: f64,
}

const EXERCISES: [ExerciseTemplate; 3] = [
    ExerciseTemplate {
        name: "Walking",
        description: "Perfect for beginners and maintaining cardiovascular health",
        intensity: "Low",
        duration: "30-45 minutes",
        low_fraction: 0.5,
        high_fraction: 0.6,
    },
    ExerciseTemplate {
        name: "Cycling",
        description: "Great for building endurance and leg strength",
        intensity: "Moderate",
        duration: "45-60 minutes",
        low_fraction: 0.6,
        high_fraction: 0.7,
    },
    ExerciseTemplate {
        name: "Swimming",
        description: "Full-body workout with low impact on joints",
        intensity: "Moderate to High",
        duration: "30-45 minutes",
        low_fraction: 0.7,
        high_fraction: 0.8,
    },
];

const NUTRITION: [(&str, &str, &str); 3] = [
    (
        "Pre-Workout Meal",
        "Complex carbohydrates and lean protein",
        "Oatmeal with fruits, Greek yogurt with granola",
    ),
    (
        "Post-Workout Recovery",
        "Protein and simple carbohydrates",
        "Protein shake, banana with peanut butter",
    ),
    (
        "Daily Hydration",
        "Stay hydrated throughout the day",
        "Water, electrolyte drinks, herbal teas",
    ),
];

impl RecommendationPlan {
    /// Build the plan for `profile`, estimating max heart rate with `algorithm`
    ///
    /// # Errors
    ///
    /// Returns a validation error if weight, height or age cannot be read as
    /// numbers, or if the age is outside the supported range
    pub fn for_profile(profile: &UserProfile, algorithm: MaxHrAlgorithm) -> AppResult<Self> {
        let weight_kg = profile.weight_kg()?;
        let height_m = profile.height_cm()? / 100.0;
        let age = profile.age_years()?;
        let max_heart_rate = algorithm.estimate(age, Some(profile.gender))?;

        let exercises = EXERCISES
            .iter()
            .map(|template| ExerciseRecommendation {
                name: template.name.to_owned(),
                description: template.description.to_owned(),
                intensity: template.intensity.to_owned(),
                duration: template.duration.to_owned(),
                target_bpm_low: round_bpm(max_heart_rate * template.low_fraction),
                target_bpm_high: round_bpm(max_heart_rate * template.high_fraction),
            })
            .collect();

        let nutrition = NUTRITION
            .iter()
            .map(|(name, description, examples)| NutritionTip {
                name: (*name).to_owned(),
                description: (*description).to_owned(),
                examples: (*examples).to_owned(),
            })
            .collect();

        Ok(Self {
            age,
            activity_level: profile.activity_level,
            algorithm,
            max_heart_rate,
            bmi: weight_kg / height_m.powi(2),
            exercises,
            nutrition,
        })
    }
}

fn round_bpm(bpm: f64) -> u32 {
    bpm.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, RegistrationRequest};

    fn profile(age: &str) -> UserProfile {
        UserProfile::from_request(RegistrationRequest {
            email: "plan@example.com".into(),
            password: "123456".into(),
            weight: "70".into(),
            height: "175".into(),
            age: age.into(),
            gender: "female".into(),
            activity_level: "light".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_advice_thresholds() {
        let max = 200.0;
        assert_eq!(IntensityAdvice::classify(99.0, max), IntensityAdvice::Rest);
        assert_eq!(IntensityAdvice::classify(100.0, max), IntensityAdvice::Endurance);
        assert_eq!(IntensityAdvice::classify(150.0, max), IntensityAdvice::Moderate);
        assert_eq!(IntensityAdvice::classify(180.0, max), IntensityAdvice::Warning);
        assert_eq!(IntensityAdvice::classify(190.0, max), IntensityAdvice::Critical);
        assert!(IntensityAdvice::Warning.is_alert());
        assert!(!IntensityAdvice::Moderate.is_alert());
    }

    #[test]
    fn test_plan_for_thirty_year_old() {
        let plan = RecommendationPlan::for_profile(&profile("30"), MaxHrAlgorithm::Fox).unwrap();
        assert!((plan.max_heart_rate - 190.0).abs() < 1e-9);
        assert!((plan.bmi - 70.0 / (1.75 * 1.75)).abs() < 1e-9);
        assert_eq!(plan.activity_level, ActivityLevel::Light);

        let ranges: Vec<String> = plan
            .exercises
            .iter()
            .map(ExerciseRecommendation::heart_rate_zone)
            .collect();
        assert_eq!(ranges, ["95-114 BPM", "114-133 BPM", "133-152 BPM"]);
        assert_eq!(plan.nutrition.len(), 3);
        assert_eq!(plan.nutrition[0].name, "Pre-Workout Meal");
    }

    #[test]
    fn test_plan_uses_profile_gender() {
        let female = profile("40");
        assert_eq!(female.gender, Gender::Female);
        let plan = RecommendationPlan::for_profile(&female, MaxHrAlgorithm::Gulati).unwrap();
        assert!((plan.max_heart_rate - 170.8).abs() < 1e-9);
    }

    #[test]
    fn test_plan_rejects_unusable_age() {
        let err = RecommendationPlan::for_profile(&profile("abc"), MaxHrAlgorithm::Fox);
        assert!(err.is_err());
    }
}
