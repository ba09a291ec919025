// ABOUTME: Maximum heart rate estimation algorithms using age-predicted formulas
// ABOUTME: Implements Fox, Tanaka, Nes, and Gulati formulas; Fox drives the dashboard zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{Gender, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum heart rate estimation algorithm
///
/// - `Fox`: Classic 220-age (±10-12 bpm error, tends to overestimate)
/// - `Tanaka`: 208-0.7xage (±7-8 bpm error)
/// - `Nes`: 211-0.64xage (±6-7 bpm error, validated in large cohort)
/// - `Gulati`: 206-0.88xage (women-specific, ±7-8 bpm error)
///
/// # Scientific References
///
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
/// - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
/// - Nes, B.M. et al. (2013). "Age-predicted maximal heart rate." *Scand J Med Sci Sports*, 23(6), 697-704.
/// - Gulati, M. et al. (2010). "Heart rate response to exercise stress testing." *Circulation*, 122(2), 130-137.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrAlgorithm {
    /// Fox formula: 220 - age
    ///
    /// The formula the dashboard zone badge and recommendations use
    #[default]
    Fox,

    /// Tanaka formula: 208 - 0.7 x age
    ///
    /// Based on meta-analysis of 18,712 subjects
    Tanaka,

    /// Nes formula: 211 - 0.64 x age
    ///
    /// Derived from Norwegian HUNT study
    Nes,

    /// Gulati formula: 206 - 0.88 x age
    ///
    /// Women-specific formula
    Gulati,
}

impl MaxHrAlgorithm {
    /// Estimate maximum heart rate from age
    ///
    /// # Errors
    ///
    /// Returns a validation error if age is outside 1-120 years
    ///
    /// # Example
    ///
    /// ```rust
    /// use heart_monitor::intelligence::MaxHrAlgorithm;
    ///
    /// let max_hr = MaxHrAlgorithm::Tanaka.estimate(40, None).unwrap();
    /// assert!((max_hr - 180.0).abs() < 1e-9); // 208 - 0.7*40 = 180
    /// ```
    pub fn estimate(&self, age: u32, gender: Option<Gender>) -> AppResult<f64> {
        if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {} and {} years, got {age}",
                limits::MIN_AGE_YEARS,
                limits::MAX_AGE_YEARS
            )));
        }

        let age_f64 = f64::from(age);

        let max_hr = match self {
            Self::Fox => 220.0 - age_f64,
            Self::Tanaka => 0.7f64.mul_add(-age_f64, 208.0),
            Self::Nes => 0.64f64.mul_add(-age_f64, 211.0),
            // Gulati is women-specific, use Tanaka for males
            Self::Gulati if gender == Some(Gender::Male) => 0.7f64.mul_add(-age_f64, 208.0),
            Self::Gulati => 0.88f64.mul_add(-age_f64, 206.0),
        };

        Ok(max_hr)
    }

    /// Estimate maximum heart rate for a registered profile
    ///
    /// # Errors
    ///
    /// Returns a validation error if the profile's age is not a whole number
    /// in range
    pub fn estimate_for(&self, profile: &UserProfile) -> AppResult<f64> {
        self.estimate(profile.age_years()?, Some(profile.gender))
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Tanaka => "tanaka",
            Self::Nes => "nes",
            Self::Gulati => "gulati",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Fox => "220 - age",
            Self::Tanaka => "208 - 0.7 x age",
            Self::Nes => "211 - 0.64 x age",
            Self::Gulati => "206 - 0.88 x age",
        }
    }
}

impl fmt::Display for MaxHrAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaxHrAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fox" => Ok(Self::Fox),
            "tanaka" => Ok(Self::Tanaka),
            "nes" => Ok(Self::Nes),
            "gulati" => Ok(Self::Gulati),
            other => Err(AppError::invalid_input(format!(
                "Unknown MaxHR algorithm: '{other}'. Valid options: fox, tanaka, nes, gulati"
            ))),
        }
    }
}
