// ABOUTME: User profile, registration input, and enumerated physiology attributes
// ABOUTME: Wire format keeps the camelCase field names of the persisted JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender recorded on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other answer
    Other,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(messages::INVALID_GENDER)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported weekly activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days a week
    Light,
    /// Moderate exercise 3-5 days a week
    Moderate,
    /// Hard exercise 6-7 days a week
    Active,
    /// Physical job or twice-daily training
    VeryActive,
}

impl ActivityLevel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(messages::INVALID_ACTIVITY_LEVEL)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw sign-up input
///
/// Every field is a string so that an unselected gender or activity level
/// (an empty string) reaches the "all fields required" check instead of
/// failing to deserialize.
///
/// # Examples
///
/// ```rust
/// use heart_monitor_core::models::RegistrationRequest;
///
/// let request = RegistrationRequest {
///     email: "runner@example.com".into(),
///     password: "secret42".into(),
///     weight: "70".into(),
///     height: "175".into(),
///     age: "25".into(),
///     gender: "male".into(),
///     activity_level: "moderate".into(),
/// };
/// assert!(request.has_all_fields());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Unique login identifier
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Body weight in kilograms
    pub weight: String,
    /// Height in centimetres
    pub height: String,
    /// Age in years
    pub age: String,
    /// `male`, `female` or `other`
    pub gender: String,
    /// `sedentary`, `light`, `moderate`, `active` or `very_active`
    pub activity_level: String,
}

impl RegistrationRequest {
    /// True when none of the seven fields is empty
    #[must_use]
    pub fn has_all_fields(&self) -> bool {
        [
            &self.email,
            &self.password,
            &self.weight,
            &self.height,
            &self.age,
            &self.gender,
            &self.activity_level,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("weight", &self.weight)
            .field("height", &self.height)
            .field("age", &self.age)
            .field("gender", &self.gender)
            .field("activity_level", &self.activity_level)
            .finish()
    }
}

/// A registered profile
///
/// Profiles are immutable once registered; the registry only ever hands out
/// copies. The password is kept verbatim, exactly as it was typed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique login identifier
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Body weight in kilograms, as entered
    pub weight: String,
    /// Height in centimetres, as entered
    pub height: String,
    /// Age in years, as entered
    pub age: String,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Convert a registration request whose fields were already checked
    ///
    /// # Errors
    ///
    /// Returns a validation error when gender or activity level is not one of
    /// the supported values
    pub fn from_request(request: RegistrationRequest) -> AppResult<Self> {
        let gender = request.gender.parse()?;
        let activity_level = request.activity_level.parse()?;
        Ok(Self {
            email: request.email,
            password: request.password,
            weight: request.weight,
            height: request.height,
            age: request.age,
            gender,
            activity_level,
        })
    }

    /// Weight parsed as kilograms
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored weight is not a positive number
    pub fn weight_kg(&self) -> AppResult<f64> {
        parse_positive(&self.weight, "weight")
    }

    /// Height parsed as centimetres
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored height is not a positive number
    pub fn height_cm(&self) -> AppResult<f64> {
        parse_positive(&self.height, "height")
    }

    /// Age parsed as whole years
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored age is not a whole number
    pub fn age_years(&self) -> AppResult<u32> {
        self.age
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_format(format!("age is not a whole number: {}", self.age)))
    }

    /// Copy of this profile without the password
    #[must_use]
    pub fn to_public(&self) -> PublicProfile {
        PublicProfile {
            email: self.email.clone(),
            weight: self.weight.clone(),
            height: self.height.clone(),
            age: self.age.clone(),
            gender: self.gender,
            activity_level: self.activity_level,
        }
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("weight", &self.weight)
            .field("height", &self.height)
            .field("age", &self.age)
            .field("gender", &self.gender)
            .field("activity_level", &self.activity_level)
            .finish()
    }
}

/// A profile as shown to its owner, password stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    /// Login identifier
    pub email: String,
    /// Body weight in kilograms, as entered
    pub weight: String,
    /// Height in centimetres, as entered
    pub height: String,
    /// Age in years, as entered
    pub age: String,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
}

fn parse_positive(raw: &str, field: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_format(format!("{field} is not a number: {raw}")))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(format!(
            "{field} must be greater than zero, got {raw}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            email: "a@a.com".into(),
            password: "123456".into(),
            weight: "70".into(),
            height: "175".into(),
            age: "25".into(),
            gender: "male".into(),
            activity_level: "very_active".into(),
        }
    }

    #[test]
    fn test_profile_wire_format_matches_persisted_json() {
        let profile = UserProfile::from_request(request()).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["activityLevel"], "very_active");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["password"], "123456");
    }

    #[test]
    fn test_debug_redacts_password() {
        let profile = UserProfile::from_request(request()).unwrap();
        let rendered = format!("{profile:?}");
        assert!(!rendered.contains("123456"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_unknown_enum_values_rejected() {
        let mut bad_gender = request();
        bad_gender.gender = "robot".into();
        let err = UserProfile::from_request(bad_gender).unwrap_err();
        assert_eq!(err.message, messages::INVALID_GENDER);

        let mut bad_level = request();
        bad_level.activity_level = "extreme".into();
        let err = UserProfile::from_request(bad_level).unwrap_err();
        assert_eq!(err.message, messages::INVALID_ACTIVITY_LEVEL);
    }

    #[test]
    fn test_numeric_accessors() {
        let mut profile = UserProfile::from_request(request()).unwrap();
        assert_eq!(profile.age_years().unwrap(), 25);
        assert!((profile.weight_kg().unwrap() - 70.0).abs() < f64::EPSILON);

        profile.height = "tall".into();
        assert!(profile.height_cm().unwrap_err().is_validation());
        profile.weight = "-3".into();
        assert!(profile.weight_kg().is_err());
    }

    #[test]
    fn test_public_profile_has_no_password() {
        let public = UserProfile::from_request(request()).unwrap().to_public();
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "a@a.com");
    }

    #[test]
    fn test_has_all_fields() {
        let mut incomplete = request();
        assert!(incomplete.has_all_fields());
        incomplete.activity_level.clear();
        assert!(!incomplete.has_all_fields());
    }
}
