// ABOUTME: Registration and login input validation in a fixed, first-failure-wins order
// ABOUTME: Email shape, password length, and required-field checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{limits, messages};
use crate::errors::{AppError, AppResult};
use crate::models::RegistrationRequest;

/// Run the input checks of a registration, in order
///
/// 1. every field present
/// 2. email shape
/// 3. password length
///
/// Uniqueness is checked by the registry under its lock.
///
/// # Errors
///
/// Returns the validation error of the first failing check
pub fn validate_registration(request: &RegistrationRequest) -> AppResult<()> {
    if !request.has_all_fields() {
        return Err(AppError::missing_fields());
    }
    if !is_valid_email(&request.email) {
        return Err(AppError::invalid_format(messages::INVALID_EMAIL_FORMAT));
    }
    if !is_valid_password(&request.password) {
        return Err(AppError::invalid_input(messages::PASSWORD_TOO_SHORT));
    }
    Ok(())
}

/// Reject a login attempt with an empty email or password
///
/// # Errors
///
/// Returns a validation error if either credential is empty
pub fn validate_credentials(email: &str, password: &str) -> AppResult<()> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::new(
            crate::errors::ErrorCode::MissingRequiredField,
            messages::CREDENTIALS_REQUIRED,
        ));
    }
    Ok(())
}

/// Basic `local@domain.tld` shape check
///
/// No whitespace, exactly one `@`, a non-empty local part, and a domain with
/// a dot that has text on both sides.
///
/// ```rust
/// use heart_monitor::registry::validation::is_valid_email;
///
/// assert!(is_valid_email("a@a.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("user@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx < last)
}

/// Minimum length check, counted in characters
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= limits::MIN_PASSWORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            email: "test@example.com".into(),
            password: "password123".into(),
            weight: "70".into(),
            height: "175".into(),
            age: "25".into(),
            gender: "male".into(),
            activity_level: "moderate".into(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@a.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(!is_valid_password("12345"));
        assert!(is_valid_password("123456"));
        assert!(is_valid_password("éééééé"));
    }

    #[test]
    fn test_missing_field_wins_over_short_password() {
        let mut request = valid_request();
        request.weight.clear();
        request.password = "123".into();
        let err = validate_registration(&request).unwrap_err();
        assert_eq!(err.message, messages::ALL_FIELDS_REQUIRED);
    }

    #[test]
    fn test_email_format_wins_over_short_password() {
        let mut request = valid_request();
        request.email = "invalid-email".into();
        request.password = "123".into();
        let err = validate_registration(&request).unwrap_err();
        assert_eq!(err.message, messages::INVALID_EMAIL_FORMAT);
    }

    #[test]
    fn test_short_password() {
        let mut request = valid_request();
        request.password = "123".into();
        let err = validate_registration(&request).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message, messages::PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_credentials_required() {
        assert!(validate_credentials("a@a.com", "secret").is_ok());
        let err = validate_credentials("", "secret").unwrap_err();
        assert_eq!(err.message, messages::CREDENTIALS_REQUIRED);
        assert!(validate_credentials("a@a.com", "").unwrap_err().is_validation());
    }
}
