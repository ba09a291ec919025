// ABOUTME: Unified error type with codes and coarse kinds for registry failures
// ABOUTME: Validation, conflict, and authentication errors carry user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. An
//! [`AppError`] pairs a fine-grained [`ErrorCode`] with the human-readable
//! message callers are expected to show to the end user verbatim.
//!
//! Registry failures fall into three recoverable kinds:
//!
//! - [`ErrorKind::Validation`]: malformed or missing input
//! - [`ErrorKind::Conflict`]: an email already in use
//! - [`ErrorKind::Auth`]: credentials did not match any profile

use crate::constants::messages;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

/// Coarse classification of an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input, recoverable by correcting the input
    Validation,
    /// Uniqueness violation, recoverable by choosing another identifier
    Conflict,
    /// Credential mismatch, recoverable by retrying with correct credentials
    Auth,
    /// Persistence backend failure
    Storage,
    /// Persisted data could not be encoded or decoded
    Serialization,
    /// Invalid configuration
    Config,
    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Classify this code into its coarse kind
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => ErrorKind::Validation,
            Self::ResourceAlreadyExists => ErrorKind::Conflict,
            Self::AuthInvalid => ErrorKind::Auth,
            Self::StorageError => ErrorKind::Storage,
            Self::SerializationError => ErrorKind::Serialization,
            Self::ConfigInvalid => ErrorKind::Config,
            Self::InternalError => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "ValidationError",
            Self::Conflict => "ConflictError",
            Self::Auth => "AuthError",
            Self::Storage => "StorageError",
            Self::Serialization => "SerializationError",
            Self::Config => "ConfigError",
            Self::Internal => "InternalError",
        };
        f.write_str(name)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Coarse kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// True for malformed or missing input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// True for uniqueness violations
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    /// True for credential mismatches
    #[must_use]
    pub fn is_auth(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// One or more required fields are empty
    #[must_use]
    pub fn missing_fields() -> Self {
        Self::new(ErrorCode::MissingRequiredField, messages::ALL_FIELDS_REQUIRED)
    }

    /// Input does not have the expected shape
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Numeric input outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Uniqueness violation
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Invalid credentials
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Storage backend failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {error}")).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(format!("I/O error: {error}")).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_kinds() {
        assert_eq!(ErrorCode::MissingRequiredField.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::InvalidFormat.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::ResourceAlreadyExists.kind(), ErrorKind::Conflict);
        assert_eq!(ErrorCode::AuthInvalid.kind(), ErrorKind::Auth);
        assert_eq!(ErrorCode::StorageError.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_display_uses_kind_and_message() {
        let error = AppError::conflict(messages::EMAIL_IN_USE);
        assert_eq!(error.to_string(), "ConflictError: email already in use");
        assert_eq!(error.message, "email already in use");
    }

    #[test]
    fn test_missing_fields_message() {
        let error = AppError::missing_fields();
        assert!(error.is_validation());
        assert_eq!(error.message, messages::ALL_FIELDS_REQUIRED);
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let error = AppError::from(parse.unwrap_err());
        assert_eq!(error.kind(), ErrorKind::Serialization);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ResourceAlreadyExists).unwrap();
        assert_eq!(json, "\"RESOURCE_ALREADY_EXISTS\"");
    }
}
