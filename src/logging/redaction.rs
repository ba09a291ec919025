// ABOUTME: PII-safe log helpers for emails and persisted profile JSON
// ABOUTME: Masks email addresses and blanks password values before they reach a log line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! PII-safe logging helpers
//!
//! ```rust
//! use heart_monitor::logging::redaction::mask_email;
//!
//! assert_eq!(mask_email("testuser@domain.com"), "t***@d***.com");
//! ```

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder written in place of redacted values
pub const REDACTION_PLACEHOLDER: &str = "[REDACTED]";

/// Mask email addresses for PII protection
///
/// Keeps the first character of the local part and of the domain label.
/// Addresses the pattern does not recognise (single-label domains, non-ASCII
/// parts) are still masked around their `@`; text without one is returned
/// unchanged.
#[must_use]
pub fn mask_email(email: &str) -> String {
    match email_regex() {
        Some(regex) if regex.is_match(email) => regex
            .replace_all(email, |caps: &regex::Captures| mask_address(&caps[0]))
            .to_string(),
        _ => mask_address(email),
    }
}

fn mask_address(address: &str) -> String {
    address.rfind('@').map_or_else(
        || address.to_owned(),
        |at_pos| {
            let (local, domain_with_at) = address.split_at(at_pos);
            let domain = &domain_with_at[1..];
            format!("{}@{}", mask_head(local), mask_domain(domain))
        },
    )
}

/// Replace the value of every `"password"` field in a JSON text
#[must_use]
pub fn redact_passwords(text: &str) -> String {
    password_field_regex().map_or_else(
        || text.to_owned(),
        |regex| {
            regex
                .replace_all(text, format!(r#""password": "{REDACTION_PLACEHOLDER}""#))
                .to_string()
        },
    )
}

fn mask_head(part: &str) -> String {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => format!("{first}***"),
        (Some(_), None) => "*".to_owned(),
        _ => part.to_owned(),
    }
}

fn mask_domain(domain: &str) -> String {
    domain.find('.').map_or_else(
        || mask_head(domain),
        |dot_pos| {
            let (label, tld_with_dot) = domain.split_at(dot_pos);
            format!("{}{tld_with_dot}", mask_head(label))
        },
    )
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").ok())
        .as_ref()
}

fn password_field_regex() -> Option<&'static Regex> {
    static PASSWORD_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    PASSWORD_REGEX
        .get_or_init(|| Regex::new(r#""password"\s*:\s*"(?:[^"\\]|\\.)*""#).ok())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("testuser@domain.com"), "t***@d***.com");
        assert_eq!(mask_email("a@b.io"), "*@*.io");
        assert_eq!(mask_email("not-an-email"), "not-an-email");
    }

    #[test]
    fn test_mask_email_outside_the_pattern() {
        assert_eq!(mask_email("a@b.c"), "*@*.c");
        assert_eq!(mask_email("user@localhost"), "u***@l***");
        assert_eq!(mask_email("josé@exämple.com"), "j***@e***.com");
        assert!(!mask_email("runner@").contains("runner"));
    }

    #[test]
    fn test_mask_email_inside_text() {
        let masked = mask_email("login failed for runner@example.com today");
        assert_eq!(masked, "login failed for r***@e***.com today");
    }

    #[test]
    fn test_redact_passwords() {
        let raw = r#"{"email":"a@a.com","password":"hunter22","age":"25"}"#;
        let redacted = redact_passwords(raw);
        assert!(!redacted.contains("hunter22"));
        assert!(redacted.contains(REDACTION_PLACEHOLDER));
        assert!(redacted.contains(r#""age":"25""#));
    }
}
