use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::dto::{LoginRequest, RegisterRequest};

/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// One field-level validation failure, as serialized into the `errors` list.
#[derive(Debug, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trim and lowercase: the canonical form emails are stored and compared in.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Every violation in the registration payload, not just the first.
pub fn validate_registration(payload: &RegisterRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if !is_valid_email(&payload.email) {
        violations.push(FieldViolation {
            field: "email",
            message: "Invalid email",
        });
    }
    // Counted in characters, not bytes; multibyte passwords get the full quota.
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        violations.push(FieldViolation {
            field: "password",
            message: "Minimum password length is 6 characters",
        });
    }
    violations
}

/// Every violation in the login payload. Login only requires the password to be
/// present; its length was checked when the account was created.
pub fn validate_login(payload: &LoginRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if !is_valid_email(&payload.email) {
        violations.push(FieldViolation {
            field: "email",
            message: "Enter a valid email",
        });
    }
    if payload.password.is_empty() {
        violations.push(FieldViolation {
            field: "password",
            message: "Password is required",
        });
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "no-tld@host",
            "spaces in@example.com",
            "double@@example.com",
            "@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  USER@Example.COM "), "user@example.com");
    }

    #[test]
    fn registration_reports_every_violation() {
        let payload = RegisterRequest {
            email: "not-an-email".into(),
            password: "abc".into(),
        };
        let violations = validate_registration(&payload);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.field == "email"));
        assert!(violations.iter().any(|v| v.field == "password"));
    }

    #[test]
    fn registration_accepts_minimum_length_password() {
        let payload = RegisterRequest {
            email: "a@b.com".into(),
            password: "secret".into(),
        };
        assert!(validate_registration(&payload).is_empty());
    }

    #[test]
    fn registration_rejects_five_characters() {
        let payload = RegisterRequest {
            email: "a@b.com".into(),
            password: "12345".into(),
        };
        let violations = validate_registration(&payload);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Three characters but six bytes; must still be too short.
        let payload = RegisterRequest {
            email: "a@b.com".into(),
            password: "ñññ".into(),
        };
        let violations = validate_registration(&payload);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");

        // Six characters spanning seven bytes passes.
        let payload = RegisterRequest {
            email: "a@b.com".into(),
            password: "señora".into(),
        };
        assert!(validate_registration(&payload).is_empty());
    }

    #[test]
    fn login_requires_password_presence_only() {
        let short = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        assert!(validate_login(&short).is_empty());

        let empty = LoginRequest {
            email: "a@b.com".into(),
            password: String::new(),
        };
        let violations = validate_login(&empty);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");
    }
}
