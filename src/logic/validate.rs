// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form validation.
//!
//! Checks run in a fixed order and the first failure wins, so the user only ever
//! sees one message per submission:
//! forename length, surname length, email length, then email structure.

use thiserror::Error;

use crate::models::contact::{FieldId, FormSnapshot, ValidationRules};
use crate::models::email;

/// Why a submission was rejected. `Display` is the exact user-facing text.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", too_short_message(.0))]
    TooShortField(FieldId),
    #[error("Please enter a complete email address in the form: yourname@yourdomain.com")]
    EmailTooShort,
    #[error("Invalid! Please enter a complete email address in the form: yourname@yourdomain.com")]
    EmailMalformed,
}

fn too_short_message(field: &FieldId) -> &'static str {
    match field {
        FieldId::Forename => "Please enter your full Forname",
        FieldId::Surname => "Please enter your full Sirname.",
        // Email length has its own variant; kept total for the formatter.
        FieldId::Email => {
            "Please enter a complete email address in the form: yourname@yourdomain.com"
        }
    }
}

impl ValidationError {
    /// Field that should receive focus after the message is shown.
    pub fn field(self) -> FieldId {
        match self {
            ValidationError::TooShortField(field) => field,
            ValidationError::EmailTooShort | ValidationError::EmailMalformed => FieldId::Email,
        }
    }
}

/// Page-side access the validator needs: read a field, move focus, and notify the user.
pub trait FormHost {
    fn value(&self, field: FieldId) -> &str;
    fn focus(&mut self, field: FieldId);
    fn alert(&mut self, message: &str);
}

/// Validate a captured snapshot without touching any UI state.
///
/// # Errors
///
/// Returns the first failing check in validation order.
///
/// # Examples
///
/// ```rust,ignore
/// let rules = ValidationRules::default();
/// let ok = FormSnapshot::new("Alice", "Smith", "alice@example.com");
/// assert!(check(&ok, &rules).is_ok());
///
/// let short = FormSnapshot::new("Al", "Smith", "al@x.com");
/// assert_eq!(check(&short, &rules), Err(ValidationError::TooShortField(FieldId::Forename)));
/// ```
pub fn check(snapshot: &FormSnapshot, rules: &ValidationRules) -> Result<(), ValidationError> {
    for field in [FieldId::Forename, FieldId::Surname] {
        if snapshot.get(field).trim().chars().count() < rules.min_name_len {
            return Err(ValidationError::TooShortField(field));
        }
    }

    let address = snapshot.email_address.as_str();
    if address.chars().count() < rules.min_email_len {
        return Err(ValidationError::EmailTooShort);
    }

    if !email::is_well_formed(address, rules.strict_email) {
        return Err(ValidationError::EmailMalformed);
    }

    Ok(())
}

/// Read the host's fields, validate them, and on failure alert and refocus the offending field.
///
/// Returns `true` when the submission may proceed.
pub fn validate<H: FormHost + ?Sized>(host: &mut H, rules: &ValidationRules) -> bool {
    let snapshot = FormSnapshot::new(
        host.value(FieldId::Forename),
        host.value(FieldId::Surname),
        host.value(FieldId::Email),
    );

    match check(&snapshot, rules) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(field = err.field().name(), %err, "form validation failed");
            host.alert(&err.to_string());
            host.focus(err.field());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal host recording every side effect.
    #[derive(Default)]
    struct RecordingHost {
        snapshot: FormSnapshot,
        focused: Vec<FieldId>,
        alerts: Vec<String>,
    }

    impl RecordingHost {
        fn with(forename: &str, surname: &str, email: &str) -> Self {
            Self {
                snapshot: FormSnapshot::new(forename, surname, email),
                ..Default::default()
            }
        }
    }

    impl FormHost for RecordingHost {
        fn value(&self, field: FieldId) -> &str {
            self.snapshot.get(field)
        }

        fn focus(&mut self, field: FieldId) {
            self.focused.push(field);
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn run(forename: &str, surname: &str, email: &str) -> (bool, RecordingHost) {
        let mut host = RecordingHost::with(forename, surname, email);
        let ok = validate(&mut host, &ValidationRules::default());
        (ok, host)
    }

    #[test]
    fn short_forename_fails_first_and_focuses_forename() {
        let (ok, host) = run("Al", "Smith", "al@x.com");

        assert!(!ok);
        assert_eq!(host.alerts, vec!["Please enter your full Forname"]);
        assert_eq!(host.focused, vec![FieldId::Forename]);
    }

    #[test]
    fn short_surname_reports_sirname_message() {
        let (ok, host) = run("Alice", "Sm", "alice@example.com");

        assert!(!ok);
        assert_eq!(host.alerts, vec!["Please enter your full Sirname."]);
        assert_eq!(host.focused, vec![FieldId::Surname]);
    }

    #[test]
    fn name_checks_short_circuit_before_email() {
        let rules = ValidationRules::default();
        for email in ["", "bad", "alice@example.com"] {
            let err = check(&FormSnapshot::new("Al", "Bo", email), &rules).unwrap_err();
            assert_eq!(err, ValidationError::TooShortField(FieldId::Forename));
            let err = check(&FormSnapshot::new("Alice", "Bo", email), &rules).unwrap_err();
            assert_eq!(err, ValidationError::TooShortField(FieldId::Surname));
        }
    }

    #[test]
    fn names_are_trimmed_before_measuring() {
        let rules = ValidationRules::default();
        let err = check(&FormSnapshot::new("  Al  ", "Smith", "alice@example.com"), &rules);
        assert_eq!(err, Err(ValidationError::TooShortField(FieldId::Forename)));
    }

    #[test]
    fn valid_submission_passes_without_side_effects() {
        let (ok, host) = run("Alice", "Smith", "alice@example.com");

        assert!(ok);
        assert!(host.alerts.is_empty());
        assert!(host.focused.is_empty());
    }

    #[test]
    fn short_email_uses_complete_address_message() {
        for email in ["bad", "a@bc", ""] {
            let (ok, host) = run("Alice", "Smith", email);
            assert!(!ok);
            assert_eq!(
                host.alerts,
                vec!["Please enter a complete email address in the form: yourname@yourdomain.com"]
            );
            assert_eq!(host.focused, vec![FieldId::Email]);
        }
    }

    #[test]
    fn five_character_address_is_malformed() {
        let (ok, host) = run("Alice", "Smith", "a@b.c");

        assert!(!ok);
        assert_eq!(
            host.alerts,
            vec!["Invalid! Please enter a complete email address in the form: yourname@yourdomain.com"]
        );
        assert_eq!(host.focused, vec![FieldId::Email]);
    }

    #[test]
    fn missing_at_sign_is_malformed() {
        let rules = ValidationRules::default();
        let err = check(&FormSnapshot::new("Alice", "Smith", "noatsign.com"), &rules);
        assert_eq!(err, Err(ValidationError::EmailMalformed));
    }

    #[test]
    fn repeated_validation_is_stable() {
        let rules = ValidationRules::default();
        for (f, s, e) in [
            ("Alice", "Smith", "alice@example.com"),
            ("Al", "Smith", "al@x.com"),
            ("Alice", "Smith", "noatsign.com"),
        ] {
            let mut host = RecordingHost::with(f, s, e);
            let first = validate(&mut host, &rules);
            let second = validate(&mut host, &rules);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn strict_rules_tighten_structural_check() {
        let rules = ValidationRules {
            strict_email: true,
            ..Default::default()
        };
        let snapshot =
            FormSnapshot::new("Alice", "Smith", format!("{}@example.com", "a".repeat(65)));

        assert!(check(&snapshot, &ValidationRules::default()).is_ok());
        assert_eq!(check(&snapshot, &rules), Err(ValidationError::EmailMalformed));
    }

    #[test]
    fn custom_minimums_are_honoured() {
        let rules = ValidationRules {
            min_name_len: 1,
            min_email_len: 8,
            ..Default::default()
        };
        assert!(check(&FormSnapshot::new("A", "B", "al@x.com"), &rules).is_ok());
        assert_eq!(
            check(&FormSnapshot::new("A", "B", "al@x.co"), &rules),
            Err(ValidationError::EmailTooShort)
        );
    }

    #[test]
    fn error_focus_targets() {
        assert_eq!(ValidationError::EmailTooShort.field(), FieldId::Email);
        assert_eq!(ValidationError::EmailMalformed.field(), FieldId::Email);
        assert_eq!(
            ValidationError::TooShortField(FieldId::Surname).field(),
            FieldId::Surname
        );
    }
}
