//! Booking and registration form state.
//!
//! ## Usage
//!
//! Collect contact details, validate them field by field, and simulate the
//! submission round trip the landing page performs, including the transient
//! success notice shown afterwards.
use std::{
    ops::RangeInclusive,
    time::{Duration, Instant},
};

use thiserror::Error;
use tracing::debug;

/// Simulated latency of a submission round trip.
const SUBMIT_LATENCY: Duration = Duration::from_millis(1_500);
/// How long the success notice stays up before the form returns to idle.
const SUCCESS_NOTICE_DURATION: Duration = Duration::from_millis(5_000);
/// Accepted phone number lengths, in digits.
const PHONE_DIGITS: RangeInclusive<usize> = 9..=10;

/// Validation applied to a field on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; only the required check applies.
    FreeText,
    /// Local phone number, digits only.
    Phone,
    /// Email address of the `local@domain.tld` shape.
    Email,
}

/// Why a field value was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("required field")]
    Required,
    /// The value is not an acceptable phone number.
    #[error("invalid phone number")]
    InvalidPhone,
    /// The value is not an acceptable email address.
    #[error("invalid email address")]
    InvalidEmail,
}

/// Definition of a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable key used to read and write the field.
    pub key: &'static str,
    /// Label shown next to the field.
    pub label: &'static str,
    /// Validation applied on submit.
    pub kind: FieldKind,
    /// Whether an empty value is rejected.
    pub required: bool,
}

impl FieldSpec {
    /// A required free-text field.
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::FreeText,
            required: true,
        }
    }

    /// A required phone field.
    pub const fn phone(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Phone,
            required: true,
        }
    }

    /// A required email field.
    pub const fn email(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Email,
            required: true,
        }
    }

    /// Marks the field as optional.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        }
        match self.kind {
            FieldKind::FreeText => Ok(()),
            FieldKind::Phone if is_valid_phone(value) => Ok(()),
            FieldKind::Phone => Err(ValidationError::InvalidPhone),
            FieldKind::Email if is_valid_email(value) => Ok(()),
            FieldKind::Email => Err(ValidationError::InvalidEmail),
        }
    }
}

fn is_valid_phone(value: &str) -> bool {
    PHONE_DIGITS.contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"._%+-".contains(&b));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-');
    let tld_ok = tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

/// Submission lifecycle of a form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Accepting input.
    #[default]
    Idle,
    /// Simulated round trip in flight.
    Submitting,
    /// Success notice shown.
    Succeeded,
}

/// Field values plus the submission lifecycle of one form instance.
///
/// `submit` validates every field first; invalid input keeps the form idle
/// with per-field errors set. Accepted submissions move through
/// `Submitting` and `Succeeded` on subsequent `tick` calls; there is no
/// backend, the round trip is a pair of deadlines on an explicit clock.
#[derive(Clone, Debug)]
pub struct FormController {
    fields: Vec<FieldSpec>,
    values: Vec<String>,
    errors: Vec<Option<ValidationError>>,
    phase: SubmitPhase,
    deadline: Option<Instant>,
}

impl FormController {
    /// Creates a form over the given field set.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let len = fields.len();
        Self {
            fields,
            values: vec![String::new(); len],
            errors: vec![None; len],
            phase: SubmitPhase::Idle,
            deadline: None,
        }
    }

    /// The booking form of the landing page: name, phone, email and a
    /// message, all required.
    pub fn booking() -> Self {
        Self::new(vec![
            FieldSpec::text("name", "full name"),
            FieldSpec::phone("phone", "phone number"),
            FieldSpec::email("email", "email address"),
            FieldSpec::text("message", "message"),
        ])
    }

    /// The event registration form: name, email and phone.
    pub fn registration() -> Self {
        Self::new(vec![
            FieldSpec::text("name", "full name"),
            FieldSpec::email("email", "email address"),
            FieldSpec::phone("phone", "phone number"),
        ])
    }

    /// The field definitions, in display order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Current submission phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Current value of the field with `key`, or an empty string for an
    /// unknown key.
    pub fn value(&self, key: &str) -> &str {
        self.index_of(key)
            .map(|index| self.values[index].as_str())
            .unwrap_or_default()
    }

    /// Writes a field value and clears the field's stale error. Ignored while
    /// a submission is in flight; unknown keys are ignored.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if self.phase == SubmitPhase::Submitting {
            return;
        }
        if let Some(index) = self.index_of(key) {
            self.values[index] = value.into();
            self.errors[index] = None;
        }
    }

    /// The validation error of the field with `key`, if any.
    pub fn error(&self, key: &str) -> Option<ValidationError> {
        self.index_of(key).and_then(|index| self.errors[index])
    }

    /// Whether any field currently carries an error.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Re-runs validation over every field, recording per-field errors.
    /// Returns whether the form is acceptable.
    pub fn validate(&mut self) -> bool {
        for (index, field) in self.fields.iter().enumerate() {
            self.errors[index] = field.validate(&self.values[index]).err();
        }
        !self.has_errors()
    }

    /// Starts the simulated submission round trip.
    ///
    /// Returns `false` when the form is not idle or validation rejects the
    /// input; in the latter case the per-field errors describe why.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        if !self.validate() {
            debug!("form submission rejected by validation");
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.deadline = Some(now + SUBMIT_LATENCY);
        debug!("form submission started");
        true
    }

    /// Advances the simulated round trip: completes an in-flight submission
    /// once its latency elapsed (resetting the field values, as the page
    /// does), then retires the success notice after its display window.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        match self.phase {
            SubmitPhase::Submitting => {
                for value in &mut self.values {
                    value.clear();
                }
                self.phase = SubmitPhase::Succeeded;
                self.deadline = Some(deadline + SUCCESS_NOTICE_DURATION);
                debug!("form submission succeeded");
            }
            SubmitPhase::Succeeded => {
                self.phase = SubmitPhase::Idle;
                self.deadline = None;
            }
            SubmitPhase::Idle => self.deadline = None,
        }
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_booking() -> FormController {
        let mut form = FormController::booking();
        form.set_value("name", "Rachel Levi");
        form.set_value("phone", "0521234567");
        form.set_value("email", "rachel@example.co.il");
        form.set_value("message", "Looking for a signed copy.");
        form
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let mut form = FormController::booking();
        assert!(!form.submit(Instant::now()));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.error("name"), Some(ValidationError::Required));
        assert_eq!(form.error("message"), Some(ValidationError::Required));
    }

    #[test]
    fn phone_numbers_must_be_nine_or_ten_digits() {
        assert!(is_valid_phone("031234567"));
        assert!(is_valid_phone("0521234567"));
        assert!(!is_valid_phone("12345678"));
        assert!(!is_valid_phone("05212345678"));
        assert!(!is_valid_phone("052-123456"));
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(is_valid_email("info@hebrewbooks.co.il"));
        assert!(is_valid_email("first.last+tag@example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@host"));
        assert!(!is_valid_email("user@host.1x"));
    }

    #[test]
    fn invalid_field_error_clears_on_edit() {
        let mut form = filled_booking();
        form.set_value("email", "not-an-address");
        assert!(!form.submit(Instant::now()));
        assert_eq!(form.error("email"), Some(ValidationError::InvalidEmail));

        form.set_value("email", "rachel@example.co.il");
        assert_eq!(form.error("email"), None);
        assert!(form.submit(Instant::now()));
    }

    #[test]
    fn submission_walks_through_success_and_back_to_idle() {
        let mut form = filled_booking();
        let start = Instant::now();
        assert!(form.submit(start));
        assert_eq!(form.phase(), SubmitPhase::Submitting);

        form.tick(start + Duration::from_millis(1_499));
        assert_eq!(form.phase(), SubmitPhase::Submitting);

        form.tick(start + Duration::from_millis(1_500));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert_eq!(form.value("name"), "");

        form.tick(start + Duration::from_millis(6_499));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        form.tick(start + Duration::from_millis(6_500));
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn resubmitting_mid_flight_is_refused() {
        let mut form = filled_booking();
        let start = Instant::now();
        assert!(form.submit(start));
        assert!(!form.submit(start + Duration::from_millis(100)));
        form.set_value("name", "ignored while submitting");
        assert_eq!(form.value("name"), "Rachel Levi");
    }

    #[test]
    fn optional_fields_accept_empty_values() {
        let mut form = FormController::new(vec![
            FieldSpec::text("name", "full name"),
            FieldSpec::phone("phone", "phone number").optional(),
        ]);
        form.set_value("name", "Dana");
        assert!(form.submit(Instant::now()));
    }
}
