//! Boundary validation for caller input.
//!
//! The lifecycle services only reject missing or blank required fields. The
//! stricter checks here (length bounds, email syntax) belong to whatever
//! boundary receives the input; it calls [`Validate::validate`] before handing
//! the input to a service.

use crate::error::{DeskError, FieldViolation, Result};
use crate::text::non_blank;
use crate::types::{ClientInput, NewRequest, TechnicianInput};

/// Name length bounds, in characters.
pub const NAME_LENGTH: (usize, usize) = (2, 100);

/// Specialty length bounds, in characters.
pub const SPECIALTY_LENGTH: (usize, usize) = (2, 50);

/// Input that can be checked before reaching a service.
pub trait Validate {
    /// Violations when the input is used to create an entity.
    fn violations(&self) -> Vec<FieldViolation>;

    /// Violations when the input is used for a partial update: absent or
    /// blank fields are skipped.
    fn partial_violations(&self) -> Vec<FieldViolation>;

    /// Checks the input for creation.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] listing every violation.
    fn validate(&self) -> Result<()> {
        into_result(self.violations())
    }

    /// Checks the input for a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] listing every violation.
    fn validate_partial(&self) -> Result<()> {
        into_result(self.partial_violations())
    }
}

fn into_result(violations: Vec<FieldViolation>) -> Result<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DeskError::Validation(violations))
    }
}

/// Returns `true` for `local@domain.tld` shaped addresses.
///
/// ```
/// use helpdesk_core::validation::is_valid_email;
///
/// assert!(is_valid_email("juan@empresa.com"));
/// assert!(!is_valid_email("juan@empresa"));
/// assert!(!is_valid_email("juan empresa.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

struct Checker {
    violations: Vec<FieldViolation>,
    partial: bool,
}

impl Checker {
    const fn new(partial: bool) -> Self {
        Self {
            violations: Vec::new(),
            partial,
        }
    }

    /// Returns the trimmed value when it should be checked further.
    fn present<'a>(&mut self, field: &'static str, value: Option<&'a str>) -> Option<&'a str> {
        let value = non_blank(value);
        if value.is_none() && !self.partial {
            self.violations
                .push(FieldViolation::new(field, "must not be blank"));
        }
        value
    }

    fn length(&mut self, field: &'static str, value: &str, (min, max): (usize, usize)) {
        let len = value.chars().count();
        if len < min || len > max {
            self.violations.push(FieldViolation::new(
                field,
                format!("must be between {min} and {max} characters"),
            ));
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if !is_valid_email(value) {
            self.violations
                .push(FieldViolation::new(field, "is not a valid email address"));
        }
    }

    fn finish(self) -> Vec<FieldViolation> {
        self.violations
    }
}

impl ClientInput {
    fn check(&self, partial: bool) -> Vec<FieldViolation> {
        let mut checker = Checker::new(partial);
        if let Some(name) = checker.present("name", self.name.as_deref()) {
            checker.length("name", name, NAME_LENGTH);
        }
        if let Some(email) = checker.present("email", self.email.as_deref()) {
            checker.email("email", email);
        }
        checker.present("phone", self.phone.as_deref());
        checker.finish()
    }
}

impl Validate for ClientInput {
    fn violations(&self) -> Vec<FieldViolation> {
        self.check(false)
    }

    fn partial_violations(&self) -> Vec<FieldViolation> {
        self.check(true)
    }
}

impl TechnicianInput {
    fn check(&self, partial: bool) -> Vec<FieldViolation> {
        let mut checker = Checker::new(partial);
        if let Some(name) = checker.present("name", self.name.as_deref()) {
            checker.length("name", name, NAME_LENGTH);
        }
        if let Some(specialty) = checker.present("specialty", self.specialty.as_deref()) {
            checker.length("specialty", specialty, SPECIALTY_LENGTH);
        }
        checker.finish()
    }
}

impl Validate for TechnicianInput {
    fn violations(&self) -> Vec<FieldViolation> {
        self.check(false)
    }

    fn partial_violations(&self) -> Vec<FieldViolation> {
        self.check(true)
    }
}

impl Validate for NewRequest {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut checker = Checker::new(false);
        checker.present("description", Some(self.description.as_str()));
        checker.finish()
    }

    fn partial_violations(&self) -> Vec<FieldViolation> {
        self.violations()
    }
}
