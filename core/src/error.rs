//! Error types for store and lifecycle operations.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for help desk operations.
pub type Result<T> = std::result::Result<T, DeskError>;

/// Error taxonomy for the help desk core.
///
/// None of these failures are transient: the core performs no I/O, so nothing
/// is retried internally. The boundary layer decides how each variant is shown
/// to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeskError {
    // ═══════════════════════════════════════════════════════════
    // Caller Errors
    // ═══════════════════════════════════════════════════════════

    /// A required input was missing or blank.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input
        reason: String,
    },

    /// Boundary validation rejected one or more fields.
    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    // ═══════════════════════════════════════════════════════════
    // Lookup Errors
    // ═══════════════════════════════════════════════════════════

    /// No entity exists with the referenced identifier.
    #[error("{kind} not found with id {id}")]
    NotFound {
        /// Entity kind (`Client`, `Technician`, `Request`)
        kind: &'static str,
        /// The identifier that was looked up
        id: u64,
    },

    /// An explicit identifier supplied on create is already in use.
    #[error("{kind} already exists with id {id}")]
    DuplicateIdentifier {
        /// Entity kind
        kind: &'static str,
        /// The conflicting identifier
        id: u64,
    },

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════

    /// A store lock was poisoned by a panicking writer.
    #[error("{kind} store lock poisoned")]
    LockPoisoned {
        /// Entity kind of the affected store
        kind: &'static str,
    },
}

impl DeskError {
    /// Shorthand for [`DeskError::InvalidArgument`].
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error is due to invalid caller input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use helpdesk_core::DeskError;
    /// assert!(DeskError::invalid("name is required").is_user_error());
    /// assert!(!DeskError::LockPoisoned { kind: "Client" }.is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::Validation(_) | Self::DuplicateIdentifier { .. }
        )
    }

    /// Returns `true` if the referenced entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A single field rejected by boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as exposed to callers
    pub field: &'static str,
    /// Human-readable message
    pub message: String,
}

impl FieldViolation {
    /// Creates a new violation for `field`.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
