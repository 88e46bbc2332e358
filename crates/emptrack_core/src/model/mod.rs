//! Staffing domain model.
//!
//! # Responsibility
//! - Define the records shared by storage, the activity filter and reports.
//! - Validate record shape before it reaches persistence.
//!
//! # Invariants
//! - Every record is identified by a stable UUID v4.
//! - Timestamps are Unix epoch milliseconds.
//! - Records are created once and never mutated after seeding.

pub mod department;
pub mod employee;
pub mod project;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure for model records.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required name is empty or whitespace only.
    BlankName { entity: &'static str },
    /// A money amount is negative, NaN or infinite.
    InvalidAmount {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },
    /// Performance rating is NaN or infinite.
    InvalidRating(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName { entity } => write!(f, "{entity} name cannot be blank"),
            Self::InvalidAmount {
                entity,
                field,
                value,
            } => write!(
                f,
                "{entity} {field} must be a finite non-negative amount, got {value}"
            ),
            Self::InvalidRating(value) => {
                write!(f, "performance rating must be finite, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_name(entity: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName { entity });
    }
    Ok(())
}

pub(crate) fn validate_amount(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount {
            entity,
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_amount, validate_name, ValidationError};

    #[test]
    fn blank_names_are_rejected() {
        let err = validate_name("project", "  \t").unwrap_err();
        assert_eq!(err, ValidationError::BlankName { entity: "project" });
        assert!(validate_name("project", "AI Chatbot").is_ok());
    }

    #[test]
    fn amounts_must_be_finite_and_non_negative() {
        assert!(validate_amount("employee", "salary", 0.0).is_ok());
        assert!(validate_amount("employee", "salary", -1.0).is_err());
        assert!(validate_amount("project", "budget", f64::NAN).is_err());
        assert!(validate_amount("project", "budget", f64::INFINITY).is_err());
    }
}
