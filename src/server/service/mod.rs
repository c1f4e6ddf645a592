//! Service layer.
//!
//! Services validate input, coordinate repositories inside transactions where an
//! operation needs more than one statement, classify database errors and return the
//! outward projections from [`crate::model`].

pub mod catalog;
pub mod favorite;
pub mod user;

use crate::server::error::constraint::ConstraintError;

/// Rejects empty or whitespace-only values of required text columns
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConstraintError> {
    if value.trim().is_empty() {
        return Err(ConstraintError::MissingField(field));
    }

    Ok(())
}
