use thiserror::Error;

/// Constraint violations reported by the database or caught before a write.
#[derive(Error, Debug)]
pub enum ConstraintError {
    /// A required text column was given an empty value.
    #[error("Required field `{0}` must not be empty")]
    MissingField(&'static str),
    /// Another user already registered this email.
    #[error("Email {0:?} is already registered to another user")]
    EmailTaken(String),
    /// A unique column collided with an existing row.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    /// A foreign key referenced a row that does not exist.
    #[error("Referenced record does not exist: {0}")]
    MissingReference(String),
}
