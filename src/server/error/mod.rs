//! Error types for the Holocron persistence layer.
//!
//! Every service returns [`Error`], which aggregates the domain specific error types and the
//! raw database error. Database errors that represent a constraint violation are classified
//! into [`ConstraintError`] on conversion so callers can tell a duplicate email or a dangling
//! reference apart from a connection failure.

pub mod config;
pub mod constraint;
pub mod favorite;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::{
    config::ConfigError, constraint::ConstraintError, favorite::FavoriteError,
};

/// Main error type for the Holocron persistence layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Constraint violation (empty required field, duplicate email, dangling reference).
    #[error(transparent)]
    ConstraintError(#[from] ConstraintError),
    /// Favorite specific error (ambiguous or missing target).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error with Holocron's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error that is not a constraint violation (query failures, connection issues).
    #[error(transparent)]
    DbErr(DbErr),
}

/// Classifies database errors.
///
/// Unique and foreign key violations become [`ConstraintError`], every other error is kept
/// as [`Error::DbErr`].
impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                ConstraintError::UniqueViolation(detail).into()
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                ConstraintError::MissingReference(detail).into()
            }
            _ => Self::DbErr(err),
        }
    }
}
