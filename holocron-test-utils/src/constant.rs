//! Test constants for fixture records.
//!
//! Placeholder values used whenever a fixture needs to fill a required column that the
//! test itself does not care about.

/// Connection string for the per-test in-memory SQLite database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Password stored on fixture users.
///
/// Not hashed, the persistence layer treats passwords as opaque strings.
pub static TEST_PASSWORD: &str = "password";

/// First name stored on fixture users.
pub static TEST_FIRST_NAME: &str = "Test";

/// Last name stored on fixture users.
pub static TEST_LAST_NAME: &str = "User";
