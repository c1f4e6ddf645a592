//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database with foreign keys enforced, so cascading deletes and
//! constraint violations behave the way they do against the production database.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_favorite_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let user = test.user().insert_mock_user("a@a.com").await?;
/// let planet = test.catalog().insert_mock_planet("Tatooine").await?;
/// test.favorite().insert_planet_favorite(user.id, planet.id).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with no tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// Executes CREATE TABLE statements in order, referenced tables must come before the
    /// tables referencing them.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
