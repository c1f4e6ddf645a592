//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture records. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_favorite_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,      // emails
    characters: Vec<String>, // names
    planets: Vec<String>,    // names
    vehicles: Vec<String>,   // names
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_favorite_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Add every table of the favorites schema to the test database.
    ///
    /// Creates User, Character, Planet, Vehicle and Favorite tables, including the
    /// cascading foreign keys declared on the Favorite entity.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_favorite_tables(mut self) -> Self {
        self.include_favorite_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Vehicle)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock user into database.
    ///
    /// # Arguments
    /// - `email` - Unique email of the user, other columns use test constants
    pub fn with_mock_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert mock character into database.
    pub fn with_mock_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Insert mock planet into database.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert mock vehicle into database.
    pub fn with_mock_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (favorite schema tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, characters, planets, vehicles)
    ///
    /// Fixtures are inserted in the order they were queued, so the first mock user
    /// receives ID 1, the second ID 2, and so on.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_favorite_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_mock_user(&email).await?;
        }

        for name in self.characters {
            setup.catalog().insert_mock_character(&name).await?;
        }

        for name in self.planets {
            setup.catalog().insert_mock_planet(&name).await?;
        }

        for name in self.vehicles {
            setup.catalog().insert_mock_vehicle(&name).await?;
        }

        Ok(setup)
    }
}
