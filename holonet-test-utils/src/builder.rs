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
/// mock records. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    planets: Vec<String>,
    characters: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every Holonet table to the test database.
    ///
    /// Creates the user, planet, character and favorite tables, in that order so that the
    /// favorite foreign key can reference the user table.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Character)
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

    /// Insert a mock user into the database.
    ///
    /// Users are inserted in the order they are queued, the first one gets ID 1.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a mock planet into the database.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a mock character into the database.
    pub fn with_mock_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (all tables if specified, then custom tables)
    /// 2. Inserts users, planets, then characters
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_mock_user(&username).await?;
        }

        for name in self.planets {
            setup.planet().insert_mock_planet(&name).await?;
        }

        for name in self.characters {
            setup.character().insert_mock_character(&name).await?;
        }

        Ok(setup)
    }
}
