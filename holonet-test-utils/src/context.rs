//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test execution. The
//! context owns an in-memory SQLite database with the requested tables and fixtures in place.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// test.user().insert_mock_user("luke").await?;
/// test.planet().insert_mock_planet("Tatooine").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holonet crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // In integration tests
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// Executes CREATE TABLE statements in order, so referenced tables must come first.
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
