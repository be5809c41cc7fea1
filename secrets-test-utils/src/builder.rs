//! Declarative test builder.
//!
//! The builder pattern allows chaining configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Database fixtures to insert
    password_users: Vec<(String, String)>, // (username, password_hash)
    google_users: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    google_login_endpoints: Vec<(String, usize)>, // (google_id, expected_logins)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            password_users: Vec::new(),
            google_users: Vec::new(),
            mock_builders: Vec::new(),
            google_login_endpoints: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use secrets_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), secrets_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(SecretsUser).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a password user. Requires `with_user_tables`.
    pub fn with_password_user(
        mut self,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        self.password_users
            .push((username.into(), password_hash.into()));
        self
    }

    /// Insert a user linked to a Google account. Requires `with_user_tables`.
    pub fn with_google_user(mut self, google_id: impl Into<String>) -> Self {
        self.google_users.push(google_id.into());
        self
    }

    /// Add mock token & userinfo endpoints for `expected_logins` Google logins as `google_id`.
    pub fn with_google_login_endpoints(
        mut self,
        google_id: impl Into<String>,
        expected_logins: usize,
    ) -> Self {
        self.google_login_endpoints
            .push((google_id.into(), expected_logins));
        self
    }

    /// Add a custom mock endpoint with full control.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables if specified, then custom tables)
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then Google login endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::SecretsUser));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (username, password_hash) in self.password_users {
            setup
                .user()
                .insert_password_user(&username, &password_hash)
                .await?;
        }

        for google_id in self.google_users {
            setup.user().insert_google_user(&google_id).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints go first so mockito matches them before the shortcuts when a test
        // mocks the same path twice (e.g. error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (google_id, expected) in self.google_login_endpoints {
            mocks.extend(setup.google().create_login_endpoints(&google_id, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
