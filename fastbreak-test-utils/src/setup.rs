use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Mock provider server, in-memory database, and a provider client wired to
/// the mock server.
pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub provider: fastbreak::provider::Client,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let provider = fastbreak::provider::Client::builder()
            .base_url(&mock_server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        // Tests create partial schemas and rows that reference teams the
        // fixtures never insert, so foreign keys must stay unenforced.
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.map_sqlx_sqlite_opts(|sqlite_opts| sqlite_opts.foreign_keys(false));
        let db = Database::connect(opts).await?;

        Ok(TestSetup {
            server: mock_server,
            db,
            provider,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Setup with every table the sync service touches.
#[macro_export]
macro_rules! test_setup_with_league_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::TeamStats),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::PlayerStats),
                schema.create_table_from_entity(entity::prelude::Game),
                schema.create_table_from_entity(entity::prelude::RefreshTracker),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
