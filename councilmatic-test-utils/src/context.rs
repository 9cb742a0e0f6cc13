//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment backed by an in-memory SQLite database.
///
/// ```ignore
/// let test = TestBuilder::new().with_member_tables().build().await?;
///
/// let member = test.member().insert_member("Mjumbe Poe").await?;
/// test.member().insert_alias(member.id, "Councilmember Poe").await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// Keeps this crate free of a dependency on the main crate's `AppState`.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Connects to a fresh in-memory SQLite database with no tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Executes the provided CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Creates a [`TestContext`] with tables for the listed entities.
///
/// Evaluates to `Result<TestContext, TestError>`; with no arguments the database is empty,
/// which is useful for asserting that repositories surface missing-table errors.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let context = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            context.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(context)
        }.await
    }};
}
