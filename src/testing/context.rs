use crate::testing::*;
use crate::{EntityType, Result};
use sqlx::{PgPool, Postgres};
use test_context::AsyncTestContext;
pub use test_context::test_context;

/// Tables the compiler queries. Entity types hold the recogniser labels.
const SCHEMA: [&str; 3] = [
    "CREATE TABLE papers (
        paper_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        paper_name TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE entities (
        entity_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        entity_name TEXT NOT NULL,
        entity_type TEXT NOT NULL CHECK (entity_type IN ('PERSON', 'ORG', 'WORK_OF_ART')),
        UNIQUE (entity_name, entity_type)
    )",
    "CREATE TABLE papers_have_entities (
        entity_id BIGINT REFERENCES entities (entity_id),
        paper_id BIGINT REFERENCES papers (paper_id),
        count INTEGER DEFAULT 1,
        PRIMARY KEY (entity_id, paper_id)
    )",
];

/// A fresh database with the papers schema, dropped on teardown.
pub struct IsolatedIntegrationTest {
    pub pool: PgPool,
    pub database: String,
    pub is_teardown: bool,
}

impl IsolatedIntegrationTest {
    async fn random_database<'c, E: sqlx::Executor<'c, Database = Postgres>>(exec: E) -> String {
        use rand::Rng;
        let db = format!(
            "test_db_{}",
            rand::rng()
                .sample_iter(&rand::distr::Alphanumeric)
                .take(8)
                .map(char::from)
                .collect::<String>()
                .to_lowercase()
        );

        sqlx::query(sqlx::AssertSqlSafe(format!("CREATE DATABASE {db}")))
            .execute(exec)
            .await
            .expect("Failed to create test database");
        db
    }

    async fn create_schema(pool: &PgPool) {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(pool)
                .await
                .expect("Failed to create papers schema");
        }
    }

    /// Insert a paper and link it to each entity, creating entities on first use.
    pub async fn insert_paper(&self, name: &str, entities: &[(EntityType, &str)]) -> Result<i64> {
        let paper_id: i64 =
            sqlx::query_scalar("INSERT INTO papers (paper_name) VALUES ($1) RETURNING paper_id")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        for (entity_type, entity_name) in entities {
            let entity_id: i64 = sqlx::query_scalar(
                "INSERT INTO entities (entity_name, entity_type) VALUES ($1, $2)
                 ON CONFLICT (entity_name, entity_type) DO UPDATE SET entity_name = EXCLUDED.entity_name
                 RETURNING entity_id",
            )
            .bind(*entity_name)
            .bind(entity_type.stored())
            .fetch_one(&self.pool)
            .await?;

            sqlx::query(
                "INSERT INTO papers_have_entities (entity_id, paper_id) VALUES ($1, $2)
                 ON CONFLICT (entity_id, paper_id) DO UPDATE SET count = papers_have_entities.count + 1",
            )
            .bind(entity_id)
            .bind(paper_id)
            .execute(&self.pool)
            .await?;
        }
        Ok(paper_id)
    }
}

impl AsyncTestContext for IsolatedIntegrationTest {
    async fn setup() -> Self {
        crate::testing::common_init();
        let postgres_pool = pool("postgres").await;
        let database = Self::random_database(&postgres_pool).await;
        let pool = pool(&database).await;
        Self::create_schema(&pool).await;

        Self {
            pool,
            database,
            is_teardown: true,
        }
    }

    async fn teardown(self) {
        if !self.is_teardown {
            return;
        }

        self.pool.close().await;

        let pool = pool("postgres").await;
        sqlx::query(sqlx::AssertSqlSafe(format!(
            "DROP DATABASE {}",
            self.database
        )))
        .execute(&pool)
        .await
        .expect("Failed to drop test database");
    }
}
