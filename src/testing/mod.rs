#![cfg(test)]
crate::reexport!(container);
crate::reexport!(context);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod isolated_integration_tests {
    use super::{super::*, *};

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn creates_papers_schema(ctx: &mut IsolatedIntegrationTest) -> Result {
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name::text FROM information_schema.tables
             WHERE table_schema = 'public' ORDER BY table_name",
        )
        .fetch_all(&ctx.pool)
        .await?;
        assert_eq!(tables, ["entities", "papers", "papers_have_entities"]);
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn repeated_mentions_bump_count(ctx: &mut IsolatedIntegrationTest) -> Result {
        let paper = ctx
            .insert_paper(
                "On Computable Numbers",
                &[(EntityType::Person, "Alan Turing"), (EntityType::Person, "Alan Turing")],
            )
            .await?;
        let count: i32 = sqlx::query_scalar("SELECT count FROM papers_have_entities WHERE paper_id = $1")
            .bind(paper)
            .fetch_one(&ctx.pool)
            .await?;
        assert_eq!(count, 2);
        Ok(())
    }
}
