use itertools::Itertools as _;
use paperql::{Config, PaperSearch, Result, compile};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: paperql get {one|all} papers [that mention [person|organisation|work] NAME [and|or ...]]";

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let config = Config::from_env()?;

    let query = std::env::args().skip(1).join(" ");
    if query.is_empty() {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let compiled = compile(&query)?;
    println!("{}", compiled.sql());
    for (i, param) in compiled.params().iter().enumerate() {
        println!("  ${} = {param:?}", i + 1);
    }

    let Some(url) = config.database_url.as_deref() else {
        return Ok(());
    };
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await?;
    let search = PaperSearch::with_capacity(pool, config.cache_capacity);
    let papers = search.search(&query).await?;
    info!("{} papers matched", papers.len());
    for paper in papers {
        println!("{}\t{}", paper.paper_id, paper.paper_name);
    }
    Ok(())
}
