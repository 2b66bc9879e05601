//! Runs compiled paper queries against PostgreSQL.
use crate::*;
use itertools::Itertools as _;
use moka::future::Cache;
use sqlx::{AssertSqlSafe, PgPool, Row as _, postgres::PgRow};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRow {
    pub paper_id: i64,
    pub paper_name: String,
}

impl PaperRow {
    fn from_row(row: &PgRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            paper_id: row.try_get("paper_id")?,
            paper_name: row.try_get("paper_name")?,
        })
    }
}

/// Query compiler and executor over a shared pool.
///
/// Compiled queries are cached by their input sentence; compilation is pure,
/// so a cached entry never goes stale.
pub struct PaperSearch {
    pool: PgPool,
    cache: Cache<String, Arc<CompiledQuery>>,
}

impl PaperSearch {
    pub fn new(pool: PgPool) -> Self {
        Self::with_capacity(pool, config().cache_capacity)
    }

    pub fn with_capacity(pool: PgPool, capacity: u64) -> Self {
        Self {
            pool,
            cache: Cache::new(capacity),
        }
    }

    pub async fn compile(&self, query: &str) -> Result<Arc<CompiledQuery>> {
        self.cache
            .try_get_with(query.to_string(), async { compile(query).map(Arc::new) })
            .await
            .map_err(|e: Arc<CompileError>| Error::Compile((*e).clone()))
    }

    /// Execute with every entity name bound as a parameter.
    pub async fn execute(&self, query: &CompiledQuery) -> Result<Vec<PaperRow>> {
        let mut statement = sqlx::query(AssertSqlSafe(query.sql().to_owned()));
        for param in query.params() {
            statement = statement.bind(param.clone());
        }
        let rows = statement.fetch_all(&self.pool).await?;
        let papers = rows
            .iter()
            .map(PaperRow::from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(papers)
    }

    /// Compile and run a query sentence. A paper matched through several
    /// entities is returned once, at its first position.
    pub async fn search(&self, query: &str) -> Result<Vec<PaperRow>> {
        let compiled = self.compile(query).await?;
        let papers = self.execute(&compiled).await?;
        debug!("{} rows for {query:?}", papers.len());
        Ok(papers.into_iter().unique_by(|p| p.paper_id).collect())
    }

    /// Run a structured request. When the full name finds nothing, each
    /// longer word of the name is tried on its own and the hits are merged.
    pub async fn search_request(&self, request: &SearchRequest) -> Result<Vec<PaperRow>> {
        let limit = request.limit()?;
        let mut papers = self.search(&request.to_query_string()?).await?;

        if papers.is_empty() {
            for part in request.name_parts() {
                debug!("No exact match, trying name part {:?}", part.entity_name);
                papers.extend(self.search(&part.to_query_string()?).await?);
            }
        }

        let mut papers = papers
            .into_iter()
            .unique_by(|p| p.paper_id)
            .collect::<Vec<_>>();
        if let Some(rows) = limit.rows() {
            papers.truncate(rows as usize);
        }
        info!("Found {} papers for {request:?}", papers.len());
        Ok(papers)
    }
}
