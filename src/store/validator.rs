//! Checks compiled queries before they are executed.
use crate::*;
use sqlparser::{dialect::PostgreSqlDialect, parser::Parser};
use sqlx::{AssertSqlSafe, Executor as _, PgPool, SqlSafeStr as _, postgres::PgStatement};

static POSTGRES: PostgreSqlDialect = PostgreSqlDialect {};

pub struct Validator {
    pool: PgPool,
}

impl Validator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Offline check: the text parses as exactly one PostgreSQL statement.
    pub fn syntax(query: &CompiledQuery) -> Result {
        let statements = Parser::parse_sql(&POSTGRES, query.sql())?;
        if statements.len() != 1 {
            return Err(Error::Internal(format!(
                "Expected one statement, parsed {}: {}",
                statements.len(),
                query.sql()
            )));
        }
        Ok(())
    }

    /// Prepare the query server-side, which also resolves tables and columns.
    pub async fn prepare(&self, query: &CompiledQuery) -> Result<PgStatement> {
        let sql = AssertSqlSafe(query.sql().to_owned()).into_sql_str();
        self.pool.prepare(sql).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_queries_pass_syntax_check() {
        for query in [
            "get all papers",
            "get one papers that mention person Jane Doe",
            "get all papers that mention work Hamlet or organisation Globe and Shakespeare",
        ] {
            let compiled = compile(query).expect("compiles");
            assert!(Validator::syntax(&compiled).is_ok(), "{compiled}");
        }
    }

    #[test]
    fn injected_text_stays_in_params() {
        let compiled = compile("get all papers that mention x'); SELECT 1; --").expect("compiles");
        assert!(Validator::syntax(&compiled).is_ok(), "{compiled}");
        assert_eq!(compiled.params(), ["x'); SELECT 1; --"]);
    }

    #[test]
    fn rejects_multiple_statements() {
        let mut clauses = Clauses::default();
        clauses.select.push("*".into());
        clauses.from.push("papers; SELECT * FROM entities".into());
        let result = Validator::syntax(&CompiledQuery::from(clauses));
        assert!(matches!(result, Err(Error::Internal(_))), "{result:?}");
    }

    #[test]
    fn rejects_unparseable_text() {
        let mut clauses = Clauses::default();
        clauses.select.push("*".into());
        clauses.from.push("papers WHERE".into());
        let result = Validator::syntax(&CompiledQuery::from(clauses));
        assert!(matches!(result, Err(Error::InvalidQuery(_))), "{result:?}");
    }
}
