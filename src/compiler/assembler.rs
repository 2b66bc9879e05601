use crate::compiler::{
    ast::{EntityClause, PaperQuery},
    clauses::{Clauses, Placeholder},
};

pub const PAPERS_TABLE: &str = "papers";
pub const PAPERS_TO_JUNCTION: &str =
    "INNER JOIN papers_have_entities ON papers_have_entities.paper_id = papers.paper_id";
pub const JUNCTION_TO_ENTITIES: &str =
    "INNER JOIN entities ON papers_have_entities.entity_id = entities.entity_id";

/// Query text plus the values bound to its placeholders, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    sql: String,
    params: Vec<String>,
}

impl CompiledQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.params)
    }
}

impl From<Clauses> for CompiledQuery {
    fn from(clauses: Clauses) -> Self {
        let sql = clauses.render();
        Self {
            sql,
            params: clauses.into_params(),
        }
    }
}

impl std::fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- params: {:?}", self.sql, self.params)
    }
}

/// Turn a parsed query into SQL over `papers`, `papers_have_entities` and `entities`.
pub fn assemble(query: &PaperQuery, placeholder: Placeholder) -> CompiledQuery {
    let mut clauses = Clauses::new(placeholder);
    clauses.select.push("*".into());
    clauses.from.push(PAPERS_TABLE.into());

    if let Some(mention) = &query.mention {
        clauses.from.push(PAPERS_TO_JUNCTION.into());
        clauses.from.push(JUNCTION_TO_ENTITIES.into());
        predicate(&mut clauses, &mention.first);
        for (op, clause) in &mention.rest {
            clauses.r#where.push(op.sql().into());
            predicate(&mut clauses, clause);
        }
    }

    if let Some(rows) = query.limit.rows() {
        clauses.limit.push(format!("LIMIT {rows}"));
    }

    clauses.into()
}

/// `(<type-test> AND <name-test>)`, or `(<name-test>)` for an untyped clause.
fn predicate(clauses: &mut Clauses, clause: &EntityClause) {
    let name_test = format!("entities.entity_name={}", clauses.bind(clause.name.as_str()));
    let fragment = match clause.entity_type {
        Some(ty) => format!("(entities.entity_type='{}' AND {name_test})", ty.stored()),
        None => format!("({name_test})"),
    };
    clauses.r#where.push(fragment);
}
