//! Parsed form of a paper query.
//!
//! The parser produces these values; the assembler turns them into clause
//! fragments. Nothing here knows about SQL text except `Connective::sql`.
use crate::grammar::{entity_type::EntityType, keyword::Keyword};

/// How many papers the query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    /// `get one …`
    One,
    /// `get all …`
    All,
    /// Neither `one` nor `all` was written. Behaves like `All`.
    #[default]
    Unspecified,
}

impl Limit {
    /// Row cap to apply, if any.
    pub fn rows(self) -> Option<u32> {
        match self {
            Limit::One => Some(1),
            Limit::All | Limit::Unspecified => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub const fn keyword(self) -> Keyword {
        match self {
            Connective::And => Keyword::And,
            Connective::Or => Keyword::Or,
        }
    }

    pub const fn sql(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// "entity of type T named N". `entity_type` is `None` when the clause has
/// no type keyword, in which case only the name is tested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityClause {
    pub entity_type: Option<EntityType>,
    pub name: String,
}

impl EntityClause {
    pub fn new(entity_type: Option<EntityType>, name: impl Into<String>) -> Self {
        Self {
            entity_type,
            name: name.into(),
        }
    }
}

/// The `that mention …` part: at least one clause, then connective/clause pairs
/// in the order written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub first: EntityClause,
    pub rest: Vec<(Connective, EntityClause)>,
}

impl Mention {
    pub fn clauses(&self) -> impl Iterator<Item = &EntityClause> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, clause)| clause))
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; a mention has at least one clause.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaperQuery {
    pub limit: Limit,
    pub mention: Option<Mention>,
}
