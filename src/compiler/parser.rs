//! Recursive descent over the token slice, one function per production.
//!
//! Every decision looks at a single token. The cursor never moves back, so a
//! parse is one pass over the tokens.
use crate::compiler::{
    ast::{Connective, EntityClause, Limit, Mention, PaperQuery},
    compile_error::CompileError,
    cursor::TokenCursor,
};
use crate::grammar::{entity_type::EntityType, keyword::Keyword, token::Token};
use crate::trace;
use itertools::Itertools as _;

/// Parse a whole query. Tokens left over after `papers` must start a mention.
pub fn parse(tokens: &[Token<'_>]) -> Result<PaperQuery, CompileError> {
    let mut cursor = TokenCursor::new(tokens);
    cursor.expect(Keyword::Get)?;
    let limit = limit(&mut cursor);
    cursor.expect(Keyword::Papers)?;
    let mention = if cursor.is_exhausted() {
        None
    } else {
        Some(mention(&mut cursor)?)
    };
    trace!(
        "Parsed {} tokens: limit {limit:?}, {} entity clauses",
        tokens.len(),
        mention.as_ref().map_or(0, Mention::len)
    );
    Ok(PaperQuery { limit, mention })
}

/// `one` | `all` | nothing. An unrelated word is left for the next production.
fn limit(cursor: &mut TokenCursor<'_, '_>) -> Limit {
    if cursor.eat(Keyword::One) {
        Limit::One
    } else if cursor.eat(Keyword::All) {
        Limit::All
    } else {
        Limit::Unspecified
    }
}

/// `that mention clause (connective clause)*`
fn mention(cursor: &mut TokenCursor<'_, '_>) -> Result<Mention, CompileError> {
    cursor.expect(Keyword::That)?;
    cursor.expect(Keyword::Mention)?;
    let first = entity_clause(cursor)?;
    let mut rest = Vec::new();
    while let Some((op, at)) = connective(cursor) {
        if cursor.is_exhausted() {
            return Err(CompileError::DanglingConnective {
                connective: op.keyword(),
                position: at,
            });
        }
        rest.push((op, entity_clause(cursor)?));
    }
    Ok(Mention { first, rest })
}

/// Consume `and` / `or`, returning it with its token index.
fn connective(cursor: &mut TokenCursor<'_, '_>) -> Option<(Connective, usize)> {
    let at = cursor.position();
    if cursor.eat(Keyword::And) {
        Some((Connective::And, at))
    } else if cursor.eat(Keyword::Or) {
        Some((Connective::Or, at))
    } else {
        None
    }
}

/// `entity_type? name`
fn entity_clause(cursor: &mut TokenCursor<'_, '_>) -> Result<EntityClause, CompileError> {
    let entity_type = entity_type(cursor);
    let position = cursor.position();
    let name = name(cursor);
    if name.trim().is_empty() {
        return Err(CompileError::EmptyEntityName { position });
    }
    Ok(EntityClause { entity_type, name })
}

/// At most one type keyword, tried in `EntityType::MAPPING` order.
fn entity_type(cursor: &mut TokenCursor<'_, '_>) -> Option<EntityType> {
    EntityType::MAPPING
        .iter()
        .find(|(kw, _)| cursor.eat(*kw))
        .map(|(_, ty)| *ty)
}

/// Every word up to the next connective, joined by single spaces.
fn name(cursor: &mut TokenCursor<'_, '_>) -> String {
    let mut words = Vec::new();
    while let Some(token) = cursor.peek() {
        if token.is_connective() {
            break;
        }
        words.push(token.text);
        cursor.advance();
    }
    words.into_iter().join(" ")
}
