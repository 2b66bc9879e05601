use crate::grammar::keyword::Keyword;

/// Reasons a query string does not compile.
///
/// Positions are token indices as produced by `tokenize`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("Malformed query: expected `{expected}` at token {position}, found {}", describe(.found))]
    MalformedQuery {
        expected: Keyword,
        position: usize,
        found: Option<String>,
    },

    #[error("Empty entity name at token {position}")]
    EmptyEntityName { position: usize },

    #[error("Dangling `{connective}` at token {position}: no entity clause follows")]
    DanglingConnective { connective: Keyword, position: usize },
}

fn describe(found: &Option<String>) -> String {
    match found {
        Some(word) => format!("`{word}`"),
        None => "end of input".to_string(),
    }
}
