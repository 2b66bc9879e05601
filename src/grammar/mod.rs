//! Vocabulary of the paper query language.
//!
//! The language is a fixed sentence shape:
//!
//! ```text
//! query      := "get" limit? "papers" mention?
//! limit      := "one" | "all"
//! mention    := "that" "mention" clause (connective clause)*
//! clause     := entity_type? name
//! entity_type:= "person" | "organisation" | "work"
//! connective := "and" | "or"
//! name       := word+            (any words up to the next connective)
//! ```
//!
//! Modules:
//! - `keyword`     : The eleven grammar words.
//! - `entity_type` : Type keywords and the values stored in `entities.entity_type`.
//! - `token`       : A word of the query with its index and byte span.
//! - `tokenizer`   : Single pass split of the raw query into `Vec<Token>`.
//!
//! Parsing lives in `compiler`; this module only knows words.
//!
//! Example:
//! ```rust
//! use paperql::prelude::*;
//!
//! let tokens = tokenize("get one papers that mention work Hamlet");
//! assert!(tokens[0].is_keyword(Keyword::Get));
//! assert_eq!(EntityType::from_keyword(Keyword::Work), Some(EntityType::WorkOfArt));
//! ```

pub mod entity_type;
pub mod keyword;
pub mod token;
pub mod tokenizer;

pub use entity_type::EntityType;
pub use keyword::Keyword;
pub use token::Token;
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the most commonly used items.
pub mod prelude {
    pub use super::{EntityType, Keyword, Token, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_classify() {
        let tokens = tokenize("get all papers that mention organisation MIT");
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Mention)));
        let ty = tokens
            .iter()
            .filter_map(Token::keyword)
            .find_map(EntityType::from_keyword);
        assert_eq!(ty, Some(EntityType::Organisation));
        assert_eq!(tokens.last().map(|t| t.text), Some("MIT"));
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = tokenize("papers");
        assert!(toks[0].is_keyword(Keyword::Papers));
    }
}
