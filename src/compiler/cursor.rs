use crate::compiler::compile_error::CompileError;
use crate::grammar::{keyword::Keyword, token::Token};

/// Read position over a token slice. Only ever moves forward.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    position: usize,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.position)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn advance(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consume the current token if it is `kw`.
    pub fn eat(&mut self, kw: Keyword) -> bool {
        if self.peek().is_some_and(|t| t.is_keyword(kw)) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume `kw` or fail with `MalformedQuery` at the current position.
    pub fn expect(&mut self, kw: Keyword) -> Result<(), CompileError> {
        if self.eat(kw) {
            return Ok(());
        }
        Err(CompileError::MalformedQuery {
            expected: kw,
            position: self.position,
            found: self.peek().map(|t| t.text.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::tokenizer::tokenize;

    #[test]
    fn eat_only_moves_on_match() {
        let tokens = tokenize("get one");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(!cursor.eat(Keyword::One));
        assert_eq!(cursor.position(), 0);
        assert!(cursor.eat(Keyword::Get));
        assert!(cursor.eat(Keyword::One));
        assert!(cursor.is_exhausted());
        assert!(cursor.advance().is_none());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn expect_reports_position_and_found_word() {
        let tokens = tokenize("get many papers");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.expect(Keyword::Get).expect("leading get");
        assert_eq!(
            cursor.expect(Keyword::Papers),
            Err(CompileError::MalformedQuery {
                expected: Keyword::Papers,
                position: 1,
                found: Some("many".into()),
            })
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn expect_at_end_reports_no_word() {
        let tokens = tokenize("get");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance();
        assert_eq!(
            cursor.expect(Keyword::Papers),
            Err(CompileError::MalformedQuery {
                expected: Keyword::Papers,
                position: 1,
                found: None,
            })
        );
    }
}
