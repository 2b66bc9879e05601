use crate::grammar::token::Token;

/// Split a query into words on the single space character.
///
/// Behavior:
/// - Only `' '` separates words; tabs and newlines stay inside a word.
/// - No case folding, no punctuation stripping, no quoting.
/// - Consecutive spaces produce empty tokens, as do leading and trailing
///   spaces. The parser rejects an empty token where a keyword is required
///   and keeps it inside a name span.
/// - The empty string yields a single empty token.
///
/// Complexity: O(n) time, O(t) space where `t` is the number of tokens.
pub fn tokenize(query: &str) -> Vec<Token<'_>> {
    let mut start = 0;
    query
        .split(' ')
        .enumerate()
        .map(|(index, text)| {
            let token = Token::new(text, index, start);
            start = token.end + 1;
            token
        })
        .collect()
}
