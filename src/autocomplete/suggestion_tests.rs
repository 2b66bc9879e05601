#![cfg(test)]
use crate::*;
use rstest::rstest;

fn keywords(words: &[Keyword]) -> Suggestions {
    words.iter().copied().map(Suggestion::Keyword).collect()
}

fn at_end(input: &str) -> Suggestions {
    Suggestion::search(input, input.len())
}

#[cfg(test)]
mod keyword_testing {
    use super::*;

    #[rstest]
    // Case 1: nothing typed yet
    #[case("", &[Keyword::Get])]
    // Case 2: partial leading keyword, case ignored
    #[case("G", &[Keyword::Get])]
    // Case 3: after `get` the limit is optional
    #[case("get ", &[Keyword::One, Keyword::All, Keyword::Papers])]
    // Case 4: prefix narrows the choice
    #[case("get o", &[Keyword::One])]
    // Case 5: limit given, subject required
    #[case("get all ", &[Keyword::Papers])]
    // Case 6: subject given
    #[case("get one papers ", &[Keyword::That])]
    // Case 7: partially typed `mention`
    #[case("get all papers that men", &[Keyword::Mention])]
    // Case 8: wrong prefix yields nothing
    #[case("get all papers that x", &[])]
    fn should_suggest_structural_keywords(#[case] input: &str, #[case] expected: &[Keyword]) {
        // When
        let result = at_end(input);

        // Then
        assert_eq!(result, keywords(expected), "suggestions for {input:?}");
    }

    #[rstest]
    // Case 1: start of a clause offers type keywords and free text
    #[case("get all papers that mention ", &[Keyword::Person, Keyword::Organisation, Keyword::Work])]
    // Case 2: `or` prefix matches `organisation` only
    #[case("get all papers that mention or", &[Keyword::Organisation])]
    // Case 3: after a type keyword only a name fits
    #[case("get all papers that mention person ", &[])]
    // Case 4: inside a name the connectives are offered
    #[case("get all papers that mention person Jane ", &[Keyword::And, Keyword::Or])]
    // Case 5: after a connective a new clause starts
    #[case("get all papers that mention person Jane and ", &[Keyword::Person, Keyword::Organisation, Keyword::Work])]
    fn should_suggest_clause_words(#[case] input: &str, #[case] expected: &[Keyword]) {
        // When
        let result = at_end(input);

        // Then
        let mut expected = keywords(expected);
        expected.push(Suggestion::EntityName);
        assert_eq!(result, expected, "suggestions for {input:?}");
    }
}

#[cfg(test)]
mod invalid_and_cursor_testing {
    use super::*;

    #[rstest]
    // Case 1: bad leading word
    #[case("find ")]
    // Case 2: missing subject
    #[case("get all that ")]
    // Case 3: connective directly after `mention`
    #[case("get all papers that mention and ")]
    // Case 4: connective directly after a type keyword
    #[case("get all papers that mention work or ")]
    fn should_not_suggest_after_broken_prefix(#[case] input: &str) {
        assert!(at_end(input).is_empty(), "{input:?} should have no suggestions");
    }

    #[test]
    fn should_ignore_text_after_cursor() {
        // Given
        let input = "get all papers that mention person Jane";

        // When: cursor right after "get "
        let result = Suggestion::search(input, 4);

        // Then
        assert_eq!(
            result,
            keywords(&[Keyword::One, Keyword::All, Keyword::Papers])
        );
    }

    #[test]
    fn should_use_whole_input_when_cursor_out_of_range() {
        assert_eq!(
            Suggestion::search("get one ", 100),
            keywords(&[Keyword::Papers])
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(Suggestion::Keyword(Keyword::Mention).to_string(), "mention");
        assert_eq!(Suggestion::EntityName.to_string(), "<entity name>");
    }
}
