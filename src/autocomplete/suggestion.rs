use crate::grammar::{entity_type::EntityType, keyword::Keyword, token::Token, tokenizer::tokenize};

/// Something that may be typed next in a partially written query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Suggestion {
    #[display("{_0}")]
    Keyword(Keyword),
    /// Free text: the grammar accepts any word here as part of an entity name.
    #[display("<entity name>")]
    EntityName,
}
pub type Suggestions = Vec<Suggestion>;

/// Where a partial query stands after its completed words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterGet,
    AfterLimit,
    AfterPapers,
    AfterThat,
    ClauseStart,
    AfterType,
    InName,
    /// The completed words already break the grammar.
    Invalid,
}

impl State {
    fn next(self, token: &Token<'_>) -> Self {
        use State::*;
        let kw = token.keyword();
        match (self, kw) {
            (Start, Some(Keyword::Get)) => AfterGet,
            (AfterGet, Some(Keyword::One | Keyword::All)) => AfterLimit,
            (AfterGet | AfterLimit, Some(Keyword::Papers)) => AfterPapers,
            (AfterPapers, Some(Keyword::That)) => AfterThat,
            (AfterThat, Some(Keyword::Mention)) => ClauseStart,
            (ClauseStart | AfterType, Some(k)) if k.is_connective() => Invalid,
            (ClauseStart, Some(k)) if EntityType::from_keyword(k).is_some() => AfterType,
            (ClauseStart | AfterType, _) => InName,
            (InName, Some(k)) if k.is_connective() => ClauseStart,
            (InName, _) => InName,
            _ => Invalid,
        }
    }

    fn expects(self) -> (&'static [Keyword], bool) {
        use State::*;
        match self {
            Start => (&[Keyword::Get], false),
            AfterGet => (&[Keyword::One, Keyword::All, Keyword::Papers], false),
            AfterLimit => (&[Keyword::Papers], false),
            AfterPapers => (&[Keyword::That], false),
            AfterThat => (&[Keyword::Mention], false),
            ClauseStart => (&[Keyword::Person, Keyword::Organisation, Keyword::Work], true),
            AfterType => (&[], true),
            InName => (&Keyword::CONNECTIVES, true),
            Invalid => (&[], false),
        }
    }
}

impl Suggestion {
    /// Suggest what may be typed at byte offset `cursor` of `input`.
    ///
    /// Text after the cursor is ignored. A cursor past the end, or inside a
    /// multi-byte character, means the whole input.
    ///
    /// Strategy:
    /// 1. Tokenize the text before the cursor. The last token is the word
    ///    being typed (empty right after a space); the rest are complete.
    /// 2. Walk the complete words through the grammar states.
    /// 3. Offer the keywords the reached state accepts whose text starts with
    ///    the word being typed (ASCII case ignored), then `EntityName` if free
    ///    text is allowed there.
    pub fn search(input: &str, cursor: usize) -> Suggestions {
        let input = input.get(..cursor).unwrap_or(input);
        let tokens = tokenize(input);
        let Some((typing, done)) = tokens.split_last() else {
            return vec![];
        };
        let state = done.iter().fold(State::Start, State::next);
        let (keywords, free_text) = state.expects();
        let prefix = typing.text.to_ascii_lowercase();

        let mut out = keywords
            .iter()
            .filter(|kw| kw.as_str().starts_with(&prefix))
            .map(|kw| Suggestion::Keyword(*kw))
            .collect::<Suggestions>();
        if free_text {
            out.push(Suggestion::EntityName);
        }
        crate::trace!("Input {input:?} reached {state:?}, {} suggestions", out.len());
        out
    }
}
