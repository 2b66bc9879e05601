//! Keyword model for the paper query grammar.
//!
//! The grammar is deliberately tiny: eleven words drive the whole parser.
//! Everything else in a query is free text belonging to an entity name.
//!
//! Design notes:
//! - Keywords are matched case‑sensitively and exactly (`Get` is a name word,
//!   not a keyword). Completion is the only place where case is ignored.
//! - Whether a word acts as a keyword depends on where the parser is; a
//!   keyword inside a name span (`mention work get out`) is part of the name.
//!   `Keyword::from_word` only answers "could this be a keyword".

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Get,
    One,
    All,
    Papers,
    That,
    Mention,
    Person,
    Organisation,
    Work,
    And,
    Or,
}

impl Keyword {
    /// Every keyword in grammar order.
    pub const ALL: [Self; 11] = [
        Keyword::Get,
        Keyword::One,
        Keyword::All,
        Keyword::Papers,
        Keyword::That,
        Keyword::Mention,
        Keyword::Person,
        Keyword::Organisation,
        Keyword::Work,
        Keyword::And,
        Keyword::Or,
    ];

    /// Keywords that end an entity name span.
    pub const CONNECTIVES: [Self; 2] = [Keyword::And, Keyword::Or];

    /// Classify a word as a keyword. Matching is exact; no case folding.
    pub fn from_word(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "get" => Get,
            "one" => One,
            "all" => All,
            "papers" => Papers,
            "that" => That,
            "mention" => Mention,
            "person" => Person,
            "organisation" => Organisation,
            "work" => Work,
            "and" => And,
            "or" => Or,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical string form of the keyword, as written in queries.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Get => "get",
            One => "one",
            All => "all",
            Papers => "papers",
            That => "that",
            Mention => "mention",
            Person => "person",
            Organisation => "organisation",
            Work => "work",
            And => "and",
            Or => "or",
        }
    }

    pub fn is_connective(self) -> bool {
        Self::CONNECTIVES.contains(&self)
    }

    /// Keywords starting with `prefix`, ignoring ASCII case, in grammar order.
    ///
    /// An empty prefix yields every keyword.
    pub fn complete(prefix: &str) -> Vec<Self> {
        let prefix = prefix.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .filter(|kw| kw.as_str().starts_with(&prefix))
            .collect()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
