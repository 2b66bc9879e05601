//! Structured search requests and their translation into query sentences.
//!
//! A service front end receives entity type, name and limit as separate
//! fields. `SearchRequest` validates them and writes the sentence the
//! compiler understands: `get {limit} papers that mention {type} {name}`.
use crate::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub entity_type: String,
    pub entity_name: String,
    /// `one` or `all`; `None` means `all`.
    pub limit: Option<String>,
}

/// Shortest name word worth a fallback query of its own.
pub const MIN_NAME_PART_LEN: usize = 3;

impl SearchRequest {
    pub fn new(
        entity_type: impl Into<String>,
        entity_name: impl Into<String>,
        limit: Option<&str>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_name: entity_name.into(),
            limit: limit.map(str::to_string),
        }
    }

    /// The type keyword this request filters on.
    pub fn entity_type(&self) -> Result<EntityType> {
        let word = self.entity_type.trim().to_ascii_lowercase();
        let word = match word.as_str() {
            "organization" => "organisation",
            other => other,
        };
        Keyword::from_word(word)
            .and_then(EntityType::from_keyword)
            .ok_or_else(|| {
                Error::InvalidRequest(format!(
                    "Invalid entity type {:?}. Must be one of: person, organisation, work",
                    self.entity_type
                ))
            })
    }

    pub fn limit(&self) -> Result<Limit> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("all") => Ok(Limit::All),
            Some("one") => Ok(Limit::One),
            Some(other) => Err(Error::InvalidRequest(format!(
                "Invalid limit {other:?}. Must be one of: one, all"
            ))),
        }
    }

    /// The entity name, trimmed. Names the grammar would split are rejected.
    pub fn entity_name(&self) -> Result<&str> {
        let name = self.entity_name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRequest("Missing entity name".into()));
        }
        let connective = name
            .split(' ')
            .find(|w| Keyword::from_word(w).is_some_and(Keyword::is_connective));
        if let Some(word) = connective {
            return Err(Error::InvalidRequest(format!(
                "Entity name {name:?} contains the connective {word:?}"
            )));
        }
        Ok(name)
    }

    /// `get {limit} papers that mention {type} {name}`
    pub fn to_query_string(&self) -> Result<String> {
        let limit = match self.limit()? {
            Limit::One => Keyword::One,
            Limit::All | Limit::Unspecified => Keyword::All,
        };
        let entity_type = self.entity_type()?.keyword();
        let name = self.entity_name()?;
        Ok(format!(
            "{} {limit} {} {} {} {entity_type} {name}",
            Keyword::Get,
            Keyword::Papers,
            Keyword::That,
            Keyword::Mention
        ))
    }

    pub fn compile(&self) -> Result<CompiledQuery> {
        let query = self.to_query_string()?;
        debug!("Search request translated to {query:?}");
        Ok(compile(&query)?)
    }

    /// One request per significant name word, used when the full name finds
    /// nothing. Person words need at least `MIN_NAME_PART_LEN` characters,
    /// organisation words more than that; works never fall back. Empty for
    /// single-word names.
    pub fn name_parts(&self) -> Vec<SearchRequest> {
        let name = self.entity_name.trim();
        if !name.contains(' ') {
            return vec![];
        }
        let significant: fn(usize) -> bool = match self.entity_type() {
            Ok(EntityType::Person) => |len| len >= MIN_NAME_PART_LEN,
            Ok(EntityType::Organisation) => |len| len > MIN_NAME_PART_LEN,
            Ok(EntityType::WorkOfArt) | Err(_) => return vec![],
        };
        name.split_whitespace()
            .filter(|part| significant(part.chars().count()))
            .map(|part| SearchRequest {
                entity_name: part.to_string(),
                ..self.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("person", "Jane Doe", None, "get all papers that mention person Jane Doe")]
    #[case(" Person ", "Jane Doe", Some("one"), "get one papers that mention person Jane Doe")]
    #[case("organization", "MIT", Some("all"), "get all papers that mention organisation MIT")]
    #[case("WORK", " Hamlet ", None, "get all papers that mention work Hamlet")]
    fn translates_to_sentence(
        #[case] entity_type: &str,
        #[case] name: &str,
        #[case] limit: Option<&str>,
        #[case] expected: &str,
    ) {
        let request = SearchRequest::new(entity_type, name, limit);
        assert_eq!(request.to_query_string().expect("valid request"), expected);
    }

    #[rstest]
    #[case("place", "Paris", None)]
    #[case("", "Paris", None)]
    #[case("person", "   ", None)]
    #[case("person", "Jane", Some("two"))]
    #[case("organisation", "Johnson and Johnson", None)]
    #[case("work", "War or Peace", None)]
    fn rejects_invalid_requests(
        #[case] entity_type: &str,
        #[case] name: &str,
        #[case] limit: Option<&str>,
    ) {
        let request = SearchRequest::new(entity_type, name, limit);
        assert!(
            matches!(request.to_query_string(), Err(Error::InvalidRequest(_))),
            "{request:?} should be rejected"
        );
    }

    #[test]
    fn compiles_with_bound_name() {
        let compiled = SearchRequest::new("person", "O'Brien", Some("one"))
            .compile()
            .expect("compiles");
        assert!(!compiled.sql().contains("O'Brien"));
        assert_eq!(compiled.params(), ["O'Brien"]);
        assert!(compiled.sql().ends_with("LIMIT 1"));
    }

    #[rstest]
    #[case("person", "Li Wei Zhang", &["Wei", "Zhang"])]
    #[case("person", "Alan Turing", &["Alan", "Turing"])]
    #[case("person", "Turing", &[])]
    #[case("organisation", "Acme Ltd Corp", &["Acme", "Corp"])]
    #[case("organization", "University of Manchester", &["University", "Manchester"])]
    #[case("organisation", "IBM", &[])]
    #[case("work", "War Peace", &[])]
    #[case("planet", "Red Planet", &[])]
    fn name_parts_follow_entity_type(
        #[case] entity_type: &str,
        #[case] name: &str,
        #[case] expected: &[&str],
    ) {
        let request = SearchRequest::new(entity_type, name, Some("one"));
        let parts = request.name_parts();
        assert!(parts.iter().all(|p| p.entity_type == request.entity_type));
        assert!(parts.iter().all(|p| p.limit == request.limit));
        let names = parts.iter().map(|p| p.entity_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, expected);
    }
}
