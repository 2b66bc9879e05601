//! Entity categories and their stored representation.
//!
//! Entities are typed by the named-entity recogniser that populated the
//! `entities` table, so the stored values use its labels (`ORG`,
//! `WORK_OF_ART`) rather than the words users type.
use crate::grammar::keyword::Keyword;
use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EntityType {
    #[display("PERSON")]
    Person,
    #[display("ORG")]
    Organisation,
    #[display("WORK_OF_ART")]
    WorkOfArt,
}

impl EntityType {
    /// Type keywords in the order the parser tries them.
    pub const MAPPING: [(Keyword, Self); 3] = [
        (Keyword::Person, EntityType::Person),
        (Keyword::Organisation, EntityType::Organisation),
        (Keyword::Work, EntityType::WorkOfArt),
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        Self::MAPPING
            .iter()
            .find(|(k, _)| *k == kw)
            .map(|(_, ty)| *ty)
    }

    /// Value held in `entities.entity_type`.
    pub const fn stored(self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Organisation => "ORG",
            EntityType::WorkOfArt => "WORK_OF_ART",
        }
    }

    pub const fn keyword(self) -> Keyword {
        match self {
            EntityType::Person => Keyword::Person,
            EntityType::Organisation => Keyword::Organisation,
            EntityType::WorkOfArt => Keyword::Work,
        }
    }
}
