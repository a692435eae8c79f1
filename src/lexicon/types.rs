use serde::{Deserialize, Serialize};

/// Grammatical category, numbered the way the shell passes it (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    pub fn from_number(n: i64) -> Option<Pos> {
        match n {
            1 => Some(Pos::Noun),
            2 => Some(Pos::Verb),
            3 => Some(Pos::Adjective),
            4 => Some(Pos::Adverb),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Pos::Noun => 1,
            Pos::Verb => 2,
            Pos::Adjective => 3,
            Pos::Adverb => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
        }
    }
}

/// Pointer relations between synsets. Discriminants are the classic search numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Antonym = 1,
    Hypernym = 2,
    Hyponym = 3,
    Entailment = 4,
    Similar = 5,
    MemberHolonym = 6,
    SubstanceHolonym = 7,
    PartHolonym = 8,
    MemberMeronym = 9,
    SubstanceMeronym = 10,
    PartMeronym = 11,
    Meronym = 12,
    Holonym = 13,
    Cause = 14,
    Participle = 15,
    SeeAlso = 16,
    Pertainym = 17,
    Attribute = 18,
    VerbGroup = 19,
    Derivation = 20,
    Domain = 21,
    DomainMember = 22,
}

static RELATIONS: [Relation; 22] = [
    Relation::Antonym,
    Relation::Hypernym,
    Relation::Hyponym,
    Relation::Entailment,
    Relation::Similar,
    Relation::MemberHolonym,
    Relation::SubstanceHolonym,
    Relation::PartHolonym,
    Relation::MemberMeronym,
    Relation::SubstanceMeronym,
    Relation::PartMeronym,
    Relation::Meronym,
    Relation::Holonym,
    Relation::Cause,
    Relation::Participle,
    Relation::SeeAlso,
    Relation::Pertainym,
    Relation::Attribute,
    Relation::VerbGroup,
    Relation::Derivation,
    Relation::Domain,
    Relation::DomainMember,
];

impl Relation {
    pub const HOLONYMS: [Relation; 3] = [
        Relation::MemberHolonym,
        Relation::SubstanceHolonym,
        Relation::PartHolonym,
    ];

    pub const MERONYMS: [Relation; 3] = [
        Relation::MemberMeronym,
        Relation::SubstanceMeronym,
        Relation::PartMeronym,
    ];

    pub fn from_number(n: u32) -> Option<Relation> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        RELATIONS.get(idx).copied()
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    /// Concrete relations a search for `self` covers. The generic
    /// meronym/holonym searches fan out to their three specific kinds.
    pub fn expand(self) -> &'static [Relation] {
        match self {
            Relation::Meronym => &Self::MERONYMS,
            Relation::Holonym => &Self::HOLONYMS,
            _ => std::slice::from_ref(&RELATIONS[self as usize - 1]),
        }
    }

    /// Prefix printed in front of a target synset, if the relation has one.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Relation::MemberHolonym => Some("MEMBER OF: "),
            Relation::SubstanceHolonym => Some("SUBSTANCE OF: "),
            Relation::PartHolonym => Some("PART OF: "),
            Relation::MemberMeronym => Some("HAS MEMBER: "),
            Relation::SubstanceMeronym => Some("HAS SUBSTANCE: "),
            Relation::PartMeronym => Some("HAS PART: "),
            Relation::Antonym => Some("Antonym of "),
            Relation::Pertainym => Some("Pertains to "),
            _ => None,
        }
    }
}

/// Every search the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Search {
    Relation(Relation),
    Synonyms,
    Frequency,
    Frames,
    Coordinates,
    Relatives,
    MeronymTree,
    HolonymTree,
    Grep,
    Overview,
}

impl Search {
    pub fn from_number(n: u32) -> Option<Search> {
        match n {
            23 => Some(Search::Synonyms),
            24 => Some(Search::Frequency),
            25 => Some(Search::Frames),
            26 => Some(Search::Coordinates),
            27 => Some(Search::Relatives),
            28 => Some(Search::MeronymTree),
            29 => Some(Search::HolonymTree),
            30 => Some(Search::Grep),
            31 => Some(Search::Overview),
            _ => Relation::from_number(n).map(Search::Relation),
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Search::Relation(r) => r.number(),
            Search::Synonyms => 23,
            Search::Frequency => 24,
            Search::Frames => 25,
            Search::Coordinates => 26,
            Search::Relatives => 27,
            Search::MeronymTree => 28,
            Search::HolonymTree => 29,
            Search::Grep => 30,
            Search::Overview => 31,
        }
    }
}

/// A text-kind request: which search, whether relations are followed
/// transitively, and which sense (0 = all senses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub search: Search,
    pub recursive: bool,
    pub sense: u32,
}

/// Presentation switches read by the renderer on every text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub glosses: bool,
    pub file_info: bool,
    pub byte_offsets: bool,
    pub sense_numbers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            glosses: true,
            file_info: false,
            byte_offsets: false,
            sense_numbers: false,
        }
    }
}

/// Availability bit for search number `n`; `None` when it does not fit in 32 bits.
pub fn bit(n: u32) -> Option<u32> {
    1u32.checked_shl(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_numbers_round_trip() {
        for pos in Pos::ALL {
            assert_eq!(Pos::from_number(i64::from(pos.number())), Some(pos));
        }
        assert_eq!(Pos::from_number(0), None);
        assert_eq!(Pos::from_number(5), None);
    }

    #[test]
    fn relation_discriminants_match_table() {
        for n in 1..=22 {
            assert_eq!(Relation::from_number(n).map(Relation::number), Some(n));
        }
        assert_eq!(Relation::from_number(0), None);
        assert_eq!(Relation::from_number(23), None);
    }

    #[test]
    fn search_numbers_cover_one_to_thirty_one() {
        for n in 1..=31 {
            let search = Search::from_number(n).unwrap_or_else(|| panic!("missing search {n}"));
            assert_eq!(search.number(), n);
        }
        assert_eq!(Search::from_number(32), None);
    }

    #[test]
    fn generic_meronym_expands_to_specific_kinds() {
        assert_eq!(Relation::Meronym.expand(), &Relation::MERONYMS);
        assert_eq!(Relation::Hypernym.expand(), &[Relation::Hypernym]);
    }

    #[test]
    fn bit_rejects_out_of_range_shift() {
        assert_eq!(bit(0), Some(1));
        assert_eq!(bit(31), Some(0x8000_0000));
        assert_eq!(bit(32), None);
    }

    #[test]
    fn relation_deserializes_from_snake_case() {
        let r: Relation = serde_json::from_str(r#""part_meronym""#).unwrap();
        assert_eq!(r, Relation::PartMeronym);
    }
}
