use crate::lexicon::{Pos, Relation, Search};

/// Help text shown for a search type in the browser's contextual help.
pub fn help_text(pos: Pos, search: Search) -> &'static str {
    match (search, pos) {
        (Search::Relation(Relation::Antonym), Pos::Adjective) => {
            "Antonyms are words that are opposite in meaning. For adjectives, direct antonyms are shown along with the indirect antonyms of similar adjectives."
        }
        (Search::Relation(Relation::Antonym), _) => {
            "Antonyms are words that are opposite in meaning."
        }
        (Search::Relation(Relation::Hypernym), Pos::Verb) => {
            "Hypernyms are verbs that name a more general activity. Y is a hypernym of X if to X is to Y in some manner."
        }
        (Search::Relation(Relation::Hypernym), _) => {
            "Hypernyms are more general terms. Y is a hypernym of X if every X is a (kind of) Y."
        }
        (Search::Relation(Relation::Hyponym), Pos::Verb) => {
            "Troponyms are verbs that name a particular manner of doing something. X is a troponym of Y if to X is to Y in some manner."
        }
        (Search::Relation(Relation::Hyponym), _) => {
            "Hyponyms are more specific terms. X is a hyponym of Y if every X is a (kind of) Y."
        }
        (Search::Relation(Relation::Entailment), _) => {
            "Verb X entails Y if X cannot be done unless Y is, or has been, done."
        }
        (Search::Relation(Relation::Similar), _) => {
            "Similar adjectives are close in meaning to a head adjective."
        }
        (Search::Relation(r), _) if Relation::HOLONYMS.contains(&r) || r == Relation::Holonym => {
            "Holonyms name the whole of which the search word is a part, member, or substance. Y is a holonym of X if X is a part of Y."
        }
        (Search::Relation(r), _) if Relation::MERONYMS.contains(&r) || r == Relation::Meronym => {
            "Meronyms name the parts, members, or substances of the search word. X is a meronym of Y if X is a part of Y."
        }
        (Search::Relation(Relation::Cause), _) => {
            "Cause relations show verbs that name the result of the search verb."
        }
        (Search::Relation(Relation::Participle), _) => {
            "Participial adjectives are derived from verbs."
        }
        (Search::Relation(Relation::SeeAlso), _) => "See Also lists related word senses.",
        (Search::Relation(Relation::Pertainym), Pos::Adverb) => {
            "Adverbs are often derived from adjectives; the adjective the adverb is derived from is shown."
        }
        (Search::Relation(Relation::Pertainym), _) => {
            "Pertainyms are relational adjectives, usually defined as \"of or pertaining to\" a noun."
        }
        (Search::Relation(Relation::Attribute), _) => {
            "Attributes are nouns for which adjectives express values, and adjectives that express values of a noun."
        }
        (Search::Relation(Relation::VerbGroup), _) => {
            "Verb groups are verb senses that are similar in meaning."
        }
        (Search::Relation(Relation::Derivation), _) => {
            "Derivationally related forms are terms in different syntactic categories that share a root form and are semantically related."
        }
        (Search::Relation(Relation::Domain), _) => {
            "Domain shows the topic, region, or usage category the search word belongs to."
        }
        (Search::Relation(Relation::DomainMember), _) => {
            "Domain terms are the words that belong to the topic, region, or usage category named by the search word."
        }
        (Search::Relation(_), _) => "Shows the requested relation for each sense.",
        (Search::Synonyms, Pos::Noun | Pos::Verb) => {
            "Synonyms are words with the same meaning. Each sense is followed by its immediate hypernyms."
        }
        (Search::Synonyms, Pos::Adjective) => {
            "Synonyms are words with the same meaning. Each sense is followed by similar adjectives."
        }
        (Search::Synonyms, Pos::Adverb) => {
            "Synonyms are words with the same meaning. Each sense is followed by the adjective it pertains to."
        }
        (Search::Frequency, _) => {
            "Familiarity reflects how many senses the search word has (its polysemy count)."
        }
        (Search::Frames, _) => "Sentence frames show typical sentences the verb occurs in.",
        (Search::Coordinates, _) => {
            "Coordinate terms share a hypernym with the search word."
        }
        (Search::Relatives, _) => "Related senses are grouped by similarity of meaning.",
        (Search::MeronymTree, _) => "Shows every part, member, and substance, recursively.",
        (Search::HolonymTree, _) => "Shows every whole the search word belongs to, recursively.",
        (Search::Grep, _) => "Lists compound words containing the search string.",
        (Search::Overview, _) => {
            "The overview lists every sense of the search word with its gloss."
        }
    }
}
