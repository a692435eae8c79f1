//! Base-form derivation: irregular exception lists first, then suffix detachment.

use super::data::{Lexicon, normalize};
use super::types::Pos;

/// (inflected suffix, replacement ending) pairs, tried in order.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => &[],
    }
}

/// All base forms of `word` under `pos`, in the order they should be offered.
///
/// Exception-list entries come first and are returned even when the lexicon
/// lacks them; rule-derived candidates are kept only if the lexicon has them.
/// Nouns ending in "ss" are never detached. A noun ending in "ful" is
/// detached on its stem and gets "ful" back ("boxesful" -> "boxful").
pub fn base_forms(lexicon: &Lexicon, word: &str, pos: Pos) -> Vec<String> {
    let key = normalize(word);
    let mut forms: Vec<String> = lexicon.exceptions(pos, &key).to_vec();

    if pos == Pos::Noun {
        if key.ends_with("ss") {
            return forms;
        }
        if let Some(stem) = key.strip_suffix("ful")
            && !stem.is_empty()
        {
            detach(lexicon, pos, &key, stem, "ful", &mut forms);
            return forms;
        }
    }

    detach(lexicon, pos, &key, &key, "", &mut forms);
    forms
}

/// Apply the suffix rules to `stem`, re-attach `tail`, and keep indexed
/// candidates that differ from `key`.
fn detach(lexicon: &Lexicon, pos: Pos, key: &str, stem: &str, tail: &str, forms: &mut Vec<String>) {
    for (suffix, ending) in rules(pos) {
        let Some(root) = stem.strip_suffix(suffix) else {
            continue;
        };
        if root.is_empty() {
            continue;
        }
        let candidate = format!("{root}{ending}{tail}");
        if candidate != key && lexicon.contains(pos, &candidate) && !forms.contains(&candidate) {
            forms.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::data::LexiconFile;

    fn lexicon() -> Lexicon {
        let file: LexiconFile = serde_json::from_str(
            r#"{
                "synsets": [
                    {"id": "dog", "pos": "noun", "words": ["dog"]},
                    {"id": "box", "pos": "noun", "words": ["box"]},
                    {"id": "glass", "pos": "noun", "words": ["glass"]},
                    {"id": "boxful", "pos": "noun", "words": ["boxful"]},
                    {"id": "fly", "pos": "verb", "words": ["fly"]},
                    {"id": "bake", "pos": "verb", "words": ["bake"]},
                    {"id": "fast", "pos": "adjective", "words": ["fast"]},
                    {"id": "quick", "pos": "adverb", "words": ["quickly"]}
                ],
                "exceptions": {"verb": {"ran": ["run"]}}
            }"#,
        )
        .unwrap();
        Lexicon::from_file(file).unwrap()
    }

    #[test]
    fn plural_noun_detaches_to_indexed_base() {
        let lex = lexicon();
        assert_eq!(base_forms(&lex, "dogs", Pos::Noun), vec!["dog"]);
        assert_eq!(base_forms(&lex, "boxes", Pos::Noun), vec!["box"]);
    }

    #[test]
    fn unindexed_candidates_are_dropped() {
        let lex = lexicon();
        assert!(base_forms(&lex, "cats", Pos::Noun).is_empty());
    }

    #[test]
    fn nouns_ending_in_ss_are_left_alone() {
        let lex = lexicon();
        assert!(base_forms(&lex, "glass", Pos::Noun).is_empty());
    }

    #[test]
    fn ful_nouns_detach_the_stem() {
        let lex = lexicon();
        assert_eq!(base_forms(&lex, "boxesful", Pos::Noun), vec!["boxful"]);
        assert!(base_forms(&lex, "boxful", Pos::Noun).is_empty());
        assert!(base_forms(&lex, "ful", Pos::Noun).is_empty());
    }

    #[test]
    fn verb_rules_and_exceptions() {
        let lex = lexicon();
        assert_eq!(base_forms(&lex, "flies", Pos::Verb), vec!["fly"]);
        assert_eq!(base_forms(&lex, "baking", Pos::Verb), vec!["bake"]);
        assert_eq!(base_forms(&lex, "ran", Pos::Verb), vec!["run"]);
    }

    #[test]
    fn comparative_adjective() {
        let lex = lexicon();
        assert_eq!(base_forms(&lex, "faster", Pos::Adjective), vec!["fast"]);
    }

    #[test]
    fn adverbs_have_no_rules() {
        let lex = lexicon();
        assert!(base_forms(&lex, "quicklies", Pos::Adverb).is_empty());
    }

    #[test]
    fn base_form_equal_to_input_is_not_offered() {
        let lex = lexicon();
        assert!(base_forms(&lex, "dog", Pos::Noun).is_empty());
    }
}
