//! Text reports for a single form.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use super::data::Lexicon;
use super::types::{DisplayOptions, Pos, Relation, Report, Search};

/// Relation chains are never followed deeper than this.
const MAX_DEPTH: usize = 20;

/// Synsets reached while tracing one sense. Targets on the current path are
/// skipped and each synset is followed at most once.
struct Trail {
    path: Vec<usize>,
    expanded: HashSet<usize>,
}

impl Trail {
    fn new(root: usize) -> Self {
        Self {
            path: vec![root],
            expanded: HashSet::from([root]),
        }
    }
}

pub struct Renderer<'a> {
    lexicon: &'a Lexicon,
    options: &'a DisplayOptions,
    abort: &'a AtomicBool,
}

impl<'a> Renderer<'a> {
    pub fn new(lexicon: &'a Lexicon, options: &'a DisplayOptions, abort: &'a AtomicBool) -> Self {
        Self {
            lexicon,
            options,
            abort,
        }
    }

    /// Render `report` for `word` (already normalized to `key`). Empty when nothing matches.
    pub fn render(&self, word: &str, key: &str, pos: Pos, report: Report) -> String {
        let senses = self.lexicon.senses(pos, key);
        if senses.is_empty() {
            return String::new();
        }

        let selected: Vec<(usize, usize)> = senses
            .iter()
            .enumerate()
            .map(|(i, &idx)| (i + 1, idx))
            .filter(|&(n, _)| report.sense == 0 || report.sense as usize == n)
            .collect();
        if selected.is_empty() {
            return String::new();
        }

        match report.search {
            Search::Frequency => self.frequency(word, pos, senses.len()),
            Search::Overview => self.overview(word, pos, &selected, senses.len()),
            Search::Frames | Search::Relatives | Search::Grep => String::new(),
            search => self.traced(word, pos, search, report.recursive, &selected, senses.len()),
        }
    }

    fn traced(
        &self,
        word: &str,
        pos: Pos,
        search: Search,
        recursive: bool,
        selected: &[(usize, usize)],
        total: usize,
    ) -> String {
        let mut blocks = Vec::new();
        for &(sense, idx) in selected {
            if self.aborted() {
                break;
            }
            let mut body = String::new();
            let mut trail = Trail::new(idx);
            match search {
                Search::Relation(relation) => {
                    self.trace(&mut body, &mut trail, relation.expand(), 1, recursive);
                }
                Search::MeronymTree => {
                    self.trace(&mut body, &mut trail, &Relation::MERONYMS, 1, true);
                }
                Search::HolonymTree => {
                    self.trace(&mut body, &mut trail, &Relation::HOLONYMS, 1, true);
                }
                Search::Coordinates => self.coordinates(&mut body, idx),
                Search::Synonyms => {
                    let relations: &[Relation] = match pos {
                        Pos::Noun | Pos::Verb => &[Relation::Hypernym],
                        Pos::Adjective => &[Relation::Similar],
                        Pos::Adverb => &[Relation::Pertainym],
                    };
                    self.trace(&mut body, &mut trail, relations, 1, false);
                }
                _ => {}
            }
            if body.is_empty() && search != Search::Synonyms {
                continue;
            }
            blocks.push(format!("Sense {sense}\n{}\n{body}", self.synset_line(idx)));
        }

        if blocks.is_empty() {
            return String::new();
        }

        let count = if blocks.len() == total {
            format!("{total} {} of {word}", plural("sense", total))
        } else {
            format!("{} of {total} {} of {word}", blocks.len(), plural("sense", total))
        };
        let mut out = format!("\n{} of {} {word}\n\n{count}\n\n", title(search, pos), pos.name());
        for block in blocks {
            out.push_str(&block);
            out.push('\n');
        }
        out
    }

    fn trace(
        &self,
        out: &mut String,
        trail: &mut Trail,
        relations: &[Relation],
        level: usize,
        recursive: bool,
    ) {
        if level > MAX_DEPTH {
            return;
        }
        let Some(&idx) = trail.path.last() else {
            return;
        };
        for &(relation, target) in &self.lexicon.synset(idx).pointers {
            if self.aborted() {
                return;
            }
            if !relations.contains(&relation) || trail.path.contains(&target) {
                continue;
            }
            push_indent(out, level);
            out.push_str("=> ");
            if let Some(label) = relation.label() {
                out.push_str(label);
            }
            out.push_str(&self.synset_line(target));
            out.push('\n');
            if recursive && trail.expanded.insert(target) {
                trail.path.push(target);
                self.trace(out, trail, relations, level + 1, recursive);
                trail.path.pop();
            }
        }
    }

    fn coordinates(&self, out: &mut String, idx: usize) {
        for &(relation, parent) in &self.lexicon.synset(idx).pointers {
            if relation != Relation::Hypernym || self.aborted() {
                continue;
            }
            push_indent(out, 1);
            out.push_str("-> ");
            out.push_str(&self.synset_line(parent));
            out.push('\n');
            self.trace(out, &mut Trail::new(parent), &[Relation::Hyponym], 2, false);
        }
    }

    fn overview(&self, word: &str, pos: Pos, selected: &[(usize, usize)], total: usize) -> String {
        let mut out = format!(
            "\nThe {} {word} has {total} {}\n\n",
            pos.name(),
            plural("sense", total)
        );
        for &(sense, idx) in selected {
            out.push_str(&format!("{sense}. {}\n", self.synset_line(idx)));
        }
        out
    }

    fn frequency(&self, word: &str, pos: Pos, total: usize) -> String {
        format!(
            "\n{word} used as a {} is {} (polysemy count = {total})\n",
            pos.name(),
            familiarity(total)
        )
    }

    /// One synset as printed under a sense heading or after `=>`.
    fn synset_line(&self, idx: usize) -> String {
        let synset = self.lexicon.synset(idx);
        let mut line = String::new();

        if self.options.byte_offsets {
            line.push_str(&format!("[{}] ", synset.offset.unwrap_or(idx as u64)));
        }
        if self.options.file_info
            && let Some(lexname) = &synset.lexname
        {
            line.push_str(&format!("<{lexname}> "));
        }

        for (i, word) in synset.words.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            line.push_str(word);
            if self.options.sense_numbers
                && let Some(n) = self.lexicon.sense_number(word, idx)
            {
                line.push_str(&format!("#{n}"));
            }
        }

        if self.options.glosses && !synset.gloss.is_empty() {
            line.push_str(&format!(" -- ({})", synset.gloss));
        }
        line
    }

    fn aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }
}

fn push_indent(out: &mut String, level: usize) {
    out.extend(std::iter::repeat_n(' ', 3 + 4 * level));
}

fn plural(noun: &str, n: usize) -> String {
    if n == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

fn familiarity(polysemy: usize) -> &'static str {
    match polysemy {
        0 => "extremely rare",
        1 => "very rare",
        2 => "rare",
        3..=4 => "uncommon",
        5..=8 => "common",
        9..=16 => "familiar",
        17..=32 => "very familiar",
        _ => "extremely familiar",
    }
}

fn title(search: Search, pos: Pos) -> &'static str {
    match search {
        Search::Relation(relation) => match relation {
            Relation::Antonym => "Antonyms",
            Relation::Hypernym if pos == Pos::Verb => "Synonyms/Hypernyms",
            Relation::Hypernym => "Hypernyms",
            Relation::Hyponym if pos == Pos::Verb => "Troponyms",
            Relation::Hyponym => "Hyponyms",
            Relation::Entailment => "Entailment",
            Relation::Similar => "Similarity",
            Relation::MemberHolonym => "Member Holonyms",
            Relation::SubstanceHolonym => "Substance Holonyms",
            Relation::PartHolonym => "Part Holonyms",
            Relation::MemberMeronym => "Member Meronyms",
            Relation::SubstanceMeronym => "Substance Meronyms",
            Relation::PartMeronym => "Part Meronyms",
            Relation::Meronym => "Meronyms",
            Relation::Holonym => "Holonyms",
            Relation::Cause => "Cause",
            Relation::Participle => "Participle",
            Relation::SeeAlso => "See Also",
            Relation::Pertainym => "Pertainyms",
            Relation::Attribute => "Attributes",
            Relation::VerbGroup => "Verb Groups",
            Relation::Derivation => "Derivationally Related Forms",
            Relation::Domain => "Domain",
            Relation::DomainMember => "Domain Terms",
        },
        Search::Synonyms => "Synonyms",
        Search::Coordinates => "Coordinate Terms",
        Search::MeronymTree => "Meronym Tree",
        Search::HolonymTree => "Holonym Tree",
        Search::Frequency => "Familiarity",
        Search::Frames => "Sentence Frames",
        Search::Relatives => "Related Senses",
        Search::Grep => "Grep",
        Search::Overview => "Overview",
    }
}
