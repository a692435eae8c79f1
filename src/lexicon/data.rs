use std::collections::HashMap;

use serde::Deserialize;

use super::EngineError;
use super::types::{Pos, Relation};

/// On-disk lexicon: a flat list of synsets plus irregular-form exception lists.
#[derive(Debug, Deserialize)]
pub struct LexiconFile {
    pub synsets: Vec<SynsetRecord>,
    #[serde(default)]
    pub exceptions: ExceptionLists,
}

#[derive(Debug, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub pos: Pos,
    pub words: Vec<String>,
    #[serde(default)]
    pub gloss: String,
    pub lexname: Option<String>,
    pub offset: Option<u64>,
    #[serde(default)]
    pub pointers: Vec<PointerRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PointerRecord {
    pub relation: Relation,
    pub target: String,
}

/// Inflected form → base forms, one table per category.
#[derive(Debug, Default, Deserialize)]
pub struct ExceptionLists {
    #[serde(default)]
    pub noun: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub verb: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub adjective: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub adverb: HashMap<String, Vec<String>>,
}

impl ExceptionLists {
    pub fn get(&self, pos: Pos, form: &str) -> &[String] {
        let table = match pos {
            Pos::Noun => &self.noun,
            Pos::Verb => &self.verb,
            Pos::Adjective => &self.adjective,
            Pos::Adverb => &self.adverb,
        };
        table.get(form).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Synset {
    pub pos: Pos,
    pub words: Vec<String>,
    pub gloss: String,
    pub lexname: Option<String>,
    pub offset: Option<u64>,
    pub pointers: Vec<(Relation, usize)>,
}

/// Indexed, pointer-resolved lexicon.
#[derive(Debug)]
pub struct Lexicon {
    synsets: Vec<Synset>,
    index: HashMap<(Pos, String), Vec<usize>>,
    exceptions: ExceptionLists,
}

/// Lookup key for a lemma: lowercase with spaces folded to underscores.
pub fn normalize(word: &str) -> String {
    word.trim()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

impl Lexicon {
    pub fn from_file(file: LexiconFile) -> Result<Self, EngineError> {
        let mut ids = HashMap::with_capacity(file.synsets.len());
        for (idx, record) in file.synsets.iter().enumerate() {
            if ids.insert(record.id.clone(), idx).is_some() {
                return Err(EngineError::DuplicateSynset(record.id.clone()));
            }
        }

        let mut synsets = Vec::with_capacity(file.synsets.len());
        let mut index: HashMap<(Pos, String), Vec<usize>> = HashMap::new();

        for (idx, record) in file.synsets.into_iter().enumerate() {
            let pointers = record
                .pointers
                .iter()
                .map(|p| {
                    ids.get(&p.target)
                        .map(|&target| (p.relation, target))
                        .ok_or_else(|| EngineError::DanglingPointer {
                            from: record.id.clone(),
                            target: p.target.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            for word in &record.words {
                let senses = index.entry((record.pos, normalize(word))).or_default();
                if !senses.contains(&idx) {
                    senses.push(idx);
                }
            }

            synsets.push(Synset {
                pos: record.pos,
                words: record.words,
                gloss: record.gloss,
                lexname: record.lexname,
                offset: record.offset,
                pointers,
            });
        }

        Ok(Self {
            synsets,
            index,
            exceptions: file.exceptions,
        })
    }

    pub fn synset(&self, idx: usize) -> &Synset {
        &self.synsets[idx]
    }

    /// Synsets containing `key` under `pos`, in sense order.
    pub fn senses(&self, pos: Pos, key: &str) -> &[usize] {
        self.index
            .get(&(pos, key.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, pos: Pos, key: &str) -> bool {
        !self.senses(pos, key).is_empty()
    }

    /// 1-based sense number of `word` within synset `idx`.
    pub fn sense_number(&self, word: &str, idx: usize) -> Option<usize> {
        let pos = self.synsets[idx].pos;
        self.senses(pos, &normalize(word))
            .iter()
            .position(|&s| s == idx)
            .map(|p| p + 1)
    }

    pub fn exceptions(&self, pos: Pos, key: &str) -> &[String] {
        self.exceptions.get(pos, key)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }
}
