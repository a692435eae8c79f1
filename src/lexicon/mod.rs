//! The lexical engine: database loading, per-form queries, and base-form derivation.

mod data;
mod morph;
mod render;
pub mod types;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tracing::{debug, info};

use data::{Lexicon, LexiconFile, normalize};
use render::Renderer;
pub use types::{DisplayOptions, Pos, Relation, Report, Search, bit};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("lexical database is not open (use reopendb)")]
    Unavailable,

    #[error("cannot read lexical database {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexical database: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("synset {from} points at unknown synset {target}")]
    DanglingPointer { from: String, target: String },

    #[error("duplicate synset id: {0}")]
    DuplicateSynset(String),
}

/// Per-form primitives the aggregator drives.
/// Implemented by `Database` for production; mock implementations used in tests.
pub trait LexicalEngine {
    /// Availability bitmask for `form` under `pos`.
    fn is_defined(&self, form: &str, pos: Pos) -> Result<u32, EngineError>;

    /// Formatted report for `form`; empty when the form has nothing to show.
    fn find_info(
        &self,
        form: &str,
        pos: Pos,
        report: Report,
        options: &DisplayOptions,
    ) -> Result<String, EngineError>;

    /// Stateful base-form cursor. `Some(seed)` restarts it on a new word,
    /// `None` continues the current one. Returns `None` once exhausted.
    fn next_morph(&self, seed: Option<&str>, pos: Pos) -> Option<String>;
}

/// JSON-backed lexical database.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    lexicon: Option<Lexicon>,
    cursor: RefCell<VecDeque<String>>,
    abort: Arc<AtomicBool>,
}

impl Database {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let mut db = Self::closed(path);
        db.reopen()?;
        Ok(db)
    }

    /// A database bound to `path` that has not been loaded yet.
    pub fn closed(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lexicon: None,
            cursor: RefCell::new(VecDeque::new()),
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Drop any loaded data and load `path` again.
    pub fn reopen(&mut self) -> Result<(), EngineError> {
        self.close();
        let lexicon = load(&self.path)?;
        info!(
            path = %self.path.display(),
            synsets = lexicon.synset_count(),
            "lexical database opened"
        );
        self.lexicon = Some(lexicon);
        Ok(())
    }

    pub fn close(&mut self) {
        self.lexicon = None;
        self.cursor.borrow_mut().clear();
    }

    pub fn is_open(&self) -> bool {
        self.lexicon.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flag polled while rendering; setting it cuts the current report short.
    pub fn abort_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort)
    }

    fn lexicon(&self) -> Result<&Lexicon, EngineError> {
        self.lexicon.as_ref().ok_or(EngineError::Unavailable)
    }
}

fn load(path: &Path) -> Result<Lexicon, EngineError> {
    let text = std::fs::read_to_string(path).map_err(|source| EngineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: LexiconFile = serde_json::from_str(&text)?;
    Lexicon::from_file(file)
}

impl LexicalEngine for Database {
    fn is_defined(&self, form: &str, pos: Pos) -> Result<u32, EngineError> {
        let lexicon = self.lexicon()?;
        let key = normalize(form);
        let senses = lexicon.senses(pos, &key);
        if senses.is_empty() {
            return Ok(0);
        }

        let mut mask = [Search::Synonyms, Search::Frequency, Search::Overview]
            .into_iter()
            .filter_map(|s| bit(s.number()))
            .fold(0, |acc, b| acc | b);

        for &idx in senses {
            for &(relation, _) in &lexicon.synset(idx).pointers {
                mask |= bit(relation.number()).unwrap_or(0);
                if relation == Relation::Hypernym {
                    mask |= bit(Search::Coordinates.number()).unwrap_or(0);
                }
                if Relation::MERONYMS.contains(&relation) {
                    mask |= bit(Relation::Meronym.number()).unwrap_or(0)
                        | bit(Search::MeronymTree.number()).unwrap_or(0);
                }
                if Relation::HOLONYMS.contains(&relation) {
                    mask |= bit(Relation::Holonym.number()).unwrap_or(0)
                        | bit(Search::HolonymTree.number()).unwrap_or(0);
                }
            }
        }

        debug!(form, pos = pos.name(), mask, "is_defined");
        Ok(mask)
    }

    fn find_info(
        &self,
        form: &str,
        pos: Pos,
        report: Report,
        options: &DisplayOptions,
    ) -> Result<String, EngineError> {
        let lexicon = self.lexicon()?;
        let text = Renderer::new(lexicon, options, &self.abort).render(
            form,
            &normalize(form),
            pos,
            report,
        );
        debug!(form, pos = pos.name(), bytes = text.len(), "find_info");
        Ok(text)
    }

    fn next_morph(&self, seed: Option<&str>, pos: Pos) -> Option<String> {
        let mut cursor = self.cursor.borrow_mut();
        if let Some(word) = seed {
            cursor.clear();
            if let Some(lexicon) = &self.lexicon {
                cursor.extend(morph::base_forms(lexicon, word, pos));
            }
        }
        cursor.pop_front()
    }
}
