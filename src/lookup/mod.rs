//! Morphological aggregation: expand a surface form into the forms worth querying,
//! query the engine once per form, and merge the answers into one bounded result.

mod bounded;
mod expander;

pub use bounded::BoundedText;
pub use expander::{Variants, expand};

use std::fmt;

use tracing::{debug, warn};

use crate::lexicon::{DisplayOptions, EngineError, LexicalEngine, Pos, Report, Search};

/// Size of the legacy search result buffer; the default text capacity.
pub const DEFAULT_CAPACITY: usize = 200 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid part of speech {0}: expected 1 (noun), 2 (verb), 3 (adj) or 4 (adv)")]
    InvalidCategory(i64),

    #[error("unknown search type {0}")]
    UnknownSearchKind(i64),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Shape of a per-form answer, which decides how answers are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Bitmask,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Which searches are available for the word.
    Definedness,
    Report(Report),
}

impl SearchKind {
    /// Parse a shell search number. Negative numbers ask for relations to be
    /// followed transitively.
    pub fn from_number(n: i64, sense: u32) -> Result<SearchKind, LookupError> {
        let search = u32::try_from(n.unsigned_abs())
            .ok()
            .and_then(Search::from_number)
            .ok_or(LookupError::UnknownSearchKind(n))?;
        Ok(SearchKind::Report(Report {
            search,
            recursive: n < 0,
            sense,
        }))
    }

    pub fn result_kind(&self) -> ResultKind {
        match self {
            SearchKind::Definedness => ResultKind::Bitmask,
            SearchKind::Report(_) => ResultKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    word: String,
    pos: Pos,
    kind: SearchKind,
}

impl Query {
    pub fn new(
        word: impl Into<String>,
        category: i64,
        kind: SearchKind,
    ) -> Result<Self, LookupError> {
        let pos = Pos::from_number(category).ok_or(LookupError::InvalidCategory(category))?;
        Ok(Self {
            word: word.into(),
            pos,
            kind,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregatedResult {
    Bitmask(u32),
    /// `truncated` is set when capacity ran out and later forms were left out.
    Text { text: String, truncated: bool },
}

impl fmt::Display for AggregatedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregatedResult::Bitmask(mask) => write!(f, "{mask}"),
            AggregatedResult::Text { text, .. } => f.write_str(text),
        }
    }
}

/// Runs queries against one engine with a fixed text capacity.
pub struct Aggregator<'e, E: LexicalEngine + ?Sized> {
    engine: &'e E,
    capacity: usize,
}

impl<'e, E: LexicalEngine + ?Sized> Aggregator<'e, E> {
    pub fn new(engine: &'e E, capacity: usize) -> Self {
        Self { engine, capacity }
    }

    /// Query every form of `query.word()` and merge the answers.
    ///
    /// Bitmasks are OR-ed together. Text blocks are concatenated in expansion
    /// order; the first block that does not fit ends the run, so the result
    /// holds only whole blocks and never exceeds the capacity.
    pub fn aggregate(
        &self,
        query: &Query,
        options: &DisplayOptions,
    ) -> Result<AggregatedResult, LookupError> {
        let pos = query.pos();
        match query.kind() {
            SearchKind::Definedness => {
                let mut mask = 0;
                for form in expand(self.engine, query.word(), pos) {
                    let bits = self.engine.is_defined(&form, pos)?;
                    debug!(form = %form, bits, "form queried");
                    mask |= bits;
                }
                Ok(AggregatedResult::Bitmask(mask))
            }
            SearchKind::Report(report) => {
                let mut text = BoundedText::with_capacity(self.capacity);
                let mut truncated = false;

                for form in expand(self.engine, query.word(), pos) {
                    let block = self.engine.find_info(&form, pos, report, options)?;
                    debug!(form = %form, bytes = block.len(), "form queried");
                    if !text.try_append(&block) {
                        warn!(
                            word = %query.word(),
                            form = %form,
                            bytes = block.len(),
                            remaining = text.remaining(),
                            "result capacity reached, remaining forms omitted"
                        );
                        truncated = true;
                        break;
                    }
                }

                Ok(AggregatedResult::Text {
                    text: text.into_string(),
                    truncated,
                })
            }
        }
    }
}
