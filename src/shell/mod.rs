//! Command dispatch: maps named commands to lookups against one session.

mod errors;
mod help;
mod params;

pub use errors::ShellError;
pub use help::help_text;
pub use params::{Command, SearchArgs, Toggle, tokenize};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::lexicon::{Database, DisplayOptions, Pos, Search, bit};
use crate::lookup::{Aggregator, LookupError, Query, SearchKind};
use crate::tree;

/// Everything a command can read or change: the database, the display
/// switches, and the result capacity.
pub struct Session {
    db: Database,
    options: DisplayOptions,
    capacity: usize,
}

impl Session {
    pub fn new(db: Database, capacity: usize) -> Self {
        Self {
            db,
            options: DisplayOptions::default(),
            capacity,
        }
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn execute(&mut self, command: &Command) -> Result<String, ShellError> {
        match command {
            Command::FindValidSearches { word, pos } => {
                let query = Query::new(word.as_str(), *pos, SearchKind::Definedness)?;
                self.aggregate(&query)
            }
            Command::Bit { n } => {
                let mask = u32::try_from(*n)
                    .ok()
                    .and_then(bit)
                    .ok_or(ShellError::BitOutOfRange(*n))?;
                Ok(mask.to_string())
            }
            Command::Search(args) => self.search(args),
            Command::SearchTree(args) => {
                let report = self.search(args)?;
                Ok(serde_json::to_string_pretty(&tree::parse_report(&report))?)
            }
            Command::SetToggle { toggle, on } => {
                let on = *on;
                match toggle {
                    Toggle::Glosses => self.options.glosses = on,
                    Toggle::FileInfo => self.options.file_info = on,
                    Toggle::ByteOffset => self.options.byte_offsets = on,
                    Toggle::SenseFlag => self.options.sense_numbers = on,
                }
                Ok(String::new())
            }
            Command::ContextualHelp { pos, search } => {
                let search_kind = u32::try_from(search.unsigned_abs())
                    .ok()
                    .and_then(Search::from_number)
                    .ok_or(LookupError::UnknownSearchKind(*search))?;
                let pos = Pos::from_number(*pos).ok_or(LookupError::InvalidCategory(*pos))?;
                Ok(help_text(pos, search_kind).to_string())
            }
            Command::ReopenDb => {
                self.db.reopen()?;
                Ok(String::new())
            }
            Command::AbortSearch => {
                self.db.abort_handle().store(true, Ordering::Relaxed);
                Ok(String::new())
            }
        }
    }

    fn search(&self, args: &SearchArgs) -> Result<String, ShellError> {
        let kind = SearchKind::from_number(args.search, args.sense)?;
        let query = Query::new(args.word.as_str(), args.pos, kind)?;
        self.aggregate(&query)
    }

    fn aggregate(&self, query: &Query) -> Result<String, ShellError> {
        let result = Aggregator::new(&self.db, self.capacity).aggregate(query, &self.options)?;
        Ok(result.to_string())
    }
}

/// Async front for a `Session`. Commands run on the blocking pool one at a
/// time; `abortsearch` bypasses the session lock so it can interrupt a search
/// that is still running.
#[derive(Clone)]
pub struct Shell {
    session: Arc<Mutex<Session>>,
    abort: Arc<AtomicBool>,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        let abort = session.db.abort_handle();
        Self {
            session: Arc::new(Mutex::new(session)),
            abort,
        }
    }

    /// Request that the running search stop early.
    pub fn abort(&self) {
        info!("search abort requested");
        self.abort.store(true, Ordering::Relaxed);
    }

    /// Tokenize, parse, and run one command line.
    pub async fn run_line(&self, line: &str) -> Result<String, ShellError> {
        let argv = tokenize(line)?;
        self.dispatch(&argv).await
    }

    pub async fn dispatch(&self, argv: &[String]) -> Result<String, ShellError> {
        let command = Command::parse(argv)?;
        info!(args = ?&argv[1..], "cmd:{}", command.name());

        match command {
            Command::AbortSearch => {
                self.abort();
                return Ok(String::new());
            }
            Command::Search(_) | Command::SearchTree(_) => {
                self.abort.store(false, Ordering::Relaxed);
            }
            _ => {}
        }

        let session = Arc::clone(&self.session);
        tokio::task::spawn_blocking(move || {
            let mut session = session.lock().map_err(|_| ShellError::Poisoned)?;
            session.execute(&command)
        })
        .await?
    }

    pub fn options(&self) -> Result<DisplayOptions, ShellError> {
        Ok(self
            .session
            .lock()
            .map_err(|_| ShellError::Poisoned)?
            .options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../dict/lexicon.json");

    fn sample_shell(capacity: usize) -> (tempfile::NamedTempFile, Shell) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let db = Database::open(file.path()).unwrap();
        (file, Shell::new(Session::new(db, capacity)))
    }

    #[tokio::test]
    async fn findvalidsearches_unions_morphological_forms() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);

        let base: u32 = shell.run_line("findvalidsearches run 2").await.unwrap().parse().unwrap();
        let inflected: u32 = shell
            .run_line("findvalidsearches running 2")
            .await
            .unwrap()
            .parse()
            .unwrap();

        assert_ne!(base, 0);
        assert_eq!(inflected, base, "'running' has no verb sense of its own");
    }

    #[tokio::test]
    async fn search_appends_base_form_reports() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        let text = shell.run_line("search dogs 1 23 0").await.unwrap();
        assert!(text.contains("Synonyms of noun dog"), "got: {text}");
    }

    #[tokio::test]
    async fn overview_uses_literal_noun_sense() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        let text = shell.run_line("search running 1 31 0").await.unwrap();
        assert!(text.contains("The noun running has 1 sense"), "got: {text}");
    }

    #[tokio::test]
    async fn tiny_capacity_drops_later_forms() {
        let (_file, shell) = sample_shell(0);
        let text = shell.run_line("search dogs 1 23 0").await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn toggles_change_rendering() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);

        let with_gloss = shell.run_line("search wolf 1 23 0").await.unwrap();
        assert!(with_gloss.contains(" -- ("), "got: {with_gloss}");

        shell.run_line("glosses 0").await.unwrap();
        shell.run_line("byteoffset 1").await.unwrap();
        let options = shell.options().unwrap();
        assert!(!options.glosses);
        assert!(options.byte_offsets);

        let text = shell.run_line("search wolf 1 23 0").await.unwrap();
        assert!(!text.contains(" -- ("), "got: {text}");
        assert!(text.contains("[2114100] wolf"), "got: {text}");
    }

    #[tokio::test]
    async fn searchtree_emits_json() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        shell.run_line("glosses 0").await.unwrap();
        let json = shell.run_line("searchtree dog 1 -2 1").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["sense"], 1);
        assert_eq!(value[0]["tree"]["name"], "dog, domestic dog, Canis familiaris");
        assert_eq!(value[0]["tree"]["children"][0]["name"], "canine, canid");
    }

    #[tokio::test]
    async fn bit_command() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        assert_eq!(shell.run_line("bit 3").await.unwrap(), "8");
        assert!(matches!(
            shell.run_line("bit 32").await,
            Err(ShellError::BitOutOfRange(32))
        ));
        assert!(matches!(
            shell.run_line("bit -1").await,
            Err(ShellError::BitOutOfRange(-1))
        ));
    }

    #[tokio::test]
    async fn invalid_category_and_search_are_reported() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        assert!(matches!(
            shell.run_line("search dog 9 23 0").await,
            Err(ShellError::Lookup(LookupError::InvalidCategory(9)))
        ));
        assert!(matches!(
            shell.run_line("search dog 1 77 0").await,
            Err(ShellError::Lookup(LookupError::UnknownSearchKind(77)))
        ));
        assert!(matches!(
            shell.run_line("findvalidsearches dog 0").await,
            Err(ShellError::Lookup(LookupError::InvalidCategory(0)))
        ));
    }

    #[tokio::test]
    async fn contextualhelp_validates_arguments() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        let text = shell.run_line("contextualhelp 2 3").await.unwrap();
        assert!(text.starts_with("Troponyms"), "got: {text}");
        assert!(shell.run_line("contextualhelp 5 3").await.is_err());
        assert!(shell.run_line("contextualhelp 1 40").await.is_err());
    }

    #[tokio::test]
    async fn closed_database_fails_until_reopened() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let shell = Shell::new(Session::new(
            Database::closed(file.path()),
            crate::lookup::DEFAULT_CAPACITY,
        ));

        let err = shell.run_line("search dog 1 23 0").await.unwrap_err();
        assert!(err.to_string().contains("not open"), "got: {err}");

        shell.run_line("reopendb").await.unwrap();
        assert!(shell.run_line("search dog 1 23 0").await.unwrap().contains("dog"));
    }

    #[tokio::test]
    async fn abort_is_cleared_by_next_search() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        shell.run_line("abortsearch").await.unwrap();
        assert!(shell.abort.load(Ordering::Relaxed));

        let text = shell.run_line("search dog 1 -2 0").await.unwrap();
        assert!(!shell.abort.load(Ordering::Relaxed));
        assert!(text.contains("=> entity"), "got: {text}");
    }

    #[tokio::test]
    async fn usage_errors_do_not_reach_the_session() {
        let (_file, shell) = sample_shell(crate::lookup::DEFAULT_CAPACITY);
        let err = shell.run_line("search dog").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "usage: search searchword partofspeechnum searchtypenum sensenum"
        );
    }
}
