use crate::lexicon::EngineError;
use crate::lookup::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("{0}")]
    Usage(&'static str),

    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("expected an integer, got '{0}'")]
    InvalidNumber(String),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("bit number {0} out of range (0-31)")]
    BitOutOfRange(i64),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("could not encode tree: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("session state is unusable after an earlier failure")]
    Poisoned,

    #[error("worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl From<EngineError> for ShellError {
    fn from(e: EngineError) -> Self {
        ShellError::Lookup(LookupError::Engine(e))
    }
}

impl ShellError {
    /// Process exit status for a failed one-shot command.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShellError::Usage(_)
            | ShellError::Empty
            | ShellError::UnknownCommand(_)
            | ShellError::InvalidNumber(_)
            | ShellError::UnterminatedQuote => 2,
            _ => 1,
        }
    }
}
