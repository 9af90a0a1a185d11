// File: src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

/// Why a single corpus line could not be turned into records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` appeared with no open `(` before it.
    #[error("mismatched parentheses: {line}")]
    MismatchedParentheses { line: String },

    /// Neither `:` nor `->` appeared outside parentheses.
    #[error("could not parse line (no ':' or '->'): {line}")]
    MissingSeparator { line: String },
}

impl ParseError {
    /// The raw text of the offending line.
    pub fn line(&self) -> &str {
        match self {
            Self::MismatchedParentheses { line } | Self::MissingSeparator { line } => line,
        }
    }
}

/// A parse failure pinned to a source and 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub path: PathBuf,
    pub line_number: usize,
    pub error: ParseError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line_number, self.error)
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{file}:{line_number}: {source}", file = .path.display())]
    Parse {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: ParseError,
    },

    #[error("{} malformed line(s) in corpus", .0.len())]
    MalformedCorpus(Vec<LineError>),

    #[error("source unavailable: {file}: {source}", file = .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

impl From<LineError> for LookupError {
    fn from(e: LineError) -> Self {
        Self::Parse {
            path: e.path,
            line_number: e.line_number,
            source: e.error,
        }
    }
}
