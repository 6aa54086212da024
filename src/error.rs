//! Error types for the search engine, input parsing and the CLI.

use thiserror::Error;

/// Failures raised by the heap and the search driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `extract_min` was called on an empty heap.
    #[error("extract_min called on an empty heap")]
    EmptyHeap,
    /// The frontier drained without reaching a goal state.
    #[error("no solution: every reachable state was explored without reaching a goal")]
    NoSolution,
    /// An encoder produced a state or cost the engine cannot accept.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// The configured expansion budget ran out before the search finished.
    #[error("search budget exhausted after {expanded} expansions")]
    BudgetExhausted { expanded: usize },
}

/// Puzzle input that could not be turned into an initial state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based input line number (0 when the input as a whole is at fault).
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Top-level error for puzzle runs and the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown puzzle '{0}'")]
    UnknownPuzzle(String),
    #[error("puzzle '{puzzle}' has no part {part}")]
    UnknownPart { puzzle: &'static str, part: u8 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
