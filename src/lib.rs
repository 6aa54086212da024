//! Best-First Search Library
//!
//! Provides a binary min-heap, a generic Dijkstra/A* search driver over
//! implicit graphs, and the puzzle domains that plug into it.

pub mod encoder;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heap;
pub mod input;
pub mod puzzles;
mod search;

use std::fmt;

pub use encoder::StateEncoder;
pub use error::{Error, ParseError, Result, SearchError};
pub use heap::{Cost, HeapItem, MinHeap};
pub use search::{Found, Search, SearchConfig, SearchStats, Solution};

/// The value a puzzle part evaluates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Number(u64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Answer {
    fn from(n: u64) -> Self {
        Answer::Number(n)
    }
}

impl From<usize> for Answer {
    fn from(n: usize) -> Self {
        Answer::Number(n as u64)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

/// Trait that erases each domain's state and encoder types for dynamic
/// dispatch.
///
/// Every puzzle parses its own input lines and drives the search engine;
/// callers only see names, parts and answers.
pub trait PuzzleOps: Sync {
    /// Short identifier used on the command line.
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Built-in example input.
    fn sample(&self) -> &'static [&'static str];
    fn solve(&self, lines: &[String], part: u8, config: SearchConfig) -> Result<Answer>;
}
