//! Air duct tour: visit every numbered point of interest in a grid maze,
//! starting from `0`, in as few steps as possible.
//!
//! Pairwise distances come from exploring the grid once per label; the tour
//! itself is a search over `(current label, visited bitmask)`.

use crate::encoder::StateEncoder;
use crate::error::{Error, ParseError, SearchError};
use crate::grid::{Grid, GridWalk};
use crate::heap::Cost;
use crate::search::{Search, SearchConfig};
use crate::{Answer, PuzzleOps, Result};

/// Label every tour starts from.
pub const START_LABEL: char = '0';

/// Visited bitmask width.
const MAX_LABELS: usize = u32::BITS as usize;

/// Position in the tour: which label we stand on and which we have seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tour {
    pub at: usize,
    pub visited: u32,
}

/// All-pairs distances between the labelled points of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ducts {
    /// Labels in index order; index 0 is always [`START_LABEL`].
    labels: Vec<char>,
    distances: Vec<Vec<Cost>>,
    /// Whether the tour must end back at the start.
    returning: bool,
}

impl Ducts {
    /// Measures every label-to-label distance through `grid`.
    pub fn from_grid(grid: &Grid, config: SearchConfig) -> Result<Self> {
        let mut points = grid.labels();
        let start = points
            .iter()
            .position(|&(label, _)| label == START_LABEL)
            .ok_or_else(|| ParseError::new(0, format!("no '{START_LABEL}' label in the maze")))?;
        points.swap(0, start);
        points[1..].sort_unstable();

        if points.len() > MAX_LABELS {
            return Err(ParseError::new(
                0,
                format!("{} labels exceed the limit of {MAX_LABELS}", points.len()),
            )
            .into());
        }

        let walk = GridWalk::everywhere(grid);
        let mut distances = Vec::with_capacity(points.len());
        for &(_, from) in &points {
            let reached = Search::new(&walk).with_config(config).explore(from, None)?;
            let row = points
                .iter()
                .map(|(_, to)| reached.get(to).copied().ok_or(SearchError::NoSolution))
                .collect::<Result<Vec<Cost>, SearchError>>()?;
            distances.push(row);
        }

        Ok(Self {
            labels: points.into_iter().map(|(label, _)| label).collect(),
            distances,
            returning: false,
        })
    }

    /// Builds a tour directly from a distance matrix; label `i` is named
    /// by the digit `i`.
    pub fn from_distances(distances: Vec<Vec<Cost>>) -> Result<Self, SearchError> {
        let count = distances.len();
        if count == 0 || count > MAX_LABELS || distances.iter().any(|row| row.len() != count) {
            return Err(SearchError::InvalidState(format!(
                "distance matrix must be square with 1..={MAX_LABELS} rows"
            )));
        }

        Ok(Self {
            labels: (0..count)
                .map(|i| char::from_digit(i as u32, 36).unwrap_or('?'))
                .collect(),
            distances,
            returning: false,
        })
    }

    /// Requires the tour to finish back on the start label.
    pub fn returning(mut self, returning: bool) -> Self {
        self.returning = returning;
        self
    }

    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    pub fn distance(&self, from: usize, to: usize) -> Cost {
        self.distances[from][to]
    }

    fn all_visited(&self) -> u32 {
        u32::MAX >> (MAX_LABELS - self.labels.len())
    }

    /// Length of the shortest tour.
    pub fn shortest_tour(&self, config: SearchConfig) -> Result<Cost, SearchError> {
        let start = Tour { at: 0, visited: 1 };
        Ok(Search::new(self).with_config(config).shortest(start)?.cost)
    }

    /// The shortest tour as a label sequence.
    pub fn tour_order(&self, config: SearchConfig) -> Result<String, SearchError> {
        let start = Tour { at: 0, visited: 1 };
        let solution = Search::new(self).with_config(config).shortest(start)?;
        Ok(solution.path.iter().map(|tour| self.labels[tour.at]).collect())
    }
}

impl StateEncoder for Ducts {
    type State = Tour;
    type Key = Tour;

    fn signature(&self, state: &Tour) -> Tour {
        *state
    }

    fn expand(&self, state: &Tour) -> Vec<(Tour, Cost)> {
        let full = self.all_visited();
        if state.visited == full {
            // only the closing leg back to the start remains
            return if self.returning && state.at != 0 {
                vec![(Tour { at: 0, visited: full }, self.distance(state.at, 0))]
            } else {
                Vec::new()
            };
        }

        (0..self.labels.len())
            .filter(|&next| state.visited & (1 << next) == 0)
            .map(|next| {
                let child = Tour {
                    at: next,
                    visited: state.visited | (1 << next),
                };
                (child, self.distance(state.at, next))
            })
            .collect()
    }

    fn is_goal(&self, state: &Tour) -> bool {
        state.visited == self.all_visited() && (!self.returning || state.at == 0)
    }
}

/// Published example maze.
pub const SAMPLE: &[&str] = &[
    "###########",
    "#0.1.....2#",
    "#.#######.#",
    "#4.......3#",
    "###########",
];

pub struct DuctsPuzzle;

impl PuzzleOps for DuctsPuzzle {
    fn name(&self) -> &'static str {
        "ducts"
    }

    fn description(&self) -> &'static str {
        "Air duct tour: visit every numbered location, then return to 0"
    }

    fn sample(&self) -> &'static [&'static str] {
        SAMPLE
    }

    fn solve(&self, lines: &[String], part: u8, config: SearchConfig) -> Result<Answer> {
        let returning = match part {
            1 => false,
            2 => true,
            _ => {
                return Err(Error::UnknownPart {
                    puzzle: self.name(),
                    part,
                })
            }
        };
        let grid = Grid::parse(lines)?;
        let ducts = Ducts::from_grid(&grid, config)?.returning(returning);
        Ok(ducts.shortest_tour(config)?.into())
    }
}
