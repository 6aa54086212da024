//! Cubicle maze generated from the office designer's favourite number.
//!
//! A location `(x, y)` is a wall when
//! `x*x + 3*x + 2*x*y + y + y*y + favourite` has an odd number of set bits.
//! The walk starts at `(1, 1)`; each orthogonal step costs 1.

use crate::encoder::StateEncoder;
use crate::error::ParseError;
use crate::geometry::{manhattan, neighbours, Point};
use crate::heap::Cost;
use crate::search::{Search, SearchConfig};
use crate::{Answer, PuzzleOps, Result};

/// Where every walk begins.
pub const START: Point = (1, 1);

/// Target used when the input names none.
pub const DEFAULT_TARGET: Point = (31, 39);

/// Step limit for the reachable-locations count.
pub const STEP_LIMIT: Cost = 50;

/// Slack added around the target when bounding the maze.
const EXTENT_MARGIN: i32 = 64;

/// The maze layout plus the location being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cubicles {
    favourite: u64,
    target: Point,
    /// Both coordinates must lie in `0..extent`.
    extent: i32,
}

impl Cubicles {
    /// A target too far out to bound gets the largest extent.
    pub fn new(favourite: u64, target: Point) -> Self {
        Self {
            favourite,
            target,
            extent: checked_extent(target).unwrap_or(i32::MAX),
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether `(x, y)` is a wall. Anything outside the maze counts as one.
    pub fn is_wall(&self, (x, y): Point) -> bool {
        if !(0..self.extent).contains(&x) || !(0..self.extent).contains(&y) {
            return true;
        }
        // u128 holds the sum for any i32 coordinates and u64 favourite
        let (x, y) = (x as u128, y as u128);
        let value = x * x + 3 * x + 2 * x * y + y + y * y + u128::from(self.favourite);
        value.count_ones() % 2 == 1
    }

    /// Fewest steps from [`START`] to the target.
    pub fn fewest_steps(&self, config: SearchConfig) -> Result<Cost, crate::SearchError> {
        Ok(Search::new(self).with_config(config).shortest(START)?.cost)
    }

    /// Number of distinct locations reachable in at most `limit` steps.
    pub fn reachable_within(&self, limit: Cost, config: SearchConfig) -> Result<usize, crate::SearchError> {
        let settled = Search::new(self)
            .with_config(config)
            .explore(START, Some(limit))?;
        Ok(settled.len())
    }

    /// Draws the top-left `width` x `height` corner of the maze.
    pub fn render(&self, width: i32, height: i32) -> String {
        let mut output = String::new();
        for y in 0..height {
            for x in 0..width {
                output.push(if self.is_wall((x, y)) { '#' } else { '.' });
            }
            output.push('\n');
        }
        output
    }
}

impl StateEncoder for Cubicles {
    type State = Point;
    type Key = Point;

    fn signature(&self, state: &Point) -> Point {
        *state
    }

    fn expand(&self, state: &Point) -> Vec<(Point, Cost)> {
        neighbours(*state)
            .filter(|&next| !self.is_wall(next))
            .map(|next| (next, 1))
            .collect()
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.target
    }

    fn heuristic(&self, state: &Point) -> Cost {
        manhattan(*state, self.target)
    }
}

/// Side length of the bounded maze around `target`, if it fits in an `i32`.
fn checked_extent(target: Point) -> Option<i32> {
    target
        .0
        .max(target.1)
        .max(0)
        .checked_mul(2)?
        .checked_add(EXTENT_MARGIN)
}

/// Reads the favourite number and an optional `x,y` target line.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Cubicles, ParseError> {
    let mut lines = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    let (line_no, first) = lines
        .next()
        .ok_or_else(|| ParseError::new(0, "missing favourite number"))?;
    let favourite = first
        .parse()
        .map_err(|_| ParseError::new(line_no + 1, format!("invalid favourite number '{first}'")))?;

    let target = match lines.next() {
        None => DEFAULT_TARGET,
        Some((line_no, text)) => {
            let invalid = || ParseError::new(line_no + 1, format!("invalid target '{text}'"));
            let (x, y) = text.split_once(',').ok_or_else(invalid)?;
            let x: i32 = x.trim().parse().map_err(|_| invalid())?;
            let y: i32 = y.trim().parse().map_err(|_| invalid())?;
            if x < 0 || y < 0 || checked_extent((x, y)).is_none() {
                return Err(invalid());
            }
            (x, y)
        }
    };

    Ok(Cubicles::new(favourite, target))
}

/// Published example: favourite number 10, target 7,4.
pub const SAMPLE: &[&str] = &["10", "7,4"];

pub struct CubiclesPuzzle;

impl PuzzleOps for CubiclesPuzzle {
    fn name(&self) -> &'static str {
        "cubicles"
    }

    fn description(&self) -> &'static str {
        "Cubicle maze: fewest steps to a target, locations within 50 steps"
    }

    fn sample(&self) -> &'static [&'static str] {
        SAMPLE
    }

    fn solve(&self, lines: &[String], part: u8, config: SearchConfig) -> Result<Answer> {
        let maze = parse(lines)?;
        match part {
            1 => Ok(maze.fewest_steps(config)?.into()),
            2 => Ok(maze.reachable_within(STEP_LIMIT, config)?.into()),
            _ => Err(crate::Error::UnknownPart {
                puzzle: self.name(),
                part,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;

    fn sample_maze() -> Cubicles {
        parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_sample_layout_snapshot() {
        insta::assert_snapshot!(sample_maze().render(10, 7), @r"
        .#.####.##
        ..#..#...#
        #....##...
        ###.#.###.
        .##..#..#.
        ..##....#.
        #...##.###
        ");
    }

    #[test]
    fn test_sample_fewest_steps() {
        assert_eq!(sample_maze().fewest_steps(SearchConfig::default()).unwrap(), 11);
    }

    #[test]
    fn test_reachable_counts_grow_with_limit() {
        let maze = sample_maze();
        let config = SearchConfig::default();
        assert_eq!(maze.reachable_within(0, config).unwrap(), 1);
        assert_eq!(maze.reachable_within(1, config).unwrap(), 3);
        assert_eq!(maze.reachable_within(2, config).unwrap(), 5);
        assert_eq!(maze.reachable_within(STEP_LIMIT, config).unwrap(), 151);
    }

    #[test]
    fn test_negative_coordinates_are_walls() {
        let maze = sample_maze();
        assert!(maze.is_wall((-1, 0)));
        assert!(maze.is_wall((0, -1)));
        assert!(!maze.is_wall((0, 0)));
    }

    #[test]
    fn test_walled_in_target_has_no_solution() {
        // (1, 0) is a wall in the sample maze
        let maze = Cubicles::new(10, (1, 0));
        assert_eq!(
            maze.fewest_steps(SearchConfig::default()).unwrap_err(),
            SearchError::NoSolution
        );
    }

    #[test]
    fn test_default_target_when_omitted() {
        assert_eq!(parse(&["1358"]).unwrap().target(), DEFAULT_TARGET);
    }

    #[test]
    fn test_parse_rejects_bad_target() {
        let err = parse(&["10", "seven,four"]).unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_parse_rejects_target_beyond_bounds() {
        let err = parse(&["10", "2000000000,1"]).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(parse(&["10", "1000000000,1"]).is_ok());
    }

    #[test]
    fn test_largest_favourite_number_does_not_overflow() {
        let maze = parse(&["18446744073709551615", "7,4"]).unwrap();
        assert!(!maze.is_wall((0, 0)));
        assert!(!maze.is_wall((1, 1)));
        assert_eq!(
            maze.fewest_steps(SearchConfig::default()).unwrap_err(),
            SearchError::NoSolution
        );
    }

    #[test]
    fn test_far_target_extent_is_clamped() {
        let maze = Cubicles::new(10, (i32::MAX, 0));
        assert!(!maze.is_wall((0, 0)));
    }
}
