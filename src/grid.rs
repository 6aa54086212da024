//! Character-grid mazes and the point-to-point walker over them.
//!
//! The grid is stored as a flat row-major array. `#` is a wall; every other
//! character is open floor, and open characters other than `.` label a
//! point of interest.

use crate::encoder::StateEncoder;
use crate::error::ParseError;
use crate::geometry::{manhattan, neighbours, Point};
use crate::heap::Cost;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Labelled(char),
}

impl Cell {
    fn from_char(c: char) -> Self {
        match c {
            '#' => Cell::Wall,
            '.' => Cell::Open,
            label => Cell::Labelled(label),
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
            Cell::Labelled(label) => label,
        }
    }
}

/// A rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// A wall-free grid.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::Open; width * height],
            width,
            height,
        }
    }

    /// Parses a rectangular block of lines. Blank lines are skipped.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_no, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim_end();
            if line.is_empty() {
                continue;
            }

            let row_width = line.chars().count();
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(ParseError::new(
                        line_no + 1,
                        format!("row has {row_width} cells, expected {expected}"),
                    ));
                }
                Some(_) => {}
            }

            cells.extend(line.chars().map(Cell::from_char));
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::new(0, "empty grid"))?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Converts a point to a flat index, or `None` when off the grid.
    #[inline]
    pub fn point_to_idx(&self, (x, y): Point) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Converts a flat index back to a point.
    #[inline]
    pub fn idx_to_point(&self, cell_index: usize) -> Point {
        (
            (cell_index % self.width) as i32,
            (cell_index / self.width) as i32,
        )
    }

    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.point_to_idx(point).map(|idx| self.cells[idx])
    }

    #[inline]
    pub fn is_open(&self, point: Point) -> bool {
        matches!(self.cell(point), Some(Cell::Open | Cell::Labelled(_)))
    }

    /// Every labelled cell, sorted by label.
    pub fn labels(&self) -> Vec<(char, Point)> {
        let mut labels: Vec<(char, Point)> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| match cell {
                Cell::Labelled(label) => Some((*label, self.idx_to_point(idx))),
                _ => None,
            })
            .collect();
        labels.sort_unstable();
        labels
    }

    pub fn find(&self, label: char) -> Option<Point> {
        self.cells
            .iter()
            .position(|&cell| cell == Cell::Labelled(label))
            .map(|idx| self.idx_to_point(idx))
    }

    /// Renders the grid, marking every route cell with `O`.
    pub fn format_route(&self, route: &[Point]) -> String {
        let mut marked = vec![false; self.cells.len()];
        for &point in route {
            if let Some(idx) = self.point_to_idx(point) {
                marked[idx] = true;
            }
        }

        let mut output = String::with_capacity((self.width + 1) * self.height);
        for (idx, cell) in self.cells.iter().enumerate() {
            output.push(if marked[idx] { 'O' } else { cell.to_char() });
            if (idx + 1) % self.width == 0 {
                output.push('\n');
            }
        }
        output
    }
}

/// Walks a [`Grid`] one open cell at a time.
///
/// With a target set this is an A* point-to-point search; without one it is
/// only useful for [`crate::Search::explore`].
pub struct GridWalk<'a> {
    grid: &'a Grid,
    target: Option<Point>,
}

impl<'a> GridWalk<'a> {
    pub fn to(grid: &'a Grid, target: Point) -> Self {
        Self {
            grid,
            target: Some(target),
        }
    }

    pub fn everywhere(grid: &'a Grid) -> Self {
        Self { grid, target: None }
    }
}

impl StateEncoder for GridWalk<'_> {
    type State = Point;
    type Key = Point;

    fn signature(&self, state: &Point) -> Point {
        *state
    }

    fn expand(&self, state: &Point) -> Vec<(Point, Cost)> {
        neighbours(*state)
            .filter(|&next| self.grid.is_open(next))
            .map(|next| (next, 1))
            .collect()
    }

    fn is_goal(&self, state: &Point) -> bool {
        self.target == Some(*state)
    }

    fn heuristic(&self, state: &Point) -> Cost {
        self.target.map_or(0, |target| manhattan(*state, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::search::Search;

    #[test]
    fn test_open_grid_shortest_path_is_manhattan() {
        let grid = Grid::open(5, 5);
        let walk = GridWalk::to(&grid, (4, 4));
        let solution = Search::new(&walk).shortest((0, 0)).unwrap();

        assert_eq!(solution.cost, 8);
        assert_eq!(solution.steps(), 8);
        assert_eq!(solution.path.first(), Some(&(0, 0)));
        assert_eq!(solution.goal(), &(4, 4));
    }

    #[test]
    fn test_path_is_contiguous_and_avoids_walls() {
        let grid = Grid::parse(&["#######", "#S..#.#", "#.#.#.#", "#.#...#", "#######"]).unwrap();
        let start = grid.find('S').unwrap();
        let walk = GridWalk::to(&grid, (5, 1));
        let solution = Search::new(&walk).shortest(start).unwrap();

        assert_eq!(solution.cost, 8);
        for pair in solution.path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1);
        }
        assert!(solution.path.iter().all(|&p| grid.is_open(p)));
    }

    #[test]
    fn test_walled_off_target_has_no_solution() {
        let grid = Grid::parse(&["#####", "#.#.#", "#####"]).unwrap();
        let walk = GridWalk::to(&grid, (3, 1));

        assert_eq!(
            Search::new(&walk).shortest((1, 1)).unwrap_err(),
            SearchError::NoSolution
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::parse(&["###", "#.", "###"]).unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_labels_sorted_and_findable() {
        let grid = Grid::parse(&["#####", "#1.0#", "#####"]).unwrap();
        assert_eq!(grid.labels(), vec![('0', (3, 1)), ('1', (1, 1))]);
        assert_eq!(grid.find('1'), Some((1, 1)));
        assert_eq!(grid.find('7'), None);
    }

    #[test]
    fn test_point_index_roundtrip() {
        let grid = Grid::open(4, 3);
        for idx in 0..12 {
            assert_eq!(grid.point_to_idx(grid.idx_to_point(idx)), Some(idx));
        }
        assert_eq!(grid.point_to_idx((-1, 0)), None);
        assert_eq!(grid.point_to_idx((4, 0)), None);
    }

    #[test]
    fn test_format_route_snapshot() {
        let grid = Grid::parse(&["#####", "#0..#", "##.##", "#1..#", "#####"]).unwrap();
        let route = [(1, 1), (2, 1), (2, 2), (2, 3), (1, 3)];
        insta::assert_snapshot!(grid.format_route(&route), @r"
        #####
        #OO.#
        ##O##
        #OO.#
        #####
        ");
    }
}
