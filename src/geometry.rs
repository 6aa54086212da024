//! 2D lattice coordinates and the four orthogonal moves.
//!
//! `x` grows to the right and `y` grows downward, so `Up` decreases `y`.

/// A lattice point `(x, y)`.
pub type Point = (i32, i32);

/// One orthogonal step on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All four directions in `U, D, L, R` order.
///
/// Ordering note: the vault reads its door hash in exactly this order.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Offset applied to a point when moving this way.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub const fn step(self, (x, y): Point) -> Point {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }

    /// Single-letter name used in route strings.
    pub const fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// The four orthogonal neighbours of `point`, possibly out of any bounds.
pub fn neighbours(point: Point) -> impl Iterator<Item = Point> {
    DIRECTIONS.into_iter().map(move |direction| direction.step(point))
}

/// Taxicab distance; an admissible, consistent heuristic for unit-cost
/// orthogonal moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_steps_cancel() {
        let origin = (3, -2);
        assert_eq!(Direction::Down.step(Direction::Up.step(origin)), origin);
        assert_eq!(Direction::Left.step(Direction::Right.step(origin)), origin);
    }

    #[test]
    fn test_neighbours_are_at_distance_one() {
        let all: Vec<Point> = neighbours((0, 0)).collect();
        assert_eq!(all, vec![(0, -1), (0, 1), (-1, 0), (1, 0)]);
        assert!(all.iter().all(|&p| manhattan(p, (0, 0)) == 1));
    }

    #[test]
    fn test_manhattan_is_symmetric() {
        assert_eq!(manhattan((1, 1), (7, 4)), 9);
        assert_eq!(manhattan((7, 4), (1, 1)), 9);
        assert_eq!(manhattan((-2, 5), (-2, 5)), 0);
    }
}
