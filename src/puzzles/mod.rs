//! Puzzle domains that plug into the search engine.
//!
//! Each module parses its own input, implements [`crate::StateEncoder`] for
//! its state shape and exposes a [`crate::PuzzleOps`] entry point.

pub mod cubicles;
pub mod ducts;
pub mod facility;
pub mod vault;

use crate::PuzzleOps;

/// Every registered puzzle, in listing order.
pub const PUZZLES: &[&dyn PuzzleOps] = &[
    &facility::FacilityPuzzle,
    &cubicles::CubiclesPuzzle,
    &vault::VaultPuzzle,
    &ducts::DuctsPuzzle,
];

/// Parts every puzzle answers.
pub const PARTS: [u8; 2] = [1, 2];

/// Looks a puzzle up by its command-line name.
pub fn find(name: &str) -> Option<&'static dyn PuzzleOps> {
    PUZZLES.iter().copied().find(|puzzle| puzzle.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_findable() {
        for puzzle in PUZZLES {
            let found = find(puzzle.name()).unwrap();
            assert_eq!(found.name(), puzzle.name());
        }
        assert!(find("teleporter").is_none());
    }

    #[test]
    fn test_every_sample_parses_nonempty() {
        for puzzle in PUZZLES {
            assert!(!puzzle.sample().is_empty(), "{} has no sample", puzzle.name());
        }
    }
}
