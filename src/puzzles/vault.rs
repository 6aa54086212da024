//! Vault behind a 4x4 grid of rooms whose doors open and close based on the
//! MD5 hash of the passcode followed by the route taken so far.
//!
//! The first four hex digits of the hash belong to the up, down, left and
//! right doors; `b` through `f` means open. Because the doors depend on the
//! route, the route itself is the state signature.

use crate::encoder::StateEncoder;
use crate::error::ParseError;
use crate::geometry::{manhattan, Point, DIRECTIONS};
use crate::heap::Cost;
use crate::search::{Search, SearchConfig};
use crate::{Answer, PuzzleOps, Result, SearchError};

/// Rooms per side.
const SIZE: i32 = 4;

pub const START: Point = (0, 0);
pub const VAULT: Point = (SIZE - 1, SIZE - 1);

/// A position in the grid together with how we got there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    pub position: Point,
    pub route: String,
}

impl Room {
    pub fn start() -> Self {
        Self {
            position: START,
            route: String::new(),
        }
    }
}

pub struct Vault {
    passcode: String,
}

impl Vault {
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
        }
    }

    /// Which of the four doors of `room` are open, in `U, D, L, R` order.
    fn open_doors(&self, room: &Room) -> [bool; 4] {
        let digest = format!("{:x}", md5::compute(format!("{}{}", self.passcode, room.route)));
        let mut doors = [false; 4];
        for (door, digit) in doors.iter_mut().zip(digest.bytes()) {
            *door = matches!(digit, b'b'..=b'f');
        }
        doors
    }

    /// The shortest route string that reaches the vault.
    pub fn shortest_route(&self, config: SearchConfig) -> Result<String, SearchError> {
        let solution = Search::new(self).with_config(config).shortest(Room::start())?;
        Ok(solution.goal().route.clone())
    }

    /// Length of the longest route that ends in the vault.
    pub fn longest_route_len(&self, config: SearchConfig) -> Result<usize, SearchError> {
        let longest = Search::new(self)
            .with_config(config)
            .best_by(Room::start(), |found| found.state.route.len())?;
        Ok(longest.state.route.len())
    }
}

impl StateEncoder for Vault {
    type State = Room;
    type Key = String;

    fn signature(&self, state: &Room) -> String {
        state.route.clone()
    }

    fn expand(&self, state: &Room) -> Vec<(Room, Cost)> {
        let doors = self.open_doors(state);
        DIRECTIONS
            .into_iter()
            .zip(doors)
            .filter(|&(_, open)| open)
            .map(|(direction, _)| (direction, direction.step(state.position)))
            .filter(|&(_, (x, y))| (0..SIZE).contains(&x) && (0..SIZE).contains(&y))
            .map(|(direction, position)| {
                let mut route = String::with_capacity(state.route.len() + 1);
                route.push_str(&state.route);
                route.push(direction.letter());
                (Room { position, route }, 1)
            })
            .collect()
    }

    /// Reaching the vault ends a route; it is never walked through.
    fn is_goal(&self, state: &Room) -> bool {
        state.position == VAULT
    }

    fn heuristic(&self, state: &Room) -> Cost {
        manhattan(state.position, VAULT)
    }
}

/// The passcode is the first non-blank line.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vault, ParseError> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .find(|line| !line.is_empty())
        .map(Vault::new)
        .ok_or_else(|| ParseError::new(0, "missing passcode"))
}

pub const SAMPLE: &[&str] = &["ihgpwlah"];

pub struct VaultPuzzle;

impl PuzzleOps for VaultPuzzle {
    fn name(&self) -> &'static str {
        "vault"
    }

    fn description(&self) -> &'static str {
        "Hash-gated vault: shortest route, longest route length"
    }

    fn sample(&self) -> &'static [&'static str] {
        SAMPLE
    }

    fn solve(&self, lines: &[String], part: u8, config: SearchConfig) -> Result<Answer> {
        let vault = parse(lines)?;
        match part {
            1 => Ok(vault.shortest_route(config)?.into()),
            2 => Ok(vault.longest_route_len(config)?.into()),
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

    #[test]
    fn test_shortest_routes() {
        let config = SearchConfig::default();
        assert_eq!(Vault::new("ihgpwlah").shortest_route(config).unwrap(), "DDRRRD");
        assert_eq!(
            Vault::new("kglvqrro").shortest_route(config).unwrap(),
            "DDUDRLRRUDRD"
        );
        assert_eq!(
            Vault::new("ulqzkmiv").shortest_route(config).unwrap(),
            "DRURDRUDDLLDLUURRDULRLDUUDDDRR"
        );
    }

    #[test]
    fn test_longest_route_lengths() {
        let config = SearchConfig::default();
        assert_eq!(Vault::new("ihgpwlah").longest_route_len(config).unwrap(), 370);
        assert_eq!(Vault::new("kglvqrro").longest_route_len(config).unwrap(), 492);
        assert_eq!(Vault::new("ulqzkmiv").longest_route_len(config).unwrap(), 830);
    }

    #[test]
    fn test_sealed_vault_has_no_route() {
        // every route dead-ends within three rooms of the start
        let config = SearchConfig::default();
        assert_eq!(
            Vault::new("hijkl").shortest_route(config).unwrap_err(),
            SearchError::NoSolution
        );
        assert_eq!(
            Vault::new("hijkl").longest_route_len(config).unwrap_err(),
            SearchError::NoSolution
        );
    }

    #[test]
    fn test_first_room_doors() {
        let vault = Vault::new("hijkl");
        let children = vault.expand(&Room::start());
        let routes: Vec<&str> = children.iter().map(|(room, _)| room.route.as_str()).collect();
        assert_eq!(routes, vec!["D"]);
    }

    #[test]
    fn test_budget_stops_enumeration() {
        let err = Vault::new("ulqzkmiv")
            .longest_route_len(SearchConfig::with_max_expansions(100))
            .unwrap_err();
        assert_eq!(err, SearchError::BudgetExhausted { expanded: 100 });
    }
}
