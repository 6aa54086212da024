//! Radioisotope testing facility: ferry microchips and generators to the top
//! floor in an elevator that carries one or two items per trip.
//!
//! A microchip sharing a floor with any foreign generator is fried unless its
//! own generator is there too. Elements are interchangeable, so the state
//! signature keeps only the sorted multiset of `(chip floor, generator floor)`
//! pairs plus the elevator position.

use crate::encoder::StateEncoder;
use crate::error::{ParseError, SearchError};
use crate::heap::Cost;
use crate::search::{Search, SearchConfig};
use crate::{Answer, PuzzleOps, Result};

/// Where one element's chip and generator currently sit.
///
/// Either half may be absent from the facility altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    pub chip: Option<u8>,
    pub generator: Option<u8>,
}

impl Element {
    /// A chip and its generator together on `floor`.
    pub const fn pair(floor: u8) -> Self {
        Self {
            chip: Some(floor),
            generator: Some(floor),
        }
    }
}

/// A snapshot of the facility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facility {
    pub elevator: u8,
    pub elements: Vec<Element>,
}

/// Elevator position plus the sorted element pairs.
pub type FacilityKey = (u8, Vec<Element>);

/// One movable item: element index and whether it is the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    element: usize,
    generator: bool,
}

impl Facility {
    fn floor_of(&self, item: Item) -> Option<u8> {
        let element = &self.elements[item.element];
        if item.generator {
            element.generator
        } else {
            element.chip
        }
    }

    fn items_on(&self, floor: u8) -> Vec<Item> {
        (0..self.elements.len())
            .flat_map(|element| {
                [false, true].map(|generator| Item { element, generator })
            })
            .filter(|&item| self.floor_of(item) == Some(floor))
            .collect()
    }

    fn moved(&self, cargo: &[Item], to: u8) -> Self {
        let mut next = self.clone();
        next.elevator = to;
        for item in cargo {
            let element = &mut next.elements[item.element];
            if item.generator {
                element.generator = Some(to);
            } else {
                element.chip = Some(to);
            }
        }
        next
    }

    /// Whether every chip on `floor` is either alone with other chips or
    /// shielded by its own generator.
    pub fn is_safe(&self, floor: u8) -> bool {
        let has_generator = self
            .elements
            .iter()
            .any(|element| element.generator == Some(floor));

        !has_generator
            || self
                .elements
                .iter()
                .filter(|element| element.chip == Some(floor))
                .all(|element| element.generator == Some(floor))
    }
}

/// The building: how many floors the elevator serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    floors: u8,
}

impl Building {
    pub fn new(floors: u8) -> Self {
        Self { floors }
    }

    pub fn top(&self) -> u8 {
        self.floors.saturating_sub(1)
    }

    /// Rejects a facility that is already unsafe or references missing floors.
    pub fn validate(&self, facility: &Facility) -> Result<(), SearchError> {
        let in_building = |floor: Option<u8>| floor.map_or(true, |f| f < self.floors);
        if facility.elevator >= self.floors
            || !facility
                .elements
                .iter()
                .all(|e| in_building(e.chip) && in_building(e.generator))
        {
            return Err(SearchError::InvalidState(format!(
                "facility references a floor outside 0..{}",
                self.floors
            )));
        }

        match (0..self.floors).find(|&floor| !facility.is_safe(floor)) {
            Some(floor) => Err(SearchError::InvalidState(format!(
                "a microchip on floor {} is exposed to a foreign generator",
                floor + 1
            ))),
            None => Ok(()),
        }
    }

    /// Fewest elevator trips that bring every item to the top floor.
    pub fn min_moves(&self, initial: Facility, config: SearchConfig) -> Result<Cost, SearchError> {
        self.validate(&initial)?;
        let solution = Search::new(self).with_config(config).shortest(initial)?;
        Ok(solution.cost)
    }
}

impl StateEncoder for Building {
    type State = Facility;
    type Key = FacilityKey;

    fn signature(&self, state: &Facility) -> FacilityKey {
        let mut pairs = state.elements.clone();
        pairs.sort_unstable();
        (state.elevator, pairs)
    }

    fn expand(&self, state: &Facility) -> Vec<(Facility, Cost)> {
        let here = state.elevator;
        let items = state.items_on(here);

        // every single item, then every unordered pair
        let mut loads: Vec<Vec<Item>> = items.iter().map(|&item| vec![item]).collect();
        for (i, &first) in items.iter().enumerate() {
            for &second in &items[i + 1..] {
                loads.push(vec![first, second]);
            }
        }

        let destinations = [here.checked_add(1), here.checked_sub(1)];
        let mut children = Vec::new();
        for to in destinations.into_iter().flatten().filter(|&to| to < self.floors) {
            for load in &loads {
                let next = state.moved(load, to);
                if next.is_safe(here) && next.is_safe(to) {
                    children.push((next, 1));
                }
            }
        }
        children
    }

    fn is_goal(&self, state: &Facility) -> bool {
        let top = self.top();
        let on_top = |floor: Option<u8>| floor.map_or(true, |f| f == top);
        state.elevator == top
            && state
                .elements
                .iter()
                .all(|element| on_top(element.chip) && on_top(element.generator))
    }
}

/// Parses floor descriptions such as
/// `The first floor contains a hydrogen-compatible microchip and a lithium generator.`
///
/// Floors are numbered in line order; the elevator starts on the first.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<(Building, Facility), ParseError> {
    let mut names: Vec<String> = Vec::new();
    let mut elements: Vec<Element> = Vec::new();
    let mut floors: u8 = 0;

    for (line_no, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let error = |message: &str| ParseError::new(line_no + 1, message);

        let (_, contents) = line
            .split_once(" contains ")
            .ok_or_else(|| error("expected '<floor> contains <items>'"))?;
        let contents = contents.trim_end_matches('.');
        let floor = floors;
        floors = floors
            .checked_add(1)
            .ok_or_else(|| error("too many floors"))?;

        if contents == "nothing relevant" {
            continue;
        }

        let contents = contents.replace(", and ", ", ").replace(" and ", ", ");
        for description in contents.split(", ") {
            let description = description
                .strip_prefix("an ")
                .or_else(|| description.strip_prefix("a "))
                .unwrap_or(description);

            let (name, generator) = if let Some(name) = description.strip_suffix(" generator") {
                (name, true)
            } else if let Some(name) = description.strip_suffix("-compatible microchip") {
                (name, false)
            } else {
                return Err(error(&format!("unrecognised item '{description}'")));
            };

            let index = match names.iter().position(|known| known == name) {
                Some(index) => index,
                None => {
                    names.push(name.to_string());
                    elements.push(Element {
                        chip: None,
                        generator: None,
                    });
                    names.len() - 1
                }
            };

            let slot = if generator {
                &mut elements[index].generator
            } else {
                &mut elements[index].chip
            };
            if slot.replace(floor).is_some() {
                return Err(error(&format!("duplicate item '{description}'")));
            }
        }
    }

    if floors == 0 {
        return Err(ParseError::new(0, "no floors described"));
    }

    Ok((
        Building::new(floors),
        Facility {
            elevator: 0,
            elements,
        },
    ))
}

/// Published example: two chips below their generators.
pub const SAMPLE: &[&str] = &[
    "The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.",
    "The second floor contains a hydrogen generator.",
    "The third floor contains a lithium generator.",
    "The fourth floor contains nothing relevant.",
];

/// Part 2 brings elerium and dilithium pairs along from the first floor.
const EXTRA_PAIRS: usize = 2;

pub struct FacilityPuzzle;

impl PuzzleOps for FacilityPuzzle {
    fn name(&self) -> &'static str {
        "facility"
    }

    fn description(&self) -> &'static str {
        "Radioisotope facility: fewest elevator trips to the top floor"
    }

    fn sample(&self) -> &'static [&'static str] {
        SAMPLE
    }

    fn solve(&self, lines: &[String], part: u8, config: SearchConfig) -> Result<Answer> {
        let (building, mut facility) = parse(lines)?;
        match part {
            1 => {}
            2 => facility
                .elements
                .extend(std::iter::repeat(Element::pair(0)).take(EXTRA_PAIRS)),
            _ => {
                return Err(crate::Error::UnknownPart {
                    puzzle: self.name(),
                    part,
                })
            }
        }
        Ok(building.min_moves(facility, config)?.into())
    }
}
