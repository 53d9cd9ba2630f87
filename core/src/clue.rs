use crate::{ClueNotFound, Direction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A numbered clue and the cell its entry starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub number: u32,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
    pub text: String,
}

impl ClueEntry {
    pub fn new(number: u32, direction: Direction, row: usize, col: usize, text: String) -> Self {
        Self {
            number,
            direction,
            row,
            col,
            text,
        }
    }

    pub fn start_position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// All clues of a puzzle keyed by `(number, direction)`.
///
/// Storage order carries no meaning; ordered views are sorted on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ClueEntry>", into = "Vec<ClueEntry>")]
pub struct ClueIndex {
    entries: HashMap<(u32, Direction), ClueEntry>,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing and returning any previous one under the
    /// same key.
    ///
    /// A correct parse never produces a collision, so one is logged.
    pub fn put(&mut self, entry: ClueEntry) -> Option<ClueEntry> {
        let key = (entry.number, entry.direction);
        let previous = self.entries.insert(key, entry);
        if previous.is_some() {
            log::warn!("clue {} {} registered twice; keeping the last", key.0, key.1);
        }
        previous
    }

    pub fn get(&self, number: u32, direction: Direction) -> Result<&ClueEntry, ClueNotFound> {
        self.entries
            .get(&(number, direction))
            .ok_or(ClueNotFound { number, direction })
    }

    pub fn contains(&self, number: u32, direction: Direction) -> bool {
        self.entries.contains_key(&(number, direction))
    }

    /// Clues running in `direction`, ascending by number.
    pub fn by_direction(&self, direction: Direction) -> Vec<&ClueEntry> {
        let mut clues: Vec<&ClueEntry> = self
            .entries
            .values()
            .filter(|clue| clue.direction == direction)
            .collect();
        clues.sort_by_key(|clue| clue.number);
        clues
    }

    /// All clues, across before down, each group ascending by number.
    pub fn iter(&self) -> impl Iterator<Item = &ClueEntry> {
        Direction::ALL
            .into_iter()
            .flat_map(move |direction| self.by_direction(direction))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ClueEntry>> for ClueIndex {
    fn from(entries: Vec<ClueEntry>) -> Self {
        let mut index = ClueIndex::new();
        for entry in entries {
            index.put(entry);
        }
        index
    }
}

impl From<ClueIndex> for Vec<ClueEntry> {
    fn from(index: ClueIndex) -> Self {
        let mut entries: Vec<ClueEntry> = index.entries.into_values().collect();
        entries.sort_by_key(|clue| (clue.direction, clue.number));
        entries
    }
}
