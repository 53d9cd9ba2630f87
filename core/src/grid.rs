use crate::{Channel, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One square of the board.
///
/// A cell is either blocked (unplayable) or holds the letter that belongs
/// there, so a blank cell can never carry a correct letter. The correct
/// letter and clue number are fixed at assembly; only the two guess
/// channels change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blocked,
    Letter {
        correct: char,
        /// Clue number if this cell starts an across or down entry.
        number: Option<u32>,
        submission: Option<char>,
        ghost: Option<char>,
    },
}

impl Cell {
    /// A playable cell with both guess channels empty.
    pub fn letter(correct: char, number: Option<u32>) -> Self {
        Cell::Letter {
            correct,
            number,
            submission: None,
            ghost: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub fn correct_letter(&self) -> Option<char> {
        match self {
            Cell::Letter { correct, .. } => Some(*correct),
            Cell::Blocked => None,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            Cell::Letter { number, .. } => *number,
            Cell::Blocked => None,
        }
    }

    /// The letter held in the given guess channel, if any.
    pub fn guess(&self, channel: Channel) -> Option<char> {
        match (self, channel) {
            (Cell::Letter { submission, .. }, Channel::Submission) => *submission,
            (Cell::Letter { ghost, .. }, Channel::Ghost) => *ghost,
            (Cell::Blocked, _) => None,
        }
    }

    /// Set or clear one guess channel.
    ///
    /// Returns `false` and leaves the cell untouched if it is blocked.
    pub fn set_guess(&mut self, channel: Channel, letter: Option<char>) -> bool {
        match (self, channel) {
            (Cell::Letter { submission, .. }, Channel::Submission) => *submission = letter,
            (Cell::Letter { ghost, .. }, Channel::Ghost) => *ghost = letter,
            (Cell::Blocked, _) => return false,
        }
        true
    }

    /// Whether the submitted letter matches the correct one.
    ///
    /// `None` for blocked cells.
    pub fn is_correct(&self) -> Option<bool> {
        match self {
            Cell::Letter {
                correct,
                submission,
                ..
            } => Some(*submission == Some(*correct)),
            Cell::Blocked => None,
        }
    }

    pub fn get_display_char(&self) -> char {
        match self {
            Cell::Blocked => '#',
            Cell::Letter {
                submission: Some(c),
                ..
            } => *c,
            Cell::Letter {
                submission: None, ..
            } => '_',
        }
    }
}

/// The assembled board, addressed `[row][col]`.
///
/// Neighbors are found by coordinate arithmetic; cells hold no references to
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from fully assembled rows.
    ///
    /// Callers guarantee there are `height` rows of `width` cells each.
    pub(crate) fn from_rows(width: usize, height: usize, cells: Vec<Vec<Cell>>) -> Self {
        debug_assert_eq!(cells.len(), height);
        debug_assert!(cells.iter().all(|row| row.len() == width));
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Positions of the run starting at `(row, col)` in `direction`.
    ///
    /// The run ends before the first blank cell or at the grid edge, and is
    /// empty if the start itself is blank or off the grid.
    pub fn run(&self, row: usize, col: usize, direction: Direction) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        let mut pos = (row, col);
        while let Some(cell) = self.get_cell(pos.0, pos.1) {
            if cell.is_blank() {
                break;
            }
            positions.push(pos);
            pos = direction.advance(pos);
        }
        positions
    }

    /// Count the playable cells.
    pub fn count_total_letters(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_blank())
            .count()
    }

    /// Count the playable cells holding a submitted letter.
    pub fn count_filled_letters(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.guess(Channel::Submission).is_some())
            .count()
    }

    /// Get completion percentage (0-100) of submitted letters.
    pub fn completion_percentage(&self) -> u8 {
        let total = self.count_total_letters();
        if total == 0 {
            return 100;
        }
        ((self.count_filled_letters() * 100) / total) as u8
    }

    /// Check that every playable cell has the correct letter submitted.
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .all(|cell| cell.is_correct() != Some(false))
    }
}

impl fmt::Display for Grid {
    /// One line per row: `#` for blocked cells, the submitted letter or `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(Cell::get_display_char).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```txt
    /// A B
    /// # C
    /// ```
    fn small_grid() -> Grid {
        Grid::from_rows(
            2,
            2,
            vec![
                vec![Cell::letter('A', Some(1)), Cell::letter('B', Some(2))],
                vec![Cell::Blocked, Cell::letter('C', None)],
            ],
        )
    }

    #[test]
    fn test_blocked_cell_rejects_guesses() {
        let mut cell = Cell::Blocked;
        assert!(!cell.set_guess(Channel::Submission, Some('X')));
        assert!(!cell.set_guess(Channel::Ghost, Some('X')));
        assert_eq!(cell.guess(Channel::Submission), None);
        assert_eq!(cell.correct_letter(), None);
        assert_eq!(cell.is_correct(), None);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut cell = Cell::letter('Q', None);
        assert!(cell.set_guess(Channel::Ghost, Some('Z')));
        assert_eq!(cell.guess(Channel::Submission), None);
        assert!(cell.set_guess(Channel::Submission, Some('Q')));
        assert_eq!(cell.guess(Channel::Ghost), Some('Z'));
        assert_eq!(cell.is_correct(), Some(true));
    }

    #[test]
    fn test_run_stops_at_blank_and_edge() {
        let grid = small_grid();
        assert_eq!(grid.run(0, 0, Direction::Across), vec![(0, 0), (0, 1)]);
        assert_eq!(grid.run(0, 0, Direction::Down), vec![(0, 0)]);
        assert_eq!(grid.run(0, 1, Direction::Down), vec![(0, 1), (1, 1)]);
        assert!(grid.run(1, 0, Direction::Across).is_empty());
        assert!(grid.run(5, 5, Direction::Down).is_empty());
    }

    #[test]
    fn test_completion() {
        let mut grid = small_grid();
        assert_eq!(grid.count_total_letters(), 3);
        assert_eq!(grid.completion_percentage(), 0);
        assert!(!grid.is_complete());

        for (row, col, letter) in [(0, 0, 'A'), (0, 1, 'B'), (1, 1, 'C')] {
            grid.get_cell_mut(row, col)
                .unwrap()
                .set_guess(Channel::Submission, Some(letter));
        }
        assert_eq!(grid.completion_percentage(), 100);
        assert!(grid.is_complete());
    }

    #[test]
    fn test_display() {
        let mut grid = small_grid();
        grid.get_cell_mut(0, 1)
            .unwrap()
            .set_guess(Channel::Submission, Some('B'));
        assert_eq!(grid.to_string(), "_B\n#_\n");
    }
}
