use crate::Direction;
use thiserror::Error;

/// Failure to decode a puzzle document. No partial puzzle is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("no document segment contains the board marker")]
    MissingBoardSegment,

    #[error("board descriptor has no well-formed open-cell marker")]
    MalformedBoardMarker,

    #[error("answer block of length {answer_len} is not a square board")]
    NonSquareBoard { answer_len: usize },

    #[error("ran out of clue text at segment {segment} while reading clue {number} {direction}")]
    ClueFragmentUnderrun {
        number: u32,
        direction: Direction,
        segment: usize,
    },
}

/// Lookup of a clue that the puzzle does not have.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("clue {number} {direction} doesn't exist")]
pub struct ClueNotFound {
    pub number: u32,
    pub direction: Direction,
}

/// A directional write stopped before the word was exhausted.
///
/// Cells written before the stopping point keep their new letters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    #[error("blank cell at ({row}, {col}) interrupts the word")]
    BlankCellEncountered { row: usize, col: usize },

    #[error("word runs off the grid at ({row}, {col})")]
    RanOffGrid { row: usize, col: usize },

    #[error(transparent)]
    ClueNotFound(#[from] ClueNotFound),
}
