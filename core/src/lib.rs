//! Crossword puzzle documents parsed into a playable grid of cells and
//! numbered clues, with guesses written along across/down runs.

pub mod clue;
pub mod direction;
pub mod grid;
pub mod parser;
pub mod puzzle;
pub mod writer;

mod error;
pub use error::{ClueNotFound, FormatError, WriteError};

pub use clue::{ClueEntry, ClueIndex};
pub use direction::{Channel, Direction, ParseDirectionError};
pub use grid::{Cell, Grid};
pub use parser::ParserConfig;
pub use puzzle::Puzzle;
pub use writer::StopReason;
