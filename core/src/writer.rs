//! Directional writes of guesses along a clue's run.
//!
//! Writing and clearing share one step function; they differ only in how a
//! stop is treated. A write stopped before its word is exhausted is an error,
//! while a clear always ends at a stop.

use crate::{Cell, Channel, ClueEntry, Grid, WriteError};

/// Why a walk could not continue onto a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Blank,
    Edge,
}

/// Outcome of visiting one position of a walk.
enum Step<'g> {
    Continuing(&'g mut Cell),
    Stopped(StopReason),
}

fn step(grid: &mut Grid, (row, col): (usize, usize)) -> Step<'_> {
    match grid.get_cell_mut(row, col) {
        None => Step::Stopped(StopReason::Edge),
        Some(cell) if cell.is_blank() => Step::Stopped(StopReason::Blank),
        Some(cell) => Step::Continuing(cell),
    }
}

/// Write `word` into `channel`, one uppercased letter per cell, starting at
/// the clue's first cell.
///
/// Stops with an error at the first blank cell or grid edge reached while
/// letters remain. Cells already written keep their letters.
pub fn write(
    grid: &mut Grid,
    clue: &ClueEntry,
    word: &str,
    channel: Channel,
) -> Result<(), WriteError> {
    let mut pos = clue.start_position();
    for letter in word.chars() {
        let (row, col) = pos;
        match step(grid, pos) {
            Step::Continuing(cell) => {
                let letter = letter.to_uppercase().next().unwrap_or(letter);
                cell.set_guess(channel, Some(letter));
            }
            Step::Stopped(StopReason::Blank) => {
                return Err(WriteError::BlankCellEncountered { row, col });
            }
            Step::Stopped(StopReason::Edge) => {
                return Err(WriteError::RanOffGrid { row, col });
            }
        }
        pos = clue.direction.advance(pos);
    }
    log::trace!(
        "wrote {:?} to {} {} ({})",
        word,
        clue.number,
        clue.direction,
        channel
    );
    Ok(())
}

/// Clear the submission channel along the clue's run.
///
/// Returns why the walk ended and how many cells were cleared; reaching a
/// blank cell or the edge is the normal end of a clear.
pub fn clear(grid: &mut Grid, clue: &ClueEntry) -> (StopReason, usize) {
    let mut pos = clue.start_position();
    let mut cleared = 0;
    let reason = loop {
        match step(grid, pos) {
            Step::Continuing(cell) => {
                cell.set_guess(Channel::Submission, None);
                cleared += 1;
            }
            Step::Stopped(reason) => break reason,
        }
        pos = clue.direction.advance(pos);
    };
    log::trace!(
        "cleared {} cells of {} {}, stopped at {:?}",
        cleared,
        clue.number,
        clue.direction,
        reason
    );
    (reason, cleared)
}
