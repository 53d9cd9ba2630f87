//! Board document decoding.
//!
//! A document is a run of fields separated by a null byte. The field that
//! carries the publisher tag is the board descriptor, packed as
//! `[answers; L][layout; L][metadata...]`, where `L` is found as the offset of
//! the first open-cell token. Clue texts follow a few fields later and are
//! consumed in the order the numbering pass discovers entries.

use crate::{Cell, ClueEntry, ClueIndex, Direction, FormatError, Grid};

/// Separates the fields of a document.
pub const FIELD_SEPARATOR: char = '\0';
/// Publisher tag identifying the board descriptor field.
pub const BOARD_MARKER: &str = "NY Times";
/// Layout marker for a playable cell.
pub const OPEN_CELL: char = '-';
/// Three open cells in a row; its first offset is the answer block length.
pub const OPEN_CELL_TOKEN: [char; 3] = [OPEN_CELL; 3];
/// Layout marker for a blank (unplayable) cell.
pub const BLANK_CELL: char = '.';
/// How many fields after the board descriptor the clue texts begin.
pub const CLUE_SEGMENT_OFFSET: usize = 3;

/// Knobs for documents whose publisher tag or clue placement differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub board_marker: String,
    pub clue_segment_offset: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            board_marker: BOARD_MARKER.to_string(),
            clue_segment_offset: CLUE_SEGMENT_OFFSET,
        }
    }
}

/// Decode ISO-8859-1 bytes; every byte becomes exactly one `char`.
pub fn decode_latin1(raw: &[u8]) -> String {
    raw.iter().map(|&b| char::from(b)).collect()
}

/// Parse a raw document with the default configuration.
pub fn parse(raw: &[u8]) -> Result<(Grid, ClueIndex), FormatError> {
    parse_str(&decode_latin1(raw))
}

/// Parse already decoded document text with the default configuration.
pub fn parse_str(document: &str) -> Result<(Grid, ClueIndex), FormatError> {
    parse_with(&ParserConfig::default(), document)
}

/// Parse decoded document text.
pub fn parse_with(
    config: &ParserConfig,
    document: &str,
) -> Result<(Grid, ClueIndex), FormatError> {
    let segments: Vec<&str> = document.split(FIELD_SEPARATOR).collect();

    let board_idx = segments
        .iter()
        .position(|segment| segment.contains(config.board_marker.as_str()))
        .ok_or(FormatError::MissingBoardSegment)?;
    let descriptor: Vec<char> = segments[board_idx].chars().collect();

    let board = BoardLayout::infer(&descriptor)?;
    log::debug!(
        "board descriptor in segment {}: {}x{} grid",
        board_idx,
        board.side,
        board.side
    );

    let mut fragments = ClueFragments {
        segments: &segments,
        next: board_idx + config.clue_segment_offset,
    };
    let (grid, clues) = assemble(&board, &mut fragments)?;
    log::debug!(
        "assembled {} clues ({} across, {} down)",
        clues.len(),
        clues.by_direction(Direction::Across).len(),
        clues.by_direction(Direction::Down).len()
    );

    Ok((grid, clues))
}

/// The answer and layout blocks of a square board descriptor.
struct BoardLayout<'a> {
    side: usize,
    answers: &'a [char],
    layout: &'a [char],
}

impl<'a> BoardLayout<'a> {
    fn infer(descriptor: &'a [char]) -> Result<Self, FormatError> {
        let answer_len = descriptor
            .windows(OPEN_CELL_TOKEN.len())
            .position(|window| window == OPEN_CELL_TOKEN)
            .ok_or(FormatError::MalformedBoardMarker)?;

        let side = answer_len.isqrt();
        if side * side != answer_len {
            return Err(FormatError::NonSquareBoard { answer_len });
        }
        if descriptor.len() < 2 * answer_len {
            return Err(FormatError::MalformedBoardMarker);
        }

        Ok(Self {
            side,
            answers: &descriptor[..answer_len],
            layout: &descriptor[answer_len..2 * answer_len],
        })
    }
}

/// Clue texts, handed out one per discovered entry.
struct ClueFragments<'a> {
    segments: &'a [&'a str],
    next: usize,
}

impl ClueFragments<'_> {
    fn take(&mut self, number: u32, direction: Direction) -> Result<String, FormatError> {
        let text = self
            .segments
            .get(self.next)
            .ok_or(FormatError::ClueFragmentUnderrun {
                number,
                direction,
                segment: self.next,
            })?;
        self.next += 1;
        Ok(text.to_string())
    }
}

/// Build cells and clues in a single row-major pass.
///
/// A playable cell starts an across entry when it is in the first column or
/// follows a blank, and a down entry when it is in the first row or sits
/// under a blank. Every starting cell takes the next number from one counter
/// shared by both directions; its across text is read before its down text.
fn assemble(
    board: &BoardLayout<'_>,
    fragments: &mut ClueFragments<'_>,
) -> Result<(Grid, ClueIndex), FormatError> {
    let side = board.side;
    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(side);
    let mut clues = ClueIndex::new();
    let mut next_number: u32 = 1;

    for row in 0..side {
        let mut cells: Vec<Cell> = Vec::with_capacity(side);
        for col in 0..side {
            let answer_idx = row * side + col;
            if board.layout[answer_idx] == BLANK_CELL {
                cells.push(Cell::Blocked);
                continue;
            }

            let starts_across = col == 0 || cells[col - 1].is_blank();
            let starts_down = row == 0 || rows[row - 1][col].is_blank();

            let number = if starts_across || starts_down {
                let number = next_number;
                next_number += 1;
                for (starts, direction) in [
                    (starts_across, Direction::Across),
                    (starts_down, Direction::Down),
                ] {
                    if starts {
                        let text = fragments.take(number, direction)?;
                        log::trace!("clue {} {} at ({}, {}): {}", number, direction, row, col, text);
                        clues.put(ClueEntry::new(number, direction, row, col, text));
                    }
                }
                Some(number)
            } else {
                None
            };

            cells.push(Cell::letter(board.answers[answer_idx], number));
        }
        rows.push(cells);
    }

    Ok((Grid::from_rows(side, side, rows), clues))
}
