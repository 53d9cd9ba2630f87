use crate::{
    Channel, ClueEntry, ClueIndex, ClueNotFound, Direction, FormatError, Grid, WriteError, parser,
    writer,
};

/// A parsed puzzle: the board and its clues, always built and replaced
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    clues: ClueIndex,
}

impl Puzzle {
    /// Build a puzzle from a raw ISO-8859-1 document.
    pub fn from_document(raw: &[u8]) -> Result<Self, FormatError> {
        let (grid, clues) = parser::parse(raw)?;
        Ok(Self { grid, clues })
    }

    /// Build a puzzle from already decoded document text.
    pub fn from_text(document: &str) -> Result<Self, FormatError> {
        let (grid, clues) = parser::parse_str(document)?;
        Ok(Self { grid, clues })
    }

    /// Replace this puzzle with one parsed from `raw`.
    ///
    /// On failure the current grid, clues and guesses are kept as they were.
    pub fn reload(&mut self, raw: &[u8]) -> Result<(), FormatError> {
        *self = Self::from_document(raw)?;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn get_clue(&self, number: u32, direction: Direction) -> Result<&ClueEntry, ClueNotFound> {
        self.clues.get(number, direction)
    }

    pub fn across_clues(&self) -> Vec<&ClueEntry> {
        self.clues.by_direction(Direction::Across)
    }

    pub fn down_clues(&self) -> Vec<&ClueEntry> {
        self.clues.by_direction(Direction::Down)
    }

    /// Across clues followed by down clues.
    pub fn all_clues(&self) -> Vec<&ClueEntry> {
        let mut clues = self.across_clues();
        clues.extend(self.down_clues());
        clues
    }

    /// Commit `word` as the answer to a clue.
    pub fn submit(&mut self, number: u32, direction: Direction, word: &str) -> Result<(), WriteError> {
        self.write(number, direction, word, Channel::Submission)
    }

    /// Pencil in `word` without touching submitted letters.
    pub fn ghost(&mut self, number: u32, direction: Direction, word: &str) -> Result<(), WriteError> {
        self.write(number, direction, word, Channel::Ghost)
    }

    fn write(
        &mut self,
        number: u32,
        direction: Direction,
        word: &str,
        channel: Channel,
    ) -> Result<(), WriteError> {
        let clue = self.clues.get(number, direction)?;
        writer::write(&mut self.grid, clue, word, channel)
    }

    /// Clear submitted letters along a clue's run. Ghost letters stay.
    pub fn clear(&mut self, number: u32, direction: Direction) -> Result<(), ClueNotFound> {
        let clue = self.clues.get(number, direction)?;
        writer::clear(&mut self.grid, clue);
        Ok(())
    }

    /// The correct letters along a clue's run.
    pub fn answer(&self, number: u32, direction: Direction) -> Result<String, ClueNotFound> {
        let clue = self.clues.get(number, direction)?;
        Ok(self
            .grid
            .run(clue.row, clue.col, direction)
            .into_iter()
            .filter_map(|(row, col)| self.grid.get_cell(row, col)?.correct_letter())
            .collect())
    }

    /// Whether every cell of a clue's run holds its correct submitted letter.
    pub fn is_clue_solved(&self, number: u32, direction: Direction) -> Result<bool, ClueNotFound> {
        let clue = self.clues.get(number, direction)?;
        Ok(self
            .grid
            .run(clue.row, clue.col, direction)
            .into_iter()
            .all(|(row, col)| {
                self.grid
                    .get_cell(row, col)
                    .and_then(|cell| cell.is_correct())
                    .unwrap_or(false)
            }))
    }

    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    pub fn completion_percentage(&self) -> u8 {
        self.grid.completion_percentage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```txt
    /// H I
    /// A .
    /// ```
    fn puzzle() -> Puzzle {
        Puzzle::from_text("X\0HIA.---.NY Times\0a\0c\0Greeting\0Laugh sound\0Bit of a laugh\0Indefinite article")
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let puzzle = puzzle();
        assert_eq!(puzzle.get_clue(1, Direction::Across).unwrap().text, "Greeting");
        assert_eq!(puzzle.get_clue(1, Direction::Down).unwrap().text, "Laugh sound");
        assert_eq!(puzzle.get_clue(2, Direction::Down).unwrap().text, "Bit of a laugh");
        assert_eq!(
            puzzle.get_clue(3, Direction::Across).unwrap().text,
            "Indefinite article"
        );
        assert_eq!(
            puzzle.get_clue(2, Direction::Across),
            Err(ClueNotFound {
                number: 2,
                direction: Direction::Across
            })
        );
    }

    #[test]
    fn test_answer() {
        let puzzle = puzzle();
        assert_eq!(puzzle.answer(1, Direction::Across).unwrap(), "HI");
        assert_eq!(puzzle.answer(1, Direction::Down).unwrap(), "HA");
        assert_eq!(puzzle.answer(2, Direction::Down).unwrap(), "I");
    }

    #[test]
    fn test_submit_unknown_clue() {
        let mut puzzle = puzzle();
        assert!(matches!(
            puzzle.submit(9, Direction::Down, "x"),
            Err(WriteError::ClueNotFound(ClueNotFound { number: 9, .. }))
        ));
        assert!(puzzle.clear(9, Direction::Down).is_err());
    }

    #[test]
    fn test_solve() {
        let mut puzzle = puzzle();
        puzzle.submit(1, Direction::Across, "hi").unwrap();
        assert!(puzzle.is_clue_solved(1, Direction::Across).unwrap());
        assert!(!puzzle.is_clue_solved(1, Direction::Down).unwrap());
        assert!(!puzzle.is_complete());

        puzzle.submit(1, Direction::Down, "ha").unwrap();
        assert!(puzzle.is_complete());
        assert_eq!(puzzle.completion_percentage(), 100);
    }

    #[test]
    fn test_reload_failure_keeps_state() {
        let mut puzzle = puzzle();
        puzzle.submit(1, Direction::Across, "hi").unwrap();
        let before = puzzle.clone();

        assert_eq!(
            puzzle.reload(b"no board here"),
            Err(FormatError::MissingBoardSegment)
        );
        assert_eq!(puzzle, before);
    }
}
