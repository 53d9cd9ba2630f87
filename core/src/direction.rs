use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The direction an entry runs in, starting from its clue-starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// Row and column offsets of one step in this direction.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// The position one step further along this direction.
    ///
    /// Bounds are not checked here; the grid decides whether the result exists.
    pub fn advance(self, (row, col): (usize, usize)) -> (usize, usize) {
        let (dr, dc) = self.delta();
        (row + dr, col + dc)
    }

    /// Toggle between Across and Down.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Error returned when a direction name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts `across`/`a` and `down`/`d`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "across" | "a" => Ok(Direction::Across),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// One of the two independent guess slots every playable cell carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// The committed guess.
    Submission,
    /// A provisional guess, kept apart from the submission.
    Ghost,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Submission => write!(f, "submission"),
            Channel::Ghost => write!(f, "ghost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        assert_eq!(Direction::Across.advance((2, 3)), (2, 4));
        assert_eq!(Direction::Down.advance((2, 3)), (3, 3));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("Across".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!("a".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!(" DOWN ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Down));
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Direction::Across.toggle(), Direction::Down);
        assert_eq!(Direction::Down.toggle(), Direction::Across);
    }
}
