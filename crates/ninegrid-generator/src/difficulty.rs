//! Difficulty levels and their cell-removal counts.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// A puzzle difficulty level.
///
/// Each level maps to a fixed number of cells removed from the complete
/// 81-cell solution grid; harder levels leave fewer givens.
///
/// # Examples
///
/// ```
/// use ninegrid_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.removal_count(), 30);
/// assert_eq!(Difficulty::Medium.removal_count(), 45);
/// assert_eq!(Difficulty::Hard.removal_count(), 55);
///
/// let parsed: Difficulty = "medium".parse().unwrap();
/// assert_eq!(parsed, Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 30 cells removed, 51 givens.
    Easy,
    /// 45 cells removed, 36 givens.
    Medium,
    /// 55 cells removed, 26 givens.
    Hard,
}

impl Difficulty {
    /// Array containing all difficulty levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells removed from the solution grid at this
    /// difficulty.
    ///
    /// Always at most 81.
    #[must_use]
    pub const fn removal_count(self) -> u8 {
        match self {
            Self::Easy => 30,
            Self::Medium => 45,
            Self::Hard => 55,
        }
    }

    /// Returns the lowercase name of this difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error returned when parsing a [`Difficulty`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty: {name:?}")]
pub struct ParseDifficultyError {
    /// The unrecognized difficulty name.
    #[error(not(source))]
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}
