//! Per-cell play state.

use derive_more::IsVariant;
use ninegrid_core::{Digit, DigitSet};

/// The state of a single cell during play.
///
/// A cell is either part of the puzzle (given at creation time and never
/// editable), filled in by the player, annotated with candidate notes, or
/// empty.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitSet};
/// use ninegrid_game::CellState;
///
/// let given = CellState::Given(Digit::D5);
/// assert!(given.is_given());
/// assert_eq!(given.as_digit(), Some(Digit::D5));
///
/// let notes = CellState::Notes(DigitSet::from_iter([Digit::D1, Digit::D2]));
/// assert_eq!(notes.as_digit(), None);
/// assert_eq!(notes.notes().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant, Default)]
pub enum CellState {
    /// A cell pre-filled at puzzle creation; not editable.
    Given(Digit),
    /// A cell filled in by the player.
    Filled(Digit),
    /// An undecided cell carrying candidate note annotations.
    ///
    /// The set is never empty; removing the last note yields
    /// [`CellState::Empty`].
    Notes(DigitSet),
    /// An undecided cell without annotations.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit this cell is decided to, if any.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Notes(_) | Self::Empty => None,
        }
    }

    /// Returns the cell's note annotations; empty unless the cell is in the
    /// [`CellState::Notes`] state.
    #[must_use]
    pub const fn notes(&self) -> DigitSet {
        match self {
            Self::Notes(notes) => *notes,
            Self::Given(_) | Self::Filled(_) | Self::Empty => DigitSet::EMPTY,
        }
    }

    /// Returns `true` if the cell holds no decided digit.
    #[must_use]
    pub const fn is_undecided(&self) -> bool {
        matches!(self, Self::Notes(_) | Self::Empty)
    }
}
