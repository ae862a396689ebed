//! A playable game session.

use derive_more::{Display, Error};
use ninegrid_core::{Digit, DigitGrid, DigitSet, Position, rules};
use ninegrid_generator::{Difficulty, GeneratedPuzzle};

use crate::cell::CellState;

/// An error returned when an edit is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given and can never be edited.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// Notes can only be attached to undecided cells.
    #[display("cannot add a note to a filled cell")]
    CannotAddNoteToFilledCell,
}

/// A game session over a generated puzzle.
///
/// The session owns one board at a time; starting a new game or switching
/// difficulty means discarding the session and building a fresh one from a
/// newly generated puzzle. Problem digits become immutable givens, all
/// other cells start empty, and every edit re-validates against the
/// no-duplicate rule.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Position;
/// use ninegrid_game::{CellState, Game};
/// use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator
///     .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("session doc"))
///     .unwrap();
/// let mut game = Game::new(puzzle.clone());
///
/// // Fill every undecided cell from the solution; the game is then solved
/// for pos in Position::ALL {
///     if game.cell(pos).is_undecided() {
///         let digit = puzzle.solution[pos].expect("solution is complete");
///         game.set_digit(pos, digit).unwrap();
///     }
/// }
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    difficulty: Difficulty,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every filled cell of the puzzle's problem grid becomes a given;
    /// the remaining cells start empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;

        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            difficulty,
        }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the solution grid the puzzle was generated with.
    ///
    /// Because cell removal does not enforce uniqueness, this is *a*
    /// solution; [`Game::is_solved`] accepts any consistent completion.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the difficulty the puzzle was generated at.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Places a digit at the given position.
    ///
    /// An empty or annotated cell becomes filled (existing notes are
    /// discarded); a filled cell has its digit replaced. Placements that
    /// break the no-duplicate rule are allowed — the board simply reports
    /// inconsistency via [`Game::is_consistent`] until corrected.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::{Digit, Position};
    /// use ninegrid_game::Game;
    /// use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
    ///
    /// let generator = PuzzleGenerator::new();
    /// let puzzle = generator
    ///     .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("set digit doc"))
    ///     .unwrap();
    /// let mut game = Game::new(puzzle);
    ///
    /// let pos = *Position::ALL
    ///     .iter()
    ///     .find(|&&pos| game.cell(pos).is_undecided())
    ///     .expect("puzzle has empty cells");
    /// game.set_digit(pos, Digit::D5).unwrap();
    /// assert_eq!(game.cell(pos).as_digit(), Some(Digit::D5));
    /// ```
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the digit and notes at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn clear(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Toggles a candidate note at the given position.
    ///
    /// An empty cell gains the note; an annotated cell has the digit's
    /// membership flipped; removing the last note leaves the cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    /// Returns [`GameError::CannotAddNoteToFilledCell`] if the cell holds a
    /// player-entered digit.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        let mut notes = match self.cell(pos) {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => return Err(GameError::CannotAddNoteToFilledCell),
            CellState::Notes(notes) => *notes,
            CellState::Empty => DigitSet::EMPTY,
        };

        if !notes.insert(digit) {
            notes.remove(digit);
        }
        self.cells[pos.index()] = if notes.is_empty() {
            CellState::Empty
        } else {
            CellState::Notes(notes)
        };
        Ok(())
    }

    /// Returns a plain value snapshot of the decided digits.
    ///
    /// Givens and player-filled digits are included; notes are not.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid[pos] = self.cell(pos).as_digit();
        }
        grid
    }

    /// Returns `true` if no row, column, or box contains a duplicate digit.
    ///
    /// Recomputed from the current board on every call; intended to run
    /// after each edit.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        rules::is_consistent(&self.to_digit_grid())
    }

    /// Returns `true` if every cell is decided and the board is consistent.
    ///
    /// Any valid completion counts, not only the generator's solution —
    /// relevant because puzzles are not checked for uniqueness.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let grid = self.to_digit_grid();
        grid.is_full() && rules::is_consistent(&grid)
    }

    /// Probes for a hint at the given position.
    ///
    /// Returns the first digit 1-9 whose placement leaves the board
    /// consistent, or `None` for given cells and cells where no digit
    /// fits. The probe ignores any digit currently in the cell.
    ///
    /// Because consistency is checked against the current board rather
    /// than the solution, a hint is a *legal* move, not necessarily a
    /// correct one.
    #[must_use]
    pub fn hint(&self, pos: Position) -> Option<Digit> {
        if self.cell(pos).is_given() {
            return None;
        }

        let mut grid = self.to_digit_grid();
        grid[pos] = None;
        Digit::ALL
            .into_iter()
            .find(|digit| rules::is_placeable(&grid, pos, *digit))
    }
}
