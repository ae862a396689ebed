//! Two-phase puzzle construction: diagonal-seeded backtracking, then
//! difficulty-driven cell removal.

use derive_more::{Display, Error};
use log::debug;
use ninegrid_core::{Digit, DigitGrid, Position, rules};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

use crate::{difficulty::Difficulty, seed::PuzzleSeed};

/// A generated puzzle: the problem grid, its solution, and the inputs that
/// produced them.
///
/// The value is an immutable handoff — every filled cell of `problem`
/// equals the corresponding cell of `solution`, and `solution` is a full,
/// consistent grid. Regenerating with the same `difficulty` and `seed`
/// reproduces the puzzle exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with `difficulty.removal_count()` cells empty.
    pub problem: DigitGrid,
    /// The complete grid the problem was carved from.
    pub solution: DigitGrid,
    /// The difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// An error returned when puzzle generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// The backtracking search exhausted every digit choice without
    /// completing the grid.
    ///
    /// With diagonal seeding this is not expected to occur in practice,
    /// but exhaustion is surfaced rather than silently returning an
    /// incomplete grid, so a caller can retry with a fresh seed.
    #[display("backtracking search exhausted without completing the grid")]
    SearchExhausted,
}

/// Generates puzzles via diagonal-seeded backtracking and random cell
/// removal.
///
/// Generation is single-threaded and runs to completion in the calling
/// thread. No uniqueness check is performed on the removed-cell puzzle;
/// see the crate-level documentation.
///
/// # Examples
///
/// ```
/// use ninegrid_core::rules;
/// use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("generator doc");
/// let puzzle = generator.generate_with_seed(Difficulty::Easy, seed).unwrap();
///
/// assert_eq!(puzzle.problem.filled_count(), 81 - 30);
/// assert!(rules::is_consistent(&puzzle.problem));
/// assert!(rules::is_consistent(&puzzle.solution));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new puzzle generator.
    #[must_use]
    pub const fn new() -> Self {
        PuzzleGenerator
    }

    /// Generates a puzzle at the given difficulty from a fresh random seed.
    ///
    /// The seed is recorded in the returned [`GeneratedPuzzle`] so the
    /// result can be reproduced later.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SearchExhausted`] if the backtracking
    /// search fails to complete a grid.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SearchExhausted`] if the backtracking
    /// search fails to complete a grid.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        debug!("generating {difficulty} puzzle from seed {seed}");

        let mut rng = seed.rng();
        let solution = generate_complete_grid(&mut rng)?;
        let problem = remove_cells(&solution, difficulty.removal_count(), &mut rng);

        Ok(GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        })
    }
}

/// Builds a complete, consistent grid.
///
/// The three 3×3 boxes on the main diagonal share no row, column, or box,
/// so each is filled independently with a random permutation of 1-9 before
/// the search starts. This seeding keeps worst-case backtracking shallow
/// and is never skipped.
fn generate_complete_grid<R: Rng>(rng: &mut R) -> Result<DigitGrid, GenerateError> {
    let mut grid = DigitGrid::new();
    fill_diagonal_boxes(&mut grid, rng);
    if fill_remaining(&mut grid) {
        debug_assert!(grid.is_full() && rules::is_consistent(&grid));
        Ok(grid)
    } else {
        Err(GenerateError::SearchExhausted)
    }
}

/// Fills the diagonal boxes (indices 0, 4, 8) with independent random
/// permutations of 1-9.
fn fill_diagonal_boxes<R: Rng>(grid: &mut DigitGrid, rng: &mut R) {
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell, digit) in (0..).zip(digits) {
            grid[Position::from_box(box_index, cell)] = Some(digit);
        }
    }
}

/// Completes the grid by exhaustive backtracking.
///
/// Targets the first empty cell in row-major order, tries digits 1-9 in
/// ascending order gated by [`rules::is_placeable`], and unassigns on
/// recursion failure. Recursion depth is bounded by the 81 cells. Returns
/// `false` only when every digit choice at some choice point is exhausted,
/// which can backtrack all the way past the seeded boxes.
fn fill_remaining(grid: &mut DigitGrid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    for digit in Digit::ALL {
        if rules::is_placeable(grid, pos, digit) {
            grid[pos] = Some(digit);
            if fill_remaining(grid) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}

/// Returns a copy of `grid` with exactly `count` cells emptied, chosen at
/// uniformly random coordinates.
///
/// No solution-uniqueness check is performed on the result.
///
/// # Panics
///
/// Panics if `count` exceeds the 81 cells of the board.
fn remove_cells<R: Rng>(grid: &DigitGrid, count: u8, rng: &mut R) -> DigitGrid {
    assert!(count <= 81, "cannot remove {count} of 81 cells");

    let mut puzzle = grid.clone();
    let mut removed = 0;
    while removed < count {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if puzzle[pos].take().is_some() {
            removed += 1;
        }
    }
    puzzle
}
