//! Puzzle generation for number-place (Sudoku) games.
//!
//! This crate builds playable puzzles in two phases: it first constructs a
//! complete valid grid with a diagonal-seeded backtracking search, then
//! removes a difficulty-determined number of cells to produce the problem
//! grid alongside its solution.
//!
//! All randomness flows through a [`PuzzleSeed`], so generation is fully
//! reproducible: the same seed and difficulty always yield the same puzzle.
//!
//! # Known limitation
//!
//! Cell removal performs **no solution-uniqueness check**; a generated
//! problem may admit multiple valid solutions. This is a deliberate
//! simplicity trade-off, not a bug. Callers that need completion detection
//! should accept any consistent full grid, not only the returned solution.
//!
//! # Examples
//!
//! ```
//! use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("doc example");
//! let puzzle = generator
//!     .generate_with_seed(Difficulty::Medium, seed)
//!     .unwrap();
//!
//! // Medium removes 45 of 81 cells
//! assert_eq!(puzzle.problem.filled_count(), 36);
//! assert!(puzzle.solution.is_full());
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
