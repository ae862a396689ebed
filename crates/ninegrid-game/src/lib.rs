//! Play-state tracking for number-place (Sudoku) games.
//!
//! This crate wraps a generated puzzle in a [`Game`] session: it
//! distinguishes given cells from player-filled cells, tracks candidate
//! note annotations, validates the board after every edit, probes for
//! hints, and detects completion. Rendering, input capture, and styling
//! are out of scope — this is the state the presentation layer draws from.
//!
//! # Examples
//!
//! ```
//! use ninegrid_game::Game;
//! use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator
//!     .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game doc"))
//!     .unwrap();
//! let game = Game::new(puzzle);
//!
//! assert!(game.is_consistent()); // a fresh board has no conflicts
//! assert!(!game.is_solved()); // but is not yet complete
//! ```

pub mod cell;
pub mod game;

pub use self::{
    cell::CellState,
    game::{Game, GameError},
};
