//! Core data structures and rule checking for number-place (Sudoku) puzzles.
//!
//! This crate provides the grid data model shared by the generator and game
//! layers, plus the pure rule-checking predicates that both build on.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of digits 1-9
//! - [`position`]: Board coordinates with row-major and box indexing
//! - [`digit_set`]: A 9-bit set of digits, used for duplicate detection and
//!   note annotations
//! - [`grid`]: The 9×9 board of optional digits
//! - [`house`]: The 27 rows, columns, and boxes subject to the
//!   no-duplicate-digit rule
//! - [`rules`]: Placement-legality and grid-consistency predicates
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Digit, DigitGrid, Position, rules};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 can no longer be placed anywhere in row 0, column 0, or the top-left box
//! assert!(!rules::is_placeable(&grid, Position::new(8, 0), Digit::D5));
//! assert!(rules::is_placeable(&grid, Position::new(8, 8), Digit::D5));
//!
//! // A grid with no duplicates in any unit is consistent
//! assert!(rules::is_consistent(&grid));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod rules;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
