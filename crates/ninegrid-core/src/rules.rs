//! Placement-legality and grid-consistency predicates.
//!
//! These two pure functions carry all of the rule knowledge in the system.
//! [`is_placeable`] gates the generator's backtracking search, and
//! [`is_consistent`] backs live validation, hint probing, and completion
//! detection in the game layer.
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Digit, DigitGrid, Position, rules};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(3, 0)] = Some(Digit::D7);
//!
//! // 7 conflicts along row 0, but not elsewhere
//! assert!(!rules::is_placeable(&grid, Position::new(8, 0), Digit::D7));
//! assert!(rules::is_placeable(&grid, Position::new(8, 1), Digit::D7));
//!
//! assert!(rules::is_consistent(&grid));
//! ```

use crate::{digit::Digit, digit_set::DigitSet, grid::DigitGrid, house::House, position::Position};

/// Returns `true` if `digit` can be placed at `pos` without conflicting
/// with any digit already in the same row, column, or 3×3 box.
///
/// The cell at `pos` itself is included in the scan, so a digit is never
/// placeable on top of itself. No side effects; runs in O(27) cell reads.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitGrid, Position, rules};
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// // Row, column, and box conflicts
/// assert!(!rules::is_placeable(&grid, Position::new(6, 0), Digit::D5));
/// assert!(!rules::is_placeable(&grid, Position::new(0, 6), Digit::D5));
/// assert!(!rules::is_placeable(&grid, Position::new(2, 2), Digit::D5));
///
/// // A different digit is fine
/// assert!(rules::is_placeable(&grid, Position::new(6, 0), Digit::D6));
/// ```
#[must_use]
pub fn is_placeable(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    for i in 0..9 {
        if grid[Position::new(i, pos.y())] == Some(digit) {
            return false;
        }
        if grid[Position::new(pos.x(), i)] == Some(digit) {
            return false;
        }
        if grid[Position::from_box(pos.box_index(), i)] == Some(digit) {
            return false;
        }
    }
    true
}

/// Returns `true` if no row, column, or 3×3 box contains a duplicate digit.
///
/// Empty cells never conflict, so any partially filled grid without
/// duplicates is consistent — including the fully empty grid. A full,
/// consistent grid is a solved puzzle.
///
/// Runs in a single pass over the 27 houses (no search), cheap enough to
/// invoke on every edit.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitGrid, Position, rules};
///
/// let mut grid = DigitGrid::new();
/// assert!(rules::is_consistent(&grid));
///
/// grid[Position::new(0, 0)] = Some(Digit::D1);
/// grid[Position::new(8, 0)] = Some(Digit::D1);
/// assert!(!rules::is_consistent(&grid)); // duplicate 1 in row 0
/// ```
#[must_use]
pub fn is_consistent(grid: &DigitGrid) -> bool {
    House::ALL
        .iter()
        .all(|house| house_is_consistent(grid, *house))
}

fn house_is_consistent(grid: &DigitGrid, house: House) -> bool {
    let mut seen = DigitSet::new();
    for pos in house.positions() {
        if let Some(digit) = grid[pos]
            && !seen.insert(digit)
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The canonical solved reference grid.
    fn solved_grid() -> DigitGrid {
        DigitGrid::from_matrix([
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ])
    }

    #[test]
    fn test_placeable_detects_row_conflict() {
        let mut grid = DigitGrid::new();
        grid[Position::new(2, 4)] = Some(Digit::D8);

        for x in 0..9 {
            assert!(!is_placeable(&grid, Position::new(x, 4), Digit::D8));
        }
        assert!(is_placeable(&grid, Position::new(8, 5), Digit::D8));
    }

    #[test]
    fn test_placeable_detects_column_conflict() {
        let mut grid = DigitGrid::new();
        grid[Position::new(6, 1)] = Some(Digit::D2);

        for y in 0..9 {
            assert!(!is_placeable(&grid, Position::new(6, y), Digit::D2));
        }
        assert!(is_placeable(&grid, Position::new(5, 8), Digit::D2));
    }

    #[test]
    fn test_placeable_detects_box_conflict() {
        let mut grid = DigitGrid::new();
        grid[Position::new(4, 4)] = Some(Digit::D3);

        // Every cell of the center box conflicts, even off the row/column
        assert!(!is_placeable(&grid, Position::new(3, 5), Digit::D3));
        assert!(!is_placeable(&grid, Position::new(5, 3), Digit::D3));

        // Same digit outside the row, column, and box is allowed
        assert!(is_placeable(&grid, Position::new(0, 0), Digit::D3));
    }

    #[test]
    fn test_solved_cell_digit_is_the_only_placeable_one() {
        // Clearing any cell of a solved grid leaves exactly one legal digit
        let solved = solved_grid();
        for pos in Position::ALL {
            let expected = solved[pos].unwrap();
            let mut grid = solved.clone();
            grid[pos] = None;

            let placeable: Vec<_> = Digit::ALL
                .into_iter()
                .filter(|digit| is_placeable(&grid, pos, *digit))
                .collect();
            assert_eq!(placeable, vec![expected]);
        }
    }

    #[test]
    fn test_consistent_accepts_reference_solution() {
        assert!(is_consistent(&solved_grid()));
    }

    #[test]
    fn test_consistent_accepts_empty_and_partial_grids() {
        let mut grid = DigitGrid::new();
        assert!(is_consistent(&grid));

        grid[Position::new(0, 0)] = Some(Digit::D1);
        grid[Position::new(1, 1)] = Some(Digit::D2);
        assert!(is_consistent(&grid));
    }

    #[test]
    fn test_consistent_rejects_duplicates_in_each_unit_kind() {
        let mut row_dup = DigitGrid::new();
        row_dup[Position::new(0, 3)] = Some(Digit::D6);
        row_dup[Position::new(7, 3)] = Some(Digit::D6);
        assert!(!is_consistent(&row_dup));

        let mut col_dup = DigitGrid::new();
        col_dup[Position::new(5, 0)] = Some(Digit::D4);
        col_dup[Position::new(5, 8)] = Some(Digit::D4);
        assert!(!is_consistent(&col_dup));

        let mut box_dup = DigitGrid::new();
        box_dup[Position::new(0, 0)] = Some(Digit::D9);
        box_dup[Position::new(2, 2)] = Some(Digit::D9);
        assert!(!is_consistent(&box_dup));
    }

    #[test]
    fn test_consistency_is_idempotent() {
        let grid = solved_grid();
        assert_eq!(is_consistent(&grid), is_consistent(&grid));
    }

    proptest! {
        /// Placing a digit reported placeable never breaks consistency of a
        /// grid derived from the solved reference by clearing cells.
        #[test]
        fn test_placeable_preserves_consistency(
            cleared in proptest::collection::vec(0..81_usize, 1..40),
            value in 1..=9_u8,
        ) {
            let mut grid = solved_grid();
            for index in &cleared {
                grid[Position::from_index(*index)] = None;
            }

            let pos = Position::from_index(cleared[0]);
            let digit = Digit::from_value(value);

            if is_placeable(&grid, pos, digit) {
                grid[pos] = Some(digit);
                prop_assert!(is_consistent(&grid));
            }
        }
    }
}
