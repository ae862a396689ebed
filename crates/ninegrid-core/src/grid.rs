//! The 9×9 board of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{digit::Digit, position::Position};

/// A 9×9 grid of cells, each either empty or holding a digit 1-9.
///
/// Cells are stored in row-major order and indexed by [`Position`]. This is
/// the sole currency between the generator, the rule checker, and the game
/// layer; it carries no UI state.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.filled_count(), 0);
///
/// let pos = Position::new(4, 4);
/// grid[pos] = Some(Digit::D5);
/// assert_eq!(grid[pos], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// ```
///
/// Grids can be parsed from a whitespace-insensitive text form, where `_`
/// or `.` marks an empty cell:
///
/// ```
/// use ninegrid_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a new grid with all cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the number of filled (non-empty) cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is full.
    ///
    /// This is the cell-selection rule of the backtracking search.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Creates a grid from a plain 0-9 integer matrix, where 0 denotes an
    /// empty cell.
    ///
    /// `matrix[y][x]` maps to the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::{Digit, DigitGrid, Position};
    ///
    /// let mut matrix = [[0_u8; 9]; 9];
    /// matrix[2][7] = 4;
    /// let grid = DigitGrid::from_matrix(matrix);
    /// assert_eq!(grid[Position::new(7, 2)], Some(Digit::D4));
    /// assert_eq!(grid.to_matrix(), matrix);
    /// ```
    #[must_use]
    pub fn from_matrix(matrix: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = matrix[pos.y() as usize][pos.x() as usize];
            assert!(value <= 9, "Invalid cell value: {value}");
            grid[pos] = Digit::try_from_value(value);
        }
        grid
    }

    /// Returns the grid as a plain 0-9 integer matrix, where 0 denotes an
    /// empty cell.
    #[must_use]
    pub fn to_matrix(&self) -> [[u8; 9]; 9] {
        let mut matrix = [[0; 9]; 9];
        for pos in Position::ALL {
            matrix[pos.y() as usize][pos.x() as usize] =
                self[pos].map_or(0, Digit::value);
        }
        matrix
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    /// Formats the grid as 81 characters in row-major order, using `_` for
    /// empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// An error returned when parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseGridError {
    /// The text contained a character other than a digit, `_`, `.`, or
    /// whitespace.
    #[display("invalid grid character: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid from text. Digits 1-9 fill cells, `_` and `.` mark
    /// empty cells, and all whitespace is ignored; exactly 81 cells are
    /// required. `0` is accepted as an empty cell for compatibility with
    /// plain-matrix dumps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '_' | '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
            if count == 81 {
                return Err(ParseGridError::WrongCellCount(82));
            }
            grid.cells[count] = cell;
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let text = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ";
        let grid: DigitGrid = text.parse().unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.len(), 81);
        assert_eq!(rendered.parse::<DigitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));

        for x in 0..9 {
            grid[Position::new(x, 0)] = Some(Digit::D1);
        }
        grid[Position::new(0, 1)] = Some(Digit::D2);
        assert_eq!(grid.first_empty(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_first_empty_on_full_grid() {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid[pos] = Some(Digit::D1);
        }
        assert!(grid.is_full());
        assert_eq!(grid.first_empty(), None);
    }

    #[test]
    fn test_matrix_round_trip() {
        let mut matrix = [[0_u8; 9]; 9];
        matrix[0][0] = 5;
        matrix[8][8] = 9;
        matrix[3][6] = 1;

        let grid = DigitGrid::from_matrix(matrix);
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid[Position::new(6, 3)], Some(Digit::D1));
        assert_eq!(grid.to_matrix(), matrix);
    }

    #[test]
    #[should_panic(expected = "Invalid cell value: 12")]
    fn test_from_matrix_rejects_large_values() {
        let mut matrix = [[0_u8; 9]; 9];
        matrix[4][4] = 12;
        let _ = DigitGrid::from_matrix(matrix);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter('x'))
        );
        assert_eq!(
            "1".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount(80))
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount(82))
        );
    }
}
