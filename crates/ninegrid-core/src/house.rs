//! Houses: the rows, columns, and 3×3 boxes of the board.

use crate::position::Position;

/// A house (row, column, or 3×3 box).
///
/// The 27 houses are the units subject to the no-duplicate-digit rule:
/// 9 rows, 9 columns, and 9 non-overlapping boxes.
///
/// # Examples
///
/// ```
/// use ninegrid_core::House;
///
/// assert_eq!(House::ALL.len(), 27);
///
/// // Each house covers exactly 9 cells
/// for house in House::ALL {
///     assert_eq!(house.positions().len(), 9);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the 9 positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in (0..).zip(&mut positions) {
            *slot = self.position_from_cell_index(i);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses_cover_board_evenly() {
        // Every cell appears in exactly one row, one column, and one box
        let mut coverage = [0_u8; 81];
        for house in House::ALL {
            for pos in house.positions() {
                coverage[pos.index()] += 1;
            }
        }
        assert!(coverage.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_box_positions() {
        let positions = House::Box { index: 4 }.positions();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[8], Position::new(5, 5));
    }

    #[test]
    fn test_house_order() {
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }
}
