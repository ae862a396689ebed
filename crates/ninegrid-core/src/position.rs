//! Board position (x, y) coordinate types.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions also map to a row-major linear index 0-80 and to a
/// 3×3 box index 0-8.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.index(), 7 * 9 + 4);
/// assert_eq!(pos.box_index(), 7); // bottom-middle box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Returns the index of the 3×3 box containing this position.
    ///
    /// Boxes are numbered 0-8, left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 8).box_index(), 8);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3×3 box containing this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::Position;
    ///
    /// assert_eq!(Position::new(5, 7).box_origin(), Position::new(3, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            x: self.x - self.x % 3,
            y: self.y - self.y % 3,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, row-major within the box).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::Position;
    ///
    /// assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
    /// assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
    /// assert_eq!(Position::from_box(8, 8), Position::new(8, 8));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), *pos);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(2, 2).box_index(), 0);
        assert_eq!(Position::new(3, 2).box_index(), 1);
        assert_eq!(Position::new(2, 3).box_index(), 3);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for box_index in 0..9 {
            for cell in 0..9 {
                let pos = Position::from_box(box_index, cell);
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
        assert_eq!(Position::new(2, 2).box_origin(), Position::new(0, 0));
        assert_eq!(Position::new(4, 4).box_origin(), Position::new(3, 3));
        assert_eq!(Position::new(8, 6).box_origin(), Position::new(6, 6));
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
