/*
  Mailbox, a pseudo-legal chess move generator.
  Copyright (C) 2022 The Mailbox Authors.

  Mailbox is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Mailbox is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Squares, which are positions on a board.

use super::{Direction, Error};

use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A square: one of 64 spots on a `Board` that a `Piece` can occupy.
///
/// Rows and columns both run from 1 to 8. Column 1 is the `a` file and row 1 is
/// the back rank of `Side::Second`. A `Square` can only be created inside those
/// bounds, so every `Square` names a real slot on the board.
pub struct Square {
    row: u8,
    col: u8,
}

/// The names of the columns, in order, as used by algebraic notation.
const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

impl Square {
    /// Every square on the board, in row-major order from (1, 1) to (8, 8).
    pub const ALL: [Square; 64] = all_squares();

    /// Create a `Square` from the given row and column, each in `1..=8`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if either coordinate is outside `1..=8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox::Square;
    ///
    /// let sq = Square::new(4, 5).unwrap();
    /// assert_eq!(sq.to_string(), "e4");
    /// assert!(Square::new(0, 5).is_err());
    /// ```
    pub const fn new(row: u8, col: u8) -> Result<Square, Error> {
        if row < 1 || row > 8 || col < 1 || col > 8 {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Square { row, col })
    }

    #[must_use]
    /// Get the row (1 through 8) of this square.
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    /// Get the column (1 through 8) of this square.
    pub const fn col(self) -> u8 {
        self.col
    }

    #[must_use]
    /// Get a unique index in `0..64` for this square, counting in row-major
    /// order. `Square::ALL[sq.index()] == sq`.
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }

    #[must_use]
    /// Get the square one step away in the given direction, or `None` if that
    /// step would leave the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox::{Direction, Square};
    ///
    /// let a1 = Square::new(1, 1).unwrap();
    /// assert_eq!(a1.offset(Direction::NORTHEAST), Square::new(2, 2).ok());
    /// assert_eq!(a1.offset(Direction::WEST), None);
    /// ```
    pub fn offset(self, dir: Direction) -> Option<Square> {
        let row = u8::try_from(i16::from(self.row) + i16::from(dir.row_step())).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(dir.col_step())).ok()?;
        Square::new(row, col).ok()
    }

    #[must_use]
    /// Get what this square would appear to be from the point of view of the
    /// opposing player, reflecting its row.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox::Square;
    ///
    /// let sq1 = Square::new(2, 3).unwrap();
    /// assert_eq!(sq1.mirror(), Square::new(7, 3).unwrap());
    /// ```
    pub const fn mirror(self) -> Square {
        Square {
            row: 9 - self.row,
            col: self.col,
        }
    }

    #[must_use]
    /// Get the Chebyshev distance to another square.
    pub fn chebyshev_to(self, rhs: Square) -> u8 {
        self.row.abs_diff(rhs.row).max(self.col.abs_diff(rhs.col))
    }

    /// Convert an algebraic string (such as 'e7') to a square.
    /// The string must be two characters and the file must be in lowercase.
    ///
    /// # Errors
    ///
    /// This function will return `Error::InvalidAlgebraic` if `s` is not a
    /// legal algebraic square.
    pub fn from_algebraic(s: &str) -> Result<Square, Error> {
        let bad = || Error::InvalidAlgebraic(s.to_string());
        let mut chars = s.chars();
        let (Some(file_chr), Some(rank_chr), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(bad());
        };
        let col = FILE_NAMES
            .iter()
            .position(|&f| f == file_chr)
            .ok_or_else(bad)?;
        let row = rank_chr.to_digit(10).ok_or_else(bad)?;
        // both values are single digits at this point, so the casts are exact
        #[allow(clippy::cast_possible_truncation)]
        let (row, col) = (row as u8, col as u8 + 1);
        Square::new(row, col).map_err(|_| bad())
    }
}

/// Build the table of all squares at compile time.
const fn all_squares() -> [Square; 64] {
    let mut squares = [Square { row: 1, col: 1 }; 64];
    let mut i = 0;
    #[allow(clippy::cast_possible_truncation)]
    while i < squares.len() {
        squares[i] = Square {
            row: (i / 8) as u8 + 1,
            col: (i % 8) as u8 + 1,
        };
        i += 1;
    }
    squares
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", FILE_NAMES[self.col as usize - 1], self.row)
    }
}
