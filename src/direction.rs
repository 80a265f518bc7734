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

//! Directions, which describe motions between `Square`s.

use std::ops::Add;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A difference between two squares, expressed as a number of rows and
/// columns to step.
///
/// Rows increase "north", toward the starting rows of `Side::First`, and
/// columns increase "east".
pub struct Direction {
    row: i8,
    col: i8,
}

impl Direction {
    /* Cardinal directions */

    /// A `Direction` corresponding to a move "north", in the direction a pawn
    /// of `Side::Second` would travel.
    pub const NORTH: Self = Self::new(1, 0);

    /// A `Direction` corresponding to a move "east".
    pub const EAST: Self = Self::new(0, 1);

    /// A `Direction` corresponding to a move "south", in the direction a pawn
    /// of `Side::First` would travel.
    pub const SOUTH: Self = Self::new(-1, 0);

    /// A `Direction` corresponding to a move "west".
    pub const WEST: Self = Self::new(0, -1);

    /* Composite directions */

    /// A `Direction` corresponding to a move "northwest".
    pub const NORTHWEST: Self = Self::new(1, -1);
    /// A `Direction` corresponding to a move "northeast".
    pub const NORTHEAST: Self = Self::new(1, 1);
    /// A `Direction` corresponding to a move "southeast".
    pub const SOUTHEAST: Self = Self::new(-1, 1);
    /// A `Direction` corresponding to a move "southwest".
    pub const SOUTHWEST: Self = Self::new(-1, -1);

    /* Knight directions */

    /// A `Direction` corresponding to a move "north-by-northwest".
    pub const NNW: Self = Self::new(2, -1);

    /// A `Direction` corresponding to a move "north-by-northeast".
    pub const NNE: Self = Self::new(2, 1);

    /// A `Direction` corresponding to a move "east-by-northeast".
    pub const ENE: Self = Self::new(1, 2);

    /// A `Direction` corresponding to a move "east-by-southeast".
    pub const ESE: Self = Self::new(-1, 2);

    /// A `Direction` corresponding to a move "south-by-southeast".
    pub const SSE: Self = Self::new(-2, 1);

    /// A `Direction` corresponding to a move "south-by-southwest".
    pub const SSW: Self = Self::new(-2, -1);

    /// A `Direction` corresponding to a move "west-by-southwest".
    pub const WSW: Self = Self::new(-1, -2);

    /// A `Direction` corresponding to a move "west-by-northwest".
    pub const WNW: Self = Self::new(1, -2);

    /// The directions that a rook can move, along only one step.
    pub const ROOK_DIRECTIONS: [Self; 4] = [Self::NORTH, Self::SOUTH, Self::EAST, Self::WEST];

    /// The directions that a bishop can move, along only one step.
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Self::NORTHWEST,
        Self::NORTHEAST,
        Self::SOUTHWEST,
        Self::SOUTHEAST,
    ];

    /// The directions that a queen can move, along only one step.
    pub const QUEEN_DIRECTIONS: [Self; 8] = [
        Self::NORTH,
        Self::SOUTH,
        Self::EAST,
        Self::WEST,
        Self::NORTHWEST,
        Self::NORTHEAST,
        Self::SOUTHWEST,
        Self::SOUTHEAST,
    ];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Self; 8] = [
        Self::NNW,
        Self::NNE,
        Self::ENE,
        Self::ESE,
        Self::SSE,
        Self::SSW,
        Self::WSW,
        Self::WNW,
    ];

    /// The steps that a king can make.
    pub const KING_STEPS: [Self; 8] = [
        Self::NORTH,
        Self::NORTHEAST,
        Self::EAST,
        Self::SOUTHEAST,
        Self::SOUTH,
        Self::SOUTHWEST,
        Self::WEST,
        Self::NORTHWEST,
    ];

    #[must_use]
    /// Create a new `Direction` based on how far it moves in rows and columns.
    pub const fn new(row_step: i8, col_step: i8) -> Self {
        Self {
            row: row_step,
            col: col_step,
        }
    }

    #[must_use]
    /// Get the number of rows this direction steps.
    pub const fn row_step(self) -> i8 {
        self.row
    }

    #[must_use]
    /// Get the number of columns this direction steps.
    pub const fn col_step(self) -> i8 {
        self.col
    }
}

impl Add<Self> for Direction {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}
