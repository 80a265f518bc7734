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

//! Representation of the two sides of a game.

use super::Direction;
use std::ops::Not;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// An enum representing the possible sides that a piece or player can be on.
pub enum Side {
    /// The first player to move in a game. Starts on rows 7 and 8.
    First = 0,
    /// The second player to move in a game. Starts on rows 1 and 2.
    Second = 1,
}

impl Side {
    /// Both sides, in order of play.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    #[must_use]
    /// Get the direction that a pawn of the given side moves.
    pub const fn pawn_direction(self) -> Direction {
        match self {
            Side::First => Direction::SOUTH,
            Side::Second => Direction::NORTH,
        }
    }

    #[must_use]
    /// Get the row on which the pawns of this side start, and from which they
    /// may advance two squares.
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Side::First => 7,
            Side::Second => 2,
        }
    }

    #[must_use]
    /// Get the row on which the pawns of this side promote.
    pub const fn pawn_promote_row(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 8,
        }
    }

    #[must_use]
    /// Get the row holding the back rank pieces of this side in the starting
    /// position.
    pub const fn back_row(self) -> u8 {
        match self {
            Side::First => 8,
            Side::Second => 1,
        }
    }
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}
