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

//! Errors which can occur when addressing a board or generating moves.

use super::Square;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// The ways in which a caller can break the contract of this crate.
///
/// Nothing past input validation can fail: once a `Square` exists it is on the
/// board, and move generation over an occupied square is total.
pub enum Error {
    /// A square was requested with a row or column outside of `1..=8`.
    #[error("square ({row}, {col}) is off the board (rows and columns run from 1 to 8)")]
    OutOfBounds { row: u8, col: u8 },

    /// Moves were requested for a square with no piece on it.
    #[error("no piece on {square} to generate moves for")]
    EmptySquare { square: Square },

    /// A string could not be read as an algebraic square name such as `e4`.
    #[error("invalid algebraic square name: {0:?}")]
    InvalidAlgebraic(String),
}
