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

//! Moves, which describe a piece travelling from one square to another.

use super::{PieceKind, Square};

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A move from one square to another, with an optional promotion.
///
/// A `Move` does not know which piece is moving or what, if anything, it
/// captures; that is a property of the board it is played on.
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    #[must_use]
    /// Make a new `Move` for a piece.
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Move {
        Move {
            from,
            to,
            promotion,
        }
    }

    #[must_use]
    /// Create a `Move` with no promotion.
    pub const fn normal(from: Square, to: Square) -> Move {
        Move::new(from, to, None)
    }

    #[must_use]
    /// Create a `Move` which promotes a pawn to `kind`.
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Move {
        Move::new(from, to, Some(kind))
    }

    #[must_use]
    /// Get the square that a piece moves from to execute this move.
    pub const fn from_square(self) -> Square {
        self.from
    }

    #[must_use]
    /// Get the target square of this move.
    pub const fn to_square(self) -> Square {
        self.to
    }

    #[must_use]
    /// Get the kind a pawn becomes by making this move, if it promotes.
    pub const fn promote_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " ={kind}")?;
        }
        Ok(())
    }
}
