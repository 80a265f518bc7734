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

//! Piece kinds and pieces.

use super::Side;

use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The kinds of piece which can be on a board.
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const NUM: usize = 6;

    /// Array containing all piece kinds.
    pub const ALL: [PieceKind; PieceKind::NUM] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// The kinds a pawn may promote to, most valuable first.
    pub const PROMOTE_KINDS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[must_use]
    /// Get the one-letter code of this kind as an uppercase character.
    pub const fn code(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }

    #[must_use]
    /// Given a one-letter code, convert it to a piece kind. Must be uppercase.
    pub const fn from_code(c: char) -> Option<PieceKind> {
        match c {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'R' => Some(PieceKind::Rook),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece on the board: a kind of piece belonging to one side.
///
/// Pieces know nothing about where they stand or how they got there.
pub struct Piece {
    /// The side this piece belongs to.
    pub side: Side,
    /// The kind of this piece.
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece { side, kind }
    }

    #[must_use]
    /// Get the one-letter code of this piece. Pieces of `Side::First` are
    /// uppercase and pieces of `Side::Second` are lowercase.
    pub const fn code(self) -> char {
        match self.side {
            Side::First => self.kind.code(),
            Side::Second => self.kind.code().to_ascii_lowercase(),
        }
    }

    #[must_use]
    /// Given a one-letter code, convert it to a piece, reading the side from
    /// the case of the letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox::{Piece, PieceKind, Side};
    ///
    /// assert_eq!(Piece::from_code('N'), Some(Piece::new(Side::First, PieceKind::Knight)));
    /// assert_eq!(Piece::from_code('q'), Some(Piece::new(Side::Second, PieceKind::Queen)));
    /// assert_eq!(Piece::from_code('x'), None);
    /// ```
    pub const fn from_code(c: char) -> Option<Piece> {
        let side = if c.is_ascii_uppercase() {
            Side::First
        } else {
            Side::Second
        };
        match PieceKind::from_code(c.to_ascii_uppercase()) {
            Some(kind) => Some(Piece { side, kind }),
            None => None,
        }
    }

    #[must_use]
    /// Determine whether `other` belongs to the opposing side.
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.side != other.side
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}
