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

//! The board: an 8x8 grid of squares, each holding at most one piece.

use super::{zobrist, Move, Piece, PieceKind, Side, Square};

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::Index,
};

use tracing::debug;

/// The back rank of each side in the starting position, by column.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Copy, Clone, Debug)]
/// A snapshot of piece placement. Does not know whose turn it is, nor anything
/// about the history of the game.
///
/// Move generation only ever reads a `Board`; it changes solely through
/// `place`, `remove`, and `reset`.
pub struct Board {
    /// The occupant of each square, indexed by `[row - 1][col - 1]`.
    squares: [[Option<Piece>; 8]; 8],
    /// A saved Zobrist hash. Must always be equal to the output of
    /// `Board::fresh_hash()`.
    hash: u64,
}

impl Board {
    #[must_use]
    /// Create an empty board.
    pub const fn new() -> Board {
        Board {
            squares: [[None; 8]; 8],
            hash: 0,
        }
    }

    #[must_use]
    /// Create a board in the standard starting position.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox::{Board, Piece, PieceKind, Side, Square};
    ///
    /// let board = Board::starting();
    /// assert_eq!(
    ///     board.piece_at(Square::new(8, 5).unwrap()),
    ///     Some(Piece::new(Side::First, PieceKind::King))
    /// );
    /// ```
    pub fn starting() -> Board {
        let mut board = Board::new();
        board.reset();
        board
    }

    #[must_use]
    /// Get the piece occupying a given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize - 1][sq.col() as usize - 1]
    }

    /// Put `piece` on `sq`, replacing whatever was there before.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.remove(sq);
        self.squares[sq.row() as usize - 1][sq.col() as usize - 1] = Some(piece);
        self.hash ^= zobrist::square_key(sq, piece);
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let old = self.squares[sq.row() as usize - 1][sq.col() as usize - 1].take();
        if let Some(p) = old {
            self.hash ^= zobrist::square_key(sq, p);
        }
        old
    }

    /// Clear every square, then set up the standard starting position: the
    /// pieces of `Side::First` on rows 7 and 8, those of `Side::Second` on rows
    /// 1 and 2.
    pub fn reset(&mut self) {
        *self = Board::new();
        for side in Side::ALL {
            let back_row = side.back_row();
            let pawn_row = side.pawn_start_row();
            for (col, kind) in (1..=8).zip(BACK_RANK) {
                self.place(square_at(back_row, col), Piece::new(side, kind));
                self.place(
                    square_at(pawn_row, col),
                    Piece::new(side, PieceKind::Pawn),
                );
            }
        }
        debug_assert!(self.is_valid());
        debug!("board reset to the starting position");
    }

    /// Iterate over every occupied square and its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .into_iter()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    #[must_use]
    /// Get the Zobrist key of this board. Equal boards always have equal keys.
    pub const fn hash_key(&self) -> u64 {
        self.hash
    }

    #[must_use]
    /// Is the given move a capture on this board? That is, does its target
    /// square hold a piece of the side opposing the piece that moves?
    /// Returns `false` if the origin of the move is empty.
    pub fn is_move_capture(&self, m: Move) -> bool {
        match (self.piece_at(m.from_square()), self.piece_at(m.to_square())) {
            (Some(mover), Some(target)) => mover.is_enemy_of(target),
            _ => false,
        }
    }

    #[must_use]
    /// Check that the saved hash of this board matches its contents.
    pub fn is_valid(&self) -> bool {
        self.hash == self.fresh_hash()
    }

    /// Compute the hash value of this board from scratch. Iteratively
    /// updating the hash in `place` and `remove` is enough outside of
    /// validation.
    fn fresh_hash(&self) -> u64 {
        self.pieces()
            .fold(0, |hash, (sq, p)| hash ^ zobrist::square_key(sq, p))
    }
}

/// Get a square from coordinates which are known to be on the board.
fn square_at(row: u8, col: u8) -> Square {
    Square::ALL[(row as usize - 1) * 8 + (col as usize - 1)]
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row() as usize - 1][sq.col() as usize - 1]
    }
}

impl Display for Board {
    /// Display this board in a console-ready format. Expresses as a series of 8
    /// lines, where the topmost line is row 8 and the bottommost is row 1, so
    /// the pieces of `Side::First` start at the top. Pieces of `Side::First`
    /// are capital letters, while those of `Side::Second` are lowercase.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.squares.iter().rev() {
            write!(f, "|")?;
            for slot in row {
                match slot {
                    Some(p) => write!(f, "{p}|")?,
                    None => write!(f, " |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.squares == other.squares
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
