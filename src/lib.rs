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

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Pseudo-legal chess move generation over an 8x8 mailbox board.
//!
//! A caller sets up a [`Board`], then asks [`movegen::piece_moves`] for the
//! moves of the piece on some [`Square`]. Moves are pseudo-legal: they obey
//! each piece's movement rules and the occupancy of the board, but are not
//! checked for leaving the mover's king in check. Castling and en passant are
//! not generated.
//!
//! # Examples
//!
//! ```
//! use mailbox::{movegen::piece_moves, Board, Square};
//!
//! let mut board = Board::starting();
//! let a1 = Square::new(1, 1).unwrap();
//! assert!(piece_moves(&board, a1).unwrap().is_empty());
//!
//! board.remove(Square::new(2, 1).unwrap());
//! assert_eq!(piece_moves(&board, a1).unwrap().len(), 6);
//! ```

// Many module elements are re-exported to make names more ergonomic to access.

mod board;
pub use board::Board;

mod cache;
pub use cache::MoveCache;

mod config;
pub use config::{MoveGenConfig, PromotionPolicy};

mod direction;
pub use direction::Direction;

mod error;
pub use error::Error;

pub mod movegen;

mod moves;
pub use moves::Move;

mod piece;
pub use piece::{Piece, PieceKind};

mod side;
pub use side::Side;

mod square;
pub use square::Square;

mod zobrist;
