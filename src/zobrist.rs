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

//! Hash key generation for boards.

use super::{Piece, PieceKind, Square};

use once_cell::sync::Lazy;

/// The seed for the key generator. Fixed so that hashes are stable from run
/// to run.
const KEY_SEED: u64 = 12345;

/// One key per (square, piece kind, side).
static SQUARE_KEYS: Lazy<[[[u64; 2]; PieceKind::NUM]; 64]> = Lazy::new(|| {
    let rng = fastrand::Rng::with_seed(KEY_SEED);
    let mut keys = [[[0; 2]; PieceKind::NUM]; 64];
    for sq_keys in &mut keys {
        for kind_keys in sq_keys.iter_mut() {
            for key in kind_keys.iter_mut() {
                *key = rng.u64(..);
            }
        }
    }
    keys
});

/// One key per square, used to salt a board's key with the square a query is
/// about.
static QUERY_KEYS: Lazy<[u64; 64]> = Lazy::new(|| {
    let rng = fastrand::Rng::with_seed(!KEY_SEED);
    let mut keys = [0; 64];
    for key in &mut keys {
        *key = rng.u64(..);
    }
    keys
});

#[inline]
#[must_use]
/// Get the Zobrist key for a given piece standing on a given square.
pub fn square_key(sq: Square, piece: Piece) -> u64 {
    SQUARE_KEYS[sq.index()][piece.kind as usize][piece.side as usize]
}

#[inline]
#[must_use]
/// Get the key which marks a lookup about the piece on `sq`.
pub fn query_key(sq: Square) -> u64 {
    QUERY_KEYS[sq.index()]
}
