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

//! Memoization of generated moves, keyed by board hash.

use super::{movegen::piece_moves_with, zobrist, Board, Error, Move, MoveGenConfig, Square};

use nohash_hasher::IntMap;
use tracing::trace;

#[derive(Clone, Debug)]
/// A single remembered query.
struct Entry {
    board: Board,
    square: Square,
    moves: Vec<Move>,
}

#[derive(Clone, Debug, Default)]
/// A cache of move generation results.
///
/// Lookups are keyed by the Zobrist key of the board combined with the square
/// queried. Each entry also keeps a copy of its board, so that two positions
/// whose keys collide can never be confused.
pub struct MoveCache {
    /// The configuration every cached result was generated under.
    config: MoveGenConfig,
    /// Entries sharing a key live in the same bucket.
    entries: IntMap<u64, Vec<Entry>>,
    /// The total number of entries across all buckets.
    len: usize,
}

impl MoveCache {
    #[must_use]
    /// Create an empty cache which generates moves under `config`.
    pub fn new(config: MoveGenConfig) -> MoveCache {
        MoveCache {
            config,
            entries: IntMap::default(),
            len: 0,
        }
    }

    #[must_use]
    /// Get the configuration this cache generates moves under.
    pub const fn config(&self) -> &MoveGenConfig {
        &self.config
    }

    /// Get the moves of the piece on `sq`, generating and remembering them if
    /// this position and square have not been seen before.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptySquare` if there is no piece on `sq`. Failed
    /// lookups are not remembered.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox::{Board, MoveCache, MoveGenConfig, Square};
    ///
    /// let mut cache = MoveCache::new(MoveGenConfig::default());
    /// let board = Board::starting();
    /// let b1 = Square::new(1, 2).unwrap();
    /// assert_eq!(cache.get_or_generate(&board, b1).unwrap().len(), 2);
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn get_or_generate(&mut self, board: &Board, sq: Square) -> Result<&[Move], Error> {
        let key = board.hash_key() ^ zobrist::query_key(sq);
        let hit = self.entries.get(&key).and_then(|bucket| {
            bucket
                .iter()
                .position(|e| e.square == sq && e.board == *board)
        });

        if let Some(i) = hit {
            trace!(square = %sq, key, "move cache hit");
            return Ok(&self.entries[&key][i].moves);
        }

        trace!(square = %sq, key, "move cache miss");
        let moves = piece_moves_with(board, sq, &self.config)?;
        let bucket = self.entries.entry(key).or_default();
        bucket.push(Entry {
            board: *board,
            square: sq,
            moves,
        });
        self.len += 1;
        Ok(&bucket[bucket.len() - 1].moves)
    }

    #[must_use]
    /// Get the number of remembered queries.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget every remembered query.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }
}
