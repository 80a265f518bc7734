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

//! Configuration options for move generation.

use super::PieceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
/// Which moves to emit when a pawn reaches its promotion row.
pub enum PromotionPolicy {
    /// Emit one move per kind in `PieceKind::PROMOTE_KINDS`.
    #[default]
    AllKinds,
    /// Emit only the promotion to a queen.
    QueenOnly,
}

impl PromotionPolicy {
    #[must_use]
    /// Get the kinds a promoting pawn may become under this policy.
    pub const fn kinds(self) -> &'static [PieceKind] {
        match self {
            PromotionPolicy::AllKinds => &PieceKind::PROMOTE_KINDS,
            PromotionPolicy::QueenOnly => &[PieceKind::Queen],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Configuration options for move generation.
pub struct MoveGenConfig {
    /// How promoting pawn moves are enumerated.
    pub promotions: PromotionPolicy,
}

impl MoveGenConfig {
    #[must_use]
    pub const fn new() -> MoveGenConfig {
        MoveGenConfig {
            promotions: PromotionPolicy::AllKinds,
        }
    }
}

impl Default for MoveGenConfig {
    fn default() -> MoveGenConfig {
        MoveGenConfig::new()
    }
}
