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

//! Generation of pseudo-legal moves for a single piece.
//!
//! A pseudo-legal move obeys the movement rules of its piece and the
//! occupancy of the board, but may leave the mover's own king in check.
//! Checking king safety, castling, and en passant are all left to callers.

#[cfg(test)]
mod tests;

use super::{
    Board, Direction, Error, Move, MoveGenConfig, Piece, PieceKind, PromotionPolicy, Side, Square,
};

use once_cell::sync::Lazy;
use tracing::trace;

/// A lookup table for the squares a knight can reach from a given square,
/// indexed by `Square::index()`.
static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| create_step_targets(&Direction::KNIGHT_STEPS));

/// A lookup table for the squares a king can reach from a given square,
/// indexed by `Square::index()`.
static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| create_step_targets(&Direction::KING_STEPS));

/// Get the on-board targets of taking each of `steps` once from every square.
fn create_step_targets(steps: &[Direction]) -> [Vec<Square>; 64] {
    std::array::from_fn(|i| {
        steps
            .iter()
            .filter_map(|&step| Square::ALL[i].offset(step))
            .collect()
    })
}

/// Get the pseudo-legal moves of the piece standing on `sq`, enumerating
/// promotions as in `MoveGenConfig::default()`.
///
/// # Errors
///
/// Returns `Error::EmptySquare` if there is no piece on `sq`.
///
/// # Examples
///
/// ```
/// use mailbox::{movegen::piece_moves, Board, Square};
///
/// let board = Board::starting();
/// // the knight on b1 can jump to a3 or c3
/// let moves = piece_moves(&board, Square::new(1, 2).unwrap()).unwrap();
/// assert_eq!(moves.len(), 2);
///
/// // there is nothing on e4 to move
/// assert!(piece_moves(&board, Square::new(4, 5).unwrap()).is_err());
/// ```
pub fn piece_moves(board: &Board, sq: Square) -> Result<Vec<Move>, Error> {
    piece_moves_with(board, sq, &MoveGenConfig::default())
}

/// Get the pseudo-legal moves of the piece standing on `sq` under the given
/// configuration.
///
/// # Errors
///
/// Returns `Error::EmptySquare` if there is no piece on `sq`.
pub fn piece_moves_with(
    board: &Board,
    sq: Square,
    config: &MoveGenConfig,
) -> Result<Vec<Move>, Error> {
    let piece = board
        .piece_at(sq)
        .ok_or(Error::EmptySquare { square: sq })?;
    let moves = moves_for(board, sq, piece, config);
    trace!(square = %sq, %piece, count = moves.len(), "generated pseudo-legal moves");
    Ok(moves)
}

#[must_use]
/// Get the pseudo-legal moves that `piece` would have if it stood on `sq`.
///
/// The occupant of `sq` on `board` is never read, so this can be used to ask
/// about a piece before it is placed.
pub fn moves_for(board: &Board, sq: Square, piece: Piece, config: &MoveGenConfig) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::new();
    let mut push = |m: Move| moves.push(m);
    match piece.kind {
        PieceKind::Bishop => {
            sliding_moves(board, sq, piece.side, &Direction::BISHOP_DIRECTIONS, &mut push);
        }
        PieceKind::Rook => {
            sliding_moves(board, sq, piece.side, &Direction::ROOK_DIRECTIONS, &mut push);
        }
        PieceKind::Queen => {
            sliding_moves(board, sq, piece.side, &Direction::QUEEN_DIRECTIONS, &mut push);
        }
        PieceKind::Knight => {
            step_moves(board, sq, piece.side, &KNIGHT_TARGETS[sq.index()], &mut push);
        }
        PieceKind::King => {
            step_moves(board, sq, piece.side, &KING_TARGETS[sq.index()], &mut push);
        }
        PieceKind::Pawn => pawn_moves(board, sq, piece.side, config.promotions, &mut push),
    }
    moves
}

#[must_use]
/// Get the pseudo-legal moves of every piece belonging to `side`, visiting
/// pieces in row-major order.
pub fn side_moves(board: &Board, side: Side, config: &MoveGenConfig) -> Vec<Move> {
    let moves: Vec<Move> = board
        .pieces()
        .filter(|(_, p)| p.side == side)
        .flat_map(|(sq, p)| moves_for(board, sq, p, config))
        .collect();
    trace!(?side, count = moves.len(), "generated pseudo-legal moves for side");
    moves
}

/// Enumerate the moves of a piece which slides along `dirs` from `sq`.
///
/// Each ray runs until it leaves the board or meets a piece. An opposing piece
/// at the end of a ray may be captured; an allied one may not.
fn sliding_moves(
    board: &Board,
    sq: Square,
    side: Side,
    dirs: &[Direction],
    callback: &mut impl FnMut(Move),
) {
    for &dir in dirs {
        let mut current = sq;
        while let Some(target) = current.offset(dir) {
            match board.piece_at(target) {
                None => callback(Move::normal(sq, target)),
                Some(occupant) => {
                    if occupant.side != side {
                        callback(Move::normal(sq, target));
                    }
                    break;
                }
            }
            current = target;
        }
    }
}

/// Enumerate the moves of a piece which jumps from `sq` directly to any of
/// `targets`, so long as the target is not held by an ally.
fn step_moves(
    board: &Board,
    sq: Square,
    side: Side,
    targets: &[Square],
    callback: &mut impl FnMut(Move),
) {
    for &target in targets {
        if board.piece_at(target).map_or(true, |p| p.side != side) {
            callback(Move::normal(sq, target));
        }
    }
}

/// Enumerate the moves of a pawn of `side` standing on `sq`.
fn pawn_moves(
    board: &Board,
    sq: Square,
    side: Side,
    promotions: PromotionPolicy,
    callback: &mut impl FnMut(Move),
) {
    let dir = side.pawn_direction();
    // a pawn with no row in front of it has nowhere to go
    let Some(ahead) = sq.offset(dir) else {
        return;
    };

    if board.piece_at(ahead).is_none() {
        pawn_move(sq, ahead, side, promotions, callback);
        if sq.row() == side.pawn_start_row() {
            if let Some(two_ahead) = ahead.offset(dir) {
                if board.piece_at(two_ahead).is_none() {
                    callback(Move::normal(sq, two_ahead));
                }
            }
        }
    }

    for capture_dir in [dir + Direction::WEST, dir + Direction::EAST] {
        let Some(target) = sq.offset(capture_dir) else {
            continue;
        };
        if board.piece_at(target).is_some_and(|p| p.side != side) {
            pawn_move(sq, target, side, promotions, callback);
        }
    }
}

/// Emit a pawn move from `from` to `to`, expanding it into promotions if `to`
/// is on the promotion row of `side`.
fn pawn_move(
    from: Square,
    to: Square,
    side: Side,
    promotions: PromotionPolicy,
    callback: &mut impl FnMut(Move),
) {
    if to.row() == side.pawn_promote_row() {
        for &kind in promotions.kinds() {
            callback(Move::promoting(from, to, kind));
        }
    } else {
        callback(Move::normal(from, to));
    }
}
