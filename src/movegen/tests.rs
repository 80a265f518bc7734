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

//! Tests for move generation.

use super::*;
use crate::PromotionPolicy;

use std::collections::HashSet;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn piece(side: Side, kind: PieceKind) -> Piece {
    Piece::new(side, kind)
}

/// Get the set of squares that the given moves land on.
fn targets(moves: &[Move]) -> HashSet<Square> {
    moves.iter().map(|m| m.to_square()).collect()
}

/// Build a board holding only the given pieces.
fn board_with(pieces: &[(u8, u8, Side, PieceKind)]) -> Board {
    let mut b = Board::new();
    for &(row, col, side, kind) in pieces {
        b.place(sq(row, col), piece(side, kind));
    }
    b
}

/// Generate the moves for a lone piece placed on `(row, col)` of an otherwise
/// empty board.
fn lone_moves(row: u8, col: u8, side: Side, kind: PieceKind) -> Vec<Move> {
    let b = board_with(&[(row, col, side, kind)]);
    piece_moves(&b, sq(row, col)).unwrap()
}

#[test]
/// Test that a bishop in the middle of an empty board sees both full
/// diagonals.
#[rustfmt::skip]
fn bishop_empty_board() {
    let moves = lone_moves(4, 4, Side::Second, PieceKind::Bishop);
    assert_eq!(moves.len(), 13);
    let expected: HashSet<Square> = [
        (5, 5), (6, 6), (7, 7), (8, 8),
        (3, 3), (2, 2), (1, 1),
        (5, 3), (6, 2), (7, 1),
        (3, 5), (2, 6), (1, 7),
    ]
    .into_iter()
    .map(|(r, c)| sq(r, c))
    .collect();
    assert_eq!(targets(&moves), expected);
    assert!(moves.iter().all(|m| m.from_square() == sq(4, 4)));
}

#[test]
/// Test that an opposing piece on a bishop's diagonal can be captured, and
/// that the ray stops there.
fn bishop_captures_blocker() {
    let b = board_with(&[
        (4, 4, Side::Second, PieceKind::Bishop),
        (6, 6, Side::First, PieceKind::Knight),
    ]);
    let moves = piece_moves(&b, sq(4, 4)).unwrap();
    let t = targets(&moves);
    assert_eq!(moves.len(), 11);
    assert!(t.contains(&sq(5, 5)));
    assert!(t.contains(&sq(6, 6)));
    assert!(!t.contains(&sq(7, 7)));
    assert!(!t.contains(&sq(8, 8)));
    assert!(b.is_move_capture(Move::normal(sq(4, 4), sq(6, 6))));
}

#[test]
/// Test that an allied piece on a bishop's diagonal blocks the ray without
/// being capturable.
fn bishop_blocked_by_ally() {
    let b = board_with(&[
        (4, 4, Side::Second, PieceKind::Bishop),
        (6, 6, Side::Second, PieceKind::Knight),
    ]);
    let moves = piece_moves(&b, sq(4, 4)).unwrap();
    let t = targets(&moves);
    assert_eq!(moves.len(), 10);
    assert!(t.contains(&sq(5, 5)));
    assert!(!t.contains(&sq(6, 6)));
    assert!(!t.contains(&sq(7, 7)));
    assert!(!t.contains(&sq(8, 8)));
}

#[test]
fn rook_empty_board() {
    let moves = lone_moves(4, 4, Side::First, PieceKind::Rook);
    assert_eq!(moves.len(), 14);
    for m in &moves {
        let to = m.to_square();
        assert!(to.row() == 4 || to.col() == 4);
    }
}

#[test]
/// Test that a rook on the edge of the board does not wrap around to the
/// other side.
fn rook_no_wraparound() {
    let b = board_with(&[
        (3, 8, Side::Second, PieceKind::Rook),
        (4, 1, Side::First, PieceKind::Pawn),
    ]);
    let t = targets(&piece_moves(&b, sq(3, 8)).unwrap());
    assert_eq!(t.len(), 14);
    assert!(!t.contains(&sq(4, 1)));
}

#[test]
/// Test that a queen moves like a rook and a bishop combined.
fn queen_is_rook_and_bishop() {
    for (row, col) in [(1, 1), (4, 4), (5, 2), (8, 7)] {
        let queen = targets(&lone_moves(row, col, Side::Second, PieceKind::Queen));
        let rook = targets(&lone_moves(row, col, Side::Second, PieceKind::Rook));
        let bishop = targets(&lone_moves(row, col, Side::Second, PieceKind::Bishop));
        assert!(rook.is_disjoint(&bishop));
        assert_eq!(queen, &rook | &bishop);
    }
    assert_eq!(lone_moves(4, 4, Side::Second, PieceKind::Queen).len(), 27);
    assert_eq!(lone_moves(1, 1, Side::Second, PieceKind::Queen).len(), 21);
}

#[test]
/// Test that sliding rays stop at the first piece in every direction.
fn queen_surrounded() {
    let mut b = board_with(&[(4, 4, Side::Second, PieceKind::Queen)]);
    for dir in Direction::QUEEN_DIRECTIONS {
        let near = sq(4, 4).offset(dir).unwrap();
        let far = near.offset(dir).unwrap();
        b.place(far, piece(Side::First, PieceKind::Pawn));
    }
    let moves = piece_moves(&b, sq(4, 4)).unwrap();
    // one empty square and one capture per direction
    assert_eq!(moves.len(), 16);
    assert_eq!(
        moves.iter().filter(|&&m| b.is_move_capture(m)).count(),
        8
    );
}

#[test]
fn knight_corner_and_center() {
    let corner = lone_moves(1, 1, Side::Second, PieceKind::Knight);
    assert_eq!(targets(&corner), HashSet::from([sq(2, 3), sq(3, 2)]));
    assert_eq!(lone_moves(4, 4, Side::Second, PieceKind::Knight).len(), 8);
    assert_eq!(lone_moves(8, 8, Side::First, PieceKind::Knight).len(), 2);
    assert_eq!(lone_moves(1, 2, Side::First, PieceKind::Knight).len(), 3);
}

#[test]
/// Test that a knight on the edge does not wrap around the board.
fn knight_no_wraparound() {
    let moves = lone_moves(4, 8, Side::Second, PieceKind::Knight);
    assert_eq!(moves.len(), 4);
    for m in moves {
        assert!(m.to_square().col() >= 6);
        assert!(m.from_square().chebyshev_to(m.to_square()) == 2);
    }
}

#[test]
/// Test that a knight jumps over pieces, captures enemies, and skips allies.
fn knight_occupancy() {
    let mut b = board_with(&[(4, 4, Side::Second, PieceKind::Knight)]);
    // surround the knight so that it must jump
    for step in Direction::KING_STEPS {
        b.place(sq(4, 4).offset(step).unwrap(), piece(Side::Second, PieceKind::Pawn));
    }
    b.place(sq(6, 5), piece(Side::Second, PieceKind::Rook));
    b.place(sq(2, 3), piece(Side::First, PieceKind::Rook));

    let t = targets(&piece_moves(&b, sq(4, 4)).unwrap());
    assert_eq!(t.len(), 7);
    assert!(!t.contains(&sq(6, 5)));
    assert!(t.contains(&sq(2, 3)));
}

#[test]
fn king_corner_and_center() {
    assert_eq!(lone_moves(1, 1, Side::Second, PieceKind::King).len(), 3);
    assert_eq!(lone_moves(1, 5, Side::Second, PieceKind::King).len(), 5);
    assert_eq!(lone_moves(4, 4, Side::First, PieceKind::King).len(), 8);
}

#[test]
/// Test that a king may step next to or onto enemies, with no regard for
/// whether the square is attacked.
fn king_ignores_safety() {
    let b = board_with(&[
        (4, 4, Side::Second, PieceKind::King),
        (5, 5, Side::First, PieceKind::Queen),
        (3, 3, Side::Second, PieceKind::Pawn),
        (6, 4, Side::First, PieceKind::Rook),
    ]);
    let t = targets(&piece_moves(&b, sq(4, 4)).unwrap());
    assert_eq!(t.len(), 7);
    assert!(t.contains(&sq(5, 5)));
    assert!(t.contains(&sq(5, 4)));
    assert!(!t.contains(&sq(3, 3)));
}

#[test]
/// Test that a pawn on its start row with nothing ahead can advance one or
/// two squares, for both sides.
fn pawn_double_step() {
    let first = lone_moves(7, 5, Side::First, PieceKind::Pawn);
    assert_eq!(targets(&first), HashSet::from([sq(6, 5), sq(5, 5)]));

    let second = lone_moves(2, 5, Side::Second, PieceKind::Pawn);
    assert_eq!(targets(&second), HashSet::from([sq(3, 5), sq(4, 5)]));
}

#[test]
/// Test that a pawn off its start row has at most one forward move.
fn pawn_single_step_off_start() {
    for row in 3..=6 {
        let first = lone_moves(row, 3, Side::First, PieceKind::Pawn);
        assert_eq!(targets(&first), HashSet::from([sq(row - 1, 3)]));

        let second = lone_moves(row, 3, Side::Second, PieceKind::Pawn);
        assert_eq!(targets(&second), HashSet::from([sq(row + 1, 3)]));
    }
    // a pawn of the second side on row 7 is not on its start row
    assert_eq!(lone_moves(7, 3, Side::Second, PieceKind::Pawn).len(), 4);
    assert!(lone_moves(7, 3, Side::Second, PieceKind::Pawn)
        .iter()
        .all(|m| m.to_square() == sq(8, 3)));
}

#[test]
/// Test that pawns cannot capture or jump forward.
fn pawn_blocked() {
    // blocked directly ahead: no forward moves at all
    let b = board_with(&[
        (2, 4, Side::Second, PieceKind::Pawn),
        (3, 4, Side::First, PieceKind::Knight),
    ]);
    assert!(piece_moves(&b, sq(2, 4)).unwrap().is_empty());

    // blocked two ahead: only the single step
    let b = board_with(&[
        (2, 4, Side::Second, PieceKind::Pawn),
        (4, 4, Side::Second, PieceKind::Knight),
    ]);
    assert_eq!(
        piece_moves(&b, sq(2, 4)).unwrap(),
        vec![Move::normal(sq(2, 4), sq(3, 4))]
    );

    let b = board_with(&[
        (7, 4, Side::First, PieceKind::Pawn),
        (6, 4, Side::Second, PieceKind::Pawn),
    ]);
    assert!(piece_moves(&b, sq(7, 4)).unwrap().is_empty());
}

#[test]
/// Test that pawns capture diagonally forward onto enemies only.
fn pawn_captures() {
    let b = board_with(&[
        (4, 4, Side::Second, PieceKind::Pawn),
        (5, 3, Side::First, PieceKind::Bishop),
        (5, 5, Side::Second, PieceKind::Bishop),
        (3, 3, Side::First, PieceKind::Rook),
        (3, 5, Side::First, PieceKind::Rook),
    ]);
    let t = targets(&piece_moves(&b, sq(4, 4)).unwrap());
    assert_eq!(t, HashSet::from([sq(5, 4), sq(5, 3)]));

    // the first side captures toward row 1
    let b = board_with(&[
        (5, 4, Side::First, PieceKind::Pawn),
        (4, 4, Side::Second, PieceKind::Pawn),
        (4, 5, Side::Second, PieceKind::Queen),
        (6, 3, Side::Second, PieceKind::Queen),
    ]);
    let t = targets(&piece_moves(&b, sq(5, 4)).unwrap());
    assert_eq!(t, HashSet::from([sq(4, 5)]));
}

#[test]
/// Test that a pawn on the edge of the board only looks at one diagonal.
fn pawn_capture_no_wraparound() {
    let b = board_with(&[
        (3, 1, Side::Second, PieceKind::Pawn),
        (4, 2, Side::First, PieceKind::Pawn),
        (4, 8, Side::First, PieceKind::Pawn),
        (3, 8, Side::First, PieceKind::Pawn),
    ]);
    let t = targets(&piece_moves(&b, sq(3, 1)).unwrap());
    assert_eq!(t, HashSet::from([sq(4, 1), sq(4, 2)]));
}

#[test]
/// Test that forward and capturing moves onto the last row are promotions,
/// one per promotion kind.
fn pawn_promotion() {
    let b = board_with(&[
        (7, 3, Side::Second, PieceKind::Pawn),
        (8, 4, Side::First, PieceKind::Rook),
        (8, 2, Side::Second, PieceKind::Rook),
    ]);
    let moves = piece_moves(&b, sq(7, 3)).unwrap();
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| m.is_promotion()));
    for kind in PieceKind::PROMOTE_KINDS {
        assert!(moves.contains(&Move::promoting(sq(7, 3), sq(8, 3), kind)));
        assert!(moves.contains(&Move::promoting(sq(7, 3), sq(8, 4), kind)));
    }

    let b = board_with(&[
        (2, 6, Side::First, PieceKind::Pawn),
        (1, 7, Side::Second, PieceKind::Knight),
    ]);
    let moves = piece_moves(&b, sq(2, 6)).unwrap();
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| m.is_promotion() && m.to_square().row() == 1));
}

#[test]
/// Test that the queen-only policy emits a single promotion per target.
fn pawn_promotion_queen_only() {
    let config = MoveGenConfig {
        promotions: PromotionPolicy::QueenOnly,
    };
    let b = board_with(&[
        (7, 3, Side::Second, PieceKind::Pawn),
        (8, 4, Side::First, PieceKind::Rook),
    ]);
    let moves = piece_moves_with(&b, sq(7, 3), &config).unwrap();
    assert_eq!(
        moves.into_iter().collect::<HashSet<_>>(),
        HashSet::from([
            Move::promoting(sq(7, 3), sq(8, 3), PieceKind::Queen),
            Move::promoting(sq(7, 3), sq(8, 4), PieceKind::Queen),
        ])
    );
}

#[test]
/// Test that no move is flagged as a promotion unless a pawn reaches its last
/// row.
fn only_pawns_on_last_row_promote() {
    let b = board_with(&[
        (6, 3, Side::Second, PieceKind::Pawn),
        (7, 1, Side::Second, PieceKind::Rook),
        (7, 8, Side::Second, PieceKind::King),
        (3, 3, Side::First, PieceKind::Pawn),
        (2, 5, Side::First, PieceKind::Queen),
    ]);
    for side in Side::ALL {
        for m in side_moves(&b, side, &MoveGenConfig::default()) {
            assert!(!m.is_promotion(), "{m} should not promote");
        }
    }
}

#[test]
/// Test that asking for the moves of an empty square is an error.
fn empty_square_is_error() {
    let b = Board::starting();
    assert_eq!(
        piece_moves(&b, sq(4, 4)),
        Err(Error::EmptySquare { square: sq(4, 4) })
    );
    assert_eq!(
        piece_moves(&Board::new(), sq(1, 1)),
        Err(Error::EmptySquare { square: sq(1, 1) })
    );
}

#[test]
/// Test that the rook in the corner of the starting position is stuck, then
/// watch it open up as its pawn is replaced or removed.
fn starting_rook() {
    let mut b = Board::starting();
    assert_eq!(b.piece_at(sq(1, 1)), Some(piece(Side::Second, PieceKind::Rook)));
    assert!(piece_moves(&b, sq(1, 1)).unwrap().is_empty());

    // replace the pawn in front of it with an enemy: exactly one capture
    b.place(sq(2, 1), piece(Side::First, PieceKind::Pawn));
    assert_eq!(
        piece_moves(&b, sq(1, 1)).unwrap(),
        vec![Move::normal(sq(1, 1), sq(2, 1))]
    );

    // remove it entirely: the rook slides up to the enemy pawn row
    b.remove(sq(2, 1));
    let t = targets(&piece_moves(&b, sq(1, 1)).unwrap());
    assert_eq!(t, (2..=7).map(|row| sq(row, 1)).collect());
    assert!(b.is_move_capture(Move::normal(sq(1, 1), sq(7, 1))));
}

#[test]
/// Test that each side has the usual 20 moves in the starting position.
fn starting_move_count() {
    let b = Board::starting();
    for side in Side::ALL {
        let moves = side_moves(&b, side, &MoveGenConfig::default());
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|m| b.piece_at(m.from_square()).unwrap().kind == PieceKind::Knight)
            .count();
        assert_eq!(knight_moves, 4);
    }
}

#[test]
/// Test that the starting position is symmetric: every piece of the second
/// side has the mirror image of the moves of its counterpart on the first side.
fn starting_symmetry() {
    let b = Board::starting();
    let mirror = |m: &Move| {
        Move::new(
            m.from_square().mirror(),
            m.to_square().mirror(),
            m.promote_kind(),
        )
    };
    for (sq, p) in b.pieces().filter(|(_, p)| p.side == Side::Second) {
        let counterpart = b.piece_at(sq.mirror()).unwrap();
        assert_eq!(counterpart, Piece::new(Side::First, p.kind));

        let ours: HashSet<Move> = piece_moves(&b, sq).unwrap().iter().map(mirror).collect();
        let theirs: HashSet<Move> = piece_moves(&b, sq.mirror()).unwrap().into_iter().collect();
        assert_eq!(ours, theirs);
    }
}

#[test]
/// Test that the total number of moves of a lone piece over every square
/// matches the known counts for an empty board.
fn lone_piece_totals() {
    let total = |kind| -> usize {
        Square::ALL
            .iter()
            .map(|s| lone_moves(s.row(), s.col(), Side::Second, kind).len())
            .sum()
    };
    assert_eq!(total(PieceKind::Rook), 896);
    assert_eq!(total(PieceKind::Bishop), 560);
    assert_eq!(total(PieceKind::Queen), 1456);
    assert_eq!(total(PieceKind::Knight), 336);
    assert_eq!(total(PieceKind::King), 420);
}

#[test]
/// Test that generating moves neither changes the board nor depends on how
/// many times it has been called.
fn generation_is_pure() {
    let mut b = Board::starting();
    b.remove(sq(2, 5));
    b.place(sq(4, 5), piece(Side::Second, PieceKind::Pawn));
    let before = b;
    for s in Square::ALL {
        if b.piece_at(s).is_some() {
            let first = piece_moves(&b, s).unwrap();
            let second = piece_moves(&b, s).unwrap();
            assert_eq!(first, second);
        }
    }
    assert_eq!(b, before);
    assert_eq!(b.hash_key(), before.hash_key());
}

#[test]
/// Test that `moves_for` answers for a piece which is not on the board.
fn moves_for_hypothetical_piece() {
    let b = Board::starting();
    let config = MoveGenConfig::default();
    let knight = piece(Side::First, PieceKind::Knight);
    let t = targets(&moves_for(&b, sq(4, 4), knight, &config));
    // the second side's pawns on row 2 are capturable
    assert_eq!(t.len(), 8);
    assert!(t.contains(&sq(2, 3)));
    assert!(t.contains(&sq(2, 5)));

    let rook = piece(Side::Second, PieceKind::Rook);
    let t = targets(&moves_for(&b, sq(4, 4), rook, &config));
    assert_eq!(t.len(), 11);
    assert!(t.contains(&sq(7, 4)));
    assert!(!t.contains(&sq(2, 4)));
}
