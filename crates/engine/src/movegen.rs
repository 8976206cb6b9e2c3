//! Placement enumeration: every rotation, every horizontal offset that
//! fits at the spawn row, dropped straight down.

use std::ops::RangeInclusive;

use crate::apply::lock_piece;
use crate::collision::{can_place, collides, landing_position};
use blockfall_core::{Board, Move, Piece, Position};

/// Inclusive range of horizontal offsets (relative to `base.x`) to try.
/// The left probe starts one piece-width left of the base and walks left
/// while the piece fits; the right probe starts a board-width to the right
/// and walks right while it fits. Offsets inside the range may still collide.
pub fn horizontal_range(board: &Board, piece: &Piece, base: Position) -> RangeInclusive<i32> {
    let mut left = -(piece.width() as i32);
    while !collides(board, piece, base.shifted(left, 0)) {
        left -= 1;
    }
    left += 1;

    let mut right = board.width() as i32;
    while !collides(board, piece, base.shifted(right, 0)) {
        right += 1;
    }
    right -= 1;

    left..=right
}

/// Generate all resting placements for `piece` entering at `base`.
/// Moves come out grouped by rotation (0..4), then by ascending offset.
pub fn generate_moves(board: &Board, piece: &Piece, base: Position) -> Vec<Move> {
    let mut moves = Vec::new();

    for (rotation, rotated) in piece.rotations().iter().enumerate() {
        for dx in horizontal_range(board, rotated, base) {
            let spawn = base.shifted(dx, 0);
            if !can_place(board, rotated, spawn) {
                continue;
            }
            let landing = landing_position(board, rotated, spawn);
            let (next, rows_cleared) = lock_piece(board, rotated, landing);
            moves.push(Move::new(rotation as u8, dx, landing, next, rows_cleared));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::PieceKind;

    #[test]
    fn test_range_empty_board() {
        let board = Board::default();
        let o = PieceKind::O.shape();
        // left bound stops at column 0, right bound is the last offset
        // before the probe, which already sits past the wall
        assert_eq!(horizontal_range(&board, &o, Position::SPAWN), -3..=9);
    }

    #[test]
    fn test_generate_moves_empty_board() {
        let board = Board::default();
        let moves = generate_moves(&board, &PieceKind::O.shape(), Position::SPAWN);
        // 9 columns, 4 identical orientations
        assert_eq!(moves.len(), 36);
        for m in &moves {
            assert_eq!(m.landing.y, 18);
            assert_eq!(m.rows_cleared, 0);
        }
    }

    #[test]
    fn test_i_piece_placements() {
        let board = Board::default();
        let moves = generate_moves(&board, &PieceKind::I.shape(), Position::SPAWN);
        let horizontal = moves.iter().filter(|m| m.rotation % 2 == 0).count();
        let vertical = moves.iter().filter(|m| m.rotation % 2 == 1).count();
        assert_eq!(horizontal, 2 * 7);
        assert_eq!(vertical, 2 * 10);
    }

    #[test]
    fn test_all_rotations_present() {
        let board = Board::default();
        let moves = generate_moves(&board, &PieceKind::T.shape(), Position::SPAWN);
        for rotation in 0..4 {
            assert!(moves.iter().any(|m| m.rotation == rotation));
        }
    }

    #[test]
    fn test_blocked_spawn_yields_no_moves() {
        let mut board = Board::default();
        for y in 0..board.height() {
            for x in 0..board.width() {
                board.set(x, y, 1);
            }
        }
        assert!(generate_moves(&board, &PieceKind::T.shape(), Position::SPAWN).is_empty());
    }

    #[test]
    fn test_obstacle_at_spawn_row_skips_offset() {
        let mut board = Board::default();
        board.set(5, 0, 3);
        let o = PieceKind::O.shape();
        let moves = generate_moves(&board, &o, Position::SPAWN);
        // left edge in columns 4 or 5 would overlap (5, 0)
        assert!(moves.iter().all(|m| m.landing.x != 4 && m.landing.x != 5));
        assert_eq!(moves.len(), 4 * 7);
    }

    #[test]
    fn test_tall_piece_on_short_board() {
        let board = Board::new(10, 3);
        let base = Position::new(3, -1);
        let moves = generate_moves(&board, &PieceKind::I.shape(), base);
        // vertical I cannot rest inside 3 rows: it stops with a cell above the top
        let vertical: Vec<_> = moves.iter().filter(|m| m.rotation == 1).collect();
        assert_eq!(vertical.len(), 10);
        for m in vertical {
            assert_eq!(m.landing.y, -1);
            assert_eq!(m.board.height_at(m.landing.x as usize), 3);
        }
        assert!(generate_moves(&board, &PieceKind::I.shape().rotate(), Position::SPAWN)
            .iter()
            .all(|m| m.rotation % 2 == 1));
    }
}
