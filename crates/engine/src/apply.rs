use blockfall_core::{Board, Piece, Position};

use crate::collision::landing_position;

/// Drop `piece` from `pos`, lock it and clear full rows.
/// Returns the resulting board and the number of rows cleared;
/// the input board is left untouched.
pub fn place(board: &Board, piece: &Piece, pos: Position) -> (Board, u32) {
    let landing = landing_position(board, piece, pos);
    lock_piece(board, piece, landing)
}

/// Stamp `piece` at exactly `landing` (no drop) and clear full rows.
pub fn lock_piece(board: &Board, piece: &Piece, landing: Position) -> (Board, u32) {
    let mut next = board.clone();
    let width = board.width() as i32;
    let height = board.height() as i32;

    for (dx, dy, tag) in piece.filled_cells() {
        let x = landing.x.saturating_add(dx);
        let y = landing.y.saturating_add(dy);
        // cells left above the top are lost
        if x >= 0 && y >= 0 && x < width && y < height {
            next.set(x as usize, y as usize, tag);
        }
    }

    let rows = next.clear_lines();
    (next, rows)
}
