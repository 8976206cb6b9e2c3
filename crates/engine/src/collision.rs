//! collision detection - walls, floor, other blocks
//! cells above the top row never collide, pieces spawn partly hidden

use blockfall_core::{Board, Piece, Position};

/// does piece collide with anything?
pub fn collides(board: &Board, piece: &Piece, pos: Position) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;
    piece.filled_cells().any(|(dx, dy, _)| {
        let x = pos.x.saturating_add(dx);
        let y = pos.y.saturating_add(dy);
        if x < 0 || x >= width || y >= height {
            return true;
        }
        y >= 0 && board.is_filled(x as usize, y as usize)
    })
}

/// can we place here? (just !collides)
pub fn can_place(board: &Board, piece: &Piece, pos: Position) -> bool {
    !collides(board, piece, pos)
}

/// Resting row reached by letting the piece fall from `pos`.
/// Steps down while the next row is free; a start that already
/// collides resolves one row above it.
pub fn hard_drop_y(board: &Board, piece: &Piece, pos: Position) -> i32 {
    if collides(board, piece, pos) {
        return pos.y.saturating_sub(1);
    }
    // rows above the top are all free, skip straight to the first
    // row where the piece is fully hidden
    let mut y = pos.y.max(-(piece.height() as i32));
    while !collides(board, piece, Position::new(pos.x, y)) {
        y += 1;
    }
    y - 1
}

#[inline]
pub fn landing_position(board: &Board, piece: &Piece, pos: Position) -> Position {
    Position::new(pos.x, hard_drop_y(board, piece, pos))
}
