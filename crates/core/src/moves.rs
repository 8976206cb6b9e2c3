//! Position and move definitions.

use serde::{Deserialize, Serialize};

use crate::Board;

/// Anchor of a piece's top-left cell in board coordinates.
/// `y` grows downwards; negative values sit left of / above the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Conventional spawn anchor for a 10-wide board
    pub const SPAWN: Self = Self { x: 3, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Saturates at the `i32` limits, which lie far outside any board.
    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::SPAWN
    }
}

/// One resting placement of a piece: which rotation, how far it was
/// shifted from the base position, and the board it leaves behind.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Move {
    /// Clockwise quarter turns applied to the spawn orientation (0..4)
    pub rotation: u8,
    /// Horizontal offset from the base position
    pub dx: i32,
    /// Where the rotated piece came to rest
    pub landing: Position,
    pub board: Board,
    pub rows_cleared: u32,
}

impl Move {
    pub fn new(rotation: u8, dx: i32, landing: Position, board: Board, rows_cleared: u32) -> Self {
        Self {
            rotation,
            dx,
            landing,
            board,
            rows_cleared,
        }
    }
}
