//! blockfall-engine - drop simulation and placement generation.
//!
//! Provides collision tests, gravity drop with line clears, move
//! enumeration and the piece sources used by the search.

pub mod apply;
pub mod bag;
pub mod collision;
pub mod movegen;

pub use apply::{lock_piece, place};
pub use bag::{PieceQueue, PieceSource, RandomPieces};
pub use collision::{can_place, collides, hard_drop_y, landing_position};
pub use movegen::{generate_moves, horizontal_range};
