//! Blockfall core crate - grid, piece and move types shared by the engine and search.

mod board;
mod board_heights;
mod error;
mod moves;
mod piece;
mod request;

pub use board::Board;
pub use board_heights::BoardWithHeights;
pub use error::GridError;
pub use moves::{Move, Position};
pub use piece::{Piece, PieceKind};
pub use request::DecisionRequest;
