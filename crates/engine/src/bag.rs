//! Sources for the "next piece" drawn when the search enters a chance ply.

use blockfall_core::PieceKind;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait PieceSource {
    /// Next piece, or `None` once the source is exhausted.
    fn next_piece(&mut self) -> Option<PieceKind>;

    /// Independent source for one search branch. Branches evaluated in
    /// parallel each own one, so results do not depend on scheduling.
    fn split(&mut self) -> Self
    where
        Self: Sized;
}

/// Uniform draws from the seven-piece catalog.
#[derive(Clone, Debug)]
pub struct RandomPieces {
    rng: ChaCha8Rng,
}

impl RandomPieces {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> Option<PieceKind> {
        PieceKind::ALL.choose(&mut self.rng).copied()
    }

    fn split(&mut self) -> Self {
        Self::seeded(self.rng.gen())
    }
}

/// Fixed piece sequence, exhausted after the last entry.
#[derive(Clone, Debug)]
pub struct PieceQueue {
    pieces: Vec<PieceKind>,
    index: usize,
}

impl PieceQueue {
    pub fn new(pieces: &[PieceKind]) -> Self {
        Self {
            pieces: pieces.to_vec(),
            index: 0,
        }
    }

    pub fn peek(&self) -> Option<PieceKind> {
        self.pieces.get(self.index).copied()
    }
}

impl PieceSource for PieceQueue {
    fn next_piece(&mut self) -> Option<PieceKind> {
        let piece = self.peek()?;
        self.index += 1;
        Some(piece)
    }

    /// Every branch sees the same upcoming sequence.
    fn split(&mut self) -> Self {
        self.clone()
    }
}
