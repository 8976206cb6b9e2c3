//! Decision boundary: turns a search outcome (or the lack of one) into
//! the move instruction sent back to the game client.

use blockfall_core::{Board, DecisionRequest, GridError, Piece, Position};
use blockfall_engine::{PieceSource, RandomPieces};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::expectimax::{Expectimax, SearchOutcome};

/// Caller contract violations caught before searching.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid board: {0}")]
    InvalidBoard(#[source] GridError),

    #[error("invalid piece: {0}")]
    InvalidPiece(#[source] GridError),
}

/// Instruction for the client: rotate, shift, then hard drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "rotate")]
    pub rotation: u8,
    #[serde(rename = "move")]
    pub horizontal_delta: i32,
    pub drop: bool,
    pub soft_drop: bool,
}

impl Decision {
    /// Answer when no placement could be found or the input was unusable:
    /// keep the piece where it is and drop it.
    pub const FALLBACK: Self = Self {
        rotation: 0,
        horizontal_delta: 0,
        drop: true,
        soft_drop: false,
    };

    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        Self {
            rotation: outcome.best.rotation,
            horizontal_delta: outcome.best.dx,
            drop: true,
            soft_drop: false,
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Runs searches with a fixed configuration and piece source.
pub struct Decider<S = RandomPieces> {
    config: SearchConfig,
    source: S,
}

impl Decider<RandomPieces> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_source(config, RandomPieces::from_entropy())
    }

    /// Reproducible decisions for a given seed
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Self::with_source(config, RandomPieces::seeded(seed))
    }
}

impl<S: PieceSource + Send> Decider<S> {
    pub fn with_source(config: SearchConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Full search result, `None` when the piece has no placement.
    pub fn search(&mut self, board: &Board, piece: &Piece, position: Position) -> Option<SearchOutcome> {
        let outcome =
            Expectimax::new(&self.config).search(board, piece, position, &mut self.source);
        if let Some(outcome) = &outcome {
            debug!(
                candidates = outcome.candidates,
                score = outcome.score,
                rotation = outcome.best.rotation,
                dx = outcome.best.dx,
                placements = outcome.stats.placements,
                cutoffs = outcome.stats.cutoffs,
                "search finished"
            );
        }
        outcome
    }

    pub fn decide(&mut self, board: &Board, piece: &Piece, position: Position) -> Decision {
        match self.search(board, piece, position) {
            Some(outcome) => Decision::from_outcome(&outcome),
            None => {
                warn!(?position, "no placement available, using fallback decision");
                Decision::FALLBACK
            }
        }
    }

    /// Validate a raw request and search it.
    pub fn try_decide_request(
        &mut self,
        request: &DecisionRequest,
    ) -> Result<Option<SearchOutcome>, SearchError> {
        let board = request.board().map_err(SearchError::InvalidBoard)?;
        let piece = request.piece().map_err(SearchError::InvalidPiece)?;
        Ok(self.search(&board, &piece, request.position))
    }

    /// Never fails: malformed requests and dead ends answer with [`Decision::FALLBACK`].
    pub fn decide_request(&mut self, request: &DecisionRequest) -> Decision {
        match self.try_decide_request(request) {
            Ok(Some(outcome)) => Decision::from_outcome(&outcome),
            Ok(None) => {
                warn!(position = ?request.position, "no placement available, using fallback decision");
                Decision::FALLBACK
            }
            Err(err) => {
                warn!(error = %err, "rejected request, using fallback decision");
                Decision::FALLBACK
            }
        }
    }
}

/// One-shot decision with the default configuration.
pub fn decide(board: &Board, piece: &Piece, position: Position) -> Decision {
    Decider::new(SearchConfig::default()).decide(board, piece, position)
}

/// One-shot decision for a raw request with the default configuration.
pub fn decide_request(request: &DecisionRequest) -> Decision {
    Decider::new(SearchConfig::default()).decide_request(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::PieceKind;
    use blockfall_engine::PieceQueue;

    #[test]
    fn test_fallback_shape() {
        assert_eq!(Decision::default(), Decision::FALLBACK);
        let json = serde_json::to_value(Decision::FALLBACK).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rotate": 0, "move": 0, "drop": true, "soft_drop": false})
        );
    }

    #[test]
    fn test_decide_empty_board() {
        let decision = decide(&Board::default(), &PieceKind::T.shape(), Position::SPAWN);
        assert!(decision.drop);
        assert!(!decision.soft_drop);
        assert!(decision.rotation < 4);
    }

    #[test]
    fn test_blocked_board_falls_back() {
        let mut board = Board::default();
        for x in 0..board.width() {
            board.set(x, 0, 1);
        }
        let mut decider = Decider::with_source(SearchConfig::default(), PieceQueue::new(&[]));
        let decision = decider.decide(&board, &PieceKind::I.shape(), Position::SPAWN);
        assert_eq!(decision, Decision::FALLBACK);
    }

    #[test]
    fn test_request_errors_are_reported() {
        let request = DecisionRequest {
            arena: vec![vec![0; 10], vec![0; 3]],
            piece: vec![vec![1, 1]],
            position: Position::SPAWN,
        };
        let mut decider = Decider::seeded(SearchConfig::default(), 1);
        let err = decider.try_decide_request(&request).unwrap_err();
        assert!(matches!(err, SearchError::InvalidBoard(GridError::Ragged { row: 1, .. })));
        assert_eq!(decider.decide_request(&request), Decision::FALLBACK);

        let request = DecisionRequest {
            arena: vec![vec![0; 10]; 20],
            piece: vec![vec![0, 0]],
            position: Position::SPAWN,
        };
        let err = decider.try_decide_request(&request).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPiece(GridError::NoFilledCells)));
        assert_eq!(decider.decide_request(&request), Decision::FALLBACK);
    }
}
