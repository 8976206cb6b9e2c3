//! Wire form of a decision request.

use serde::{Deserialize, Serialize};

use crate::{Board, GridError, Piece, Position};

/// Raw request as sent by the game client. Grids are kept unvalidated
/// so a malformed request can still be answered.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub arena: Vec<Vec<u8>>,
    #[serde(default)]
    pub piece: Vec<Vec<u8>>,
    #[serde(default)]
    pub position: Position,
}

impl DecisionRequest {
    pub fn new(board: &Board, piece: &Piece, position: Position) -> Self {
        Self {
            arena: board.rows().map(<[u8]>::to_vec).collect(),
            piece: piece.rows().map(<[u8]>::to_vec).collect(),
            position,
        }
    }

    pub fn board(&self) -> Result<Board, GridError> {
        Board::from_rows(&self.arena)
    }

    pub fn piece(&self) -> Result<Piece, GridError> {
        Piece::from_rows(&self.piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn test_missing_position_defaults_to_spawn() {
        let json = r#"{"arena": [[0,0],[0,0]], "piece": [[1]], "score": 120}"#;
        let req: DecisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.position, Position::SPAWN);
        assert_eq!(req.board().unwrap().height(), 2);
        assert_eq!(req.piece().unwrap().width(), 1);
    }

    #[test]
    fn test_malformed_grids_parse_but_fail_validation() {
        let json = r#"{"arena": [[0,0],[0]], "piece": []}"#;
        let req: DecisionRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(req.board(), Err(GridError::Ragged { row: 1, .. })));
        assert_eq!(req.piece(), Err(GridError::Empty));
    }

    #[test]
    fn test_new_round_trips_grids() {
        let board = Board::default();
        let piece = PieceKind::L.shape();
        let req = DecisionRequest::new(&board, &piece, Position::new(4, 1));
        assert_eq!(req.board().unwrap(), board);
        assert_eq!(req.piece().unwrap(), piece);
    }
}
