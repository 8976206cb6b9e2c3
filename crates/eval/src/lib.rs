//! Blockfall eval crate - linear heuristic for scoring a board after a placement.

use blockfall_core::{Board, BoardWithHeights};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub aggregate_height: f64,
    pub rows_cleared: f64,
    pub holes: f64,
    pub bumpiness: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            aggregate_height: -0.510066,
            rows_cleared: 0.760666,
            holes: -1.35663,
            bumpiness: -0.184483,
        }
    }
}

/// Board metrics the heuristic is linear in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoardFeatures {
    pub aggregate_height: u32,
    pub holes: u32,
    pub bumpiness: u32,
}

impl BoardFeatures {
    /// Measure all metrics from one height scan
    pub fn measure(board: &Board) -> Self {
        let bh = BoardWithHeights::new(board);
        Self {
            aggregate_height: bh.aggregate_height(),
            holes: bh.holes(),
            bumpiness: bh.bumpiness(),
        }
    }
}

pub fn evaluate(board: &Board, rows_cleared: u32, weights: &EvalWeights) -> f64 {
    evaluate_features(&BoardFeatures::measure(board), rows_cleared, weights)
}

pub fn evaluate_features(features: &BoardFeatures, rows_cleared: u32, weights: &EvalWeights) -> f64 {
    weights.aggregate_height * features.aggregate_height as f64
        + weights.rows_cleared * rows_cleared as f64
        + weights.holes * features.holes as f64
        + weights.bumpiness * features.bumpiness as f64
}
