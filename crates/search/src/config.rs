use blockfall_core::Position;
use blockfall_eval::EvalWeights;
use serde::{Deserialize, Serialize};

/// How the chance ply tightens beta while it averages over the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChanceBound {
    /// `beta = min(beta, sum so far)`. Compares an unnormalised sum with
    /// per-move values, so it can prune branches a mean would keep.
    /// Kept for parity with the reference agent.
    RunningSum,
    /// `beta = min(beta, sum so far / pieces seen)`
    #[default]
    RunningMean,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies counted across both layers; the root placement uses one.
    pub max_depth: u32,
    /// Entry point for pieces placed inside the search tree
    pub spawn: Position,
    pub chance_bound: ChanceBound,
    /// Score root candidates on the rayon pool (needs the `rayon` feature)
    pub parallel: bool,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            spawn: Position::SPAWN,
            chance_bound: ChanceBound::RunningMean,
            parallel: false,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Reference agent behaviour, including the summed chance bound.
    pub fn original() -> Self {
        Self {
            chance_bound: ChanceBound::RunningSum,
            ..Self::default()
        }
    }

    /// One extra ply, so the chance layer sees real placements of the next piece.
    pub fn deep() -> Self {
        Self {
            max_depth: 3,
            parallel: true,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_chance_bound(mut self, chance_bound: ChanceBound) -> Self {
        self.chance_bound = chance_bound;
        self
    }
}
