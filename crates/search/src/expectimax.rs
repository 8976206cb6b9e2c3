//! Depth-limited alternation of a maximizing placement ply and a chance
//! ply that averages over the whole piece catalog, with alpha-beta cuts.

use blockfall_core::{Board, Move, Piece, PieceKind, Position};
use blockfall_engine::{generate_moves, PieceSource};
use blockfall_eval::evaluate;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::trace;

use crate::config::{ChanceBound, SearchConfig};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Placements generated inside the tree (root candidates excluded)
    pub placements: u64,
    pub max_nodes: u64,
    pub chance_nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    fn merge(&mut self, other: &SearchStats) {
        self.placements += other.placements;
        self.max_nodes += other.max_nodes;
        self.chance_nodes += other.chance_nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Best root placement and how it was found.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best: Move,
    /// Immediate heuristic plus the chance-ply expectation
    pub score: f64,
    pub candidates: usize,
    pub stats: SearchStats,
}

pub struct Expectimax<'a> {
    config: &'a SearchConfig,
    catalog: [Piece; 7],
}

impl<'a> Expectimax<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            catalog: PieceKind::ALL.map(PieceKind::shape),
        }
    }

    /// Pick the root placement of `piece` with the highest
    /// `heuristic + expectation`. Earliest enumerated move wins ties.
    /// `None` when the piece has no placement at all.
    pub fn search<S>(
        &self,
        board: &Board,
        piece: &Piece,
        base: Position,
        source: &mut S,
    ) -> Option<SearchOutcome>
    where
        S: PieceSource + Send,
    {
        let moves = generate_moves(board, piece, base);
        let candidates = moves.len();
        // each branch owns its source so parallel and sequential runs agree
        let branches: Vec<(Move, S)> = moves.into_iter().map(|mv| (mv, source.split())).collect();
        let scored = self.score_branches(branches);

        let mut stats = SearchStats::default();
        let mut best: Option<(Move, f64)> = None;
        for (mv, score, branch_stats) in scored {
            stats.merge(&branch_stats);
            trace!(
                rotation = mv.rotation,
                dx = mv.dx,
                rows = mv.rows_cleared,
                score,
                "root candidate"
            );
            let better = match &best {
                Some((_, best_score)) => score > *best_score,
                None => true,
            };
            if better {
                best = Some((mv, score));
            }
        }

        best.map(|(best, score)| SearchOutcome {
            best,
            score,
            candidates,
            stats,
        })
    }

    #[cfg(feature = "rayon")]
    fn score_branches<S>(&self, branches: Vec<(Move, S)>) -> Vec<(Move, f64, SearchStats)>
    where
        S: PieceSource + Send,
    {
        if self.config.parallel {
            branches
                .into_par_iter()
                .map(|(mv, source)| self.score_root(mv, source))
                .collect()
        } else {
            branches
                .into_iter()
                .map(|(mv, source)| self.score_root(mv, source))
                .collect()
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn score_branches<S>(&self, branches: Vec<(Move, S)>) -> Vec<(Move, f64, SearchStats)>
    where
        S: PieceSource + Send,
    {
        branches
            .into_iter()
            .map(|(mv, source)| self.score_root(mv, source))
            .collect()
    }

    fn score_root<S: PieceSource>(&self, mv: Move, mut source: S) -> (Move, f64, SearchStats) {
        let mut stats = SearchStats::default();
        let immediate = evaluate(&mv.board, mv.rows_cleared, &self.config.weights);
        let next = source.next_piece();
        let future = self.chance(
            &mv.board,
            next,
            self.config.max_depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut source,
            &mut stats,
        );
        (mv, immediate + future, stats)
    }

    /// Best `heuristic + expectation` over the placements of `piece`.
    /// Terminal (0) at depth 0 or when the piece cannot be placed.
    #[allow(clippy::too_many_arguments)]
    pub fn maximize<S: PieceSource>(
        &self,
        board: &Board,
        piece: &Piece,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        source: &mut S,
        stats: &mut SearchStats,
    ) -> f64 {
        if depth == 0 {
            return 0.0;
        }
        stats.max_nodes += 1;

        let moves = generate_moves(board, piece, self.config.spawn);
        if moves.is_empty() {
            return 0.0;
        }
        stats.placements += moves.len() as u64;

        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let next = source.next_piece();
            let score = evaluate(&mv.board, mv.rows_cleared, &self.config.weights)
                + self.chance(&mv.board, next, depth - 1, alpha, beta, source, stats);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Average of [`Self::maximize`] over all seven catalog pieces.
    /// `next` only gates the ply: `None` means nothing follows, so 0.
    /// The sum is always divided by the full catalog size, even after a cut.
    #[allow(clippy::too_many_arguments)]
    pub fn chance<S: PieceSource>(
        &self,
        board: &Board,
        next: Option<PieceKind>,
        depth: u32,
        alpha: f64,
        mut beta: f64,
        source: &mut S,
        stats: &mut SearchStats,
    ) -> f64 {
        if depth == 0 || next.is_none() {
            return 0.0;
        }
        stats.chance_nodes += 1;

        let mut total = 0.0;
        for (seen, piece) in self.catalog.iter().enumerate() {
            total += self.maximize(board, piece, depth - 1, alpha, beta, source, stats);
            let bound = match self.config.chance_bound {
                ChanceBound::RunningSum => total,
                ChanceBound::RunningMean => total / (seen + 1) as f64,
            };
            beta = beta.min(bound);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        total / self.catalog.len() as f64
    }
}
