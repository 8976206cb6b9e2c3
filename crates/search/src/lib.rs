//! Blockfall search crate - expectimax lookahead and the decision boundary.

mod config;
mod decision;
mod expectimax;

pub use config::{ChanceBound, SearchConfig};
pub use decision::{decide, decide_request, Decider, Decision, SearchError};
pub use expectimax::{Expectimax, SearchOutcome, SearchStats};
