//! blockfall - answer one move request from a JSON file or stdin.
//!
//! Reads `{"arena": [[..]], "piece": [[..]], "position": {"x", "y"}}` and
//! prints `{"move", "rotate", "drop", "soft_drop"}` on stdout.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use blockfall_core::DecisionRequest;
use blockfall_search::{ChanceBound, Decider, Decision, SearchConfig};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoundArg {
    Sum,
    Mean,
}

impl From<BoundArg> for ChanceBound {
    fn from(arg: BoundArg) -> Self {
        match arg {
            BoundArg::Sum => ChanceBound::RunningSum,
            BoundArg::Mean => ChanceBound::RunningMean,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "blockfall", about = "Pick a placement for the falling piece")]
struct Args {
    /// Request file; stdin when omitted
    request: Option<PathBuf>,

    /// Plies searched, counting the root placement
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Seed for the next-piece draws; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = BoundArg::Mean)]
    chance_bound: BoundArg,

    /// Score root placements on all cores
    #[arg(long)]
    parallel: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_request(path: Option<&PathBuf>) -> Result<DecisionRequest> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("parsing request JSON")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = SearchConfig::default()
        .with_depth(args.depth)
        .with_chance_bound(args.chance_bound.into())
        .with_parallel(args.parallel);
    info!(?config, "search configured");

    let decision = match read_request(args.request.as_ref()) {
        Ok(request) => {
            let mut decider = match args.seed {
                Some(seed) => Decider::seeded(config, seed),
                None => Decider::new(config),
            };
            decider.decide_request(&request)
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "unusable request, answering with fallback");
            Decision::FALLBACK
        }
    };

    println!("{}", serde_json::to_string(&decision)?);
    Ok(())
}
