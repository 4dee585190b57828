use clap::Parser;
use uttt::TimeControl;

/// Play and analyse Ultimate Tic-Tac-Toe against a minimax engine
#[derive(Parser)]
pub struct Args {
    /// Start from this position instead of the empty board
    #[clap(short, long)]
    pub position: Option<String>,
    /// Search depth of the engine
    #[clap(short, long, default_value_t = uttt_ai::config::DEFAULT_DEPTH)]
    pub depth: u32,
    /// Rollouts used for the win probability readout
    #[clap(short, long, default_value_t = uttt_ai::config::DEFAULT_SIMULATIONS)]
    pub simulations: usize,
    /// Threads used for the rollouts
    #[clap(short, long, default_value_t = 4)]
    pub threads: usize,
    /// Seed for reproducible engine play
    #[clap(long)]
    pub seed: Option<u64>,
    /// Time control, one of 3m, 5m or 10m
    #[clap(short, long)]
    pub clock: Option<TimeControl>,
    /// Let the engine play X
    #[clap(long)]
    pub engine_first: bool,
    /// Two humans at one keyboard, no engine moves
    #[clap(long)]
    pub hotseat: bool,
    /// Pit the engine against weighted random play for this many games and exit
    #[clap(long)]
    pub pit: Option<u32>,
    /// Log search and rollout details to stderr
    #[clap(short, long)]
    pub verbose: bool,
}
