pub mod agent;
pub mod config;
pub mod pit;
pub mod rollout;
pub mod search;
mod tally;

pub use agent::Agent;
pub use pit::{pit, play_game};
pub use rollout::{evaluate_parallel, Probabilities, Rollouts};
pub use search::Minimax;
pub use tally::Tally;
