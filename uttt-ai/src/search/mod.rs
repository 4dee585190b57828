mod eval;
mod minimax;

pub use eval::{evaluate, line_score, terminal_score};
pub use minimax::Minimax;
