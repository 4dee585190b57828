mod board;
mod clock;
mod error;
mod game;
mod lines;
mod move_gen;
mod moves;
mod notation;
mod outcome;
mod player;

pub use board::LocalBoard;
pub use clock::{GameClock, TimeControl};
pub use error::*;
pub use game::Game;
pub use lines::{line_counts, settle, three_in_a_row, Claim, LineCount, LINES};
pub use move_gen::Moves;
pub use moves::Move;
pub use outcome::Outcome;
pub use player::Player;
