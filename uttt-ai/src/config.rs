// search
pub const DEFAULT_DEPTH: u32 = 4;
pub const WIN_SCORE: i32 = 10_000;
pub const META_WEIGHT: i32 = 10;
pub const THREE_IN_A_ROW: i32 = 100;
pub const TWO_IN_A_ROW: i32 = 10;
pub const ONE_IN_A_ROW: i32 = 1;

// rollouts
pub const DEFAULT_SIMULATIONS: usize = 200;
/// A game cannot last longer than there are cells.
pub const MAX_ROLLOUT_PLIES: usize = 81;
pub const CAPTURE_WEIGHT: f64 = 3.0;
pub const THREAT_WEIGHT: f64 = 2.5;
pub const CENTER_WEIGHT: f64 = 1.5;
pub const CORNER_WEIGHT: f64 = 1.2;
pub const FREE_CHOICE_WEIGHT: f64 = 1.3;
