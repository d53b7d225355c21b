//! 8-puzzle solver: board model, solvability check, heuristics and A*.

pub mod board;
pub mod error;
pub mod generate;
pub mod heuristic;
pub mod render;
pub mod search;
pub mod solvability;

pub use board::{replay, Board, Move};
pub use error::PuzzleError;
pub use generate::{generate_solvable_puzzle, seeded_rng};
pub use heuristic::{Heuristic, HeuristicKind, LinearConflict, Manhattan, MisplacedTiles};
pub use search::{solve, solve_with_stats, SearchOutcome, SearchStats};
pub use solvability::{count_inversions, is_solvable};
