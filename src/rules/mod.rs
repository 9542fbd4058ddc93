//! Tic-tac-toe rules.
//!
//! `evaluate` decides whether the move just played ended the game. It has
//! no side effects, so real play and the minimax search call the same
//! function; only `GameEngine::make_move` records the winning line.

pub mod evaluate;
pub mod result;

pub use evaluate::{evaluate, Evaluation};
pub use result::{GameResult, WinningLine};
