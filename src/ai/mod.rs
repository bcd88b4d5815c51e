//! Computer opponent: static evaluation and minimax search.

#[allow(clippy::module_inception)]
mod ai;
pub mod heuristic;

pub use ai::{minimax, pick_best_move, Ai, SearchResult, Strategy, NEG_INF, POS_INF, WIN_SCORE};
pub use heuristic::{evaluate_window, score, score_with, VerticalScan};
