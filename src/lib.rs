// #![deny(warnings)]
#![warn(missing_docs)]
//! Connect 4 against a minimax opponent.
//!
//! [`game::Board`] holds the grid and answers the rule questions (legal columns,
//! four in a row, terminal positions). [`ai`] scores positions and searches for
//! the computer's move with alpha-beta pruned minimax. [`game::Game`] is the
//! driver owning a board, the turn and the [`config::GameConfig`].
pub mod ai;
pub mod config;
pub mod game;

pub use ai::{minimax, pick_best_move, Ai, SearchResult, Strategy};
pub use config::GameConfig;
pub use game::{Board, Error, Game, GameResult, Piece, StandardBoard};
