//! Game state: the board, its pieces, and the driver that owns them.

pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod error;
#[allow(clippy::module_inception)]
mod game;
mod input;

pub use board::{Board, StandardBoard, COLS, ROWS, WINDOW};
pub use components::{Outcome, Piece, Position, Side};
pub use error::{Error, GameResult};
pub use game::{Game, Tally};
pub use input::Input;
