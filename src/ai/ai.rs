use std::cell::Cell;

use serde::{Deserialize, Serialize};

use super::heuristic::{score_with, VerticalScan};
use crate::game::{Board, Error, GameResult, Piece};

/// Score of a board the Ai has won. A Player win scores its negation.
pub const WIN_SCORE: i32 = 10_000_000;

/// Stand-in for -infinity as the initial alpha.
pub const NEG_INF: i32 = i32::MIN;
/// Stand-in for +infinity as the initial beta.
pub const POS_INF: i32 = i32::MAX;

/// Column chosen by a search along with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` at leaves, and when no legal move exists.
    pub column: Option<usize>,
    /// Minimax value, from the Ai's perspective.
    pub score: i32,
}

/// Move selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full minimax with alpha-beta pruning.
    #[default]
    Minimax,
    /// One-ply heuristic picker.
    Greedy,
}

/// Ai.
///
/// Stateless between calls: every search works on copies of the board it is given.
#[derive(Debug, Clone)]
pub struct Ai {
    depth: usize,
    vertical: VerticalScan,
    nodes: Cell<u64>,
}

impl Default for Ai {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Ai {
    /// Create a new ai searching `depth` plies.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            vertical: VerticalScan::default(),
            nodes: Cell::new(0),
        }
    }

    /// Use the given vertical window scan in the static evaluation.
    pub fn with_vertical_scan(mut self, vertical: VerticalScan) -> Self {
        self.vertical = vertical;
        self
    }

    /// Configured search depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Let the AI make a move.
    ///
    /// Returns the zero indexed column in which the AI decides to place a piece.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoLegalMoves` if the board is already terminal.
    pub fn choose<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
        strategy: Strategy,
    ) -> GameResult<usize> {
        match strategy {
            Strategy::Minimax => self.choose_column(board),
            Strategy::Greedy => self.pick_best_move(board, Piece::Ai),
        }
    }

    /// Run a full-window minimax from the Ai's side at the configured depth.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoLegalMoves` if the board is already terminal.
    pub fn choose_column<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
    ) -> GameResult<usize> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        self.nodes.set(0);
        let result = self.minimax(board, self.depth, NEG_INF, POS_INF, true);
        log::trace!("AI: searched {} nodes", self.nodes.get());
        match result.column {
            Some(col) => {
                log::debug!(
                    "AI: placing at column {col} (score {}, depth {})",
                    result.score,
                    self.depth
                );
                Ok(col)
            }
            // depth 0 stops at the root
            None => board
                .valid_columns()
                .first()
                .copied()
                .ok_or(Error::NoLegalMoves),
        }
    }

    /// Minimax with alpha-beta pruning. `maximizing` is the Ai's ply.
    ///
    /// Candidate columns are tried left to right and a column only replaces the
    /// current best on a strictly better score, so ties go to the leftmost.
    pub fn minimax<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes.set(self.nodes.get() + 1);

        if depth == 0 || board.is_terminal() {
            let score = if board.is_winning_for(Piece::Ai) {
                WIN_SCORE
            } else if board.is_winning_for(Piece::Player) {
                -WIN_SCORE
            } else if board.is_full() {
                0
            } else {
                // always from the Ai's side, on both plies
                score_with(board, Piece::Ai, self.vertical)
            };
            return SearchResult {
                column: None,
                score,
            };
        }

        let columns = board.valid_columns();
        let (piece, mut value) = if maximizing {
            (Piece::Ai, NEG_INF)
        } else {
            (Piece::Player, POS_INF)
        };
        let mut column = columns.first().copied();

        for col in columns {
            let mut child = *board;
            let Ok(row) = child.next_open_row(col) else {
                continue;
            };
            child.drop(row, col, piece);
            let new_score = self.minimax(&child, depth - 1, alpha, beta, !maximizing).score;

            if maximizing {
                if new_score > value {
                    value = new_score;
                    column = Some(col);
                }
                alpha = alpha.max(value);
            } else {
                if new_score < value {
                    value = new_score;
                    column = Some(col);
                }
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column,
            score: value,
        }
    }

    /// One-ply picker: the column whose resulting board scores highest for
    /// `piece`. Ties go to the leftmost column.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoLegalMoves` if every column is full.
    pub fn pick_best_move<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
        piece: Piece,
    ) -> GameResult<usize> {
        let mut best: Option<(usize, i32)> = None;
        for col in board.valid_columns() {
            let mut temp = *board;
            temp.place(col, piece)?;
            let score = score_with(&temp, piece, self.vertical);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }
        let (col, score) = best.ok_or(Error::NoLegalMoves)?;
        log::debug!("AI: greedy pick column {col} (score {score})");
        Ok(col)
    }
}

/// Minimax with the default engine settings. See [`Ai::minimax`].
pub fn minimax<const W: usize, const H: usize>(
    board: &Board<W, H>,
    depth: usize,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> SearchResult {
    Ai::new(depth).minimax(board, depth, alpha, beta, maximizing)
}

/// One-ply picker with the default engine settings. See [`Ai::pick_best_move`].
pub fn pick_best_move<const W: usize, const H: usize>(
    board: &Board<W, H>,
    piece: Piece,
) -> GameResult<usize> {
    Ai::default().pick_best_move(board, piece)
}
