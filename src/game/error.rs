/// All the possible recoverable errors produced by the board, the search and the driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Column index outside `[0, W)`.
    #[error("column {0} does not exist")]
    InvalidColumn(usize),
    /// Placement requested on a column whose top cell is occupied.
    #[error("column {0} is already full")]
    ColumnFull(usize),
    /// Search invoked on a board with no legal move left.
    #[error("no legal moves remain")]
    NoLegalMoves,
    /// Board dimensions too small, or a cell lookup outside the board.
    #[error("invalid board dimensions or position")]
    InvalidDim,
    /// An empty piece can't be placed.
    #[error("cannot place a piece of type {0:?}")]
    InvalidPiece(super::components::Piece),
    /// Unparseable terminal input.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),
    /// Move attempted after the game ended.
    #[error("the game is already over")]
    GameOver,
    /// Move attempted by the side that is not on turn.
    #[error("it is not {0}'s turn")]
    NotYourTurn(super::components::Side),
    /// Terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{Piece, Side};

    #[test]
    fn test_error_display() {
        assert_eq!(Error::ColumnFull(3).to_string(), "column 3 is already full");
        assert_eq!(Error::InvalidColumn(9).to_string(), "column 9 does not exist");
        assert_eq!(Error::NoLegalMoves.to_string(), "no legal moves remain");
        assert_eq!(
            Error::InvalidPiece(Piece::Empty).to_string(),
            "cannot place a piece of type Empty"
        );
        assert_eq!(Error::NotYourTurn(Side::Ai).to_string(), "it is not AI's turn");
    }
}
