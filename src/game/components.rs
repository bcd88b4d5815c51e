/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    /// No piece.
    #[default]
    Empty,
    /// The human's piece.
    Player,
    /// The computer's piece.
    Ai,
}

impl Piece {
    /// The piece of the other side. `Empty` has no opponent.
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// A cell position as `(row, col)`, row 0 at the bottom.
pub type Position = (usize, usize);

/// If there has been a winner or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `Piece` connected four at the given cells.
    Winner(Piece, [Position; 4]),
    /// Board full without a winner.
    Draw,
    /// Game still running.
    InProgress,
}

impl Outcome {
    /// Whether the game has concluded.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// The side whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human.
    Player,
    /// Computer.
    Ai,
}

impl Side {
    /// The other side.
    pub fn swap(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The piece this side drops.
    pub fn piece(self) -> Piece {
        match self {
            Side::Player => Piece::Player,
            Side::Ai => Piece::Ai,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Piece::Player.opponent(), Piece::Ai);
        assert_eq!(Piece::Ai.opponent(), Piece::Player);
        assert_eq!(Piece::Empty.opponent(), Piece::Empty);
    }

    #[test]
    fn test_side_swap_and_piece() {
        assert_eq!(Side::Player.swap(), Side::Ai);
        assert_eq!(Side::Ai.swap(), Side::Player);
        assert_eq!(Side::Ai.piece(), Piece::Ai);
        assert_eq!(Side::Player.piece(), Piece::Player);
    }

    #[test]
    fn test_outcome_is_over() {
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Winner(Piece::Ai, [(0, 0), (0, 1), (0, 2), (0, 3)]).is_over());
    }
}
