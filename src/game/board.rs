use super::{
    components::{Outcome, Piece, Position},
    error::{Error, GameResult},
};

/// Rows of the standard board.
pub const ROWS: usize = 6;
/// Columns of the standard board.
pub const COLS: usize = 7;
/// Length of a winning line, and of a scoring window.
pub const WINDOW: usize = 4;

/// The standard 6×7 board.
pub type StandardBoard = Board<COLS, ROWS>;

/// A `W` columns by `H` rows grid. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const W: usize, const H: usize> {
    cells: [[Piece; W]; H],
}

impl StandardBoard {
    /// Create an empty standard board.
    pub fn standard() -> Self {
        Self {
            cells: [[Piece::Empty; COLS]; ROWS],
        }
    }
}

impl Default for StandardBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Create a new empty board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension can't hold a line of four.
    pub fn new() -> GameResult<Self> {
        if W < WINDOW || H < WINDOW {
            return Err(Error::InvalidDim);
        }
        Ok(Self {
            cells: [[Piece::Empty; W]; H],
        })
    }

    /// Get the piece at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> GameResult<Piece> {
        if row >= H || col >= W {
            return Err(Error::InvalidDim);
        }
        Ok(self.cells[row][col])
    }

    /// Unchecked cell access for the scanners.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// A column is playable iff it exists and its top cell is empty.
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < W && self.cells[H - 1][col] == Piece::Empty
    }

    /// The lowest empty row of `col`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the column is outside the board.
    ///
    /// Returns `Error::ColumnFull` if no row of the column is empty.
    pub fn next_open_row(&self, col: usize) -> GameResult<usize> {
        if col >= W {
            return Err(Error::InvalidColumn(col));
        }
        (0..H)
            .find(|&row| self.cells[row][col] == Piece::Empty)
            .ok_or(Error::ColumnFull(col))
    }

    /// Set `(row, col)` to `piece`.
    ///
    /// `row` must come from [`Board::next_open_row`] for the same column, nothing is
    /// re-validated here. Panics if the position is outside the board.
    pub fn drop(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece;
    }

    /// Place a piece in the given column. The column is zero indexed.
    ///
    /// Returns the row the piece landed on.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPiece` if the piece is `Piece::Empty`, otherwise the
    /// errors of [`Board::next_open_row`].
    pub fn place(&mut self, col: usize, piece: Piece) -> GameResult<usize> {
        if piece == Piece::Empty {
            return Err(Error::InvalidPiece(piece));
        }
        let row = self.next_open_row(col)?;
        self.drop(row, col, piece);
        Ok(row)
    }

    /// All playable columns, left to right.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..W).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// No column left to play in.
    pub fn is_full(&self) -> bool {
        (0..W).all(|col| !self.is_valid_column(col))
    }

    /// The first line of four `piece`s found, scanning horizontal, vertical,
    /// positive diagonal and negative diagonal windows in that order.
    pub fn winning_line(&self, piece: Piece) -> Option<[Position; 4]> {
        if piece == Piece::Empty {
            return None;
        }
        let owned = |line: [Position; 4]| line.iter().all(|&(r, c)| self.cells[r][c] == piece);

        // horizontal
        for c in 0..=W - WINDOW {
            for r in 0..H {
                let line = [(r, c), (r, c + 1), (r, c + 2), (r, c + 3)];
                if owned(line) {
                    return Some(line);
                }
            }
        }

        // vertical
        for r in 0..=H - WINDOW {
            for c in 0..W {
                let line = [(r, c), (r + 1, c), (r + 2, c), (r + 3, c)];
                if owned(line) {
                    return Some(line);
                }
            }
        }

        // up & right
        for c in 0..=W - WINDOW {
            for r in 0..=H - WINDOW {
                let line = [(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)];
                if owned(line) {
                    return Some(line);
                }
            }
        }

        // down & right
        for c in 0..=W - WINDOW {
            for r in WINDOW - 1..H {
                let line = [(r, c), (r - 1, c + 1), (r - 2, c + 2), (r - 3, c + 3)];
                if owned(line) {
                    return Some(line);
                }
            }
        }

        None
    }

    /// Check if `piece` has four connected.
    pub fn is_winning_for(&self, piece: Piece) -> bool {
        self.winning_line(piece).is_some()
    }

    /// Either side won, or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_winning_for(Piece::Player) || self.is_winning_for(Piece::Ai) || self.is_full()
    }

    /// Check if any player has 4 connected tiles.
    ///
    /// Returns if a player won or if there is a draw.
    pub fn outcome(&self) -> Outcome {
        for piece in [Piece::Player, Piece::Ai] {
            if let Some(line) = self.winning_line(piece) {
                return Outcome::Winner(piece, line);
            }
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    /// Reset the board to its original state.
    pub fn reset(&mut self) {
        self.cells = [[Piece::Empty; W]; H];
    }
}

impl<const W: usize, const H: usize> std::fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#")?;
        for x in 1..=W {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else {
                write!(f, "{x}-")?;
            }
        }
        writeln!(f, "#")?;
        for row in self.cells.iter().rev() {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Piece::Empty => write!(f, " . ")?,
                    Piece::Player => write!(f, " x ")?,
                    Piece::Ai => write!(f, " o ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 1..=W {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}
