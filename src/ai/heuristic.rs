use serde::{Deserialize, Serialize};

use crate::game::{Board, Piece, WINDOW};

/// How vertical windows are cut out of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VerticalScan {
    /// Every run of four cells, like the other directions.
    #[default]
    Sliding,
    /// The slice `[r, 4)` for each start row `r`, which only ever scores the
    /// bottom four cells of a column.
    Fixed,
}

/// Weight of a piece in the middle column.
pub const CENTER_WEIGHT: i32 = 3;

/// Score a single window of cells from `piece`'s perspective.
pub fn evaluate_window(window: &[Piece], piece: Piece) -> i32 {
    let own = window.iter().filter(|&&p| p == piece).count();
    let opp = window.iter().filter(|&&p| p == piece.opponent()).count();
    let empty = window.iter().filter(|&&p| p == Piece::Empty).count();

    let mut score = match (own, empty) {
        (4, _) => 4,
        (3, 1) => 5,
        (2, 2) => 2,
        _ => 0,
    };
    if opp == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Static evaluation of `board` for `piece`, with sliding vertical windows.
pub fn score<const W: usize, const H: usize>(board: &Board<W, H>, piece: Piece) -> i32 {
    score_with(board, piece, VerticalScan::Sliding)
}

/// Static evaluation of `board` for `piece`: center column bonus plus the sum of
/// every window in all four directions.
pub fn score_with<const W: usize, const H: usize>(
    board: &Board<W, H>,
    piece: Piece,
    vertical: VerticalScan,
) -> i32 {
    let center = (0..H).filter(|&r| board.cell(r, W / 2) == piece).count() as i32;
    let mut score = center * CENTER_WEIGHT;

    // horizontal
    for r in 0..H {
        for c in 0..=W - WINDOW {
            let window: [Piece; WINDOW] = std::array::from_fn(|i| board.cell(r, c + i));
            score += evaluate_window(&window, piece);
        }
    }

    // vertical
    for c in 0..W {
        let column: [Piece; H] = std::array::from_fn(|r| board.cell(r, c));
        for r in 0..=H - WINDOW {
            let window = match vertical {
                VerticalScan::Sliding => &column[r..r + WINDOW],
                VerticalScan::Fixed => column.get(r..WINDOW).unwrap_or(&[]),
            };
            score += evaluate_window(window, piece);
        }
    }

    // diagonals
    for r in 0..=H - WINDOW {
        for c in 0..=W - WINDOW {
            let rising: [Piece; WINDOW] = std::array::from_fn(|i| board.cell(r + i, c + i));
            score += evaluate_window(&rising, piece);

            let falling: [Piece; WINDOW] =
                std::array::from_fn(|i| board.cell(r + WINDOW - 1 - i, c + i));
            score += evaluate_window(&falling, piece);
        }
    }

    score
}
