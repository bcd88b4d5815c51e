use std::{
    io::{BufRead, Write},
    time::Duration,
};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    ai::Ai,
    config::GameConfig,
    game::{
        board::Board,
        components::{Outcome, Piece, Side},
        error::{Error, GameResult},
        input::Input,
    },
};

/// Rounds won by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds the human won.
    pub player: usize,
    /// Rounds the computer won.
    pub ai: usize,
    /// Drawn rounds.
    pub draws: usize,
}

/// Game manager struct.
///
/// Owns the board, the turn and the configuration; the ai only ever sees copies.
#[derive(Debug)]
pub struct Game<const W: usize, const H: usize> {
    board: Board<W, H>,
    ai: Ai,
    config: GameConfig,
    turn: Side,
    tally: Tally,
    rng: StdRng,
}

impl<const W: usize, const H: usize> Game<W, H> {
    /// Create a new game manager instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the height or width constants are smaller than 4.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game drawing its coin flips from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if the height or width constants are smaller than 4.
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> GameResult<Self> {
        let board = Board::<W, H>::new()?;
        let ai = Ai::new(config.depth).with_vertical_scan(config.vertical_scan);
        let turn = config.first_turn.resolve(&mut rng);
        log::debug!("new game, {turn} opens, depth {}", config.depth);
        Ok(Self {
            board,
            ai,
            config,
            turn,
            tally: Tally::default(),
            rng,
        })
    }

    /// The current board.
    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Rounds played so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// State of the current round.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Apply the human's move in the zero indexed column `col`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotYourTurn` when the computer is to move, `Error::GameOver`
    /// once the round ended, or the board's placement errors.
    pub fn play(&mut self, col: usize) -> GameResult<Outcome> {
        self.apply(Side::Player, col)
    }

    /// Let the computer choose and apply its move.
    ///
    /// Returns the column played and the resulting state.
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` once the round ended and `Error::NotYourTurn` when
    /// the human is to move.
    pub fn ai_turn(&mut self) -> GameResult<(usize, Outcome)> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.turn != Side::Ai {
            return Err(Error::NotYourTurn(Side::Ai));
        }
        let col = self.ai.choose(&self.board, self.config.strategy)?;
        let outcome = self.apply(Side::Ai, col)?;
        Ok((col, outcome))
    }

    fn apply(&mut self, side: Side, col: usize) -> GameResult<Outcome> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.turn != side {
            return Err(Error::NotYourTurn(side));
        }
        let row = self.board.place(col, side.piece())?;
        log::trace!("{side} placed at ({row}, {col})");

        let outcome = self.board.outcome();
        match outcome {
            Outcome::Winner(Piece::Ai, _) => self.tally.ai += 1,
            Outcome::Winner(_, _) => self.tally.player += 1,
            Outcome::Draw => self.tally.draws += 1,
            Outcome::InProgress => self.turn = self.turn.swap(),
        }
        Ok(outcome)
    }

    /// Clear the board and pick the opening side again.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = self.config.first_turn.resolve(&mut self.rng);
    }

    /// Play one round on the terminal. Returns `false` if the player quit.
    fn start_round<R: BufRead, O: Write>(&mut self, input: &mut R, out: &mut O) -> GameResult<bool> {
        self.reset();

        loop {
            write!(out, "{}", self.board)?;
            writeln!(out, "{}'s turn.", self.turn)?;

            let outcome = match self.turn {
                Side::Player => match Input::read(input) {
                    Ok(Input::Col(col)) if (1..=W).contains(&col) => match self.play(col - 1) {
                        Ok(outcome) => outcome,
                        Err(Error::ColumnFull(_)) => {
                            writeln!(out, "Column {col} is already full!")?;
                            continue;
                        }
                        Err(e) => return Err(e),
                    },
                    Ok(Input::Col(col)) => {
                        writeln!(out, "Column {col} does not exist!")?;
                        continue;
                    }
                    Ok(Input::Quit) => return Ok(false),
                    Ok(Input::Help) => {
                        write!(out, "Place a piece in a column by typing a number between 1 and {W}")?;
                        writeln!(out, " (the column numbers are visible above the columns)")?;
                        writeln!(out, "Type quit to stop the round")?;
                        continue;
                    }
                    Err(Error::Io(e)) => return Err(Error::Io(e)),
                    i => {
                        writeln!(out, "Invalid input. Must be a number between 1 and {W}\nprovided input: {i:?}")?;
                        continue;
                    }
                },
                Side::Ai => {
                    if self.config.ai_delay_ms > 0 {
                        std::thread::sleep(Duration::from_millis(self.config.ai_delay_ms));
                    }
                    let (col, outcome) = self.ai_turn()?;
                    writeln!(out, "AI placed in column {}", col + 1)?;
                    outcome
                }
            };

            match outcome {
                Outcome::Winner(piece, _) => {
                    write!(out, "{}", self.board)?;
                    let winner = if piece == Piece::Ai { Side::Ai } else { Side::Player };
                    writeln!(out, "{winner} wins!")?;
                    break;
                }
                Outcome::Draw => {
                    write!(out, "{}", self.board)?;
                    writeln!(out, "Draw")?;
                    break;
                }
                Outcome::InProgress => {}
            }
        }

        writeln!(
            out,
            "\nPlayer's score: {}\tAI's score: {}\tdraws: {}",
            self.tally.player, self.tally.ai, self.tally.draws
        )?;
        Ok(true)
    }

    /// Start the game.
    pub fn start<R: BufRead, O: Write>(&mut self, input: &mut R, out: &mut O) -> GameResult<()> {
        loop {
            writeln!(out, "Start new round? [Y/n]\t(type \"help\" for help page)")?;
            match Input::read(input) {
                Ok(Input::Enter) | Ok(Input::Yes) => {
                    if !self.start_round(input, out)? {
                        break;
                    }
                }
                Ok(Input::No) | Ok(Input::Quit) => break,
                Ok(Input::Help) => {
                    writeln!(out, "Commands")?;
                    writeln!(out, "  help\t\t\tshow this page")?;
                    writeln!(out, "  yes\t\t\tstart a round")?;
                    writeln!(out, "  no\t\t\tleave")?;
                    writeln!(out, "  1..{W}\t\t\tplace in that column (during a round)")?;
                    writeln!(out, "  quit\t\t\tquit")?;

                    writeln!(out, "Aliases")?;
                    writeln!(out, "  h, ?\t\t\tshort for help")?;
                    writeln!(out, "  y\t\t\tshort for yes")?;
                    writeln!(out, "  n\t\t\tshort for no")?;
                    writeln!(out, "  exit, stop, q, e, s\tshort for quit")?;
                }
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                _ => writeln!(out, "Invalid")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Strategy;
    use crate::config::FirstTurn;
    use crate::game::StandardBoard;

    type StandardGame = Game<7, 6>;

    fn config(first_turn: FirstTurn) -> GameConfig {
        GameConfig {
            depth: 3,
            first_turn,
            ai_delay_ms: 0,
            ..GameConfig::default()
        }
    }

    fn game(first_turn: FirstTurn) -> StandardGame {
        Game::with_rng(config(first_turn), StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = game(FirstTurn::Player);
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.play(3).unwrap(), Outcome::InProgress);
        assert_eq!(game.turn(), Side::Ai);
        assert!(matches!(game.play(3), Err(Error::NotYourTurn(Side::Player))));

        let (col, outcome) = game.ai_turn().unwrap();
        assert!(col < 7);
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(game.turn(), Side::Player);
        assert!(matches!(game.ai_turn(), Err(Error::NotYourTurn(Side::Ai))));
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut game = game(FirstTurn::Player);
        for piece in [Piece::Player, Piece::Ai].repeat(3) {
            game.board.place(0, piece).unwrap();
        }
        let before = *game.board();
        assert!(matches!(game.play(0), Err(Error::ColumnFull(0))));
        assert!(matches!(game.play(7), Err(Error::InvalidColumn(7))));
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_ai_opens_in_center() {
        let mut game = Game::<7, 6>::with_rng(
            GameConfig {
                depth: 1,
                ..config(FirstTurn::Ai)
            },
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(game.ai_turn().unwrap(), (3, Outcome::InProgress));
    }

    #[test]
    fn test_ai_finishes_three() {
        let mut game = game(FirstTurn::Ai);
        let mut board = StandardBoard::standard();
        for col in 0..3 {
            board.place(col, Piece::Ai).unwrap();
            board.place(col, Piece::Player).unwrap();
        }
        game.board = board;
        let (col, outcome) = game.ai_turn().unwrap();
        assert_eq!(col, 3);
        assert!(matches!(outcome, Outcome::Winner(Piece::Ai, _)));
        assert_eq!(game.tally().ai, 1);
        assert!(matches!(game.play(4), Err(Error::GameOver)));
        assert!(matches!(game.ai_turn(), Err(Error::GameOver)));
    }

    #[test]
    fn test_ai_turn_after_player_win_is_game_over() {
        let mut game = game(FirstTurn::Player);
        for col in 0..3 {
            game.board.place(col, Piece::Player).unwrap();
        }
        assert!(matches!(game.play(3).unwrap(), Outcome::Winner(Piece::Player, _)));
        assert_eq!(game.turn(), Side::Player);
        assert!(matches!(game.ai_turn(), Err(Error::GameOver)));
        assert!(matches!(game.play(4), Err(Error::GameOver)));
    }

    #[test]
    fn test_greedy_strategy() {
        let mut game = Game::<7, 6>::with_rng(
            GameConfig {
                strategy: Strategy::Greedy,
                ..config(FirstTurn::Ai)
            },
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        assert_eq!(game.ai_turn().unwrap().0, 3);
    }

    #[test]
    fn test_ai_wins_against_column_stacker() {
        let mut game = game(FirstTurn::Player);
        let mut outcome = Outcome::InProgress;
        while !outcome.is_over() {
            outcome = match game.turn() {
                Side::Player => {
                    let col = game.board().valid_columns()[0];
                    game.play(col).unwrap()
                }
                Side::Ai => game.ai_turn().unwrap().1,
            };
        }
        assert!(!matches!(outcome, Outcome::Winner(Piece::Player, _)));
        assert!(game.board().is_terminal());
    }

    #[test]
    fn test_terminal_session() {
        let mut game = game(FirstTurn::Player);
        let mut input = std::io::Cursor::new("help\ny\nfoo\n9\n1\nq\n");
        let mut out = Vec::new();
        game.start(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Commands"));
        assert!(text.contains("Invalid input"));
        assert!(text.contains("Column 9 does not exist!"));
        assert!(text.contains("AI placed in column"));
        assert_eq!(game.board().get(0, 0).unwrap(), Piece::Player);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut game = game(FirstTurn::Player);
        game.play(2).unwrap();
        game.reset();
        assert_eq!(*game.board(), StandardBoard::standard());
        assert_eq!(game.turn(), Side::Player);
    }

    #[test]
    fn test_narrow_board_is_rejected() {
        let result = Game::<3, 6>::with_rng(config(FirstTurn::Player), StdRng::seed_from_u64(42));
        assert!(matches!(result, Err(Error::InvalidDim)));
        assert!(matches!(Game::<7, 3>::new(config(FirstTurn::Ai)), Err(Error::InvalidDim)));
    }
}
