use std::io::BufRead;

use super::error::{Error, GameResult};

/// The different types of terminal input the game can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A column, 1 indexed as printed above the board.
    Col(usize),
    /// Bare enter key.
    Enter,
    /// Confirm.
    Yes,
    /// Decline.
    No,
    /// Stop the round or the program.
    Quit,
    /// Show the help page.
    Help,
}

impl Input {
    /// Read and parse one line from `reader`. End of input reads as `Quit`.
    pub fn read<R: BufRead>(reader: &mut R) -> GameResult<Self> {
        let mut buf = String::new();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(Self::Quit);
        }
        buf.parse()
    }
}

impl std::str::FromStr for Input {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "" => Ok(Self::Enter),
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            "stop" | "exit" | "quit" | "s" | "e" | "q" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            other => other
                .parse::<usize>()
                .map(Self::Col)
                .map_err(|_| Error::InvalidInput(other.to_string())),
        }
    }
}
