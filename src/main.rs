use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use connect4_minimax::{
    ai::VerticalScan,
    config::{FirstTurn, GameConfig},
    game::{COLS, ROWS},
    Game, Strategy,
};

/// Play Connect 4 against the computer.
#[derive(Parser)]
#[command(name = "connect4")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Search depth, the difficulty level (1-5)
    #[arg(short, long)]
    depth: Option<usize>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstTurn>,

    /// How the computer picks its moves
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Vertical window mode of the evaluation
    #[arg(long, value_enum)]
    vertical_scan: Option<VerticalScan>,

    /// Pause before the computer's move, in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::builder().filter_level(cli.log_level).init();

    if cli.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(first) = cli.first {
        config.first_turn = first;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(vertical_scan) = cli.vertical_scan {
        config.vertical_scan = vertical_scan;
    }
    if let Some(delay) = cli.delay {
        config.ai_delay_ms = delay;
    }
    config.validate()?;

    let mut game = Game::<COLS, ROWS>::new(config)?;
    let stdin = std::io::stdin();
    game.start(&mut stdin.lock(), &mut std::io::stdout())?;
    Ok(())
}
