//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Connect Four - two players, one keyboard
#[derive(Parser, Debug, Default)]
#[command(name = "connect_four")]
#[command(about = "Play Connect Four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "connect_four.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Name shown for player one
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name shown for player two
    #[arg(long)]
    pub player_two: Option<String>,

    /// Hide the piece preview above the cursor column
    #[arg(long)]
    pub no_preview: bool,
}
