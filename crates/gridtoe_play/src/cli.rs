//! Command-line interface for gridtoe_play.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridtoe - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridtoe_play")]
#[command(about = "Play N×N tic-tac-toe with a persistent score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "gridtoe.toml")]
    pub config: PathBuf,

    /// Override the file the score is stored in
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively
    Play {
        /// Board size (values below 3, or non-numbers, become 3)
        #[arg(short, long)]
        size: Option<String>,

        /// Keep the score in memory only
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the stored score
    Score,

    /// Set the stored score back to zero
    ResetScore,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            size: None,
            ephemeral: false,
        }
    }
}
