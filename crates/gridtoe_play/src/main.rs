//! gridtoe_play - N×N tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::parse_board_size;
use gridtoe_play::repl::{self, render_score};
use gridtoe_play::{
    BlobStore, Cli, Command, FileBlobStore, MemoryBlobStore, PlayConfig, PlaySession,
    ScoreRepository,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }

    match cli.command.unwrap_or_default() {
        Command::Play { size, ephemeral } => {
            let size = size
                .as_deref()
                .map(parse_board_size)
                .unwrap_or(*config.default_size());
            if ephemeral {
                play(size, repository(&config, MemoryBlobStore::new()))
            } else {
                play(size, repository(&config, file_store(&config)))
            }
        }
        Command::Score => {
            let score = repository(&config, file_store(&config)).load_score();
            println!("{}", render_score(&score));
            Ok(())
        }
        Command::ResetScore => {
            let repository = repository(&config, file_store(&config));
            repository
                .save_score(&gridtoe::Score::new())
                .context("resetting stored score")?;
            println!("{}", render_score(&repository.load_score()));
            Ok(())
        }
    }
}

fn file_store(config: &PlayConfig) -> FileBlobStore {
    FileBlobStore::new(config.store_path())
}

fn repository<S: BlobStore>(config: &PlayConfig, store: S) -> ScoreRepository<S> {
    ScoreRepository::with_key(store, config.score_key())
}

/// Runs an interactive game on stdin/stdout.
#[instrument(skip(repository))]
fn play<S: BlobStore>(size: usize, repository: ScoreRepository<S>) -> Result<()> {
    info!("Starting interactive session");
    let mut session = PlaySession::new(size, repository);
    let stdin = std::io::stdin();
    repl::run(&mut session, stdin.lock(), std::io::stdout().lock())
        .context("terminal I/O failed")?;
    Ok(())
}
