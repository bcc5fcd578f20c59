//! Terminal host for the gridtoe engine.
//!
//! # Architecture
//!
//! - **Store**: key-value blob stores and the score repository on top of them
//! - **Session**: an engine whose wins are saved as they happen
//! - **REPL**: line-oriented commands and text rendering
//! - **Config**: TOML settings and the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod repl;
mod session;
pub mod store;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use session::PlaySession;
pub use store::{
    BlobStore, DEFAULT_SCORE_KEY, FileBlobStore, MemoryBlobStore, ScoreRepository, StoreError,
};
