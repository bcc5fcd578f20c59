//! Persistence for the running score.

mod blob;
mod error;
mod score_repository;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use score_repository::{DEFAULT_SCORE_KEY, ScoreRepository};
