//! Training data generation for the crazyhouse policy network.
//!
//! This crate drives many independent games through [`crazyhouse_core`]:
//! - Replaying recorded games from a text file
//! - Playing seeded random self-play games
//! - Writing one JSON line per position (key, FEN, tensor, move, result)
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -p datagen -- datagen.toml
//! ```
//!
//! Each game owns its own `BoardState`; games run in parallel on a rayon
//! pool and share nothing.

mod config;
mod game;
mod runner;

pub use config::*;
pub use game::*;
pub use runner::*;

use std::path::PathBuf;

use crazyhouse_core::MoveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("game {game}, ply {ply}: move {token:?} failed")]
    Move {
        game: usize,
        ply: u32,
        token: String,
        #[source]
        source: MoveError,
    },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize sample")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
