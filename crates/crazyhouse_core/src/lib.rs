//! Crazyhouse state tracking for policy-network training data.
//!
//! A [`BoardState`] mirrors a rules engine ([`LegalityOracle`]) move by move,
//! keeping its own array board, promotion-origin flags, reserves and ply
//! counter. From that state it derives a fixed-length [`BoardState::canonical_key`]
//! and a `(1, 1, 104, 8)` tensor ([`encode`]) for the network, and reports the
//! game outcome ([`evaluate`]).
//!
//! ```
//! use crazyhouse_core::{BoardState, GameResult};
//!
//! let mut board = BoardState::new();
//! board.make_move("e2e4").unwrap();
//! assert_eq!(board.plies(), 1);
//! assert!(board.make_move("e2e4").is_err()); // no pawn there any more
//! assert_eq!(board.encode().shape(), [1, 1, 104, 8]);
//! assert_eq!(board.game_result(), GameResult::InProgress);
//! ```

pub mod apply;
pub mod bitplanes;
pub mod board;
pub mod encoder;
pub mod error;
pub mod move_encoder;
pub mod oracle;
pub mod reserve;
pub mod result;
pub mod rules;
pub mod token;
pub mod types;

pub use apply::*;
pub use bitplanes::*;
pub use board::*;
pub use encoder::*;
pub use error::*;
pub use move_encoder::*;
pub use oracle::*;
pub use reserve::*;
pub use result::*;
pub use rules::*;
pub use token::*;
pub use types::*;
