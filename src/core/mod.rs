//! Core module - board, piece geometry, and the movement oracle
//!
//! Everything here is pure and synchronous with no I/O dependencies.

pub mod board;
pub mod oracle;
pub mod piece;
pub mod pieces;

pub use board::{Board, BoardError};
pub use oracle::Oracle;
pub use piece::PieceLocation;
pub use pieces::{get_kicks, get_shape, spawn_x};
