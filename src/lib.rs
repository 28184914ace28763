//! SRS-compatible move-generation engine.
//!
//! Computes every cell a falling piece can legally occupy and every
//! final resting position on a given board, classifies spin placements
//! (T-spin, T-spin mini, all-spin mini), and traces the search for
//! animation. Four strategies trade completeness for speed; the
//! accuracy harness measures each one against the exhaustive search.

pub mod core;
pub mod generate;
pub mod search;
pub mod server;
pub mod spin;
pub mod types;

pub use generate::{generate, generate_named, Accuracy, Counts, GenerateError, GenerateResult};
pub use search::{Frame, FrameKind, SearchEngine, SearchOutcome};
pub use types::{Algorithm, PieceKind, Rotation, Ruleset, SpinKind};
