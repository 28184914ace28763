//! Request entry point and accuracy harness
//!
//! `generate` is a pure, synchronous function: it validates the input,
//! runs the selected strategy, then independently runs the exhaustive
//! search as ground truth and reports found-vs-total counts. The two
//! runs share nothing but the immutable board.

use serde::Serialize;

use crate::core::{Board, BoardError};
use crate::search::{Frame, FrameKind, SearchEngine};
use crate::types::{Algorithm, PieceKind, Ruleset};

/// Found-vs-total counts for one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub found: usize,
    pub total: usize,
}

/// Accuracy of the selected strategy against the exhaustive ground truth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    pub moves: Counts,
    pub spins: Counts,
}

/// Full response payload for one request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub frames: Vec<Frame>,
    pub accuracy: Accuracy,
    #[serde(rename = "collisionChecks")]
    pub collision_checks: u64,
}

/// Request rejection reasons; all are input errors, nothing is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    Board(BoardError),
    UnknownPiece,
    UnknownAlgorithm,
    UnknownRuleset,
}

impl GenerateError {
    pub fn code(self) -> &'static str {
        match self {
            GenerateError::Board(_) => "bad_board",
            GenerateError::UnknownPiece => "unknown_piece",
            GenerateError::UnknownAlgorithm => "unknown_algorithm",
            GenerateError::UnknownRuleset => "unknown_ruleset",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GenerateError::Board(err) => err.message(),
            GenerateError::UnknownPiece => "piece must be one of i, o, t, s, z, j, l",
            GenerateError::UnknownAlgorithm => {
                "algorithm must be one of brute-force, harddrop, faster-but-loss, convolution"
            }
            GenerateError::UnknownRuleset => "ruleset must be one of s2, guideline",
        }
    }
}

impl From<BoardError> for GenerateError {
    fn from(err: BoardError) -> Self {
        GenerateError::Board(err)
    }
}

/// Run the selected algorithm plus the exhaustive ground truth over a
/// caller-supplied board, and assemble the response payload
pub fn generate(
    rows: &[Vec<u8>],
    piece: PieceKind,
    algorithm: Algorithm,
    ruleset: Ruleset,
    width: i32,
    height: i32,
) -> Result<GenerateResult, GenerateError> {
    let board = Board::from_rows(rows, width, height)?;

    let selected = SearchEngine::new(&board, piece, ruleset).run(algorithm);
    let truth = SearchEngine::new(&board, piece, ruleset).run(Algorithm::BruteForce);

    let accuracy = Accuracy {
        moves: Counts {
            found: count(&selected.frames, FrameKind::Placeable),
            total: count(&truth.frames, FrameKind::Placeable),
        },
        spins: Counts {
            found: count(&selected.frames, FrameKind::Tspin),
            total: count(&truth.frames, FrameKind::Tspin),
        },
    };

    Ok(GenerateResult {
        frames: selected.frames,
        accuracy,
        collision_checks: selected.collision_checks,
    })
}

/// String-keyed variant used by the HTTP boundary; rejects unknown
/// names explicitly instead of silently returning nothing
pub fn generate_named(
    rows: &[Vec<u8>],
    piece: &str,
    algorithm: &str,
    ruleset: &str,
    width: i32,
    height: i32,
) -> Result<GenerateResult, GenerateError> {
    let piece = PieceKind::from_str(piece).ok_or(GenerateError::UnknownPiece)?;
    let algorithm = Algorithm::from_str(algorithm).ok_or(GenerateError::UnknownAlgorithm)?;
    let ruleset = Ruleset::from_str(ruleset).ok_or(GenerateError::UnknownRuleset)?;
    generate(rows, piece, algorithm, ruleset, width, height)
}

fn count(frames: &[Frame], kind: FrameKind) -> usize {
    frames.iter().filter(|f| f.kind == kind).count()
}
