//! Search engine - enumerates reachable placements and resting positions
//!
//! Four strategies share one model: a board, a piece, a per-run visited
//! table over (x, y, rotation), and an append-only frame trace that
//! reproduces the exploration order exactly. Resting positions are
//! deduplicated by geometric state, preferring spin-eligible arrivals,
//! then finalized into `placeable`/`tspin` frames.

mod brute;
mod convolution;
mod harddrop;
mod phased;

use std::collections::HashMap;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{Board, Oracle, PieceLocation};
use crate::spin::classify;
use crate::types::{Algorithm, PieceKind, Ruleset, X_MARGIN};

/// One recorded event in the search trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// A state entered the frontier
    Reached,
    /// A state was dequeued and explored
    Popped,
    /// A resting (down-blocked) state was finalized
    Placeable,
    /// A resting state was classified as a spin
    Tspin,
}

/// Search trace record: `{kind, rotation, x, y, type?}` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub kind: FrameKind,
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
    /// Spin severity code, present only on `tspin` frames
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub spin_type: Option<u8>,
}

impl Frame {
    fn at(kind: FrameKind, loc: &PieceLocation) -> Self {
        Self {
            kind,
            rotation: loc.rotation.index() as u8,
            x: loc.x,
            y: loc.y,
            spin_type: None,
        }
    }
}

/// Result of one engine run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub frames: Vec<Frame>,
    pub collision_checks: u64,
}

/// Per-run dense visited table over (x, y, rotation).
///
/// x is offset by a fixed margin so overhanging origins (down to
/// -X_MARGIN) index without branching; y covers the visible rows only.
struct Visited {
    width: i32,
    height: i32,
    marks: Vec<bool>,
}

impl Visited {
    fn new(board_width: i32, board_height: i32) -> Self {
        let width = board_width + 2 * X_MARGIN;
        Self {
            width,
            height: board_height,
            marks: vec![false; (4 * width * board_height) as usize],
        }
    }

    fn index(&self, loc: &PieceLocation) -> Option<usize> {
        let x = loc.x + X_MARGIN;
        if x < 0 || x >= self.width || loc.y < 0 || loc.y >= self.height {
            return None;
        }
        let r = loc.rotation.index() as i32;
        Some(((r * self.height + loc.y) * self.width + x) as usize)
    }

    /// Out-of-range states read as visited so they are never expanded
    fn contains(&self, loc: &PieceLocation) -> bool {
        match self.index(loc) {
            Some(idx) => self.marks[idx],
            None => true,
        }
    }

    /// Strict membership: an out-of-range state was never explored
    fn is_marked(&self, loc: &PieceLocation) -> bool {
        matches!(self.index(loc), Some(idx) if self.marks[idx])
    }

    fn mark(&mut self, loc: &PieceLocation) {
        if let Some(idx) = self.index(loc) {
            self.marks[idx] = true;
        }
    }
}

/// Resting placements deduplicated by (x, y, rotation), insertion-ordered.
/// A spin-eligible arrival replaces a plain arrival at the same state.
struct RestingSet {
    order: Vec<PieceLocation>,
    by_key: HashMap<(i32, i32, usize), usize>,
}

impl RestingSet {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    fn register(&mut self, loc: PieceLocation) {
        match self.by_key.get(&loc.state_key()) {
            Some(&idx) => {
                if loc.just_rotated && !self.order[idx].just_rotated {
                    self.order[idx] = loc;
                }
            }
            None => {
                self.by_key.insert(loc.state_key(), self.order.len());
                self.order.push(loc);
            }
        }
    }
}

/// One search run: owns the visited table, frame trace, and resting set.
/// Never shared across runs or requests.
pub struct SearchEngine<'a> {
    board: &'a Board,
    kind: PieceKind,
    ruleset: Ruleset,
    oracle: Oracle<'a>,
    visited: Visited,
    frames: Vec<Frame>,
    rest: RestingSet,
}

impl<'a> SearchEngine<'a> {
    pub fn new(board: &'a Board, kind: PieceKind, ruleset: Ruleset) -> Self {
        Self {
            board,
            kind,
            ruleset,
            oracle: Oracle::new(board),
            visited: Visited::new(board.width(), board.height()),
            frames: Vec::new(),
            rest: RestingSet::new(),
        }
    }

    /// Run the selected strategy to completion and finalize the trace
    pub fn run(mut self, algorithm: Algorithm) -> SearchOutcome {
        match algorithm {
            Algorithm::BruteForce => brute::run(&mut self),
            Algorithm::HardDrop => harddrop::run(&mut self),
            Algorithm::FasterButLoss => phased::run(&mut self),
            Algorithm::Convolution => convolution::run(&mut self),
        }
        self.finalize();
        SearchOutcome {
            frames: self.frames,
            collision_checks: self.oracle.checks(),
        }
    }

    fn spawn(&self) -> PieceLocation {
        PieceLocation::spawn(self.kind, self.board.width())
    }

    /// Push a state onto a work queue, emitting a `reached` frame the
    /// first time its geometric state is seen. Already-visited states
    /// are still enqueued: a later pop can re-register them as
    /// placements with different provenance.
    fn enqueue(&mut self, queue: &mut VecDeque<PieceLocation>, loc: PieceLocation) {
        if !self.visited.contains(&loc) {
            self.frames.push(Frame::at(FrameKind::Reached, &loc));
        }
        queue.push_back(loc);
    }

    fn emit(&mut self, kind: FrameKind, loc: &PieceLocation) {
        self.frames.push(Frame::at(kind, loc));
    }

    /// Emit `placeable` frames for every resting placement in discovery
    /// order, plus a `tspin` frame for each one the classifier accepts.
    fn finalize(&mut self) {
        let order = std::mem::take(&mut self.rest.order);
        for loc in &order {
            self.frames.push(Frame::at(FrameKind::Placeable, loc));
            if let Some(spin) = classify(&mut self.oracle, loc, self.ruleset) {
                let mut frame = Frame::at(FrameKind::Tspin, loc);
                frame.spin_type = Some(spin.code());
                self.frames.push(frame);
            }
        }
    }
}
