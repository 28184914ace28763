//! Exhaustive breadth-first search over the (x, y, rotation) state graph.
//!
//! Ground truth for the accuracy harness: explores every state reachable
//! from spawn through single-step moves and kick rotations.

use std::collections::VecDeque;

use super::{FrameKind, SearchEngine};
use crate::core::PieceLocation;
use crate::types::Turn;

pub(super) fn run(engine: &mut SearchEngine) {
    let spawn = engine.spawn();
    if engine.oracle.collision(&spawn.cells()) {
        // Topped out: valid terminal condition, empty trace
        return;
    }

    let mut queue = VecDeque::new();
    engine.enqueue(&mut queue, spawn);
    drain(engine, &mut queue);
}

/// BFS from whatever states are already queued. Shared with the phased
/// strategy, which seeds this with soft-drop landing states.
pub(super) fn drain(engine: &mut SearchEngine, queue: &mut VecDeque<PieceLocation>) {
    while let Some(loc) = queue.pop_front() {
        let grounded = engine.oracle.is_grounded(&loc);

        if engine.visited.contains(&loc) {
            // A known state re-discovered via a different path can still
            // be a placement with fresher provenance.
            if grounded {
                engine.rest.register(loc);
            }
            continue;
        }
        engine.visited.mark(&loc);
        engine.emit(FrameKind::Popped, &loc);

        if grounded {
            engine.rest.register(loc);
        }

        // Cardinal single-step moves; translation clears provenance
        for (dx, dy) in [(-1, 0), (1, 0), (0, 1)] {
            if engine.oracle.can_move(&loc, dx, dy) {
                engine.enqueue(queue, loc.translated(dx, dy));
            }
        }

        // All three rotation directions from the unrotated state.
        // Skipped for O, whose rotations are geometrically identical.
        if !engine.kind.is_rotation_symmetric() {
            for turn in Turn::ALL {
                let mut candidate = loc;
                if engine.oracle.try_rotate(&mut candidate, turn) && candidate.y >= 0 {
                    engine.enqueue(queue, candidate);
                }
            }
        }
    }
}
