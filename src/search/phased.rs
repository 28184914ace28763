//! Phased heuristic search (wire name `faster-but-loss`).
//!
//! Four sequential phases: rotate once at spawn, slide each variant to
//! both walls, soft-drop every slid state, then run the exhaustive BFS
//! seeded with the landing states. The slid and dropped-through air is
//! pre-marked visited, so the final pass only explores what the earlier
//! phases missed directly from the landing spots. States reachable only
//! by rotating during a mid-fall slide can be missed; the accuracy
//! harness quantifies that gap.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use super::{brute, FrameKind, SearchEngine};
use crate::core::PieceLocation;
use crate::types::Turn;

pub(super) fn run(engine: &mut SearchEngine) {
    let spawn = engine.spawn();
    if engine.oracle.collision(&spawn.cells()) {
        return;
    }

    // Phase 1: initial rotation variants straight from spawn
    let mut variants: ArrayVec<PieceLocation, 4> = ArrayVec::new();
    variants.push(spawn);
    if !engine.kind.is_rotation_symmetric() {
        for turn in Turn::ALL {
            let mut candidate = spawn;
            if engine.oracle.try_rotate(&mut candidate, turn) && candidate.y >= 0 {
                variants.push(candidate);
            }
        }
    }

    // Phase 2: slide each variant to both walls, marking every
    // intermediate cell visited
    let mut slid: Vec<PieceLocation> = Vec::new();
    for &variant in &variants {
        gather(engine, variant, &mut slid);
        for dx in [-1, 1] {
            let mut cur = variant;
            while engine.oracle.can_move(&cur, dx, 0) {
                cur = cur.translated(dx, 0);
                gather(engine, cur, &mut slid);
            }
        }
    }

    // Phase 3: soft-drop every slid state; the descent air is marked
    // visited, the landing state itself is left for the final pass
    let mut seeds = VecDeque::new();
    for state in slid {
        let mut cur = state;
        while engine.oracle.can_move(&cur, 0, 1) {
            let next = cur.translated(0, 1);
            if engine.oracle.can_move(&next, 0, 1) && !engine.visited.contains(&next) {
                engine.visited.mark(&next);
                engine.emit(FrameKind::Popped, &next);
            }
            cur = next;
        }
        seeds.push_back(cur);
    }

    // Phase 4: exhaustive pass constrained by the pre-visited air
    brute::drain(engine, &mut seeds);
}

fn gather(engine: &mut SearchEngine, state: PieceLocation, slid: &mut Vec<PieceLocation>) {
    if engine.visited.contains(&state) {
        return;
    }
    engine.visited.mark(&state);
    engine.emit(FrameKind::Reached, &state);
    slid.push(state);
}
