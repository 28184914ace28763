//! Flood fill over precomputed per-rotation validity maps.
//!
//! Collision geometry is separated from reachability: each rotation gets
//! a boolean grid of "could the piece's minos exist with this origin",
//! built once up front, after which the fill itself needs no further
//! collision tests. Fills are 4-connected in the left/right/down
//! directions only; rotations jump between maps at edge cells via the
//! kick tables. A second pass re-derives kick arrivals into resting
//! cells so spin-eligible duplicates are not lost to the fill's lack of
//! rotation provenance.

use std::collections::VecDeque;

use super::{FrameKind, SearchEngine};
use crate::core::{get_kicks, PieceLocation};
use crate::types::{Rotation, Turn, X_MARGIN};

/// Per-rotation boolean grid over origin positions, x offset by X_MARGIN
struct ValidityMap {
    width: i32,
    height: i32,
    valid: Vec<bool>,
}

impl ValidityMap {
    fn is_valid(&self, x: i32, y: i32) -> bool {
        let x = x + X_MARGIN;
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.valid[(y * self.width + x) as usize]
    }
}

pub(super) fn run(engine: &mut SearchEngine) {
    let spawn = engine.spawn();
    let rotations: &[Rotation] = if engine.kind.is_rotation_symmetric() {
        &[Rotation::North]
    } else {
        &Rotation::ALL
    };

    // Build one validity map per explored rotation
    let mut maps: [Option<ValidityMap>; 4] = [None, None, None, None];
    for &rotation in rotations {
        maps[rotation.index()] = Some(build_map(engine, rotation));
    }
    // Topped-out board: the spawn origin itself is invalid
    if !maps[spawn.rotation.index()]
        .as_ref()
        .map(|m| m.is_valid(spawn.x, spawn.y))
        .unwrap_or(false)
    {
        return;
    }

    // Each queued seed starts a fresh fill in its rotation's map; kick
    // seeds carry provenance exactly as the rotation oracle would set it
    let mut seeds: VecDeque<PieceLocation> = VecDeque::new();
    seeds.push_back(spawn);

    while let Some(seed) = seeds.pop_front() {
        if engine.visited.contains(&seed) {
            continue;
        }
        flood_fill(engine, &maps, seed, &mut seeds);
    }

    // Second pass: a resting cell may also be enterable by a direct
    // kick from a visited state in another rotation, which makes a
    // spin-eligible duplicate of that placement
    if !engine.kind.is_rotation_symmetric() {
        let placements = engine.rest.order.clone();
        for placement in placements {
            for from in Rotation::ALL {
                if from == placement.rotation || maps[from.index()].is_none() {
                    continue;
                }
                let Some(turn) = Turn::ALL
                    .into_iter()
                    .find(|t| from.turned(t.steps()) == placement.rotation)
                else {
                    continue;
                };
                if let Some(dup) = kick_arrival(engine, &maps, &placement, from, turn) {
                    engine.rest.register(dup);
                }
            }
        }
    }
}

fn build_map(engine: &mut SearchEngine, rotation: Rotation) -> ValidityMap {
    let width = engine.board.width() + 2 * X_MARGIN;
    let height = engine.board.height();
    let mut valid = vec![false; (width * height) as usize];

    for y in 0..height {
        for x in -X_MARGIN..engine.board.width() + X_MARGIN {
            let loc = PieceLocation {
                kind: engine.kind,
                x,
                y,
                rotation,
                just_rotated: false,
                via_last_kick: false,
            };
            if !engine.oracle.collision(&loc.cells()) {
                valid[(y * width + x + X_MARGIN) as usize] = true;
            }
        }
    }

    ValidityMap {
        width,
        height,
        valid,
    }
}

/// Fill every cell reachable from `seed` through left/right/down moves
/// within one rotation's map. Edge cells (blocked in any of those three
/// directions) emit `reached` and may chain a rotation into another
/// map; interior cells emit `popped`. A down-blocked cell is a resting
/// placement. Only the seed keeps its provenance flags; every cell
/// reached by translation carries none.
fn flood_fill(
    engine: &mut SearchEngine,
    maps: &[Option<ValidityMap>; 4],
    seed: PieceLocation,
    seeds: &mut VecDeque<PieceLocation>,
) {
    // Seeds are only ever queued for rotations whose map was built
    let Some(map) = maps[seed.rotation.index()].as_ref() else {
        return;
    };

    let mut queue = VecDeque::new();
    engine.visited.mark(&seed);
    queue.push_back(seed);

    while let Some(cell) = queue.pop_front() {
        let left_ok = map.is_valid(cell.x - 1, cell.y);
        let right_ok = map.is_valid(cell.x + 1, cell.y);
        let down_ok = map.is_valid(cell.x, cell.y + 1);
        let edge = !(left_ok && right_ok && down_ok);

        if edge {
            engine.emit(FrameKind::Reached, &cell);
        } else {
            engine.emit(FrameKind::Popped, &cell);
        }

        if !down_ok {
            engine.rest.register(cell);
        }

        if edge && !engine.kind.is_rotation_symmetric() {
            for turn in Turn::ALL {
                attempt_rotation(engine, maps, &cell, turn, seeds);
            }
        }

        for (ok, dx, dy) in [(left_ok, -1, 0), (right_ok, 1, 0), (down_ok, 0, 1)] {
            if !ok {
                continue;
            }
            let next = cell.translated(dx, dy);
            if !engine.visited.contains(&next) {
                engine.visited.mark(&next);
                queue.push_back(next);
            }
        }
    }
}

/// Apply the kick table for (cell.rotation -> target), accepting the
/// first candidate landing on a valid, unvisited cell of the target map
fn attempt_rotation(
    engine: &mut SearchEngine,
    maps: &[Option<ValidityMap>; 4],
    cell: &PieceLocation,
    turn: Turn,
    seeds: &mut VecDeque<PieceLocation>,
) {
    let target = cell.rotation.turned(turn.steps());
    let Some(map) = maps[target.index()].as_ref() else {
        return;
    };

    let kicks = get_kicks(cell.kind, cell.rotation, target);
    for (i, &(kx, ky)) in kicks.iter().enumerate() {
        let landed = PieceLocation {
            x: cell.x + kx,
            y: cell.y - ky,
            rotation: target,
            just_rotated: true,
            via_last_kick: cell.kind.supports_spin()
                && turn != Turn::Half
                && i == kicks.len() - 1,
            ..*cell
        };
        if map.is_valid(landed.x, landed.y) && !engine.visited.contains(&landed) {
            engine.emit(FrameKind::Reached, &landed);
            seeds.push_back(landed);
            return;
        }
    }
}

/// Resolve the kick the oracle would pick from a candidate source state
/// in `from`, and return a spin-eligible duplicate if it lands exactly
/// on the placement. Kick priority is honored: an earlier candidate
/// resolving elsewhere disqualifies the source.
fn kick_arrival(
    engine: &mut SearchEngine,
    maps: &[Option<ValidityMap>; 4],
    placement: &PieceLocation,
    from: Rotation,
    turn: Turn,
) -> Option<PieceLocation> {
    let target_map = maps[placement.rotation.index()].as_ref()?;
    let kicks = get_kicks(placement.kind, from, placement.rotation);

    for (i, &(kx, ky)) in kicks.iter().enumerate() {
        let source = PieceLocation {
            kind: placement.kind,
            x: placement.x - kx,
            y: placement.y + ky,
            rotation: from,
            just_rotated: false,
            via_last_kick: false,
        };
        // Strict membership: `contains` reads off-grid states as
        // visited, which would mint arrivals from below the floor
        if !engine.visited.is_marked(&source) {
            continue;
        }

        // Replay the oracle's priority order from this source
        let winner = kicks
            .iter()
            .position(|&(wx, wy)| target_map.is_valid(source.x + wx, source.y - wy));
        if winner != Some(i) {
            continue;
        }

        return Some(PieceLocation {
            kind: placement.kind,
            x: placement.x,
            y: placement.y,
            rotation: placement.rotation,
            just_rotated: true,
            via_last_kick: placement.kind.supports_spin()
                && turn != Turn::Half
                && i == kicks.len() - 1,
        });
    }
    None
}
