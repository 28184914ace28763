//! Hard-drop column scan.
//!
//! For each rotation and each starting column (with a 2-cell overhang
//! margin past both walls), drop straight down from the top row. No
//! horizontal movement after the drop starts and no mid-fall rotations,
//! so slides and spin setups are missed by design.

use super::{FrameKind, SearchEngine};
use crate::core::PieceLocation;
use crate::types::{Rotation, SPAWN_ROW};

const OVERHANG: i32 = 2;

pub(super) fn run(engine: &mut SearchEngine) {
    let rotations: &[Rotation] = if engine.kind.is_rotation_symmetric() {
        &[Rotation::North]
    } else {
        &Rotation::ALL
    };

    for &rotation in rotations {
        for x in -OVERHANG..engine.board.width() + OVERHANG {
            let mut loc = PieceLocation {
                kind: engine.kind,
                x,
                y: SPAWN_ROW,
                rotation,
                just_rotated: false,
                via_last_kick: false,
            };
            engine.emit(FrameKind::Reached, &loc);
            if engine.oracle.collision(&loc.cells()) {
                continue;
            }

            while engine.oracle.can_move(&loc, 0, 1) {
                loc = loc.translated(0, 1);
            }
            engine.rest.register(loc);
        }
    }
}
