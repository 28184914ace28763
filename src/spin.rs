//! Spin classifier
//!
//! Decides whether a resting placement counts as a T-spin, T-spin mini,
//! or generic all-spin mini. T classification keys off the kick
//! provenance flags and the four corners of the T's 3x3 bounding box;
//! the generic mini (s2 ruleset only) is a pure immobility test.

use crate::core::{Oracle, PieceLocation};
use crate::types::{Rotation, Ruleset, SpinKind};

/// Classify a resting placement under the active ruleset
pub fn classify(oracle: &mut Oracle, loc: &PieceLocation, ruleset: Ruleset) -> Option<SpinKind> {
    if loc.kind.supports_spin() {
        if !loc.just_rotated {
            return None;
        }
        return classify_t(oracle, loc);
    }

    if ruleset.all_spin() && is_immobile(oracle, loc) {
        return Some(SpinKind::Mini);
    }

    None
}

fn classify_t(oracle: &mut Oracle, loc: &PieceLocation) -> Option<SpinKind> {
    let board = oracle.board();
    // Corners of the 3x3 bounding box, not the T's mino cells.
    // Off-board corners count as filled.
    let corner_filled =
        |dx: i32, dy: i32| -> bool { !board.is_free(loc.x + dx, loc.y + dy) };

    let corners = [(0, 0), (2, 0), (0, 2), (2, 2)];
    let filled = corners
        .iter()
        .filter(|&&(dx, dy)| corner_filled(dx, dy))
        .count();

    if filled < 3 {
        return None;
    }

    // The two corners flanking the side the T's nub points toward
    let front = match loc.rotation {
        Rotation::North => [(0, 0), (2, 0)],
        Rotation::East => [(2, 0), (2, 2)],
        Rotation::South => [(0, 2), (2, 2)],
        Rotation::West => [(0, 0), (0, 2)],
    };
    let front_filled = front.iter().all(|&(dx, dy)| corner_filled(dx, dy));

    // A last-table-entry kick upgrades to the full spin regardless of
    // corner geometry.
    if front_filled || loc.via_last_kick {
        Some(SpinKind::TSpin)
    } else {
        Some(SpinKind::TSpinMini)
    }
}

/// Locked on all three non-down cardinal directions
fn is_immobile(oracle: &mut Oracle, loc: &PieceLocation) -> bool {
    !oracle.can_move(loc, -1, 0) && !oracle.can_move(loc, 1, 0) && !oracle.can_move(loc, 0, -1)
}
