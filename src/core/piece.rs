//! Active piece placement value type
//!
//! A `PieceLocation` is copied at every branch point of a search; no two
//! in-flight locations alias. The two provenance flags record how the
//! current position was reached and feed spin classification only -
//! they never affect collision.

use crate::core::pieces::{get_shape, spawn_x};
use crate::types::{PieceKind, Rotation, SPAWN_ROW};

/// A piece placement: origin, rotation, and kick provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceLocation {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    /// True only immediately after a successful kick-rotation; any
    /// subsequent pure translation clears it.
    pub just_rotated: bool,
    /// True only if the winning kick was the last candidate in its
    /// table, the turn was not 180, and the piece kind is T.
    pub via_last_kick: bool,
}

impl PieceLocation {
    /// Spawn placement at the top row, horizontally centered
    pub fn spawn(kind: PieceKind, board_width: i32) -> Self {
        Self {
            kind,
            x: spawn_x(kind, board_width),
            y: SPAWN_ROW,
            rotation: Rotation::North,
            just_rotated: false,
            via_last_kick: false,
        }
    }

    /// The four board cells occupied by this placement
    pub fn cells(&self) -> [(i32, i32); 4] {
        let shape = get_shape(self.kind, self.rotation);
        shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The same placement translated by (dx, dy), provenance cleared
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            just_rotated: false,
            via_last_kick: false,
            ..*self
        }
    }

    /// Geometric key ignoring provenance, used for dedup and visited marks
    pub fn state_key(&self) -> (i32, i32, usize) {
        (self.x, self.y, self.rotation.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_clears_provenance() {
        let mut loc = PieceLocation::spawn(PieceKind::T, 10);
        loc.just_rotated = true;
        loc.via_last_kick = true;

        let moved = loc.translated(0, 1);
        assert_eq!(moved.y, loc.y + 1);
        assert!(!moved.just_rotated);
        assert!(!moved.via_last_kick);
        // Original untouched - value semantics
        assert!(loc.just_rotated);
    }

    #[test]
    fn spawn_cells_sit_in_the_top_rows() {
        for kind in PieceKind::ALL {
            let loc = PieceLocation::spawn(kind, 10);
            for (x, y) in loc.cells() {
                assert!((0..10).contains(&x), "{kind:?}");
                assert!((0..4).contains(&y), "{kind:?}");
            }
        }
    }
}
