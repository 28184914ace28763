//! Collision & movement oracle
//!
//! Every movement and rotation test in a search funnels through this
//! type. It borrows the (immutable) board and owns the per-run
//! collision-check counter that the accuracy harness reports as a
//! cost proxy.

use crate::core::board::Board;
use crate::core::piece::PieceLocation;
use crate::core::pieces::get_kicks;
use crate::types::Turn;

pub struct Oracle<'a> {
    board: &'a Board,
    checks: u64,
}

impl<'a> Oracle<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, checks: 0 }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    /// Collision checks performed so far in this run
    pub fn checks(&self) -> u64 {
        self.checks
    }

    /// True if any cell is outside the grid or coincides with a filled cell
    pub fn collision(&mut self, cells: &[(i32, i32); 4]) -> bool {
        self.checks += 1;
        cells.iter().any(|&(x, y)| !self.board.is_free(x, y))
    }

    /// Whether the placement translated by (dx, dy) is collision-free.
    /// Does not mutate the location.
    pub fn can_move(&mut self, loc: &PieceLocation, dx: i32, dy: i32) -> bool {
        let cells = loc.translated(dx, dy).cells();
        !self.collision(&cells)
    }

    /// A placement is resting when it cannot move down
    pub fn is_grounded(&mut self, loc: &PieceLocation) -> bool {
        !self.can_move(loc, 0, 1)
    }

    /// Attempt a rotation with kicks.
    ///
    /// Candidates are tried in strict table order as (x + kx, y - ky);
    /// the kick table y-axis points up while board y points down. The
    /// first collision-free candidate wins and the location is mutated
    /// in place with provenance flags set. Returns false (no mutation)
    /// if every candidate collides.
    pub fn try_rotate(&mut self, loc: &mut PieceLocation, turn: Turn) -> bool {
        let target = loc.rotation.turned(turn.steps());
        let kicks = get_kicks(loc.kind, loc.rotation, target);

        for (i, &(kx, ky)) in kicks.iter().enumerate() {
            let candidate = PieceLocation {
                x: loc.x + kx,
                y: loc.y - ky,
                rotation: target,
                ..*loc
            };
            if !self.collision(&candidate.cells()) {
                let last = i == kicks.len() - 1;
                *loc = candidate;
                loc.just_rotated = true;
                loc.via_last_kick = loc.kind.supports_spin() && turn != Turn::Half && last;
                return true;
            }
        }
        false
    }
}
