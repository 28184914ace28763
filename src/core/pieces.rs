//! Pieces module - tetromino shapes and SRS kick tables
//!
//! Shapes follow the Super Rotation System bounding boxes; kick tables are
//! the SRS set plus 180 extensions (six candidates for the JLSTZ family,
//! two for I). Kick offsets are stored y-up and must be applied as
//! (x + kx, y - ky) since board y grows downward.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
    }
}

fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O piece: 2x2 anchored at the origin, identical in every rotation.
/// The spawn rule shifts O one column right to center it against the
/// 3- and 4-wide bounding boxes of the other pieces.
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

// ============== Kick tables ==============

const JLSTZ_01: [(i32, i32); 5] = [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)];
const JLSTZ_12: [(i32, i32); 5] = [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)];
const JLSTZ_23: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)];
const JLSTZ_30: [(i32, i32); 5] = [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)];

const JLSTZ_03: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)];
const JLSTZ_32: [(i32, i32); 5] = [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)];
const JLSTZ_21: [(i32, i32); 5] = [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)];
const JLSTZ_10: [(i32, i32); 5] = [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)];

const JLSTZ_02: [(i32, i32); 6] = [(0, 0), (0, 1), (1, 1), (-1, 1), (1, 0), (-1, 0)];
const JLSTZ_13: [(i32, i32); 6] = [(0, 0), (1, 0), (1, 2), (1, 1), (0, 2), (0, 1)];
const JLSTZ_20: [(i32, i32); 6] = [(0, 0), (0, -1), (-1, -1), (1, -1), (-1, 0), (1, 0)];
const JLSTZ_31: [(i32, i32); 6] = [(0, 0), (-1, 0), (-1, 2), (-1, 1), (0, 2), (0, 1)];

const I_01: [(i32, i32); 5] = [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)];
const I_12: [(i32, i32); 5] = [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)];
const I_23: [(i32, i32); 5] = [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)];
const I_30: [(i32, i32); 5] = [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)];

const I_03: [(i32, i32); 5] = [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)];
const I_32: [(i32, i32); 5] = [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)];
const I_21: [(i32, i32); 5] = [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)];
const I_10: [(i32, i32); 5] = [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)];

// The I 180 tables are two entries only; every other family gets six
const I_02: [(i32, i32); 2] = [(0, 0), (0, 1)];
const I_20: [(i32, i32); 2] = [(0, 0), (0, -1)];
const I_13: [(i32, i32); 2] = [(0, 0), (1, 0)];
const I_31: [(i32, i32); 2] = [(0, 0), (-1, 0)];

/// O never rotates during search, but the lookup stays total
const O_KICKS: [(i32, i32); 1] = [(0, 0)];

/// Ordered kick candidates for a (from -> to) rotation transition.
/// Strict priority order: the first collision-free candidate wins.
pub fn get_kicks(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [(i32, i32)] {
    let key = from.index() * 10 + to.index();
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => match key {
            1 => &I_01,
            12 => &I_12,
            23 => &I_23,
            30 => &I_30,
            3 => &I_03,
            32 => &I_32,
            21 => &I_21,
            10 => &I_10,
            2 => &I_02,
            20 => &I_20,
            13 => &I_13,
            31 => &I_31,
            _ => &O_KICKS,
        },
        _ => match key {
            1 => &JLSTZ_01,
            12 => &JLSTZ_12,
            23 => &JLSTZ_23,
            30 => &JLSTZ_30,
            3 => &JLSTZ_03,
            32 => &JLSTZ_32,
            21 => &JLSTZ_21,
            10 => &JLSTZ_10,
            2 => &JLSTZ_02,
            20 => &JLSTZ_20,
            13 => &JLSTZ_13,
            31 => &JLSTZ_31,
            _ => &O_KICKS,
        },
    }
}

/// Spawn column for a piece on a board of the given width.
/// O spawns one column further right than everything else; on very
/// narrow boards this can push it off-grid, which reads as an
/// immediate top-out. That behavior is intentional and preserved.
pub fn spawn_x(kind: PieceKind, width: i32) -> i32 {
    let base = width / 2 - 2;
    if kind == PieceKind::O {
        base + 1
    } else {
        base
    }
}
