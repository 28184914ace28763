//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Spawn row for new pieces (piece origin y)
pub const SPAWN_ROW: i32 = 0;

/// Horizontal overhang margin used by the visited table and the
/// hard-drop column scan (pieces may hang up to 2 cells past a wall)
pub const X_MARGIN: i32 = 3;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// All four rotations of the O piece are geometrically identical,
    /// so rotation exploration is skipped entirely for it.
    pub fn is_rotation_symmetric(&self) -> bool {
        matches!(self, PieceKind::O)
    }

    /// Only the T piece carries kick provenance into spin classification.
    pub fn supports_spin(&self) -> bool {
        matches!(self, PieceKind::T)
    }
}

/// Rotation states, North = spawn orientation, advancing clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// Advance by `steps` quarter turns clockwise (1 = CW, 2 = 180, 3 = CCW)
    pub fn turned(&self, steps: u8) -> Self {
        Self::from_index(self.index() + steps as usize)
    }
}

/// Rotation directions accepted by the movement oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Cw,
    Half,
    Ccw,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Cw, Turn::Half, Turn::Ccw];

    /// Quarter turns clockwise
    pub fn steps(&self) -> u8 {
        match self {
            Turn::Cw => 1,
            Turn::Half => 2,
            Turn::Ccw => 3,
        }
    }
}

/// Spin classification of a resting placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinKind {
    /// Generic all-spin mini (non-T pieces under the s2 ruleset)
    Mini,
    /// T-spin mini
    TSpinMini,
    /// Full T-spin
    TSpin,
}

impl SpinKind {
    /// Small integer code used on the wire to distinguish spin severity
    pub fn code(&self) -> u8 {
        match self {
            SpinKind::Mini => 0,
            SpinKind::TSpinMini => 1,
            SpinKind::TSpin => 2,
        }
    }
}

/// Search strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Exhaustive BFS over the full (x, y, rotation) state graph
    BruteForce,
    /// Per-column hard-drop scan; misses slides and spins by design
    HardDrop,
    /// Phased heuristic (rotate, slide, drop, then constrained BFS)
    FasterButLoss,
    /// Flood fill over precomputed per-rotation validity maps
    Convolution,
}

impl Algorithm {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "brute-force" => Some(Algorithm::BruteForce),
            "harddrop" => Some(Algorithm::HardDrop),
            "faster-but-loss" => Some(Algorithm::FasterButLoss),
            "convolution" => Some(Algorithm::Convolution),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::HardDrop => "harddrop",
            Algorithm::FasterButLoss => "faster-but-loss",
            Algorithm::Convolution => "convolution",
        }
    }
}

/// Spin-detection ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruleset {
    /// T-spins plus generic all-spin minis for every other piece
    S2,
    /// T-spins only
    Guideline,
}

impl Ruleset {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "s2" => Some(Ruleset::S2),
            "guideline" => Some(Ruleset::Guideline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::S2 => "s2",
            Ruleset::Guideline => "guideline",
        }
    }

    /// Whether non-T pieces qualify for the immobile all-spin mini
    pub fn all_spin(&self) -> bool {
        matches!(self, Ruleset::S2)
    }
}
