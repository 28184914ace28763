//! Search engine tests - algorithm behavior over concrete boards

use tetris_movegen::core::{Board, Oracle, PieceLocation};
use tetris_movegen::search::{Frame, FrameKind, SearchEngine};
use tetris_movegen::types::{Algorithm, PieceKind, Rotation, Ruleset};

fn empty_board() -> Board {
    Board::empty(10, 20).unwrap()
}

/// Board with a T-slot under an overhang:
/// row 18 filled except columns 3-5, row 19 filled except column 4,
/// plus an overhang cell at (3, 17). A T can drop into the slot facing
/// East and must rotate in place to rest facing South.
fn t_slot_board() -> Board {
    let mut board = empty_board();
    for x in [0, 1, 2, 6, 7, 8, 9] {
        board.fill(x, 18);
    }
    for x in [0, 1, 2, 3, 5, 6, 7, 8, 9] {
        board.fill(x, 19);
    }
    board.fill(3, 17);
    board
}

fn run(board: &Board, kind: PieceKind, algorithm: Algorithm) -> Vec<Frame> {
    SearchEngine::new(board, kind, Ruleset::S2).run(algorithm).frames
}

fn placeables(frames: &[Frame]) -> Vec<&Frame> {
    frames.iter().filter(|f| f.kind == FrameKind::Placeable).collect()
}

fn tspins(frames: &[Frame]) -> Vec<&Frame> {
    frames.iter().filter(|f| f.kind == FrameKind::Tspin).collect()
}

// ============== Determinism ==============

#[test]
fn identical_runs_produce_identical_traces() {
    let board = t_slot_board();
    for algorithm in [
        Algorithm::BruteForce,
        Algorithm::HardDrop,
        Algorithm::FasterButLoss,
        Algorithm::Convolution,
    ] {
        let a = run(&board, PieceKind::T, algorithm);
        let b = run(&board, PieceKind::T, algorithm);
        assert_eq!(a, b, "{algorithm:?} must be deterministic");
    }
}

// ============== Resting-state validity ==============

#[test]
fn every_placeable_frame_is_down_blocked() {
    let board = t_slot_board();
    for algorithm in [
        Algorithm::BruteForce,
        Algorithm::HardDrop,
        Algorithm::FasterButLoss,
        Algorithm::Convolution,
    ] {
        let frames = run(&board, PieceKind::T, algorithm);
        let mut oracle = Oracle::new(&board);
        for frame in placeables(&frames) {
            let loc = PieceLocation {
                kind: PieceKind::T,
                x: frame.x,
                y: frame.y,
                rotation: Rotation::from_index(frame.rotation as usize),
                just_rotated: false,
                via_last_kick: false,
            };
            assert!(
                !oracle.can_move(&loc, 0, 1),
                "{algorithm:?} placement at {:?} can still fall",
                (frame.x, frame.y, frame.rotation)
            );
        }
    }
}

// ============== Exhaustive search on an empty board ==============

#[test]
fn brute_force_counts_all_floor_and_wall_placements_for_t() {
    let frames = run(&empty_board(), PieceKind::T, Algorithm::BruteForce);
    // North/South rest at 8 columns each, East/West at 9 each
    assert_eq!(placeables(&frames).len(), 34);
    // No spins are possible on an empty board
    assert!(tspins(&frames).is_empty());
}

#[test]
fn brute_force_counts_all_placements_for_i() {
    let frames = run(&empty_board(), PieceKind::I, Algorithm::BruteForce);
    // Horizontal: 7 columns x 2 rotations, vertical: 10 x 2
    assert_eq!(placeables(&frames).len(), 34);
}

// ============== Symmetric-piece shortcut ==============

#[test]
fn o_piece_placements_never_leave_rotation_zero() {
    for algorithm in [
        Algorithm::BruteForce,
        Algorithm::HardDrop,
        Algorithm::FasterButLoss,
        Algorithm::Convolution,
    ] {
        let frames = run(&empty_board(), PieceKind::O, algorithm);
        let rest = placeables(&frames);
        assert_eq!(rest.len(), 9, "{algorithm:?}");
        assert!(rest.iter().all(|f| f.rotation == 0), "{algorithm:?}");
    }
}

// ============== Strategy completeness on an empty board ==============

#[test]
fn all_strategies_are_complete_on_an_empty_board() {
    let total = placeables(&run(&empty_board(), PieceKind::T, Algorithm::BruteForce)).len();
    for algorithm in [
        Algorithm::HardDrop,
        Algorithm::FasterButLoss,
        Algorithm::Convolution,
    ] {
        let found = placeables(&run(&empty_board(), PieceKind::T, algorithm)).len();
        assert_eq!(found, total, "{algorithm:?}");
    }
}

// ============== T-slot scenario ==============

#[test]
fn brute_force_finds_the_full_tspin_in_the_slot() {
    let frames = run(&t_slot_board(), PieceKind::T, Algorithm::BruteForce);
    let spin = frames.iter().find(|f| {
        f.kind == FrameKind::Tspin && f.x == 3 && f.y == 17 && f.rotation == 2
    });
    // South resting in the slot: both front (bottom) corners filled
    assert_eq!(spin.unwrap().spin_type, Some(2));
}

#[test]
fn convolution_finds_the_full_tspin_in_the_slot() {
    let frames = run(&t_slot_board(), PieceKind::T, Algorithm::Convolution);
    let spin = frames.iter().find(|f| {
        f.kind == FrameKind::Tspin && f.x == 3 && f.y == 17 && f.rotation == 2
    });
    assert_eq!(spin.unwrap().spin_type, Some(2));
}

#[test]
fn harddrop_misses_slot_placements_and_spins() {
    let board = t_slot_board();
    let total_frames = run(&board, PieceKind::T, Algorithm::BruteForce);
    let scan_frames = run(&board, PieceKind::T, Algorithm::HardDrop);

    assert!(placeables(&scan_frames).len() < placeables(&total_frames).len());
    assert!(tspins(&scan_frames).is_empty());
    assert!(!tspins(&total_frames).is_empty());
}

#[test]
fn phased_search_reaches_the_slot_through_its_landing_pass() {
    let frames = run(&t_slot_board(), PieceKind::T, Algorithm::FasterButLoss);
    let spin = frames.iter().find(|f| {
        f.kind == FrameKind::Tspin && f.x == 3 && f.y == 17 && f.rotation == 2
    });
    assert!(spin.is_some());
}

// ============== Dedup preference ==============

#[test]
fn kick_arrival_wins_over_plain_arrival_at_the_same_state() {
    // East T resting against the right wall at (7, 17) is reachable by
    // a plain drop and by a zero-offset kick from North at the same
    // origin. Three box corners are filled, so only the kick-arrival
    // provenance makes it classify - the finalized placement must be
    // the spin-eligible variant.
    let mut board = empty_board();
    board.fill(7, 17);
    board.fill(7, 19);
    board.fill(9, 19);

    let frames = run(&board, PieceKind::T, Algorithm::BruteForce);
    let spin = frames.iter().find(|f| {
        f.kind == FrameKind::Tspin && f.x == 7 && f.y == 17 && f.rotation == 1
    });
    // Front (right) corners are not both filled and no last-table kick
    // is involved, so this grades as a T-spin mini
    assert_eq!(spin.unwrap().spin_type, Some(1));
}

#[test]
fn convolution_never_invents_kick_arrivals_from_below_the_floor() {
    // A lone filled cell near the bottom-left corner puts T resting
    // states on the floor whose upward kick sources would sit at
    // y = height. No rotation actually enters any of them, so neither
    // search may report a spin here.
    let mut board = empty_board();
    board.fill(0, 18);

    let truth = run(&board, PieceKind::T, Algorithm::BruteForce);
    let fill = run(&board, PieceKind::T, Algorithm::Convolution);

    assert!(tspins(&truth).is_empty());
    assert!(tspins(&fill).is_empty());
}

// ============== Topped-out spawn ==============

#[test]
fn topped_out_spawn_yields_no_placements() {
    let mut board = empty_board();
    for x in 0..10 {
        for y in 0..2 {
            board.fill(x, y);
        }
    }
    for algorithm in [
        Algorithm::BruteForce,
        Algorithm::HardDrop,
        Algorithm::FasterButLoss,
        Algorithm::Convolution,
    ] {
        let frames = run(&board, PieceKind::T, algorithm);
        assert!(placeables(&frames).is_empty(), "{algorithm:?}");
        assert!(tspins(&frames).is_empty(), "{algorithm:?}");
    }
}

// ============== Narrow-board spawn quirk ==============

#[test]
fn three_wide_board_tops_out_non_o_pieces_at_spawn() {
    // The spawn column rule centers against a 4-wide box; on a 3-wide
    // board the origin lands at -1 and part of the piece starts
    // off-grid. Documented behavior, not a defect.
    let board = Board::empty(3, 20).unwrap();
    let frames = run(&board, PieceKind::T, Algorithm::BruteForce);
    assert!(frames.is_empty());
}

#[test]
fn o_piece_still_spawns_on_a_two_wide_board() {
    let board = Board::empty(2, 20).unwrap();
    let frames = run(&board, PieceKind::O, Algorithm::BruteForce);
    assert_eq!(placeables(&frames).len(), 1);
}
