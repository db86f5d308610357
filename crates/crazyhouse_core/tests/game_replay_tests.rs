//! Whole-game replays through the public API.
//!
//! Every ply is checked against the invariants the training pipeline relies on:
//! - the array board matches the rules engine square for square
//! - material is conserved between board and reserves
//! - the canonical key has a fixed length and ends in the ply parity
//! - the encoding has a fixed shape and only 0/1 values

use crazyhouse_core::{
    encode, BoardState, Color, GameResult, MoveClass, PieceKind, ReserveKind, Square, KEY_LEN,
    NUM_FEATURES, STARTING_MATERIAL,
};

/// A complete crazyhouse game with castling, drops of every kind and a
/// drop mate at the end.
const DROP_MATE_GAME: [&str; 39] = [
    "e2e4", "e7e6", "d2d4", "b8c6", "g1f3", "d7d5", "e4e5", "g8e7", "b1c3", "e7f5", "f1d3", "c6d4",
    "f3d4", "f5d4", "e1g1", "d4f5", "d3f5", "e6f5", "c3d5", "B@e4", "d5e3", "P@h3", "d1d8", "e8d8",
    "f1d1", "c8d7", "d1d7", "d8d7", "Q@d4", "R@d6", "N@c5", "d7e8", "B@b5", "c7c6", "e5d6", "h3g2",
    "N@c7", "e8d8", "R@e8",
];

fn check_invariants(board: &BoardState) {
    board.verify_sync().expect("array board diverged from rules engine");

    for kind in ReserveKind::ALL {
        assert_eq!(
            board.material_count(kind),
            STARTING_MATERIAL[kind.idx()],
            "material for {kind:?} not conserved at ply {}",
            board.plies()
        );
    }

    let key = board.canonical_key();
    assert_eq!(key.len(), KEY_LEN);
    let parity = if board.plies() % 2 == 0 { "0" } else { "1" };
    assert!(key.ends_with(parity));

    let enc = encode(board);
    assert_eq!(enc.as_slice().len(), NUM_FEATURES);
    assert!(enc.as_slice().iter().all(|&x| x == 0.0 || x == 1.0));
}

// =============================================================================
// Full game
// =============================================================================

#[test]
fn test_drop_mate_game_stays_in_sync() {
    let mut board = BoardState::new();
    check_invariants(&board);

    let mut drops = 0;
    let mut castles = 0;
    for (ply, token) in DROP_MATE_GAME.iter().enumerate() {
        assert_eq!(
            board.game_result(),
            GameResult::InProgress,
            "game ended early at ply {ply}"
        );
        let class = board
            .make_move(token)
            .unwrap_or_else(|e| panic!("ply {ply}: {e}"));
        match class {
            MoveClass::Drop { .. } => drops += 1,
            MoveClass::Castle { .. } => castles += 1,
            _ => {}
        }
        check_invariants(&board);
    }

    assert_eq!(board.plies(), 39);
    assert_eq!(castles, 1);
    assert_eq!(drops, 8);
    assert_eq!(board.game_result(), GameResult::WhiteWin);
    assert_eq!(
        board.piece_at(Square::from_coord("e8").unwrap()).map(|p| (p.color, p.kind)),
        Some((Color::White, PieceKind::Rook))
    );
}

#[test]
fn test_replays_produce_identical_keys() {
    let mut a = BoardState::new();
    let mut b = BoardState::new();
    for token in DROP_MATE_GAME {
        a.make_move(token).unwrap();
        b.make_move(token).unwrap();
        assert_eq!(a.canonical_key(), b.canonical_key());
        assert_eq!(encode(&a), encode(&b));
    }
}

#[test]
fn test_failed_move_mid_game_changes_nothing() {
    let mut board = BoardState::new();
    for token in &DROP_MATE_GAME[..20] {
        board.make_move(token).unwrap();
    }
    let key = board.canonical_key();
    let enc = encode(&board);

    // Queen drop without a queen in reserve, then garbage
    assert!(board.make_move("Q@a3").is_err());
    assert!(board.make_move("zz99").is_err());

    assert_eq!(board.canonical_key(), key);
    assert_eq!(encode(&board), enc);
    assert_eq!(board.plies(), 20);
}

// =============================================================================
// Random legal play
// =============================================================================

#[test]
fn test_first_legal_move_games_keep_invariants() {
    // Deterministic walk: always take the legal move at a ply-dependent index.
    for game in 0..4usize {
        let mut board = BoardState::new();
        for ply in 0..120usize {
            if board.game_result().is_terminal() {
                break;
            }
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let token = moves[(ply * 7 + game * 13) % moves.len()];
            board.apply(&token).unwrap();
            check_invariants(&board);
        }
    }
}
