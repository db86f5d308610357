use super::*;
use crate::types::{Piece, PieceKind, Square};

fn ones(plane: &[f32]) -> usize {
    plane.iter().filter(|&&x| x == 1.0).count()
}

#[test]
fn test_encode_startpos() {
    let board = BoardState::new();
    let enc = encode(&board);

    assert_eq!(enc.shape(), [1, 1, 104, 8]);
    assert_eq!(enc.as_slice().len(), NUM_FEATURES);
    assert!(enc.as_slice().iter().all(|&x| x == 0.0 || x == 1.0));

    // 32 pieces, empty reserves, white to move
    assert_eq!(ones(enc.as_slice()), 32);
    assert_eq!(ones(enc.plane(12)), 0);
}

#[test]
fn test_piece_planes_in_documented_order() {
    let board = BoardState::new();
    let enc = encode(&board);

    // White pawns on row 6 of plane 0
    for col in 0..8 {
        assert_eq!(enc.at(6, col), 1.0, "Expected white pawn at column {}", col);
    }
    // White king e1 on plane 5
    assert_eq!(enc.at(5 * 8 + 7, 4), 1.0);
    // Black queen d8 on plane 10
    assert_eq!(enc.at(10 * 8, 3), 1.0);
    // Black knights b8 and g8 on plane 7
    assert_eq!(ones(enc.plane(7)), 2);

    let wp = BitplaneSet::plane_index(Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(ones(enc.plane(wp)), 8);
}

#[test]
fn test_turn_cells_follow_ply_parity() {
    let mut board = BoardState::new();
    board.make_move("e2e4").unwrap();
    let enc = encode(&board);
    assert_eq!(enc.at(12 * 8 + 7, 6), 1.0);
    assert_eq!(enc.at(12 * 8 + 7, 7), 1.0);
    assert_eq!(ones(enc.plane(12)), 2);

    board.make_move("e7e5").unwrap();
    let enc = encode(&board);
    assert_eq!(ones(enc.plane(12)), 0);
}

#[test]
fn test_encoding_is_deterministic_and_pure() {
    let mut board = BoardState::new();
    for m in ["e2e4", "d7d5", "e4d5", "d8d5"] {
        board.make_move(m).unwrap();
    }
    let key = board.canonical_key();

    let a = encode(&board);
    let b = board.encode();
    assert_eq!(a, b);
    let bits_a: Vec<u32> = a.as_slice().iter().map(|x| x.to_bits()).collect();
    let bits_b: Vec<u32> = b.as_slice().iter().map(|x| x.to_bits()).collect();
    assert_eq!(bits_a, bits_b);
    assert_eq!(board.canonical_key(), key);
}

#[test]
fn test_captures_show_in_reserve_plane() {
    let mut board = BoardState::new();
    for m in ["e2e4", "d7d5", "e4d5", "d8d5"] {
        board.make_move(m).unwrap();
    }
    let plane = encode(&board).plane(12).to_vec();
    // one white reserve pawn at (0,0), one black at (4,0), white to move
    assert_eq!(plane[0], 1.0);
    assert_eq!(plane[4 * 8], 1.0);
    assert_eq!(ones(&plane), 2);
    assert_eq!(board.piece_at(Square::new(3, 3)).map(|p| p.kind), Some(PieceKind::Queen));
}

#[test]
fn test_reserve_plane_layout() {
    let white = ReserveSet::with_counts([10, 1, 2, 3, 1]);
    let black = ReserveSet::with_counts([0, 4, 0, 0, 2]);
    let plane = encode_reserve_plane(&white, &black, 0);

    let row = |r: usize| plane[r * 8..(r + 1) * 8].to_vec();
    assert_eq!(row(0), vec![1.0; 8]);
    assert_eq!(row(1), vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(row(2), vec![1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(row(3), vec![1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(row(4), vec![0.0; 8]);
    assert_eq!(row(6), vec![1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(row(7), vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_reserve_plane_capacity_boundary() {
    // exactly at capacity: every slot filled
    let full = ReserveSet::with_counts([16, 4, 4, 4, 0]);
    let plane = encode_reserve_plane(&full, &ReserveSet::new(), 0);
    assert_eq!(ones(&plane), 16 + 12);

    // beyond capacity: excess is dropped, not an error
    let over = ReserveSet::with_counts([20, 7, 5, 9, 0]);
    assert_eq!(encode_reserve_plane(&over, &ReserveSet::new(), 0), plane);
}

#[test]
fn test_turn_marker_overrides_black_queen_overflow() {
    let black = ReserveSet::with_counts([0, 0, 0, 0, 4]);
    let plane = encode_reserve_plane(&ReserveSet::new(), &black, 0);
    // queens 3 and 4 sit under the turn cells and read as white-to-move
    assert_eq!(&plane[7 * 8 + 4..7 * 8 + 8], &[1.0f32, 1.0, 0.0, 0.0]);
}
