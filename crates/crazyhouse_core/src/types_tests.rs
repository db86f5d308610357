use super::*;

#[test]
fn test_square_coords_follow_array_layout() {
    // rank 8 is the top row of the array board
    assert_eq!(Square::from_coord("a8"), Some(Square::new(0, 0)));
    assert_eq!(Square::from_coord("h1"), Some(Square::new(7, 7)));
    assert_eq!(Square::from_coord("e2"), Some(Square::new(6, 4)));
    assert_eq!(Square::new(6, 4).coord(), "e2");
    assert_eq!(Square::from_index(63), Square::new(7, 7));
}

#[test]
fn test_square_rejects_out_of_range() {
    assert_eq!(Square::from_coord("i1"), None);
    assert_eq!(Square::from_coord("a9"), None);
    assert_eq!(Square::from_coord("a0"), None);
    assert_eq!(Square::from_coord("e"), None);
}

#[test]
fn test_piece_char_case_marks_color() {
    let wn = Piece::new(Color::White, PieceKind::Knight);
    assert_eq!(wn.to_char(), 'N');
    assert_eq!(Piece::from_char('n'), Some(Piece::new(Color::Black, PieceKind::Knight)));
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn test_ply_parity() {
    assert_eq!(Color::from_ply(0), Color::White);
    assert_eq!(Color::from_ply(1), Color::Black);
    assert_eq!(Color::from_ply(40), Color::White);
}

#[test]
fn test_king_has_no_reserve_slot() {
    assert_eq!(ReserveKind::try_from(PieceKind::Queen), Ok(ReserveKind::Queen));
    assert_eq!(ReserveKind::try_from(PieceKind::King), Err(PieceKind::King));
}
