use super::*;

#[test]
fn test_from_square_is_row_major() {
    assert_eq!(Bitplane::from_square(Square::new(0, 0)).0, 1); // a8
    assert_eq!(Bitplane::from_square(Square::new(0, 7)).0, 128); // h8
    assert_eq!(Bitplane::from_square(Square::new(7, 7)).0, 1 << 63); // h1
}

#[test]
fn test_iterator_yields_squares_in_order() {
    let plane = Bitplane(0b1010 | (1 << 63));
    let squares: Vec<Square> = plane.collect();
    assert_eq!(
        squares,
        vec![Square::new(0, 1), Square::new(0, 3), Square::new(7, 7)]
    );
}

#[test]
fn test_planes_follow_board() {
    let mut squares = [None; 64];
    let wq = Piece::new(Color::White, PieceKind::Queen);
    let bp = Piece::new(Color::Black, PieceKind::Pawn);
    squares[Square::new(7, 3).index()] = Some(wq);
    squares[Square::new(1, 0).index()] = Some(bp);
    squares[Square::new(1, 1).index()] = Some(bp);

    let set = BitplaneSet::from_squares(&squares);
    assert!(set.plane(wq).contains(Square::new(7, 3)));
    assert_eq!(set.plane(bp).popcount(), 2);
    assert_eq!(set.count_kind(PieceKind::Pawn), 2);
    assert!(set.plane(Piece::new(Color::White, PieceKind::King)).is_empty());

    let total: u32 = set.planes().iter().map(|p| p.popcount()).sum();
    assert_eq!(total, 3);
}

#[test]
fn test_plane_order() {
    assert_eq!(BitplaneSet::plane_index(Piece::new(Color::White, PieceKind::Pawn)), 0);
    assert_eq!(BitplaneSet::plane_index(Piece::new(Color::White, PieceKind::King)), 5);
    assert_eq!(BitplaneSet::plane_index(Piece::new(Color::Black, PieceKind::Pawn)), 6);
    assert_eq!(BitplaneSet::plane_index(Piece::new(Color::Black, PieceKind::King)), 11);
}
