use chessgame::{Board, Color, Coord, Piece};
use pretty_assertions::assert_eq;

#[test]
fn score_summary_sums_per_color() {
    let mut b = Board::new();
    assert_eq!(b.score_summary(), "white: 0\nblack: 0");

    for file in 1..=3 {
        b.add(Piece::pawn(Color::Black), Coord::new(file, 2)).unwrap();
    }
    assert_eq!(b.score_summary(), "white: 0\nblack: 3");

    let mut mixed = Board::new();
    mixed.add(Piece::pawn(Color::White), Coord::new(1, 2)).unwrap();
    mixed.add(Piece::pawn(Color::Black), Coord::new(2, 2)).unwrap();
    mixed.add(Piece::pawn(Color::White), Coord::new(3, 2)).unwrap();
    assert_eq!(mixed.score_summary(), "white: 2\nblack: 1");
}

#[test]
fn score_summary_mixed_kinds() {
    let mut b = Board::new();
    b.add(Piece::pawn(Color::White), Coord::new(1, 2)).unwrap();
    b.add(Piece::bishop(Color::Black), Coord::new(2, 2)).unwrap();
    b.add(Piece::queen(Color::White), Coord::new(3, 2)).unwrap();
    b.add(Piece::pawn(Color::Black), Coord::new(4, 2)).unwrap();
    assert_eq!(b.score_summary(), "white: 10\nblack: 4");
    assert_eq!(b.score(Color::White), 10);
    assert_eq!(b.score(Color::Black), 4);
}

#[test]
fn render_places_pawns_on_their_rank() {
    let mut b = Board::new();
    for file in 1..=3 {
        b.add(Piece::pawn(Color::Black), Coord::new(file, 2)).unwrap();
    }
    assert_eq!(
        b.render(),
        "........\n♟♟♟.....\n........\n........\n........\n........\n........\n........"
    );
}

#[test]
fn render_mixes_colors_and_kinds() {
    let mut b = Board::new();
    b.add(Piece::pawn(Color::Black), Coord::new(1, 3)).unwrap();
    b.add(Piece::bishop(Color::White), Coord::new(2, 3)).unwrap();
    b.add(Piece::queen(Color::Black), Coord::new(3, 3)).unwrap();
    b.add(Piece::knight(Color::White), Coord::new(4, 3)).unwrap();
    assert_eq!(
        b.render(),
        "........\n........\n♟♗♛♘....\n........\n........\n........\n........\n........"
    );
}

#[test]
fn render_has_no_trailing_newline() {
    let b = Board::new();
    let text = b.render();
    assert!(!text.ends_with('\n'));
    assert_eq!(text.lines().count(), 8);
    assert!(text.lines().all(|l| l == "........"));
}

#[test]
fn standard_setup_renders_start_position() {
    let mut b = Board::new();
    b.standard_setup().expect("start position is valid");
    let expected = [
        "♜♞♝.♛♝♞♜",
        "♟♟♟♟♟♟♟♟",
        "........",
        "........",
        "........",
        "........",
        "♙♙♙♙♙♙♙♙",
        "♖♘♗.♕♗♘♖",
    ]
    .join("\n");
    assert_eq!(b.render(), expected);
    assert_eq!(b.score_summary(), "white: 39\nblack: 39");
    assert_eq!(b.pieces().len(), 30);
}

#[test]
fn initialize_standard_board_matches_standard_setup() {
    let mut session = Board::new();
    assert!(!session.is_occupied_anywhere());
    session.initialize_standard_board().expect("start position is valid");
    assert!(session.is_occupied_anywhere());
    assert_eq!(session.render().lines().next(), Some("♜♞♝.♛♝♞♜"));

    let mut direct = Board::new();
    direct.standard_setup().unwrap();
    assert_eq!(session, direct);
}

#[test]
fn standard_setup_replaces_existing_pieces() {
    let mut b = Board::new();
    b.add(Piece::queen(Color::White), Coord::new(4, 4)).unwrap();
    b.standard_setup().unwrap();
    assert_eq!(b.piece_at(Coord::new(4, 4)), None);
    assert_eq!(b.count(Piece::queen(Color::White)), 1);
    b.standard_setup().unwrap();
    assert_eq!(b.pieces().len(), 30);
}

#[test]
fn snapshot_lists_pieces_in_square_order() {
    let mut b = Board::new();
    b.add(Piece::rook(Color::White), Coord::new(8, 8)).unwrap();
    b.add(Piece::pawn(Color::Black), Coord::new(2, 2)).unwrap();
    let snap = b.snapshot();
    assert_eq!(snap.size, 8);
    let squares: Vec<Coord> = snap.pieces.iter().map(|p| p.at).collect();
    assert_eq!(squares, vec![Coord::new(2, 2), Coord::new(8, 8)]);
    assert_eq!(snap.pieces[1].symbol, '♖');

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["pieces"][0]["piece"]["kind"], "pawn");
    assert_eq!(json["pieces"][0]["piece"]["color"], "black");
    assert_eq!(json["pieces"][0]["at"]["file"], 2);
}
