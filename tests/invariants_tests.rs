//! Board invariants that must hold independent of any particular
//! position (`spec.md` §8).

use std::str::FromStr;
use vantage::board::{Board, Color, Piece};
use vantage::moves::attacks::attack_tables;
use vantage::moves::movegen::generate_legal;
use vantage::moves::types::MoveList;

#[test]
fn make_undo_round_trips_hash_and_fen() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut board = Board::from_str(fen).unwrap();
    let tables = attack_tables();
    let before_hash = board.hash();
    let before_fen = board.to_string();

    let mut moves = MoveList::new();
    generate_legal(&mut board, tables, &mut moves);
    for mv in moves {
        board.make(mv);
        board.undo();
        assert_eq!(board.hash(), before_hash, "undo must restore the hash exactly");
        assert_eq!(board.to_string(), before_fen, "undo must restore the FEN exactly");
    }
}

#[test]
fn make_undo_round_trips_across_several_plies() {
    let mut board = Board::new();
    let tables = attack_tables();
    let mut history = Vec::new();

    for _ in 0..6 {
        let mut moves = MoveList::new();
        generate_legal(&mut board, tables, &mut moves);
        if moves.is_empty() {
            break;
        }
        let mv = moves[0];
        history.push((board.hash(), board.to_string()));
        board.make(mv);
    }
    while let Some((hash, fen)) = history.pop() {
        board.undo();
        assert_eq!(board.hash(), hash);
        assert_eq!(board.to_string(), fen);
    }
}

#[test]
fn piece_bitboards_are_pairwise_disjoint_and_cover_occupancy() {
    let board = Board::from_str(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    assert!(board.validate().is_ok());

    let mut seen = 0u64;
    for &color in &[Color::White, Color::Black] {
        for &piece in &[
            Piece::Pawn,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            let bb = board.pieces(piece, color);
            assert_eq!(bb & seen, 0, "{piece:?}/{color:?} overlaps an earlier piece type");
            seen |= bb;
        }
    }
}

#[test]
fn starting_position_has_exactly_eight_pawns_per_side_on_their_home_rank() {
    let board = Board::new();
    assert_eq!(board.pieces(Piece::Pawn, Color::White).count_ones(), 8);
    assert_eq!(board.pieces(Piece::Pawn, Color::Black).count_ones(), 8);
}

#[test]
fn hash_is_reproducible_for_equivalent_positions_reached_differently() {
    let tables = attack_tables();

    let mut via_moves = Board::new();
    let e2: vantage::square::Square = "e2".parse().unwrap();
    let e4: vantage::square::Square = "e4".parse().unwrap();
    let mut moves = MoveList::new();
    generate_legal(&mut via_moves, tables, &mut moves);
    let mv = moves
        .iter()
        .find(|m| m.from() == e2 && m.to() == e4)
        .copied()
        .expect("1. e4 is legal from the start position");
    via_moves.make(mv);

    let via_fen =
        Board::from_str("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();

    assert_eq!(via_moves.hash(), via_fen.hash());
}
