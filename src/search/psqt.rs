//! Piece-square tables for the static evaluator (`spec.md` §4.3).
//!
//! Every table is transcribed verbatim from the reference engine's
//! tuned weights. Each row is one rank (rank 1 first), and within a
//! row the columns run H,G,F,E,D,C,B,A, which is exactly this
//! crate's bit-index order (`square.rs`: bit 0 is H1, bit 7 is A1), so
//! the tables are indexed directly by `Square::index()` with no
//! mirroring.

/// Used for both colors: central squares are equally good for either
/// side's knight.
#[rustfmt::skip]
pub const KNIGHT_PST: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

/// Used for both colors, same reasoning as `KNIGHT_PST`.
#[rustfmt::skip]
pub const QUEEN_PST: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
pub const ROOK_PST_WHITE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
pub const ROOK_PST_BLACK: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
pub const BISHOP_PST_WHITE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
pub const BISHOP_PST_BLACK: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

/// `[0]` white opening, `[1]` black opening, `[2]` white endgame,
/// `[3]` black endgame. `Engine::evaluate` tapers between the opening
/// and endgame rows by `Board::game_phase()`.
#[rustfmt::skip]
pub const KING_PST: [[i32; 64]; 4] = [
    [
        20, 30, 10,  0,  0, 10, 30, 20,
        20, 20,  0,  0,  0,  0, 20, 20,
       -10,-20,-20,-20,-20,-20,-20,-10,
       -20,-30,-30,-40,-40,-30,-30,-20,
       -30,-40,-40,-50,-50,-40,-40,-30,
       -30,-40,-40,-50,-50,-40,-40,-30,
       -30,-40,-40,-50,-50,-40,-40,-30,
       -30,-40,-40,-50,-50,-40,-40,-30,
    ],
    [
       -30,-40,-40,-50,-50,-40,-40,-30,
       -30,-40,-40,-50,-50,-40,-40,-30,
       -30,-40,-40,-50,-50,-40,-40,-30,
       -30,-40,-40,-50,-50,-40,-40,-30,
       -20,-30,-30,-40,-40,-30,-30,-20,
       -10,-20,-20,-20,-20,-20,-20,-10,
        20, 20,  0,  0,  0,  0, 20, 20,
        20, 30, 10,  0,  0, 10, 30, 20,
    ],
    [
        -10,-10,-10,-10,-10,-10,-10,-10,
        -10, -5, -5, -5, -5, -5, -5,-10,
        -10, -5,  5,  5,  5,  5, -5,-10,
        -10, -5,  5, 20, 20,  5, -5,-10,
        -10, -5,  5, 20, 20,  5, -5,-10,
        -10, -5,  5,  5,  5,  5, -5,-10,
        -10, -5, -5, -5, -5, -5, -5,-10,
        -10,-10,-10,-10,-10,-10,-10,-10,
    ],
    [
        -10,-10,-10,-10,-10,-10,-10,-10,
        -10, -5, -5, -5, -5, -5, -5,-10,
        -10, -5,  5,  5,  5,  5, -5,-10,
        -10, -5,  5, 20, 20,  5, -5,-10,
        -10, -5,  5, 20, 20,  5, -5,-10,
        -10, -5,  5,  5,  5,  5, -5,-10,
        -10, -5, -5, -5, -5, -5, -5,-10,
        -10,-10,-10,-10,-10,-10,-10,-10,
    ],
];

pub const KING_PST_WHITE_OPENING: usize = 0;
pub const KING_PST_BLACK_OPENING: usize = 1;
pub const KING_PST_WHITE_ENDGAME: usize = 2;
pub const KING_PST_BLACK_ENDGAME: usize = 3;
