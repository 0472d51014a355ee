// src/moves/attacks.rs
//! Precomputed attack tables and the hyperbola-quintessence sliding-piece
//! formula (`spec.md` §4.2).
//!
//! Every table here is built from `Square::file()`/`Square::rank()`
//! deltas rather than hand-written hex literals, since the crate's bit
//! orientation (`square.rs`) is mirrored from the conventional a1=bit0
//! layout: a transcribed table for one orientation is simply wrong for
//! the other, and deriving the mirrored constants by hand invites silent
//! transposition errors. Built once behind a `OnceCell`, the same
//! pattern `hash::zobrist` uses for its key table.

use crate::board::Color;
use crate::square::Square;
use once_cell::sync::OnceCell;

/// `(file, rank)` offsets a knight can jump.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[inline]
fn ray_mask(sq: Square, df: i8, dr: i8) -> u64 {
    let mut bb = 0u64;
    let mut f = sq.file() as i8 + df;
    let mut r = sq.rank() as i8 + dr;
    while (1..=8).contains(&f) && (1..=8).contains(&r) {
        bb |= 1u64 << Square::from_file_rank(f as u8, r as u8).index();
        f += df;
        r += dr;
    }
    bb
}

#[inline]
fn leaper_table(deltas: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for i in 0..64u8 {
        let sq = Square::from_index(i);
        let mut bb = 0u64;
        for &(df, dr) in deltas {
            let f = sq.file() as i8 + df;
            let r = sq.rank() as i8 + dr;
            if (1..=8).contains(&f) && (1..=8).contains(&r) {
                bb |= 1u64 << Square::from_file_rank(f as u8, r as u8).index();
            }
        }
        table[i as usize] = bb;
    }
    table
}

#[inline]
fn pawn_attack_table(color: Color) -> [u64; 64] {
    let dr: i8 = if color == Color::White { 1 } else { -1 };
    let mut table = [0u64; 64];
    for i in 0..64u8 {
        let sq = Square::from_index(i);
        let mut bb = 0u64;
        for df in [-1i8, 1i8] {
            let f = sq.file() as i8 + df;
            let r = sq.rank() as i8 + dr;
            if (1..=8).contains(&f) && (1..=8).contains(&r) {
                bb |= 1u64 << Square::from_file_rank(f as u8, r as u8).index();
            }
        }
        table[i as usize] = bb;
    }
    table
}

/// Rook/bishop/queen attacks via hyperbola quintessence, knight/king/pawn
/// attacks via precomputed leaper tables. No magic numbers anywhere:
/// sliding-piece attacks are recomputed per query from the occupancy
/// bitboard, trading the magic approach's O(1) table lookup for a
/// handful of xors and a bit reversal (`spec.md` §4.2).
pub struct AttackTables {
    knight: [u64; 64],
    king: [u64; 64],
    pawn: [[u64; 64]; 2],
    rank_mask: [u64; 64],
    file_mask: [u64; 64],
    /// a1-h8 direction (file and rank increase together).
    diag_a: [u64; 64],
    /// a8-h1 direction (file increases as rank decreases).
    diag_b: [u64; 64],
}

impl AttackTables {
    fn build() -> Self {
        let mut rank_mask = [0u64; 64];
        let mut file_mask = [0u64; 64];
        let mut diag_a = [0u64; 64];
        let mut diag_b = [0u64; 64];

        for i in 0..64u8 {
            let sq = Square::from_index(i);
            rank_mask[i as usize] = ray_mask(sq, 1, 0) | ray_mask(sq, -1, 0);
            file_mask[i as usize] = ray_mask(sq, 0, 1) | ray_mask(sq, 0, -1);
            diag_a[i as usize] = ray_mask(sq, 1, 1) | ray_mask(sq, -1, -1);
            diag_b[i as usize] = ray_mask(sq, 1, -1) | ray_mask(sq, -1, 1);
        }

        AttackTables {
            knight: leaper_table(&KNIGHT_DELTAS),
            king: leaper_table(&KING_DELTAS),
            pawn: [pawn_attack_table(Color::White), pawn_attack_table(Color::Black)],
            rank_mask,
            file_mask,
            diag_a,
            diag_b,
        }
    }

    #[inline(always)]
    pub fn knight_attacks(&self, sq: Square) -> u64 {
        self.knight[sq.index() as usize]
    }

    #[inline(always)]
    pub fn king_attacks(&self, sq: Square) -> u64 {
        self.king[sq.index() as usize]
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, sq: Square, color: Color) -> u64 {
        self.pawn[color as usize][sq.index() as usize]
    }

    #[inline(always)]
    pub fn rook_attacks(&self, sq: Square, occ: u64) -> u64 {
        let i = sq.index() as usize;
        let p = 1u64 << i;
        hq_ray(p, occ, self.rank_mask[i]) | hq_ray(p, occ, self.file_mask[i])
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, sq: Square, occ: u64) -> u64 {
        let i = sq.index() as usize;
        let p = 1u64 << i;
        hq_ray(p, occ, self.diag_a[i]) | hq_ray(p, occ, self.diag_b[i])
    }

    #[inline(always)]
    pub fn queen_attacks(&self, sq: Square, occ: u64) -> u64 {
        self.rook_attacks(sq, occ) | self.bishop_attacks(sq, occ)
    }
}

/// Hyperbola quintessence for a single ray (`spec.md` §4.2):
/// `(((m∧o) − 2p) xor reverse(reverse(m∧o) − 2·reverse(p))) ∧ m`.
#[inline(always)]
fn hq_ray(p: u64, o: u64, m: u64) -> u64 {
    let o_in_ray = o & m;
    let forward = o_in_ray.wrapping_sub(p.wrapping_mul(2));
    let reverse = o_in_ray
        .reverse_bits()
        .wrapping_sub(p.reverse_bits().wrapping_mul(2))
        .reverse_bits();
    (forward ^ reverse) & m
}

pub fn attack_tables() -> &'static AttackTables {
    static TABLES: OnceCell<AttackTables> = OnceCell::new();
    TABLES.get_or_init(AttackTables::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_attacks_center_count() {
        let tables = attack_tables();
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(tables.knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn knight_attacks_corner_count() {
        let tables = attack_tables();
        assert_eq!(tables.knight_attacks(Square::A1).count_ones(), 2);
        assert_eq!(tables.knight_attacks(Square::H1).count_ones(), 2);
    }

    #[test]
    fn king_attacks_corner_count() {
        let tables = attack_tables();
        assert_eq!(tables.king_attacks(Square::A1).count_ones(), 3);
    }

    #[test]
    fn king_attacks_center_count() {
        let tables = attack_tables();
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(tables.king_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn white_pawn_attacks_from_e4() {
        let tables = attack_tables();
        let e4: Square = "e4".parse().unwrap();
        let d5: Square = "d5".parse().unwrap();
        let f5: Square = "f5".parse().unwrap();
        let expected = (1u64 << d5.index()) | (1u64 << f5.index());
        assert_eq!(tables.pawn_attacks(e4, Color::White), expected);
    }

    #[test]
    fn black_pawn_attacks_from_e4() {
        let tables = attack_tables();
        let e4: Square = "e4".parse().unwrap();
        let d3: Square = "d3".parse().unwrap();
        let f3: Square = "f3".parse().unwrap();
        let expected = (1u64 << d3.index()) | (1u64 << f3.index());
        assert_eq!(tables.pawn_attacks(e4, Color::Black), expected);
    }

    #[test]
    fn rook_attacks_d4_empty_board() {
        let tables = attack_tables();
        let d4: Square = "d4".parse().unwrap();
        let d1: Square = "d1".parse().unwrap();
        let attacks = tables.rook_attacks(d4, 0);
        assert_eq!(attacks.count_ones(), 14);
        assert_ne!(attacks & (1u64 << d1.index()), 0);
    }

    #[test]
    fn rook_attacks_stop_at_blocker() {
        let tables = attack_tables();
        let d4: Square = "d4".parse().unwrap();
        let d6: Square = "d6".parse().unwrap();
        let d7: Square = "d7".parse().unwrap();
        let occ = 1u64 << d6.index();
        let attacks = tables.rook_attacks(d4, occ);
        assert_ne!(attacks & (1u64 << d6.index()), 0, "blocker square itself is included");
        assert_eq!(attacks & (1u64 << d7.index()), 0, "square past the blocker is excluded");
    }

    #[test]
    fn bishop_attacks_d4_empty_board() {
        let tables = attack_tables();
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(tables.bishop_attacks(d4, 0).count_ones(), 13);
    }

    #[test]
    fn queen_is_rook_union_bishop() {
        let tables = attack_tables();
        let d4: Square = "d4".parse().unwrap();
        let d6: Square = "d6".parse().unwrap();
        let occ = 1u64 << d6.index();
        let expected = tables.rook_attacks(d4, occ) | tables.bishop_attacks(d4, occ);
        assert_eq!(tables.queen_attacks(d4, occ), expected);
    }
}
