// src/board/execute.rs
//! `Board::make` / `Board::undo` (`spec.md` §4.1).
//!
//! `make` derives capture, en-passant and promotion from board state at
//! the moment it runs rather than trusting anything encoded in the move
//! word; `undo` uses only the three stacks plus `ep_capture_stack` (see
//! the field comment on `Board::ep_capture_stack`) to exactly invert it.

use super::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use super::{Board, CastleIndex, Color, Piece};
use crate::moves::types::Move;
use crate::square::Square;

/// Rook origin/destination for a castling move, keyed by the king's
/// *destination* square. `None` for anything else.
fn rook_castle_squares(king_to: Square) -> Option<(Square, Square)> {
    if king_to == Square::G1 {
        Some((Square::H1, Square::F1))
    } else if king_to == Square::C1 {
        Some((Square::A1, Square::D1))
    } else if king_to == Square::G8 {
        Some((Square::H8, Square::F8))
    } else if king_to == Square::C8 {
        Some((Square::A8, Square::D8))
    } else {
        None
    }
}

/// Which castling corner (if any) a rook sitting on `sq` belongs to,
/// for `color`'s home row.
fn corner_for_rook_square(color: Color, sq: Square) -> Option<CastleIndex> {
    match (color, sq.file(), sq.rank()) {
        (Color::White, 8, 1) => Some(CASTLE_WK),
        (Color::White, 1, 1) => Some(CASTLE_WQ),
        (Color::Black, 8, 8) => Some(CASTLE_BK),
        (Color::Black, 1, 8) => Some(CASTLE_BQ),
        _ => None,
    }
}

/// Every corner a move's king-move / rook-move / rook-capture touches,
/// shared between `make` (sign `+1`) and `undo` (sign `-1`).
fn castling_corners_touched(
    color: Color,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Piece,
) -> arrayvec::ArrayVec<CastleIndex, 3> {
    let mut out = arrayvec::ArrayVec::new();
    if piece == Piece::King {
        match color {
            Color::White => {
                out.push(CASTLE_WK);
                out.push(CASTLE_WQ);
            }
            Color::Black => {
                out.push(CASTLE_BK);
                out.push(CASTLE_BQ);
            }
        }
    }
    if piece == Piece::Rook
        && let Some(idx) = corner_for_rook_square(color, from)
    {
        out.push(idx);
    }
    if captured == Piece::Rook
        && let Some(idx) = corner_for_rook_square(color.opposite(), to)
    {
        out.push(idx);
    }
    out
}

impl Board {
    fn bump_castling_counters(&mut self, corners: &[CastleIndex], delta: i64) {
        for &idx in corners {
            self.castling_counters[idx] = (self.castling_counters[idx] as i64 + delta) as u32;
        }
    }

    /// `spec.md` §4.1 step-by-step: move the piece, resolve a capture
    /// (ordinary or en-passant), perform the rook hop on castling,
    /// promote on the back rank, update castling counters and the
    /// halfmove clock, then push the three undo stacks and flip side
    /// to move. A move whose origin square is empty (stale or illegal
    /// move word) is a no-op.
    pub fn make(&mut self, mv: Move) {
        let color = self.side_to_move;
        let Some((owner, piece)) = self.piece_at(mv.from()) else {
            debug_assert!(false, "make() called with no piece on the origin square");
            return;
        };
        debug_assert_eq!(owner, color, "origin piece must belong to side to move");

        let from = mv.from();
        let to = mv.to();

        let mut captured_piece = Piece::Null;
        let mut is_en_passant = false;
        if let Some((victim_color, victim_piece)) = self.piece_at(to) {
            debug_assert_eq!(victim_color, color.opposite(), "cannot capture own piece");
            captured_piece = victim_piece;
            self.remove(victim_color, victim_piece, to);
        } else if piece == Piece::Pawn && from.file() != to.file() {
            is_en_passant = true;
            let cap_sq = Square::from_file_rank(to.file(), from.rank());
            captured_piece = Piece::Pawn;
            self.remove(color.opposite(), Piece::Pawn, cap_sq);
        }

        self.remove(color, piece, from);

        let is_promo_rank = (color == Color::White && to.rank() == 8)
            || (color == Color::Black && to.rank() == 1);
        if piece == Piece::Pawn && is_promo_rank {
            let promo = mv.promotion_piece().unwrap_or(Piece::Queen);
            self.place(color, promo, to);
        } else {
            self.place(color, piece, to);
        }

        if mv.is_castling()
            && let Some((rook_from, rook_to)) = rook_castle_squares(to)
        {
            self.remove(color, Piece::Rook, rook_from);
            self.place(color, Piece::Rook, rook_to);
        }

        let corners = castling_corners_touched(color, piece, from, to, captured_piece);
        self.bump_castling_counters(&corners, 1);

        if captured_piece != Piece::Null || piece == Piece::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.move_stack.push(mv);
        self.moved_piece_stack.push(piece);
        self.captured_piece_stack.push(captured_piece);
        self.ep_capture_stack.push(is_en_passant);
        self.side_to_move = color.opposite();
    }

    /// Exact inverse of `make`, driven entirely by the four parallel
    /// stacks (`spec.md` §4.1 "undo semantics"). A no-op on an empty
    /// history.
    pub fn undo(&mut self) {
        let Some(mv) = self.move_stack.pop() else {
            // spec.md §7: underflow undo resets to the start position.
            self.reset();
            return;
        };
        let piece = self
            .moved_piece_stack
            .pop()
            .expect("moved_piece_stack out of sync with move_stack");
        let captured = self
            .captured_piece_stack
            .pop()
            .expect("captured_piece_stack out of sync with move_stack");
        let was_en_passant = self
            .ep_capture_stack
            .pop()
            .expect("ep_capture_stack out of sync with move_stack");

        let color = self.side_to_move.opposite();
        self.side_to_move = color;

        let from = mv.from();
        let to = mv.to();

        if mv.is_castling()
            && let Some((rook_from, rook_to)) = rook_castle_squares(to)
        {
            self.remove(color, Piece::Rook, rook_to);
            self.place(color, Piece::Rook, rook_from);
        }

        let is_promo_rank = (color == Color::White && to.rank() == 8)
            || (color == Color::Black && to.rank() == 1);
        if piece == Piece::Pawn && is_promo_rank {
            let promo = mv.promotion_piece().unwrap_or(Piece::Queen);
            self.remove(color, promo, to);
            self.place(color, Piece::Pawn, from);
        } else {
            self.remove(color, piece, to);
            self.place(color, piece, from);
        }

        if captured != Piece::Null {
            if was_en_passant {
                let cap_sq = Square::from_file_rank(to.file(), from.rank());
                self.place(color.opposite(), Piece::Pawn, cap_sq);
            } else {
                self.place(color.opposite(), captured, to);
            }
        }

        let corners = castling_corners_touched(color, piece, from, to, captured);
        self.bump_castling_counters(&corners, -1);

        self.halfmove_clock = self.recompute_halfmove_clock();
    }

    /// Half-moves since the last pawn move or capture, scanned
    /// backward over the (already-popped) history. `undo` uses this
    /// instead of storing the clock directly, since a reset-causing
    /// move's prior value isn't otherwise recoverable from the three
    /// spec-named stacks.
    fn recompute_halfmove_clock(&self) -> u32 {
        let mut count = 0u32;
        for i in (0..self.move_stack.len()).rev() {
            if self.moved_piece_stack[i] == Piece::Pawn || self.captured_piece_stack[i] != Piece::Null {
                return count;
            }
            count += 1;
        }
        count
    }
}
