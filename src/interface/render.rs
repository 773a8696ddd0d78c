//! Plain-text rendering of positions for the command loop.

use std::fmt::Write;

use crate::board::bitboard::algebraic_from_square;
use crate::board::fen::position_to_fen;
use crate::board::position::Position;
use crate::board::types::{
    Color, PieceKind, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};

fn piece_glyph(color: Color, kind: PieceKind) -> char {
    let c = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

/// Eight ranks top to bottom with file letters underneath.
pub fn position_diagram(position: &Position) -> String {
    let mut out = String::new();
    for rank_index in 0..8u8 {
        let _ = write!(out, "{} ", 8 - rank_index);
        for file in 0..8u8 {
            let square = rank_index * 8 + file;
            let glyph = position
                .piece_on_square(square)
                .map(|(color, kind)| piece_glyph(color, kind))
                .unwrap_or('.');
            let _ = write!(out, " {glyph}");
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// One-line-per-field summary of the scalar state.
pub fn state_summary(position: &Position) -> String {
    let state = position.state();
    let side = match state.side_to_move {
        Color::White => "white",
        Color::Black => "black",
    };

    let mut castling = String::new();
    for (bit, letter) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if state.castling_rights & bit != 0 {
            castling.push(letter);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let en_passant = state
        .en_passant_square
        .map(algebraic_from_square)
        .unwrap_or_else(|| "-".to_string());

    format!(
        "side to move: {side}\n\
         castling:     {castling}\n\
         en passant:   {en_passant}\n\
         halfmove:     {}\n\
         fullmove:     {}\n\
         moves played: {}\n\
         hash:         {:016x}\n\
         fen:          {}\n",
        state.halfmove_clock,
        state.fullmove_number,
        position.ply(),
        state.hash,
        position_to_fen(position)
    )
}
