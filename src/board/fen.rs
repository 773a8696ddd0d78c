//! FEN parsing and serialization.

use crate::board::bitboard::{algebraic_from_square, square_bb, square_from_algebraic};
use crate::board::position::{Position, State};
use crate::board::types::{
    Bitboard, Color, PieceKind, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::errors::EngineError;

pub const START_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn piece_from_char(c: char) -> Option<(Color, PieceKind)> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, kind))
}

fn piece_to_char(color: Color, kind: PieceKind) -> char {
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

/// Parses a FEN string into a position with a freshly computed hash.
pub fn parse_fen(fen: &str) -> Result<Position, EngineError> {
    let invalid = || EngineError::InvalidFen(fen.to_string());
    let mut fields = fen.split_whitespace();

    let placement = fields.next().ok_or_else(invalid)?;
    let mut pieces: [[Bitboard; 6]; 2] = [[0; 6]; 2];
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid());
    }
    for (rank_index, rank) in ranks.iter().enumerate() {
        let mut file = 0u8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(invalid());
                }
                file += skip as u8;
            } else {
                let (color, kind) = piece_from_char(c).ok_or_else(invalid)?;
                if file >= 8 {
                    return Err(invalid());
                }
                let square = rank_index as u8 * 8 + file;
                pieces[color.index()][kind.index()] |= square_bb(square);
                file += 1;
            }
        }
        if file != 8 {
            return Err(invalid());
        }
    }
    for color in [Color::White, Color::Black] {
        if pieces[color.index()][PieceKind::King.index()].count_ones() != 1 {
            return Err(invalid());
        }
    }

    let side_to_move = match fields.next().ok_or_else(invalid)? {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(invalid()),
    };

    let mut castling_rights = 0;
    let castling_field = fields.next().ok_or_else(invalid)?;
    if castling_field != "-" {
        for c in castling_field.chars() {
            castling_rights |= match c {
                'K' => CASTLE_WHITE_KINGSIDE,
                'Q' => CASTLE_WHITE_QUEENSIDE,
                'k' => CASTLE_BLACK_KINGSIDE,
                'q' => CASTLE_BLACK_QUEENSIDE,
                _ => return Err(invalid()),
            };
        }
    }

    let en_passant_field = fields.next().ok_or_else(invalid)?;
    let en_passant_square = if en_passant_field == "-" {
        None
    } else {
        Some(square_from_algebraic(en_passant_field).ok_or_else(invalid)?)
    };

    // The move clocks are optional; absent clocks mean a fresh game.
    let halfmove_clock = match fields.next() {
        Some(text) => text.parse::<u16>().map_err(|_| invalid())?,
        None => 0,
    };
    let fullmove_number = match fields.next() {
        Some(text) => text.parse::<u16>().map_err(|_| invalid())?,
        None => 1,
    };

    // A king off its home square can never castle again, whatever the
    // rights field claims.
    let king_has_moved = [
        pieces[Color::White.index()][PieceKind::King.index()] != square_bb(60),
        pieces[Color::Black.index()][PieceKind::King.index()] != square_bb(4),
    ];

    Ok(Position::from_parts(
        pieces,
        State {
            hash: 0,
            side_to_move,
            castling_rights,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
            king_has_moved,
        },
    ))
}

/// Serializes the position back to FEN.
pub fn position_to_fen(position: &Position) -> String {
    let mut placement = String::new();
    for rank_index in 0..8u8 {
        let mut empty_run = 0;
        for file in 0..8u8 {
            let square = rank_index * 8 + file;
            match position.piece_on_square(square) {
                Some((color, kind)) => {
                    if empty_run > 0 {
                        placement.push(char::from_digit(empty_run, 10).expect("run is 1..=8"));
                        empty_run = 0;
                    }
                    placement.push(piece_to_char(color, kind));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push(char::from_digit(empty_run, 10).expect("run is 1..=8"));
        }
        if rank_index != 7 {
            placement.push('/');
        }
    }

    let state = position.state();
    let side = match state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
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
        "{placement} {side} {castling} {en_passant} {} {}",
        state.halfmove_clock, state.fullmove_number
    )
}
