//! Catalog of the six piece kinds.
//!
//! Each kind is a single `static` record; squares hold `&'static PieceKind`
//! references into this catalog rather than their own copies.

use crate::game_state::chess_types::Color;

/// Immutable description of one piece kind.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PieceKind {
    name: &'static str,
    letter: char,
    solid: char,
    outline: char,
}

pub static PAWN: PieceKind = PieceKind::new("pawn", 'p', '\u{265F}', '\u{2659}');
pub static ROOK: PieceKind = PieceKind::new("rook", 'r', '\u{265C}', '\u{2656}');
pub static KNIGHT: PieceKind = PieceKind::new("knight", 'n', '\u{265E}', '\u{2658}');
pub static BISHOP: PieceKind = PieceKind::new("bishop", 'b', '\u{265D}', '\u{2657}');
pub static QUEEN: PieceKind = PieceKind::new("queen", 'q', '\u{265B}', '\u{2655}');
pub static KING: PieceKind = PieceKind::new("king", 'k', '\u{265A}', '\u{2654}');

/// Every catalog entry, pawn first.
pub static ALL_KINDS: [&PieceKind; 6] = [&PAWN, &ROOK, &KNIGHT, &BISHOP, &QUEEN, &KING];

impl PieceKind {
    const fn new(name: &'static str, letter: char, solid: char, outline: char) -> Self {
        Self {
            name,
            letter,
            solid,
            outline,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical lowercase letter.
    #[inline]
    pub const fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    pub const fn solid(&self) -> char {
        self.solid
    }

    #[inline]
    pub const fn outline(&self) -> char {
        self.outline
    }

    /// Letter for `side`: upper case for Light, lower case for Dark.
    #[inline]
    pub const fn ascii_glyph(&self, side: Color) -> char {
        match side {
            Color::Light => self.letter.to_ascii_uppercase(),
            Color::Dark => self.letter,
        }
    }
}
