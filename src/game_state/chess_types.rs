//! Shared scalar types for the board model.
//!
//! `Color` doubles as a piece's side and a square's shade; `Occupant` is the
//! content of one square.

use crate::game_state::piece_catalog::PieceKind;

/// Light background with dark bold foreground.
pub const BLACK_ON_WHITE: &str = "\x1b[1;30;47m";
/// Dark background with light bold foreground.
pub const WHITE_ON_BLACK: &str = "\x1b[1;37;40m";

/// Side of a piece, or shade of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Escape sequence painting a square of this shade.
    #[inline]
    pub const fn square_ansi(self) -> &'static str {
        match self {
            Color::Light => BLACK_ON_WHITE,
            Color::Dark => WHITE_ON_BLACK,
        }
    }
}

/// A piece of one side, referencing its catalog entry.
pub type ColoredPiece = (Color, &'static PieceKind);

/// Content of a single square. `None` is an empty square.
pub type Occupant = Option<ColoredPiece>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite(), Color::Light);
        for color in Color::ALL {
            assert_eq!(color.opposite().opposite(), color);
            assert_ne!(color.opposite(), color);
        }
    }

    #[test]
    fn square_sequences_are_fixed() {
        assert_eq!(Color::Light.square_ansi(), "\x1b[1;30;47m");
        assert_eq!(Color::Dark.square_ansi(), "\x1b[1;37;40m");
    }
}
