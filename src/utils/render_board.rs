//! Terminal-oriented ANSI board renderer.
//!
//! Paints each square with a light or dark background and draws its occupant
//! either as an ASCII letter or as a Unicode chess glyph. Dark's back rank is
//! drawn at the top, matching the grid's storage order.

use std::io::Write;

use crate::chess_errors::ChessErrors;
use crate::game_state::{board::Board, chess_types::*};

/// Restores default terminal styling.
pub const RESET: &str = "\x1b[0m";
/// De-emphasizes the rank and file labels.
pub const DIM: &str = "\x1b[2m";

const FILE_LABELS: &str = "ABCDEFGH";

/// Strategy turning one square into a colored text cell.
pub type SquareRenderer = fn(Occupant, Color) -> String;

/// ASCII cell: the side-cased piece letter, or a space for an empty square.
pub fn square_ascii(occupant: Occupant, square_color: Color) -> String {
    let ch = match occupant {
        Some((side, kind)) => kind.ascii_glyph(side),
        None => ' ',
    };
    format!("{}{}", square_color.square_ansi(), ch)
}

/// Unicode cell. A piece standing on a square of its own color is drawn with
/// the outline glyph, otherwise with the solid glyph.
pub fn square_unicode(occupant: Occupant, square_color: Color) -> String {
    let ch = match occupant {
        Some((side, kind)) if side == square_color => kind.outline(),
        Some((_, kind)) => kind.solid(),
        None => ' ',
    };
    format!("{}{}", square_color.square_ansi(), ch)
}

/// Render `board` into display lines: eight rank lines, then the file footer.
///
/// The square color flips after every file and once more after every rank.
/// Eight flips per rank return to the starting shade, so the extra flip makes
/// each rank start on the opposite shade of the rank above: a8 is light and
/// a1 is dark.
pub fn render_board<F>(board: &Board, render_square: F) -> Vec<String>
where
    F: Fn(Occupant, Color) -> String,
{
    let mut lines = Vec::with_capacity(board.ranks().len() + 1);
    let mut square_color = Color::Light;

    for (rank_index, rank) in board.ranks().iter().enumerate() {
        let mut line = String::new();
        for &occupant in rank {
            line.push_str(&render_square(occupant, square_color));
            square_color = square_color.opposite();
        }
        square_color = square_color.opposite();

        let label = board.ranks().len() - rank_index;
        line.push_str(&format!("{RESET} {DIM}{label}{RESET}"));
        lines.push(line);
    }

    lines.push(format!("{DIM}{FILE_LABELS}{RESET}"));
    lines
}

/// Render `board` as one string with every line newline-terminated.
pub fn render_board_string<F>(board: &Board, render_square: F) -> String
where
    F: Fn(Occupant, Color) -> String,
{
    let mut out = String::new();
    for line in render_board(board, render_square) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Stream the rendered lines of `board` to `out`.
pub fn write_board<W, F>(out: &mut W, board: &Board, render_square: F) -> Result<(), ChessErrors>
where
    W: Write,
    F: Fn(Occupant, Color) -> String,
{
    for line in render_board(board, render_square) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// The program's full output: the starting position in ASCII and then in
/// Unicode, each preceded by a blank line.
pub fn write_demo<W: Write>(out: &mut W) -> Result<(), ChessErrors> {
    let board = Board::initial_position();
    let strategies: [SquareRenderer; 2] = [square_ascii, square_unicode];
    for render_square in strategies {
        writeln!(out)?;
        write_board(out, &board, render_square)?;
    }
    out.flush()?;
    Ok(())
}
