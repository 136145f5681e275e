//! Fixed 8×8 board model.
//!
//! Rank index 0 is the top row as displayed (Dark's back rank in the starting
//! position) and file index 0 is the left column. The grid is a fixed-size
//! array, so every `Board` is well formed by construction.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::piece_catalog::*;

pub const BOARD_SIZE: usize = 8;

/// Immutable grid of square occupants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_position()
    }
}

impl Board {
    /// Board with every square empty.
    #[inline]
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting arrangement with Dark on ranks 0-1 and Light on ranks 6-7.
    pub fn initial_position() -> Self {
        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        squares[0] = back_rank(Color::Dark);
        squares[1] = pawn_rank(Color::Dark);
        squares[6] = pawn_rank(Color::Light);
        squares[7] = back_rank(Color::Light);
        Self { squares }
    }

    /// Build a board from nested rank vectors, rejecting any grid that is not 8×8.
    pub fn from_ranks(ranks: Vec<Vec<Occupant>>) -> Result<Self, ChessErrors> {
        if ranks.len() != BOARD_SIZE {
            return Err(ChessErrors::InvalidRankCount(ranks.len()));
        }

        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (rank_index, files) in ranks.into_iter().enumerate() {
            squares[rank_index] = files.try_into().map_err(|files: Vec<Occupant>| {
                ChessErrors::InvalidFileCount((rank_index, files.len()))
            })?;
        }
        Ok(Self { squares })
    }

    /// Occupant at (`rank`, `file`), or an error when either index is off the board.
    #[inline]
    pub fn occupant(&self, rank: usize, file: usize) -> Result<Occupant, ChessErrors> {
        self.squares
            .get(rank)
            .and_then(|files| files.get(file))
            .copied()
            .ok_or(ChessErrors::InvalidFileOrRank((file, rank)))
    }

    /// Ranks in top-to-bottom display order.
    #[inline]
    pub fn ranks(&self) -> &[[Occupant; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }
}

fn back_rank(side: Color) -> [Occupant; BOARD_SIZE] {
    let kinds: [&'static PieceKind; BOARD_SIZE] =
        [&ROOK, &KNIGHT, &BISHOP, &QUEEN, &KING, &BISHOP, &KNIGHT, &ROOK];
    kinds.map(|kind| Some((side, kind)))
}

fn pawn_rank(side: Color) -> [Occupant; BOARD_SIZE] {
    [Some((side, &PAWN)); BOARD_SIZE]
}
