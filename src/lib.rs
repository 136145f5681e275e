//! Crate root module declarations for the Plum Board terminal renderer.
//!
//! This file exposes the board model (colors, piece catalog, grid), the
//! square and board renderers, and the shared error type so the binary,
//! tests, and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod piece_catalog;
}

pub mod utils {
    pub mod render_board;
}
