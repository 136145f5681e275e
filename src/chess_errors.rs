//! Errors used throughout the board renderer.
//!
//! `ChessErrors` is the single error type of the crate. The fixed-size board
//! grid makes a malformed board unrepresentable, so errors only arise at the
//! edges: converting a dynamically sized grid into a `Board`, looking up a
//! square by index, and writing rendered lines to an output sink.

use std::fmt;

/// Unified error type for the board renderer.
///
/// Shape variants are recoverable input errors suitable for showing to the
/// caller. `OutputFailed` wraps the message of the underlying I/O error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A grid handed to `Board::from_ranks` did not hold exactly eight ranks.
    ///
    /// Payload: the number of ranks found.
    InvalidRankCount(usize),

    /// A rank did not hold exactly eight files.
    ///
    /// Payload: (rank_index, file_count) zero-based.
    InvalidFileCount((usize, usize)),

    /// A square lookup used a file or rank index outside 0..=7.
    ///
    /// Payload: (file_index, rank_index) zero-based.
    InvalidFileOrRank((usize, usize)),

    /// Writing rendered lines to the output sink failed.
    ///
    /// Payload: the I/O error message.
    OutputFailed(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidRankCount(ranks) => {
                write!(f, "board must have 8 ranks, found {ranks}")
            }
            ChessErrors::InvalidFileCount((rank, files)) => {
                write!(f, "rank {rank} must have 8 files, found {files}")
            }
            ChessErrors::InvalidFileOrRank((file, rank)) => {
                write!(f, "square (file {file}, rank {rank}) is off the board")
            }
            ChessErrors::OutputFailed(msg) => write!(f, "failed to write board: {msg}"),
        }
    }
}

impl std::error::Error for ChessErrors {}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::OutputFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;

    #[test]
    fn io_errors_convert_to_output_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ChessErrors = io.into();
        assert_eq!(err, ChessErrors::OutputFailed("pipe closed".to_owned()));
    }

    #[test]
    fn display_names_the_offending_shape() {
        assert_eq!(
            ChessErrors::InvalidRankCount(7).to_string(),
            "board must have 8 ranks, found 7"
        );
        assert_eq!(
            ChessErrors::InvalidFileCount((3, 9)).to_string(),
            "rank 3 must have 8 files, found 9"
        );
        assert_eq!(
            ChessErrors::InvalidFileOrRank((8, 2)).to_string(),
            "square (file 8, rank 2) is off the board"
        );
    }
}
