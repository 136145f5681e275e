use std::io::{self, BufWriter};

use plum_board::chess_errors::ChessErrors;
use plum_board::utils::render_board::write_demo;

fn main() -> Result<(), ChessErrors> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_demo(&mut out)
}
