// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;

mod fs;
mod vec2d;

use std::error::Error;

use crate::board::Board;
use crate::config::Limits;
use crate::solver::SolverOk;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

impl LoadBoard for str {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        let board = text.parse()?;
        Ok(board)
    }
}

pub trait Solve {
    fn solve(&self, limits: Limits, print_status: bool) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_boards() {
        let board = "boards/2x2-inverted.txt".load_board().unwrap();
        assert_eq!(board.shape().to_string(), "2x2");
        assert!(!board.is_sorted());

        let solver_ok = board.solve(Limits::unlimited(), false);
        assert!(solver_ok.solution().unwrap().path.last().unwrap().is_sorted());
    }

    #[test]
    fn loading_missing_board() {
        assert!("boards/does-not-exist.txt".load_board().is_err());
    }
}
