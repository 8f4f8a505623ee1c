use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::solver::Solution;

/// Prints the initial board followed by every move and the board it produced.
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    initial: &'a Board,
    solution: &'a Solution,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial: &'a Board, solution: &'a Solution) -> Self {
        Self { initial, solution }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial:")?;
        writeln!(f, "{}", self.initial)?;
        for (i, (mov, board)) in self
            .solution
            .moves
            .iter()
            .zip(&self.solution.path)
            .enumerate()
        {
            writeln!(f, "Move {}: {}", i + 1, mov)?;
            writeln!(f, "{}", board)?;
        }
        writeln!(f, "Moves: {}", self.solution.moves.move_cnt())?;
        write!(
            f,
            "Swaps: {}",
            self.solution
                .moves
                .swap_cnt(self.initial.rows(), self.initial.cols())
        )
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
