use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::{Pos, DIRECTIONS};

/// Compound neighbor swap: the item at `pos` is swapped with the cell above, then below,
/// then left, then right, skipping neighbors outside the board. Every swap acts on whatever
/// item sits at `pos` after the previous one, so one move performs up to 4 swaps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
}

impl Move {
    pub fn new(pos: Pos) -> Self {
        Move { pos }
    }

    /// Applies the move to a copy, the original board stays intact.
    pub fn apply(self, board: &Board) -> Board {
        let mut new_board = board.clone();
        for &dir in &DIRECTIONS {
            if let Some(neighbor) = self.pos.neighbor(dir, board.rows(), board.cols()) {
                new_board.swap(self.pos, neighbor);
            }
        }
        new_board
    }

    /// Number of elementary swaps the move performs on a board of this size.
    pub fn swap_cnt(self, rows: u8, cols: u8) -> usize {
        DIRECTIONS
            .iter()
            .filter(|&&dir| self.pos.neighbor(dir, rows, cols).is_some())
            .count()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pos)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn swap_cnt(&self, rows: u8, cols: u8) -> usize {
        self.0.iter().map(|m| m.swap_cnt(rows, cols)).sum()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
