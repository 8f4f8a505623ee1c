use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Shape;
use crate::data::{Category, Item, Pos, MAX_SIZE};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    EmptyShape,
    TooLarge,
    NoCategories,
    EmptyRows,
    RaggedRows(usize),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::EmptyShape => write!(f, "Board needs at least one row and one column"),
            BoardErr::TooLarge => write!(f, "Board larger than {} rows/columns", MAX_SIZE),
            BoardErr::NoCategories => write!(f, "No item categories to choose from"),
            BoardErr::EmptyRows => write!(f, "No rows or empty first row"),
            BoardErr::RaggedRows(r) => write!(f, "Row {} has a different length than row 0", r),
        }
    }
}

impl Error for BoardErr {}

/// Grid of items. Equal boards have equal items at equal positions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Vec2d<Item>,
}

impl Board {
    /// Every category is picked uniformly and every size uniformly from `1..=cols`,
    /// so sizes can repeat within a column.
    pub fn random<R: Rng>(
        categories: &[Category],
        shape: Shape,
        rng: &mut R,
    ) -> Result<Board, BoardErr> {
        if shape.rows == 0 || shape.cols == 0 {
            return Err(BoardErr::EmptyShape);
        }
        if shape.rows > MAX_SIZE || shape.cols > MAX_SIZE {
            return Err(BoardErr::TooLarge);
        }
        if categories.is_empty() {
            return Err(BoardErr::NoCategories);
        }

        let max_size = shape.cols as u8;
        let mut rows = Vec::with_capacity(shape.rows);
        for _ in 0..shape.rows {
            let mut row = Vec::with_capacity(shape.cols);
            for _ in 0..shape.cols {
                // categories is not empty so choose always picks one
                let category = *categories.choose(rng).ok_or(BoardErr::NoCategories)?;
                let size = rng.gen_range(1..=max_size);
                row.push(Item { category, size });
            }
            rows.push(row);
        }
        Ok(Board {
            grid: Vec2d::new(rows),
        })
    }

    pub fn from_rows(rows: Vec<Vec<Item>>) -> Result<Board, BoardErr> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(BoardErr::EmptyRows);
        }
        if rows.len() > MAX_SIZE || rows[0].len() > MAX_SIZE {
            return Err(BoardErr::TooLarge);
        }
        if let Some(r) = rows.iter().position(|row| row.len() != rows[0].len()) {
            return Err(BoardErr::RaggedRows(r));
        }
        Ok(Board {
            grid: Vec2d::new(rows),
        })
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows().into(), self.cols().into())
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        self.grid.positions()
    }

    /// Every column is non-decreasing by size from top to bottom.
    pub fn is_sorted(&self) -> bool {
        for c in 0..self.cols() {
            for r in 1..self.rows() {
                if self.grid[Pos::new(r, c)].size < self.grid[Pos::new(r - 1, c)].size {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        self.grid.swap(a, b);
    }
}

impl Index<Pos> for Board {
    type Output = Item;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let separator_len = 8 * usize::from(self.cols()) - 2;
        for r in 0..self.rows() {
            for (i, item) in self.grid.row(r).iter().enumerate() {
                if i > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{}", item)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", "-".repeat(separator_len))?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn column_board(columns: &[&[u8]]) -> Board {
        let rows = columns[0].len();
        let rows = (0..rows)
            .map(|r| columns.iter().map(|col| Item::new('a', col[r])).collect())
            .collect();
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn sorted_columns() {
        assert!(column_board(&[&[1, 2, 3], &[1, 1, 1], &[2, 5, 9]]).is_sorted());
        assert!(column_board(&[&[7]]).is_sorted());
        // rows don't matter
        assert!(column_board(&[&[5, 6], &[1, 2]]).is_sorted());
    }

    #[test]
    fn single_inverted_pair() {
        assert!(!column_board(&[&[1, 2, 3], &[1, 1, 1], &[2, 9, 5]]).is_sorted());
        assert!(!column_board(&[&[2, 1], &[1, 1]]).is_sorted());
    }

    #[test]
    fn random_boards() {
        let categories = [Category('a'), Category('o'), Category('b')];
        let mut rng = SmallRng::seed_from_u64(514_514);
        let board = Board::random(&categories, Shape::default(), &mut rng).unwrap();

        assert_eq!(board.shape(), Shape::new(3, 10));
        for pos in board.positions() {
            let item = board[pos];
            assert!(item.size >= 1 && item.size <= 10);
            assert!(categories.contains(&item.category));
        }

        let mut rng = SmallRng::seed_from_u64(514_514);
        let same = Board::random(&categories, Shape::default(), &mut rng).unwrap();
        assert_eq!(board, same);
    }

    #[test]
    fn invalid_construction() {
        let mut rng = SmallRng::seed_from_u64(0);
        let categories = [Category('a')];
        assert_eq!(
            Board::random(&categories, Shape::new(0, 3), &mut rng).unwrap_err(),
            BoardErr::EmptyShape
        );
        assert_eq!(
            Board::random(&categories, Shape::new(3, 0), &mut rng).unwrap_err(),
            BoardErr::EmptyShape
        );
        assert_eq!(
            Board::random(&categories, Shape::new(256, 1), &mut rng).unwrap_err(),
            BoardErr::TooLarge
        );
        assert_eq!(
            Board::random(&[], Shape::new(2, 2), &mut rng).unwrap_err(),
            BoardErr::NoCategories
        );
        assert_eq!(Board::from_rows(vec![]).unwrap_err(), BoardErr::EmptyRows);
        assert_eq!(
            Board::from_rows(vec![vec![Item::new('a', 1)], vec![]]).unwrap_err(),
            BoardErr::RaggedRows(1)
        );
    }

    #[test]
    fn structural_equality() {
        let a = column_board(&[&[2, 1], &[1, 1]]);
        let b = column_board(&[&[2, 1], &[1, 1]]);
        assert_eq!(a, b);

        let mut c = a.clone();
        c.swap(Pos::new(0, 0), Pos::new(1, 0));
        assert_ne!(a, c);
        assert_eq!(a, b);
    }

    #[test]
    fn formatting_board() {
        let board = Board::from_rows(vec![
            vec![Item::new('a', 2), Item::new('b', 1)],
            vec![Item::new('a', 1), Item::new('b', 10)],
        ])
        .unwrap();
        let expected = "\
a: 02 | b: 01
--------------
a: 01 | b: 10
--------------
";
        assert_eq!(board.to_string(), expected);
    }
}
