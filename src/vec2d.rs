use std::ops::Index;

use crate::data::Pos;

/// Row-major grid with fixed dimensions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    /// Callers guarantee non-empty, rectangular input with at most 255 rows and cols.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());

        let rows = grid.len();
        let cols = grid[0].len();
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Vec2d {
            data,
            rows: rows as u8,
            cols: cols as u8,
        }
    }

    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn row(&self, r: u8) -> &[T] {
        let start = usize::from(r) * usize::from(self.cols);
        &self.data[start..start + usize::from(self.cols)]
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let a = self.offset(a);
        let b = self.offset(b);
        self.data.swap(a, b);
    }

    fn offset(&self, pos: Pos) -> usize {
        debug_assert!(pos.r < self.rows && pos.c < self.cols);
        usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.offset(index)]
    }
}
