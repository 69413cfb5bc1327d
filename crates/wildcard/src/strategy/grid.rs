use std::ops::{Index, IndexMut};

/// A dense two-dimensional arena addressed by `(row, column)`.
pub(super) struct Grid<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}
