use std::ops::{Index, IndexMut};

/// Square matrix with a dimension fixed at construction.
///
/// Stored flattened row-major for cache locality; rows are contiguous slices.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![T::default(); dim * dim],
        }
    }
}

impl<T> Matrix<T> {
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline(always)]
    fn offset(&self, u: usize, v: usize) -> usize {
        debug_assert!(u < self.dim && v < self.dim, "({u}, {v}) out of {}", self.dim);
        u * self.dim + v
    }

    #[inline(always)]
    pub fn row(&self, u: usize) -> &[T] {
        &self.cells[u * self.dim..(u + 1) * self.dim]
    }
}

impl<T: Copy> Matrix<T> {
    #[inline(always)]
    pub fn get(&self, u: usize, v: usize) -> T {
        self.cells[self.offset(u, v)]
    }

    #[inline(always)]
    pub fn set(&mut self, u: usize, v: usize, value: T) {
        let idx = self.offset(u, v);
        self.cells[idx] = value;
    }

    /// Writes both `(u, v)` and `(v, u)`.
    #[inline(always)]
    pub fn set_symmetric(&mut self, u: usize, v: usize, value: T) {
        self.set(u, v, value);
        self.set(v, u, value);
    }

    pub fn map<R>(&self, f: impl Fn(T) -> R) -> Matrix<R> {
        Matrix {
            dim: self.dim,
            cells: self.cells.iter().map(|&cell| f(cell)).collect(),
        }
    }
}

impl<T: Copy + PartialEq> Matrix<T> {
    pub fn is_symmetric(&self) -> bool {
        (0..self.dim).all(|u| (u + 1..self.dim).all(|v| self.get(u, v) == self.get(v, u)))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (u, v): (usize, usize)) -> &T {
        &self.cells[self.offset(u, v)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (u, v): (usize, usize)) -> &mut T {
        let idx = self.offset(u, v);
        &mut self.cells[idx]
    }
}
