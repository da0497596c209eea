// src/grid.rs

use std::ops::Index;
use std::slice::ChunksExact;

use crate::coords::GridSize;

/// Square `N x N` grid addressed by `(x, z)`.
///
/// Storage is row-major with rows of constant `z`. All access is bounds
/// checked: a point outside the grid panics rather than aliasing into the
/// next row.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    size: GridSize,
}

impl<T> Grid<T> {
    pub fn from_fn(size: GridSize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let dim = size.get();
        let mut data = Vec::with_capacity(size.point_count());
        for z in 0..dim {
            for x in 0..dim {
                data.push(f(x, z));
            }
        }
        Self { data, size }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn dim(&self) -> usize {
        self.size.get()
    }

    pub fn get(&self, x: usize, z: usize) -> Option<&T> {
        let dim = self.dim();
        (x < dim && z < dim).then(|| &self.data[z * dim + x])
    }

    pub(crate) fn set(&mut self, x: usize, z: usize, value: T) {
        let offset = self.offset(x, z);
        self.data[offset] = value;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Rows of constant `z`, each ordered by increasing `x`.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.dim())
    }

    /// Every point as `(x, z, value)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let dim = self.dim();
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (i % dim, i / dim, value))
    }

    fn offset(&self, x: usize, z: usize) -> usize {
        let dim = self.dim();
        assert!(
            x < dim && z < dim,
            "grid point ({x}, {z}) is outside the {} grid",
            self.size
        );
        z * dim + x
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(size: GridSize, value: T) -> Self {
        Self {
            data: vec![value; size.point_count()],
            size,
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, z): (usize, usize)) -> &T {
        &self.data[self.offset(x, z)]
    }
}
