//! Owning, mutable, row-major matrix storage.

use crate::frozen::FrozenMatrix;
use crate::matrix::{wrap_index, MatrixLike};
use crate::order::matrix_order;
use crate::shape::Shape;
use crate::{MatrixError, Result};
use std::cmp::Ordering;

/// A mutable matrix owning its elements in row-major order.
///
/// The shape is fixed at construction; only element values can change.
/// Views taken from a dense matrix borrow it immutably, so the borrow
/// checker rules out mutation while a view is alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T> DenseMatrix<T> {
    /// Create a matrix from row-major data and a shape.
    ///
    /// # Errors
    /// [`MatrixError::SizeMismatch`] if `data.len() != shape.size()`.
    pub fn new(data: Vec<T>, shape: Shape) -> Result<Self> {
        if data.len() != shape.size() {
            return Err(MatrixError::SizeMismatch {
                size: data.len(),
                shape,
            });
        }
        Ok(Self { data, shape })
    }

    pub(crate) fn from_parts(data: Vec<T>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        Self { data, shape }
    }

    /// Create a matrix with every element set to `value`.
    pub fn fill(shape: Shape, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_parts(vec![value; shape.size()], shape)
    }

    /// Create a matrix by evaluating `f` at every (row, col) coordinate.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.size());
        for i in 0..shape.nrows() {
            for j in 0..shape.ncols() {
                data.push(f(i, j));
            }
        }
        Self::from_parts(data, shape)
    }

    /// The elements as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable flat row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Overwrite the element at (row, col). Negative components wrap.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfRange`] if either component is out of
    /// bounds after wrapping.
    pub fn set(&mut self, row: isize, col: isize, value: T) -> Result<()> {
        let offset = self.offset_of(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Mutable access to the element at (row, col).
    pub fn get_mut(&mut self, row: isize, col: isize) -> Result<&mut T> {
        let offset = self.offset_of(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Exchange the elements at two (row, col) coordinates.
    pub fn swap(&mut self, a: (isize, isize), b: (isize, isize)) -> Result<()> {
        let i = self.offset_of(a.0, a.1)?;
        let j = self.offset_of(b.0, b.1)?;
        self.data.swap(i, j);
        Ok(())
    }

    /// Convert into an immutable matrix with the same elements and shape.
    pub fn freeze(self) -> FrozenMatrix<T> {
        FrozenMatrix::from_parts(self.data, self.shape)
    }

    /// Consume the matrix and return its row-major elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset_of(&self, row: isize, col: isize) -> Result<usize> {
        let r = wrap_index(row, self.shape.nrows())?;
        let c = wrap_index(col, self.shape.ncols())?;
        Ok(r * self.shape.ncols() + c)
    }
}

impl<T: Clone> MatrixLike for DenseMatrix<T> {
    type Elem = T;

    #[inline]
    fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    fn fetch(&self, index: usize) -> T {
        self.data[index].clone()
    }
}

/// Shape mismatch yields `None`; the fallible
/// [`matrix_order`](crate::matrix_order) reports it as an error instead.
impl<T: Clone + PartialOrd> PartialOrd for DenseMatrix<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        matrix_order(self, other).ok()
    }
}
