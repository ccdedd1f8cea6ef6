//! Owning, immutable, row-major matrix storage.

use crate::dense::DenseMatrix;
use crate::matrix::MatrixLike;
use crate::order::matrix_order;
use crate::shape::Shape;
use crate::{MatrixError, Result};
use std::cmp::Ordering;

/// An immutable matrix owning its elements in row-major order.
///
/// Once constructed, neither the data nor the shape can change, which is
/// what makes shapes safe to hold across the lifetime of views taken from
/// a frozen matrix.
///
/// # Example
/// ```rust
/// use matrixlike::{FrozenMatrix, MatrixLike, Shape};
///
/// let m = FrozenMatrix::new(vec![1, 2, 3, 4, 5, 6], Shape::new(2, 3)).unwrap();
/// assert_eq!(m.get_at(1, 2).unwrap(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrozenMatrix<T> {
    data: Box<[T]>,
    shape: Shape,
}

impl<T> FrozenMatrix<T> {
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
        Ok(Self {
            data: data.into_boxed_slice(),
            shape,
        })
    }

    /// Construct without validating; internal callers guarantee
    /// `data.len() == shape.size()`.
    pub(crate) fn from_parts(data: Vec<T>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        Self {
            data: data.into_boxed_slice(),
            shape,
        }
    }

    /// Create a matrix from a vector of equal-length rows.
    ///
    /// An empty input produces the (0, 0) matrix.
    ///
    /// # Errors
    /// [`MatrixError::RaggedRows`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected: ncols,
                });
            }
            data.extend(row);
        }
        Ok(Self::from_parts(data, Shape::new(nrows, ncols)))
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

    /// Create a matrix with every element set to `value`.
    pub fn fill(shape: Shape, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_parts(vec![value; shape.size()], shape)
    }

    /// Collect exactly `shape.size()` elements from an iterator.
    ///
    /// # Errors
    /// [`MatrixError::SizeMismatch`] if the iterator yields a different
    /// number of elements.
    pub fn from_iter_shaped(iter: impl IntoIterator<Item = T>, shape: Shape) -> Result<Self> {
        let data: Vec<T> = iter.into_iter().collect();
        Self::new(data, shape)
    }

    /// The elements as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Convert into a mutable matrix with the same elements and shape.
    pub fn thaw(self) -> DenseMatrix<T> {
        DenseMatrix::from_parts(self.data.into_vec(), self.shape)
    }
}

impl<T: Clone> MatrixLike for FrozenMatrix<T> {
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
impl<T: Clone + PartialOrd> PartialOrd for FrozenMatrix<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        matrix_order(self, other).ok()
    }
}
