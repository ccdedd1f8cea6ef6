//! Matrix dimension pair and its read-only view.

use crate::matrix::MatrixLike;
use crate::{MatrixError, Result};
use std::fmt;

/// The dimensions of a matrix: a (rows, columns) pair.
///
/// Shapes are plain immutable values. The total element count of a matrix
/// is always `nrows * ncols`, so a shape with either dimension 0 describes
/// a valid empty matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    nrows: usize,
    ncols: usize,
}

impl Shape {
    /// Create a shape from a row and column count.
    #[inline]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// The first dimension of the shape.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// The second dimension of the shape.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The product of the shape's dimensions.
    #[inline]
    pub fn size(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Returns the dimension at `index`: 0 is rows, 1 is columns.
    ///
    /// Negative indices wrap from the end, so -1 is columns and -2 is rows.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: isize) -> Result<usize> {
        let wrapped = if index < 0 { index + 2 } else { index };
        match wrapped {
            0 => Ok(self.nrows),
            1 => Ok(self.ncols),
            _ => Err(MatrixError::IndexOutOfRange { index, len: 2 }),
        }
    }

    /// Returns true if either dimension equals `value`.
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        self.nrows == value || self.ncols == value
    }

    /// The shape with its dimensions swapped.
    #[inline]
    pub fn reversed(&self) -> Shape {
        Shape::new(self.ncols, self.nrows)
    }

    /// Iterate the dimensions in (rows, columns) order.
    ///
    /// The iterator is double-ended, so `.rev()` yields (columns, rows).
    #[inline]
    pub fn iter(&self) -> ShapeDims {
        ShapeDims {
            dims: [self.nrows, self.ncols],
            front: 0,
            back: 2,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.nrows, self.ncols)
    }
}

impl From<(usize, usize)> for Shape {
    #[inline]
    fn from((nrows, ncols): (usize, usize)) -> Self {
        Shape::new(nrows, ncols)
    }
}

impl IntoIterator for Shape {
    type Item = usize;
    type IntoIter = ShapeDims;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the two dimensions of a [`Shape`].
#[derive(Debug, Clone)]
pub struct ShapeDims {
    dims: [usize; 2],
    front: usize,
    back: usize,
}

impl Iterator for ShapeDims {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        let value = self.dims[self.front];
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ShapeDims {
    fn next_back(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.dims[self.back])
    }
}

impl ExactSizeIterator for ShapeDims {}

/// A read-only view of a matrix's shape.
///
/// The view holds a back-reference to its owner and re-queries the owner's
/// shape on every access — it caches nothing, so it always mirrors the
/// owner's current dimensions.
#[derive(Debug)]
pub struct ShapeView<'a, M: ?Sized> {
    target: &'a M,
}

impl<'a, M: MatrixLike + ?Sized> ShapeView<'a, M> {
    pub(crate) fn new(target: &'a M) -> Self {
        Self { target }
    }

    /// The owner's current shape as a value.
    #[inline]
    pub fn to_shape(&self) -> Shape {
        self.target.shape()
    }

    /// The first dimension of the owner's shape.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.to_shape().nrows()
    }

    /// The second dimension of the owner's shape.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.to_shape().ncols()
    }

    /// The product of the owner's dimensions.
    #[inline]
    pub fn size(&self) -> usize {
        self.to_shape().size()
    }

    /// Positional dimension access, as [`Shape::get`].
    pub fn get(&self, index: isize) -> Result<usize> {
        self.to_shape().get(index)
    }

    /// Returns true if either dimension equals `value`.
    pub fn contains(&self, value: usize) -> bool {
        self.to_shape().contains(value)
    }

    /// Iterate the dimensions in (rows, columns) order.
    pub fn iter(&self) -> ShapeDims {
        self.to_shape().iter()
    }
}

impl<M: MatrixLike + ?Sized> Clone for ShapeView<'_, M> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
        }
    }
}

impl<M: MatrixLike + ?Sized> Copy for ShapeView<'_, M> {}

impl<M: MatrixLike + ?Sized> PartialEq<Shape> for ShapeView<'_, M> {
    fn eq(&self, other: &Shape) -> bool {
        self.to_shape() == *other
    }
}

impl<M: MatrixLike + ?Sized, N: MatrixLike + ?Sized> PartialEq<ShapeView<'_, N>>
    for ShapeView<'_, M>
{
    fn eq(&self, other: &ShapeView<'_, N>) -> bool {
        self.to_shape() == other.to_shape()
    }
}

impl<M: MatrixLike + ?Sized> fmt::Display for ShapeView<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_shape().fmt(f)
    }
}
