//! The matrix capability contract.
//!
//! [`MatrixLike`] is the trait every matrix representation implements:
//! owning storage ([`FrozenMatrix`](crate::FrozenMatrix),
//! [`DenseMatrix`](crate::DenseMatrix)) and the non-owning
//! [`TransposeView`](crate::TransposeView). Implementors supply only the
//! shape and a row-major flat accessor; everything else — bounds-checked
//! indexing, sub-matrix selection, iteration, comparisons, the named
//! elementwise operations, row/column slicing, transposition — is derived
//! from those two, so a view behaves identically to a materialized matrix.

use crate::element::{Conjugate, Truthy};
use crate::frozen::FrozenMatrix;
use crate::index::{AxisKey, MatrixIndex};
use crate::map::matrix_map;
use crate::order::{matrix_eq, matrix_order};
use crate::rule::Rule;
use crate::shape::{Shape, ShapeView};
use crate::view::TransposeView;
use crate::{MatrixError, Result};
use std::cmp::Ordering;

/// Wrap a possibly negative index into `0..len`, or fail.
pub(crate) fn wrap_index(index: isize, len: usize) -> Result<usize> {
    let wrapped = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if wrapped < 0 || wrapped >= len as isize {
        return Err(MatrixError::IndexOutOfRange { index, len });
    }
    Ok(wrapped as usize)
}

/// A two-dimensional grid of elements, logically flattened in row-major
/// order.
///
/// # Implementing
///
/// Only [`shape`](MatrixLike::shape) and [`fetch`](MatrixLike::fetch) are
/// required. `fetch` must expose the elements in row-major order: the
/// element at (row, col) lives at flat offset `row * ncols + col`. Every
/// provided operation is written against those two methods, which is what
/// lets [`TransposeView`] re-derive the whole contract through a single
/// index remap.
pub trait MatrixLike {
    /// The element type of the matrix.
    type Elem: Clone;

    /// The matrix's dimensions.
    fn shape(&self) -> Shape;

    /// The element at flat row-major offset `index`.
    ///
    /// Precondition: `index < self.size()`. Callers are expected to have
    /// validated the offset; implementations may panic otherwise.
    fn fetch(&self, index: usize) -> Self::Elem;

    /// The matrix's number of rows.
    #[inline]
    fn nrows(&self) -> usize {
        self.shape().nrows()
    }

    /// The matrix's number of columns.
    #[inline]
    fn ncols(&self) -> usize {
        self.shape().ncols()
    }

    /// The product of the matrix's number of rows and columns.
    #[inline]
    fn size(&self) -> usize {
        self.shape().size()
    }

    /// Returns true if the matrix has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// A read-only view of the matrix's shape that re-queries it on every
    /// access.
    fn shape_view(&self) -> ShapeView<'_, Self> {
        ShapeView::new(self)
    }

    /// The element at flat row-major offset `index`, with negative
    /// indices wrapping from the end.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfRange`] if the index is out of bounds
    /// after wrapping.
    fn get(&self, index: isize) -> Result<Self::Elem> {
        let position = wrap_index(index, self.size())?;
        Ok(self.fetch(position))
    }

    /// The element at (row, col). Each component wraps independently when
    /// negative.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfRange`] if either component is out of
    /// bounds after wrapping.
    fn get_at(&self, row: isize, col: isize) -> Result<Self::Elem> {
        let shape = self.shape();
        let r = wrap_index(row, shape.nrows())?;
        let c = wrap_index(col, shape.ncols())?;
        Ok(self.fetch(r * shape.ncols() + c))
    }

    /// Key-based access into the flat element space.
    ///
    /// The result type follows the key: an `isize` yields a single
    /// element, a range or [`Span`](crate::Span) yields the selected run
    /// as a matrix of shape (1, k). Empty selections are valid empty
    /// matrices, never errors.
    fn index<K: MatrixIndex<Self>>(&self, key: K) -> Result<K::Output> {
        key.index_into(self)
    }

    /// Rectangular sub-matrix selection.
    ///
    /// Each axis takes an [`AxisKey`]: an integer pins the axis to a
    /// single position (the result keeps that dimension with size 1), a
    /// range selects a run of positions. The result shape is the cross
    /// product of the two selections, and either may be empty.
    fn submatrix<R, C>(&self, rows: R, cols: C) -> Result<FrozenMatrix<Self::Elem>>
    where
        R: AxisKey,
        C: AxisKey,
    {
        let shape = self.shape();
        let rows = rows.resolve(shape.nrows())?;
        let cols = cols.resolve(shape.ncols())?;
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for i in rows.positions() {
            for j in cols.positions() {
                data.push(self.fetch(i * shape.ncols() + j));
            }
        }
        Ok(FrozenMatrix::from_parts(
            data,
            Shape::new(rows.len(), cols.len()),
        ))
    }

    /// Iterate the elements in row-major order.
    ///
    /// The iterator is double-ended, so `.rev()` walks the same elements
    /// in reverse row-major order. Each call starts a fresh traversal.
    fn iter(&self) -> Elements<'_, Self> {
        Elements {
            matrix: self,
            front: 0,
            back: self.size(),
        }
    }

    /// Returns true if any element equals `value`.
    fn contains(&self, value: &Self::Elem) -> bool
    where
        Self::Elem: PartialEq,
    {
        self.iter().any(|x| x == *value)
    }

    /// Whole-matrix equality: true when both shapes and all element pairs
    /// are equal. A shape mismatch is `false`, never an error.
    fn matrix_eq<B>(&self, other: &B) -> bool
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialEq<B::Elem>,
    {
        matrix_eq(self, other)
    }

    /// Lexicographic `a < b` over the row-major element streams.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] if the shapes differ: ordering is
    /// only defined between equal-shaped matrices.
    fn lex_lt<B>(&self, other: &B) -> Result<bool>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        Ok(matrix_order(self, other)? == Ordering::Less)
    }

    /// Lexicographic `a <= b`. See [`lex_lt`](MatrixLike::lex_lt).
    fn lex_le<B>(&self, other: &B) -> Result<bool>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        Ok(matrix_order(self, other)? != Ordering::Greater)
    }

    /// Lexicographic `a > b`. See [`lex_lt`](MatrixLike::lex_lt).
    fn lex_gt<B>(&self, other: &B) -> Result<bool>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        Ok(matrix_order(self, other)? == Ordering::Greater)
    }

    /// Lexicographic `a >= b`. See [`lex_lt`](MatrixLike::lex_lt).
    fn lex_ge<B>(&self, other: &B) -> Result<bool>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        Ok(matrix_order(self, other)? != Ordering::Less)
    }

    /// Elementwise `a == b`.
    fn equal<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialEq<B::Elem>,
    {
        let data = matrix_map(|x, y| x == y, self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise `a != b`.
    fn not_equal<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialEq<B::Elem>,
    {
        let data = matrix_map(|x, y| x != y, self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise `a < b`.
    fn lesser<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        let data = matrix_map(|x, y| x < y, self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise `a <= b`.
    fn lesser_equal<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        let data = matrix_map(|x, y| x <= y, self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise `a > b`.
    fn greater<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        let data = matrix_map(|x, y| x > y, self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise `a >= b`.
    fn greater_equal<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: PartialOrd<B::Elem>,
    {
        let data = matrix_map(|x, y| x >= y, self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise truthiness conjunction.
    fn logical_and<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: Truthy,
        B::Elem: Truthy,
    {
        let data = matrix_map(|x, y| x.is_truthy() && y.is_truthy(), self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise truthiness disjunction.
    fn logical_or<B>(&self, other: &B) -> Result<FrozenMatrix<bool>>
    where
        B: MatrixLike + ?Sized,
        Self::Elem: Truthy,
        B::Elem: Truthy,
    {
        let data = matrix_map(|x, y| x.is_truthy() || y.is_truthy(), self, other)?.collect();
        Ok(FrozenMatrix::from_parts(data, self.shape()))
    }

    /// Elementwise truthiness negation.
    fn logical_not(&self) -> FrozenMatrix<bool>
    where
        Self::Elem: Truthy,
    {
        let data = self.iter().map(|x| !x.is_truthy()).collect();
        FrozenMatrix::from_parts(data, self.shape())
    }

    /// Elementwise complex conjugation.
    fn conjugate(&self) -> FrozenMatrix<Self::Elem>
    where
        Self::Elem: Conjugate,
    {
        let data = self.iter().map(Conjugate::conjugate).collect();
        FrozenMatrix::from_parts(data, self.shape())
    }

    /// Iterate copies of each row (`by = Row`) or column (`by = Col`).
    ///
    /// Row slices have shape (1, ncols), column slices (nrows, 1), each
    /// preserving the source's element order. The sequence is lazy and
    /// single-pass; each call starts a fresh traversal.
    fn slices(&self, by: Rule) -> Slices<'_, Self> {
        let total = match by {
            Rule::Row => self.nrows(),
            Rule::Col => self.ncols(),
        };
        Slices {
            matrix: self,
            by,
            next: 0,
            total,
        }
    }

    /// Iterate copies of each row. Shorthand for `slices(Rule::Row)`.
    fn rows(&self) -> Slices<'_, Self> {
        self.slices(Rule::Row)
    }

    /// Iterate copies of each column. Shorthand for `slices(Rule::Col)`.
    fn columns(&self) -> Slices<'_, Self> {
        self.slices(Rule::Col)
    }

    /// A zero-copy view of this matrix with rows and columns swapped.
    fn transpose(&self) -> TransposeView<'_, Self> {
        TransposeView::new(self)
    }

    /// Materialize this matrix into owning immutable storage.
    fn to_frozen(&self) -> FrozenMatrix<Self::Elem> {
        FrozenMatrix::from_parts(self.iter().collect(), self.shape())
    }
}

/// Row-major element iterator over any [`MatrixLike`].
///
/// Produced by [`MatrixLike::iter`]; double-ended and exact-sized.
#[derive(Debug)]
pub struct Elements<'a, M: ?Sized> {
    matrix: &'a M,
    front: usize,
    back: usize,
}

impl<M: MatrixLike + ?Sized> Iterator for Elements<'_, M> {
    type Item = M::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.matrix.fetch(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<M: MatrixLike + ?Sized> DoubleEndedIterator for Elements<'_, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.matrix.fetch(self.back))
    }
}

impl<M: MatrixLike + ?Sized> ExactSizeIterator for Elements<'_, M> {}

/// Lazy sequence of row or column copies of a matrix.
///
/// Produced by [`MatrixLike::slices`].
#[derive(Debug)]
pub struct Slices<'a, M: ?Sized> {
    matrix: &'a M,
    by: Rule,
    next: usize,
    total: usize,
}

impl<M: MatrixLike + ?Sized> Iterator for Slices<'_, M> {
    type Item = FrozenMatrix<M::Elem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.total {
            return None;
        }
        let shape = self.matrix.shape();
        let ncols = shape.ncols();
        let slice = match self.by {
            Rule::Row => {
                let i = self.next;
                let data = (0..ncols).map(|j| self.matrix.fetch(i * ncols + j)).collect();
                FrozenMatrix::from_parts(data, Shape::new(1, ncols))
            }
            Rule::Col => {
                let j = self.next;
                let data = (0..shape.nrows())
                    .map(|i| self.matrix.fetch(i * ncols + j))
                    .collect();
                FrozenMatrix::from_parts(data, Shape::new(shape.nrows(), 1))
            }
        };
        self.next += 1;
        Some(slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl<M: MatrixLike + ?Sized> ExactSizeIterator for Slices<'_, M> {}
