//! Zero-copy transposition view.
//!
//! [`TransposeView`] presents a target matrix with its row and column
//! roles swapped without copying any data. Every read goes through a
//! single flat-index remap ([`TransposeView::permute_index`]), so the
//! whole [`MatrixLike`] contract — indexing, iteration, slicing,
//! comparisons, elementwise operations — behaves exactly as it would on a
//! materialized transpose.

use crate::matrix::MatrixLike;
use crate::shape::Shape;

/// A non-owning view of a matrix with rows and columns swapped.
///
/// The view holds only a borrow of its target and caches nothing: the
/// shape is re-derived from the target on every query. For a target of
/// shape (N, M) the view has shape (M, N) and `view[i, j] == target[j, i]`
/// for every valid coordinate.
///
/// Transposing the view again returns the original target reference
/// rather than stacking a second wrapper, so a double transpose is an
/// identity in both value and object terms.
///
/// # Example
/// ```rust
/// use matrixlike::{FrozenMatrix, MatrixLike, Shape};
///
/// let a = FrozenMatrix::new(vec![1, 2, 3, 4, 5, 6], Shape::new(2, 3)).unwrap();
/// let t = a.transpose();
/// assert_eq!(t.shape(), Shape::new(3, 2));
/// assert_eq!(t.get_at(1, 0).unwrap(), 2);
/// assert_eq!(t.iter().collect::<Vec<_>>(), vec![1, 4, 2, 5, 3, 6]);
/// ```
#[derive(Debug)]
pub struct TransposeView<'a, M: ?Sized> {
    target: &'a M,
}

impl<'a, M: MatrixLike + ?Sized> TransposeView<'a, M> {
    /// Wrap a target matrix in a transposed view.
    pub fn new(target: &'a M) -> Self {
        Self { target }
    }

    /// The matrix this view transposes.
    #[inline]
    pub fn target(&self) -> &'a M {
        self.target
    }

    /// The original matrix: transposing a transpose undoes the wrapper.
    #[inline]
    pub fn transpose(&self) -> &'a M {
        self.target
    }

    /// Map a flat row-major offset of the view to the flat row-major
    /// offset of the same logical element in the target.
    ///
    /// With a view shape of (M, N), offset `k` names view coordinate
    /// `(k / N, k % N)`, which is target coordinate `(k % N, k / N)` at
    /// target offset `(k % N) * M + k / N`.
    ///
    /// Precondition: `index < self.size()`.
    #[inline]
    pub fn permute_index(&self, index: usize) -> usize {
        let shape = self.shape();
        debug_assert!(
            index < shape.size(),
            "index {index} out of range for view of size {}",
            shape.size()
        );
        let row = index / shape.ncols();
        let col = index % shape.ncols();
        col * shape.nrows() + row
    }
}

impl<M: MatrixLike + ?Sized> MatrixLike for TransposeView<'_, M> {
    type Elem = M::Elem;

    #[inline]
    fn shape(&self) -> Shape {
        self.target.shape().reversed()
    }

    #[inline]
    fn fetch(&self, index: usize) -> M::Elem {
        self.target.fetch(self.permute_index(index))
    }
}

impl<M: MatrixLike + ?Sized> Clone for TransposeView<'_, M> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
        }
    }
}

impl<M: MatrixLike + ?Sized> Copy for TransposeView<'_, M> {}
