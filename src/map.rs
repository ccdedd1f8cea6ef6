//! Shape-checked lazy elementwise combination.
//!
//! The `matrix_map*` family zips the row-major element streams of two,
//! three, or four equal-shaped matrices and applies a function at each
//! aligned position. Shapes are validated eagerly — before the first
//! element is produced — and the returned iterators are lazy, finite, and
//! single-pass.

use crate::matrix::MatrixLike;
use crate::shape::Shape;
use crate::{MatrixError, Result};

/// Fail unless both operands share a shape.
pub(crate) fn ensure_same_shape(a: Shape, b: Shape) -> Result<()> {
    if a != b {
        return Err(MatrixError::ShapeMismatch(a, b));
    }
    Ok(())
}

/// Apply `f` across the aligned elements of two matrices.
///
/// The result is a lazy row-major stream of `f(a[k], b[k])` with length
/// equal to the shared size.
///
/// # Errors
/// [`MatrixError::ShapeMismatch`] if the operand shapes differ.
///
/// # Example
/// ```rust
/// use matrixlike::{matrix_map, FrozenMatrix, Shape};
///
/// let a = FrozenMatrix::new(vec![1, 2, 3, 4], Shape::new(2, 2)).unwrap();
/// let b = FrozenMatrix::new(vec![10, 20, 30, 40], Shape::new(2, 2)).unwrap();
/// let sums: Vec<i32> = matrix_map(|x, y| x + y, &a, &b).unwrap().collect();
/// assert_eq!(sums, vec![11, 22, 33, 44]);
/// ```
pub fn matrix_map<'a, A, B, F, R>(f: F, a: &'a A, b: &'a B) -> Result<MatrixMap<'a, A, B, F>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem) -> R,
{
    ensure_same_shape(a.shape(), b.shape())?;
    Ok(MatrixMap {
        f,
        a,
        b,
        next: 0,
        len: a.size(),
    })
}

/// Apply `f` across the aligned elements of three matrices.
///
/// # Errors
/// [`MatrixError::ShapeMismatch`] if any operand's shape differs from the
/// first's.
pub fn matrix_map3<'a, A, B, C, F, R>(
    f: F,
    a: &'a A,
    b: &'a B,
    c: &'a C,
) -> Result<MatrixMap3<'a, A, B, C, F>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    C: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem) -> R,
{
    ensure_same_shape(a.shape(), b.shape())?;
    ensure_same_shape(a.shape(), c.shape())?;
    Ok(MatrixMap3 {
        f,
        a,
        b,
        c,
        next: 0,
        len: a.size(),
    })
}

/// Apply `f` across the aligned elements of four matrices.
///
/// # Errors
/// [`MatrixError::ShapeMismatch`] if any operand's shape differs from the
/// first's.
pub fn matrix_map4<'a, A, B, C, D, F, R>(
    f: F,
    a: &'a A,
    b: &'a B,
    c: &'a C,
    d: &'a D,
) -> Result<MatrixMap4<'a, A, B, C, D, F>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    C: MatrixLike + ?Sized,
    D: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem, D::Elem) -> R,
{
    ensure_same_shape(a.shape(), b.shape())?;
    ensure_same_shape(a.shape(), c.shape())?;
    ensure_same_shape(a.shape(), d.shape())?;
    Ok(MatrixMap4 {
        f,
        a,
        b,
        c,
        d,
        next: 0,
        len: a.size(),
    })
}

/// Lazy two-operand elementwise map. Produced by [`matrix_map`].
pub struct MatrixMap<'a, A: ?Sized, B: ?Sized, F> {
    f: F,
    a: &'a A,
    b: &'a B,
    next: usize,
    len: usize,
}

impl<A: ?Sized, B: ?Sized, F> core::fmt::Debug for MatrixMap<'_, A, B, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatrixMap")
            .field("next", &self.next)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<A, B, F, R> Iterator for MatrixMap<'_, A, B, F>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.next == self.len {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some((self.f)(self.a.fetch(k), self.b.fetch(k)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<A, B, F, R> ExactSizeIterator for MatrixMap<'_, A, B, F>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem) -> R,
{
}

/// Lazy three-operand elementwise map. Produced by [`matrix_map3`].
pub struct MatrixMap3<'a, A: ?Sized, B: ?Sized, C: ?Sized, F> {
    f: F,
    a: &'a A,
    b: &'a B,
    c: &'a C,
    next: usize,
    len: usize,
}

impl<A, B, C, F, R> Iterator for MatrixMap3<'_, A, B, C, F>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    C: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.next == self.len {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some((self.f)(self.a.fetch(k), self.b.fetch(k), self.c.fetch(k)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<A, B, C, F, R> ExactSizeIterator for MatrixMap3<'_, A, B, C, F>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    C: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem) -> R,
{
}

/// Lazy four-operand elementwise map. Produced by [`matrix_map4`].
pub struct MatrixMap4<'a, A: ?Sized, B: ?Sized, C: ?Sized, D: ?Sized, F> {
    f: F,
    a: &'a A,
    b: &'a B,
    c: &'a C,
    d: &'a D,
    next: usize,
    len: usize,
}

impl<A, B, C, D, F, R> Iterator for MatrixMap4<'_, A, B, C, D, F>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    C: MatrixLike + ?Sized,
    D: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem, D::Elem) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.next == self.len {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some((self.f)(
            self.a.fetch(k),
            self.b.fetch(k),
            self.c.fetch(k),
            self.d.fetch(k),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<A, B, C, D, F, R> ExactSizeIterator for MatrixMap4<'_, A, B, C, D, F>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    C: MatrixLike + ?Sized,
    D: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem, C::Elem, D::Elem) -> R,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frozen::FrozenMatrix;
    use crate::MatrixError;

    fn of(data: Vec<i32>, nrows: usize, ncols: usize) -> FrozenMatrix<i32> {
        FrozenMatrix::new(data, Shape::new(nrows, ncols)).unwrap()
    }

    #[test]
    fn test_map_is_row_major() {
        let a = of(vec![1, 2, 3, 4, 5, 6], 2, 3);
        let b = of(vec![6, 5, 4, 3, 2, 1], 2, 3);
        let out: Vec<i32> = matrix_map(|x, y| x * y, &a, &b).unwrap().collect();
        assert_eq!(out, vec![6, 10, 12, 12, 10, 6]);
    }

    #[test]
    fn test_map_rejects_shape_mismatch_eagerly() {
        let a = of(vec![1, 2, 3, 4], 2, 2);
        let b = of(vec![1, 2, 3, 4], 1, 4);
        let err = matrix_map(|x, y| x + y, &a, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch(Shape::new(2, 2), Shape::new(1, 4))
        );
    }

    #[test]
    fn test_map_mixed_variants() {
        let a = of(vec![1, 2, 3, 4, 5, 6], 2, 3);
        let t = a.transpose();
        let b = of(vec![1, 4, 2, 5, 3, 6], 3, 2);
        let diffs: Vec<i32> = matrix_map(|x, y| x - y, &t, &b).unwrap().collect();
        assert!(diffs.iter().all(|&d| d == 0));
    }

    #[test]
    fn test_map_empty_matrices() {
        let a = of(vec![], 0, 3);
        let b = of(vec![], 0, 3);
        let out: Vec<i32> = matrix_map(|x, y| x + y, &a, &b).unwrap().collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_map3_and_map4() {
        let a = of(vec![1, 2, 3, 4], 2, 2);
        let b = of(vec![10, 20, 30, 40], 2, 2);
        let c = of(vec![100, 200, 300, 400], 2, 2);
        let d = of(vec![1, 1, 1, 1], 2, 2);

        let out3: Vec<i32> = matrix_map3(|x, y, z| x + y + z, &a, &b, &c).unwrap().collect();
        assert_eq!(out3, vec![111, 222, 333, 444]);

        let out4: Vec<i32> = matrix_map4(|x, y, z, w| x * y + z * w, &a, &b, &c, &d)
            .unwrap()
            .collect();
        assert_eq!(out4, vec![110, 240, 390, 560]);
    }

    #[test]
    fn test_map_is_exact_size() {
        let a = of(vec![1, 2, 3, 4], 2, 2);
        let b = of(vec![1, 2, 3, 4], 2, 2);
        let iter = matrix_map(|x, y| x + y, &a, &b).unwrap();
        assert_eq!(iter.len(), 4);
    }
}
