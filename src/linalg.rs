//! Matrix product over the elementwise sum-of-products definition.

use std::ops::{Add, Mul};

use crate::frozen::FrozenMatrix;
use crate::matrix::MatrixLike;
use crate::shape::Shape;
use crate::{MatrixError, Result};

/// Lazily compute the matrix product of `a` and `b`.
///
/// For an `(p, n)` left operand and an `(n, q)` right operand the result
/// is a row-major stream of `p * q` sum-of-products entries. Each entry
/// folds `a[i, k] * b[k, j]` over `k`, seeded by the `k = 0` product so
/// the element type needs no additive identity.
///
/// # Errors
/// - [`MatrixError::ShapeMismatch`] if `a.ncols() != b.nrows()`.
/// - [`MatrixError::EmptyInnerDimension`] if the shared dimension is
///   zero; there is no empty sum to fall back on.
pub fn matrix_multiply<'a, A, B>(a: &'a A, b: &'a B) -> Result<MatrixProduct<'a, A, B>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: Mul<B::Elem>,
    <A::Elem as Mul<B::Elem>>::Output: Add<Output = <A::Elem as Mul<B::Elem>>::Output>,
{
    let (p, n) = (a.nrows(), a.ncols());
    let (m, q) = (b.nrows(), b.ncols());
    if n != m {
        return Err(MatrixError::ShapeMismatch(a.shape(), b.shape()));
    }
    if n == 0 {
        return Err(MatrixError::EmptyInnerDimension);
    }
    Ok(MatrixProduct {
        a,
        b,
        n,
        q,
        next: 0,
        len: p * q,
    })
}

/// Materialize the product of `a` and `b` as a `(p, q)` matrix.
///
/// # Errors
/// Same conditions as [`matrix_multiply`].
pub fn matmul<A, B>(a: &A, b: &B) -> Result<FrozenMatrix<<A::Elem as Mul<B::Elem>>::Output>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: Mul<B::Elem>,
    <A::Elem as Mul<B::Elem>>::Output: Add<Output = <A::Elem as Mul<B::Elem>>::Output> + Clone,
{
    let shape = Shape::new(a.nrows(), b.ncols());
    let data: Vec<_> = matrix_multiply(a, b)?.collect();
    Ok(FrozenMatrix::from_parts(data, shape))
}

/// Lazy row-major product stream. Produced by [`matrix_multiply`].
pub struct MatrixProduct<'a, A: ?Sized, B: ?Sized> {
    a: &'a A,
    b: &'a B,
    n: usize,
    q: usize,
    next: usize,
    len: usize,
}

impl<A, B> Iterator for MatrixProduct<'_, A, B>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: Mul<B::Elem>,
    <A::Elem as Mul<B::Elem>>::Output: Add<Output = <A::Elem as Mul<B::Elem>>::Output>,
{
    type Item = <A::Elem as Mul<B::Elem>>::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.len {
            return None;
        }
        let i = self.next / self.q;
        let j = self.next % self.q;
        self.next += 1;

        let term = |k: usize| self.a.fetch(i * self.n + k) * self.b.fetch(k * self.q + j);
        let mut acc = term(0);
        for k in 1..self.n {
            acc = acc + term(k);
        }
        Some(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<A, B> ExactSizeIterator for MatrixProduct<'_, A, B>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: Mul<B::Elem>,
    <A::Elem as Mul<B::Elem>>::Output: Add<Output = <A::Elem as Mul<B::Elem>>::Output>,
{
}
