//! Lexicographic comparison over row-major element streams.

use std::cmp::Ordering;

use crate::map::ensure_same_shape;
use crate::matrix::MatrixLike;
use crate::Result;

/// Compare two matrices lexicographically in row-major order.
///
/// Elements are probed pairwise from flat index 0. The first pair that
/// orders strictly decides the result; pairs that compare equal — and
/// pairs with no defined ordering, such as a NaN against anything — are
/// passed over. Exhausting every pair yields [`Ordering::Equal`].
///
/// # Errors
/// [`MatrixError::ShapeMismatch`](crate::MatrixError::ShapeMismatch) if
/// the operand shapes differ; matrices of different shape are never
/// ordered against each other.
pub fn matrix_order<A, B>(a: &A, b: &B) -> Result<Ordering>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: PartialOrd<B::Elem>,
{
    ensure_same_shape(a.shape(), b.shape())?;
    for k in 0..a.size() {
        let x = a.fetch(k);
        let y = b.fetch(k);
        if x < y {
            return Ok(Ordering::Less);
        }
        if x > y {
            return Ok(Ordering::Greater);
        }
    }
    Ok(Ordering::Equal)
}

/// True when both matrices have the same shape and equal elements at
/// every position. Unlike [`matrix_order`], a shape mismatch is not an
/// error here: differently-shaped matrices are simply unequal.
pub fn matrix_eq<A, B>(a: &A, b: &B) -> bool
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: PartialEq<B::Elem>,
{
    if a.shape() != b.shape() {
        return false;
    }
    (0..a.size()).all(|k| a.fetch(k) == b.fetch(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frozen::FrozenMatrix;
    use crate::shape::Shape;
    use crate::MatrixError;

    fn of(data: Vec<f64>, nrows: usize, ncols: usize) -> FrozenMatrix<f64> {
        FrozenMatrix::new(data, Shape::new(nrows, ncols)).unwrap()
    }

    #[test]
    fn test_order_first_strict_pair_decides() {
        let a = of(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = of(vec![1.0, 2.0, 5.0, 0.0], 2, 2);
        assert_eq!(matrix_order(&a, &b), Ok(Ordering::Less));
        assert_eq!(matrix_order(&b, &a), Ok(Ordering::Greater));
    }

    #[test]
    fn test_order_equal() {
        let a = of(vec![1.0, 2.0], 1, 2);
        let b = of(vec![1.0, 2.0], 1, 2);
        assert_eq!(matrix_order(&a, &b), Ok(Ordering::Equal));
    }

    #[test]
    fn test_order_shape_mismatch_is_an_error() {
        let a = of(vec![1.0, 2.0], 1, 2);
        let b = of(vec![1.0, 2.0], 2, 1);
        assert_eq!(
            matrix_order(&a, &b),
            Err(MatrixError::ShapeMismatch(Shape::new(1, 2), Shape::new(2, 1)))
        );
    }

    #[test]
    fn test_order_skips_incomparable_pairs() {
        // NaN orders against nothing, so the decision falls to the
        // next strictly ordered pair.
        let a = of(vec![f64::NAN, 1.0], 1, 2);
        let b = of(vec![0.0, 2.0], 1, 2);
        assert_eq!(matrix_order(&a, &b), Ok(Ordering::Less));

        let c = of(vec![f64::NAN], 1, 1);
        let d = of(vec![0.0], 1, 1);
        assert_eq!(matrix_order(&c, &d), Ok(Ordering::Equal));
    }

    #[test]
    fn test_order_empty_matrices_are_equal() {
        let a = of(vec![], 0, 4);
        let b = of(vec![], 0, 4);
        assert_eq!(matrix_order(&a, &b), Ok(Ordering::Equal));
    }

    #[test]
    fn test_eq_shape_mismatch_is_false() {
        let a = of(vec![1.0, 2.0], 1, 2);
        let b = of(vec![1.0, 2.0], 2, 1);
        assert!(!matrix_eq(&a, &b));
        assert!(matrix_eq(&a, &a));
    }

    #[test]
    fn test_eq_across_variants() {
        let a = of(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let t = of(vec![1.0, 3.0, 2.0, 4.0], 2, 2);
        assert!(matrix_eq(&a.transpose(), &t));
    }
}
