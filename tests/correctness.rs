use approx::assert_relative_eq;
use matrixlike::{
    add, div_scalar, matmul, matrix_eq, matrix_map, matrix_order, mul, mul_scalar, DenseMatrix,
    FrozenMatrix, MatrixError, MatrixLike, Rule, Shape, Span,
};
use std::cmp::Ordering;

fn counting(nrows: usize, ncols: usize) -> FrozenMatrix<i64> {
    FrozenMatrix::from_fn(Shape::new(nrows, ncols), |i, j| (i * ncols + j) as i64)
}

#[test]
fn test_flat_and_positional_access_agree() {
    let a = counting(3, 4);
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(
                a.get_at(i as isize, j as isize).unwrap(),
                a.get((i * 4 + j) as isize).unwrap()
            );
        }
    }
    // Negative indices wrap from the end on every axis.
    assert_eq!(a.get(-1).unwrap(), 11);
    assert_eq!(a.get_at(-1, -1).unwrap(), 11);
    assert_eq!(a.get_at(-3, 0).unwrap(), 0);
}

#[test]
fn test_out_of_range_access_fails() {
    let a = counting(2, 2);
    assert_eq!(
        a.get(4),
        Err(MatrixError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        a.get(-5),
        Err(MatrixError::IndexOutOfRange { index: -5, len: 4 })
    );
    assert!(a.get_at(0, 2).is_err());
    assert!(a.get_at(2, 0).is_err());
}

#[test]
fn test_constructor_validation() {
    assert_eq!(
        FrozenMatrix::new(vec![1, 2, 3], Shape::new(2, 2)),
        Err(MatrixError::SizeMismatch {
            size: 3,
            shape: Shape::new(2, 2),
        })
    );
    assert_eq!(
        FrozenMatrix::from_rows(vec![vec![1, 2], vec![3]]),
        Err(MatrixError::RaggedRows {
            row: 1,
            len: 1,
            expected: 2,
        })
    );

    let a = FrozenMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(a.shape(), Shape::new(2, 2));
    assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_span_indexing_follows_adjusted_bounds() {
    let a = counting(2, 5);

    // A flat span clamps out-of-range endpoints instead of failing.
    let run = a.index(Span::new(Some(-3), None, 1)).unwrap();
    assert_eq!(run.shape(), Shape::new(1, 3));
    assert_eq!(run.as_slice(), &[7, 8, 9]);

    let strided = a.index(Span::new(None, Some(100), 3)).unwrap();
    assert_eq!(strided.as_slice(), &[0, 3, 6, 9]);

    // Empty selections are valid matrices, not errors.
    let empty = a.index(Span::new(Some(4), Some(4), 1)).unwrap();
    assert_eq!(empty.shape(), Shape::new(1, 0));
    assert!(empty.is_empty());
}

#[test]
fn test_submatrix_cross_product() {
    let a = counting(4, 4);
    let inner = a.submatrix(1..3, 1..3).unwrap();
    assert_eq!(inner.shape(), Shape::new(2, 2));
    assert_eq!(inner.as_slice(), &[5, 6, 9, 10]);

    // An integer key pins the axis but keeps the dimension.
    let row = a.submatrix(2, ..).unwrap();
    assert_eq!(row.shape(), Shape::new(1, 4));
    assert_eq!(row.as_slice(), &[8, 9, 10, 11]);

    let col = a.submatrix(.., -1).unwrap();
    assert_eq!(col.shape(), Shape::new(4, 1));
    assert_eq!(col.as_slice(), &[3, 7, 11, 15]);

    let nothing = a.submatrix(0..0, ..).unwrap();
    assert_eq!(nothing.shape(), Shape::new(0, 4));
}

#[test]
fn test_slices_by_rule() {
    let a = counting(2, 3);

    let rows: Vec<_> = a.slices(Rule::Row).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].shape(), Shape::new(1, 3));
    assert_eq!(rows[1].as_slice(), &[3, 4, 5]);

    let cols: Vec<_> = a.slices(Rule::Col).collect();
    assert_eq!(cols.len(), 3);
    assert_eq!(cols[0].shape(), Shape::new(2, 1));
    assert_eq!(cols[2].as_slice(), &[2, 5]);

    assert_eq!(a.rows().count(), 2);
    assert_eq!(a.columns().count(), 3);
    assert_eq!(Rule::Row.inverse(), Rule::Col);
}

#[test]
fn test_lexicographic_order() {
    let ones = FrozenMatrix::fill(Shape::new(2, 2), 1);
    let twos = FrozenMatrix::fill(Shape::new(2, 2), 2);

    assert_eq!(matrix_order(&ones, &twos), Ok(Ordering::Less));
    assert_eq!(matrix_order(&twos, &ones), Ok(Ordering::Greater));
    assert_eq!(matrix_order(&ones, &ones), Ok(Ordering::Equal));

    assert!(ones.lex_lt(&twos).unwrap());
    assert!(ones.lex_le(&twos).unwrap());
    assert!(ones.lex_le(&ones).unwrap());
    assert!(twos.lex_gt(&ones).unwrap());
    assert!(!ones.lex_gt(&twos).unwrap());
    assert!(twos.lex_ge(&ones).unwrap());
    assert!(ones.matrix_eq(&ones));
    assert!(!matrix_eq(&ones, &twos));

    // Ordering is antisymmetric: swapping operands flips the result.
    let a = counting(2, 2);
    let b = FrozenMatrix::new(vec![0, 5, 2, 3], Shape::new(2, 2)).unwrap();
    let forward = matrix_order(&a, &b).unwrap();
    let backward = matrix_order(&b, &a).unwrap();
    assert_eq!(forward, backward.reverse());
}

#[test]
fn test_order_requires_equal_shapes() {
    let a = counting(2, 3);
    let b = counting(3, 2);
    assert_eq!(
        matrix_order(&a, &b),
        Err(MatrixError::ShapeMismatch(Shape::new(2, 3), Shape::new(3, 2)))
    );
    // PartialOrd on the concrete types renders the same failure as None.
    assert_eq!(a.partial_cmp(&b), None);
}

#[test]
fn test_elementwise_comparison_matrices() {
    let a = FrozenMatrix::new(vec![1, 5, 3, 4], Shape::new(2, 2)).unwrap();
    let b = FrozenMatrix::new(vec![1, 2, 9, 4], Shape::new(2, 2)).unwrap();

    assert_eq!(a.equal(&b).unwrap().as_slice(), &[true, false, false, true]);
    assert_eq!(
        a.not_equal(&b).unwrap().as_slice(),
        &[false, true, true, false]
    );
    assert_eq!(a.lesser(&b).unwrap().as_slice(), &[false, false, true, false]);
    assert_eq!(
        a.lesser_equal(&b).unwrap().as_slice(),
        &[true, false, true, true]
    );
    assert_eq!(a.greater(&b).unwrap().as_slice(), &[false, true, false, false]);
    assert_eq!(
        a.greater_equal(&b).unwrap().as_slice(),
        &[true, true, false, true]
    );

    let mask = FrozenMatrix::new(vec![0, 1, 0, 2], Shape::new(2, 2)).unwrap();
    let other = FrozenMatrix::new(vec![0, 0, 3, 0], Shape::new(2, 2)).unwrap();
    assert_eq!(mask.logical_not().as_slice(), &[true, false, true, false]);
    assert_eq!(
        a.logical_and(&mask).unwrap().as_slice(),
        &[false, true, false, true]
    );
    assert_eq!(
        mask.logical_or(&other).unwrap().as_slice(),
        &[false, true, true, true]
    );
}

#[test]
fn test_conjugate_matrices() {
    use num_complex::Complex64;

    let m = FrozenMatrix::new(
        vec![
            Complex64::new(1.0, 2.0),
            Complex64::new(3.0, -4.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(5.0, 0.0),
        ],
        Shape::new(2, 2),
    )
    .unwrap();

    let c = m.conjugate();
    assert_eq!(c.shape(), Shape::new(2, 2));
    assert_eq!(c.get_at(0, 0).unwrap(), Complex64::new(1.0, -2.0));
    assert_eq!(c.get_at(0, 1).unwrap(), Complex64::new(3.0, 4.0));
    assert_eq!(c.get_at(1, 1).unwrap(), Complex64::new(5.0, 0.0));

    // Through a transpose view the remap and the conjugation compose.
    let tc = m.transpose().conjugate();
    assert_eq!(tc.get_at(1, 0).unwrap(), Complex64::new(3.0, 4.0));
    assert!(tc.matrix_eq(&c.transpose()));

    // Real elements conjugate to themselves.
    let r = FrozenMatrix::new(vec![1.5, -2.5], Shape::new(1, 2)).unwrap();
    assert_eq!(r.conjugate(), r);
}

#[test]
fn test_map_and_ops_on_uniform_operands() {
    let ones = FrozenMatrix::fill(Shape::new(2, 2), 1.0_f64);
    let twos = FrozenMatrix::fill(Shape::new(2, 2), 2.0_f64);

    assert!(ones.equal(&twos).unwrap().iter().all(|eq| !eq));

    let sum = add(&ones, &twos).unwrap();
    let product = mul(&ones, &twos).unwrap();
    for k in 0..4 {
        assert_relative_eq!(sum.get(k as isize).unwrap(), 3.0);
        assert_relative_eq!(product.get(k as isize).unwrap(), 2.0);
    }

    let halves = div_scalar(&ones, 2.0);
    assert_relative_eq!(halves.get(0).unwrap(), 0.5);

    let custom: Vec<f64> = matrix_map(|x, y| x.mul_add(10.0, y), &ones, &twos)
        .unwrap()
        .collect();
    assert_eq!(custom, vec![12.0; 4]);
}

#[test]
fn test_matmul_shapes_and_values() {
    let a = counting(2, 3);
    let b = counting(3, 4);
    let c = matmul(&a, &b).unwrap();
    assert_eq!(c.shape(), Shape::new(2, 4));
    assert_eq!(c.as_slice(), &[20, 23, 26, 29, 56, 68, 80, 92]);

    assert_eq!(
        matmul(&a, &counting(2, 2)),
        Err(MatrixError::ShapeMismatch(Shape::new(2, 3), Shape::new(2, 2)))
    );
}

#[test]
fn test_dense_mutation() {
    let mut d = DenseMatrix::fill(Shape::new(2, 3), 0);
    d.set(0, 1, 7).unwrap();
    d.set(-1, -1, 9).unwrap();
    assert_eq!(d.get_at(0, 1).unwrap(), 7);
    assert_eq!(d.get_at(1, 2).unwrap(), 9);

    d.swap((0, 1), (1, 2)).unwrap();
    assert_eq!(d.get_at(0, 1).unwrap(), 9);
    assert_eq!(d.get_at(1, 2).unwrap(), 7);

    assert!(d.set(2, 0, 1).is_err());

    let frozen = d.freeze();
    assert_eq!(frozen.as_slice(), &[0, 9, 0, 0, 0, 7]);
}

#[test]
fn test_iteration_is_row_major_and_reversible() {
    let a = counting(2, 3);
    let forward: Vec<i64> = a.iter().collect();
    assert_eq!(forward, vec![0, 1, 2, 3, 4, 5]);
    let backward: Vec<i64> = a.iter().rev().collect();
    assert_eq!(backward, vec![5, 4, 3, 2, 1, 0]);
    assert!(a.contains(&4));
    assert!(!a.contains(&6));
}

#[test]
fn test_scaling_round_trip() {
    let a = FrozenMatrix::from_fn(Shape::new(3, 3), |i, j| (i + j) as f64);
    let scaled = mul_scalar(&a, 4.0);
    let back = div_scalar(&scaled, 4.0);
    for k in 0..9 {
        assert_relative_eq!(
            back.get(k as isize).unwrap(),
            a.get(k as isize).unwrap(),
            epsilon = 1e-12
        );
    }
}
