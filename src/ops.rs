//! Elementwise arithmetic, bitwise, and unary operations.
//!
//! Every operation here materializes a [`FrozenMatrix`] in row-major
//! order. The matrix∘matrix forms validate shapes eagerly and fail with
//! [`MatrixError::ShapeMismatch`](crate::MatrixError::ShapeMismatch);
//! the matrix∘scalar and unary forms cannot fail and return the result
//! directly. Scalar broadcasting comes in both orientations: `*_scalar`
//! places the scalar on the right, `scalar_*` on the left for the
//! operations where the distinction matters.

use std::ops::{
    Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub,
};

use num_traits::{Euclid, Pow, Signed};

use crate::dense::DenseMatrix;
use crate::frozen::FrozenMatrix;
use crate::map::matrix_map;
use crate::matrix::MatrixLike;
use crate::Result;

fn map_elems<A, F, R>(a: &A, mut f: F) -> FrozenMatrix<R>
where
    A: MatrixLike + ?Sized,
    F: FnMut(A::Elem) -> R,
{
    let data: Vec<R> = (0..a.size()).map(|k| f(a.fetch(k))).collect();
    FrozenMatrix::from_parts(data, a.shape())
}

fn zip_elems<A, B, F, R>(a: &A, b: &B, f: F) -> Result<FrozenMatrix<R>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    F: FnMut(A::Elem, B::Elem) -> R,
{
    let data: Vec<R> = matrix_map(f, a, b)?.collect();
    Ok(FrozenMatrix::from_parts(data, a.shape()))
}

macro_rules! impl_binary_op {
    ($(#[$meta:meta])* $name:ident, $trait:ident, $method:ident) => {
        $(#[$meta])*
        pub fn $name<A, B>(
            a: &A,
            b: &B,
        ) -> Result<FrozenMatrix<<A::Elem as $trait<B::Elem>>::Output>>
        where
            A: MatrixLike + ?Sized,
            B: MatrixLike + ?Sized,
            A::Elem: $trait<B::Elem>,
        {
            zip_elems(a, b, |x, y| x.$method(y))
        }
    };
}

macro_rules! impl_scalar_op {
    ($(#[$meta:meta])* $name:ident, $trait:ident, $method:ident) => {
        $(#[$meta])*
        pub fn $name<A, S>(a: &A, scalar: S) -> FrozenMatrix<<A::Elem as $trait<S>>::Output>
        where
            A: MatrixLike + ?Sized,
            S: Clone,
            A::Elem: $trait<S>,
        {
            map_elems(a, |x| x.$method(scalar.clone()))
        }
    };
}

macro_rules! impl_reflected_scalar_op {
    ($(#[$meta:meta])* $name:ident, $trait:ident, $method:ident) => {
        $(#[$meta])*
        pub fn $name<S, A>(scalar: S, a: &A) -> FrozenMatrix<<S as $trait<A::Elem>>::Output>
        where
            A: MatrixLike + ?Sized,
            S: Clone + $trait<A::Elem>,
        {
            map_elems(a, |x| scalar.clone().$method(x))
        }
    };
}

impl_binary_op! {
    /// Elementwise sum of two equal-shaped matrices.
    add, Add, add
}
impl_binary_op! {
    /// Elementwise difference of two equal-shaped matrices.
    sub, Sub, sub
}
impl_binary_op! {
    /// Elementwise product of two equal-shaped matrices. For the
    /// sum-of-products matrix product, see [`matmul`](crate::matmul).
    mul, Mul, mul
}
impl_binary_op! {
    /// Elementwise quotient of two equal-shaped matrices.
    div, Div, div
}
impl_binary_op! {
    /// Elementwise remainder of two equal-shaped matrices, with the
    /// sign convention of the element type's `%`.
    rem, Rem, rem
}
impl_binary_op! {
    /// Elementwise bitwise AND.
    bitand, BitAnd, bitand
}
impl_binary_op! {
    /// Elementwise bitwise OR.
    bitor, BitOr, bitor
}
impl_binary_op! {
    /// Elementwise bitwise XOR.
    bitxor, BitXor, bitxor
}
impl_binary_op! {
    /// Elementwise left shift.
    shl, Shl, shl
}
impl_binary_op! {
    /// Elementwise right shift.
    shr, Shr, shr
}

/// Elementwise Euclidean (flooring) division of two equal-shaped
/// matrices. The quotient pairs with [`rem`]'s Euclidean counterpart in
/// [`divmod`].
///
/// The remainder of a Euclidean division is always non-negative, so for
/// negative divisors the quotient differs from floored division:
/// `(-7).div_euclid(-2)` is 4 (remainder 1), where flooring would give
/// 3 (remainder -1). `q * b + r == a` holds in both conventions.
pub fn floor_div<A, B>(a: &A, b: &B) -> Result<FrozenMatrix<A::Elem>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike<Elem = A::Elem> + ?Sized,
    A::Elem: Euclid,
{
    zip_elems(a, b, |x, y| x.div_euclid(&y))
}

/// Elementwise power.
pub fn pow<A, B>(a: &A, b: &B) -> Result<FrozenMatrix<<A::Elem as Pow<B::Elem>>::Output>>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike + ?Sized,
    A::Elem: Pow<B::Elem>,
{
    zip_elems(a, b, |x, y| x.pow(y))
}

/// Elementwise Euclidean quotient and remainder in one pass.
///
/// Both result matrices share the operands' shape; position `k` holds
/// `div_euclid` in the first and `rem_euclid` in the second. Remainders
/// are always non-negative, which diverges from floored division when
/// the divisor is negative (see [`floor_div`]); `q * b + r == a` holds
/// at every position regardless.
pub fn divmod<A, B>(a: &A, b: &B) -> Result<(FrozenMatrix<A::Elem>, FrozenMatrix<A::Elem>)>
where
    A: MatrixLike + ?Sized,
    B: MatrixLike<Elem = A::Elem> + ?Sized,
    A::Elem: Euclid,
{
    let pairs = matrix_map(|x, y| (x.div_euclid(&y), x.rem_euclid(&y)), a, b)?;
    let (quotients, remainders) = pairs.unzip();
    Ok((
        FrozenMatrix::from_parts(quotients, a.shape()),
        FrozenMatrix::from_parts(remainders, a.shape()),
    ))
}

impl_scalar_op! {
    /// Add `scalar` to every element.
    add_scalar, Add, add
}
impl_scalar_op! {
    /// Subtract `scalar` from every element. For `scalar - element`,
    /// see [`scalar_sub`].
    sub_scalar, Sub, sub
}
impl_scalar_op! {
    /// Multiply every element by `scalar`.
    mul_scalar, Mul, mul
}
impl_scalar_op! {
    /// Divide every element by `scalar`. For `scalar / element`, see
    /// [`scalar_div`].
    div_scalar, Div, div
}
impl_scalar_op! {
    /// Remainder of every element by `scalar`.
    rem_scalar, Rem, rem
}
impl_scalar_op! {
    /// Raise every element to the power `scalar`.
    pow_scalar, Pow, pow
}
impl_scalar_op! {
    /// Bitwise AND of every element with `scalar`.
    bitand_scalar, BitAnd, bitand
}
impl_scalar_op! {
    /// Bitwise OR of every element with `scalar`.
    bitor_scalar, BitOr, bitor
}
impl_scalar_op! {
    /// Bitwise XOR of every element with `scalar`.
    bitxor_scalar, BitXor, bitxor
}
impl_scalar_op! {
    /// Left-shift every element by `scalar`.
    shl_scalar, Shl, shl
}
impl_scalar_op! {
    /// Right-shift every element by `scalar`.
    shr_scalar, Shr, shr
}

/// Euclidean division of every element by `scalar`. See [`floor_div`]
/// for the negative-divisor convention.
pub fn floor_div_scalar<A>(a: &A, scalar: A::Elem) -> FrozenMatrix<A::Elem>
where
    A: MatrixLike + ?Sized,
    A::Elem: Euclid,
{
    map_elems(a, |x| x.div_euclid(&scalar))
}

impl_reflected_scalar_op! {
    /// Subtract every element from `scalar`.
    scalar_sub, Sub, sub
}
impl_reflected_scalar_op! {
    /// Divide `scalar` by every element.
    scalar_div, Div, div
}
impl_reflected_scalar_op! {
    /// Remainder of `scalar` by every element.
    scalar_rem, Rem, rem
}

/// Euclidean division of `scalar` by every element. See [`floor_div`]
/// for the negative-divisor convention.
pub fn scalar_floor_div<A>(scalar: A::Elem, a: &A) -> FrozenMatrix<A::Elem>
where
    A: MatrixLike + ?Sized,
    A::Elem: Euclid,
{
    map_elems(a, |x| scalar.div_euclid(&x))
}

/// Elementwise negation.
pub fn neg<A>(a: &A) -> FrozenMatrix<<A::Elem as Neg>::Output>
where
    A: MatrixLike + ?Sized,
    A::Elem: Neg,
{
    map_elems(a, |x| -x)
}

/// Elementwise identity, materialized. Mirrors unary `+` on scalars.
pub fn pos<A>(a: &A) -> FrozenMatrix<A::Elem>
where
    A: MatrixLike + ?Sized,
{
    map_elems(a, |x| x)
}

/// Elementwise absolute value.
pub fn abs<A>(a: &A) -> FrozenMatrix<A::Elem>
where
    A: MatrixLike + ?Sized,
    A::Elem: Signed,
{
    map_elems(a, |x| x.abs())
}

/// Elementwise bitwise inversion.
pub fn invert<A>(a: &A) -> FrozenMatrix<<A::Elem as Not>::Output>
where
    A: MatrixLike + ?Sized,
    A::Elem: Not,
{
    map_elems(a, |x| !x)
}

macro_rules! impl_matrix_operator {
    ($matrix:ident, $trait:ident, $method:ident) => {
        /// Elementwise operator between equal-shaped matrices.
        ///
        /// Panics with the shape-mismatch message when the shapes
        /// differ; the fallible free function of the same name is the
        /// primary surface.
        impl<T, U> $trait<&$matrix<T>> for &$matrix<T>
        where
            T: Clone + $trait<T, Output = U>,
        {
            type Output = FrozenMatrix<U>;

            fn $method(self, rhs: &$matrix<T>) -> FrozenMatrix<U> {
                match $method(self, rhs) {
                    Ok(out) => out,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    };
}

macro_rules! impl_matrix_operators {
    ($matrix:ident) => {
        impl_matrix_operator!($matrix, Add, add);
        impl_matrix_operator!($matrix, Sub, sub);
        impl_matrix_operator!($matrix, Mul, mul);
        impl_matrix_operator!($matrix, Div, div);
        impl_matrix_operator!($matrix, Rem, rem);
        impl_matrix_operator!($matrix, BitAnd, bitand);
        impl_matrix_operator!($matrix, BitOr, bitor);
        impl_matrix_operator!($matrix, BitXor, bitxor);
        impl_matrix_operator!($matrix, Shl, shl);
        impl_matrix_operator!($matrix, Shr, shr);

        impl<T, U> Neg for &$matrix<T>
        where
            T: Clone + Neg<Output = U>,
        {
            type Output = FrozenMatrix<U>;

            fn neg(self) -> FrozenMatrix<U> {
                neg(self)
            }
        }

        impl<T, U> Not for &$matrix<T>
        where
            T: Clone + Not<Output = U>,
        {
            type Output = FrozenMatrix<U>;

            fn not(self) -> FrozenMatrix<U> {
                invert(self)
            }
        }
    };
}

impl_matrix_operators!(FrozenMatrix);
impl_matrix_operators!(DenseMatrix);
