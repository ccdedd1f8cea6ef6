//! Element-level capabilities required by some matrix operations.
//!
//! These traits describe what a single element supports, independent of any
//! matrix container: complex conjugation and truthiness. Real primitives
//! satisfy both trivially; `num_complex::Complex` gets its conjugate from
//! the underlying complex arithmetic.

use num_complex::Complex;
use num_traits::{Num, Zero};

/// Complex conjugation of a single element.
///
/// For real number types the conjugate is the value itself.
pub trait Conjugate {
    fn conjugate(self) -> Self;
}

macro_rules! impl_conjugate_real {
    ($($t:ty),*) => {
        $(
            impl Conjugate for $t {
                #[inline(always)]
                fn conjugate(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_conjugate_real!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Num + Clone + std::ops::Neg<Output = T>> Conjugate for Complex<T> {
    #[inline(always)]
    fn conjugate(self) -> Self {
        Complex::conj(&self)
    }
}

/// Truth value of a single element, used by the logical operations.
///
/// Numeric types are truthy when nonzero, mirroring how dynamically typed
/// numeric code treats values in a boolean context.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_numeric {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline(always)]
                fn is_truthy(&self) -> bool {
                    !self.is_zero()
                }
            }
        )*
    };
}

impl_truthy_numeric!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Num + Clone> Truthy for Complex<T> {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        !self.is_zero()
    }
}
