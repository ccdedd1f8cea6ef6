//! Dynamic one- and two-dimensional matrix types with vectorized operations.
//!
//! This crate provides a small family of row-major matrix representations
//! unified by the [`MatrixLike`] trait: every operation is defined against
//! the trait, so owning matrices and non-owning views interoperate freely.
//!
//! # Core Types
//!
//! - [`MatrixLike`]: the capability contract — indexing, iteration, slicing,
//!   comparisons, and elementwise operations over a row-major element grid
//! - [`FrozenMatrix`] / [`DenseMatrix`]: owning storage (immutable / mutable)
//! - [`TransposeView`]: zero-copy view with row and column roles swapped
//! - [`Shape`] / [`ShapeView`]: dimension pair and its read-only back-reference
//! - [`Rule`]: row/column axis selector for slicing direction
//!
//! # Primary API
//!
//! ## Elementwise engine
//!
//! - [`matrix_map`], [`matrix_map3`], [`matrix_map4`]: shape-checked lazy
//!   application of a function across aligned element streams
//! - [`matrix_order`]: lexicographic comparison of equal-shaped matrices
//! - [`matrix_multiply`] / [`matmul`]: lazy and materialized matrix product
//!
//! ## Elementwise operations
//!
//! - [`add`], [`sub`], [`mul`], [`div`], [`floor_div`], [`rem`], [`divmod`],
//!   [`pow`], [`shl`], [`shr`], [`bitand`], [`bitor`], [`bitxor`]: binary
//!   matrix∘matrix combination, plus `*_scalar` / `scalar_*` broadcast forms
//! - [`neg`], [`pos`], [`abs`], [`invert`]: unary maps
//!
//! # Example
//!
//! ```rust
//! use matrixlike::{FrozenMatrix, MatrixLike, Shape};
//!
//! let a = FrozenMatrix::new(vec![1, 2, 3, 4, 5, 6], Shape::new(2, 3)).unwrap();
//!
//! // Flat and 2D access share one row-major index space.
//! assert_eq!(a.get(4).unwrap(), 5);
//! assert_eq!(a.get_at(1, 1).unwrap(), 5);
//!
//! // Transposition is a zero-copy view.
//! let t = a.transpose();
//! assert_eq!(t.shape(), Shape::new(3, 2));
//! assert_eq!(t.get_at(1, 0).unwrap(), a.get_at(0, 1).unwrap());
//! ```
//!
//! # Shape checking
//!
//! Binary operations never coerce shapes: operands must match exactly
//! (or share an inner dimension for the product), and mismatches surface
//! as [`MatrixError::ShapeMismatch`] before any element is produced.
//! Operand *type* support is resolved at compile time through the
//! standard operator traits, so there is no runtime "unsupported operand"
//! failure — code that would raise it simply does not compile.

mod dense;
mod element;
mod frozen;
mod index;
mod linalg;
mod map;
mod matrix;
mod ops;
mod order;
mod rule;
mod shape;
mod view;

// ============================================================================
// Contract and concrete representations
// ============================================================================
pub use dense::DenseMatrix;
pub use frozen::FrozenMatrix;
pub use matrix::{Elements, MatrixLike, Slices};
pub use view::TransposeView;

// ============================================================================
// Value types
// ============================================================================
pub use rule::Rule;
pub use shape::{Shape, ShapeDims, ShapeView};

// ============================================================================
// Index keys
// ============================================================================
pub use index::{AxisKey, MatrixIndex, ResolvedAxis, Span};

// ============================================================================
// Element capabilities
// ============================================================================
pub use element::{Conjugate, Truthy};

// ============================================================================
// Elementwise engine
// ============================================================================
pub use linalg::{matmul, matrix_multiply, MatrixProduct};
pub use map::{matrix_map, matrix_map3, matrix_map4, MatrixMap, MatrixMap3, MatrixMap4};
pub use order::{matrix_eq, matrix_order};

// ============================================================================
// Elementwise operations
// ============================================================================
pub use ops::{
    abs, add, add_scalar, bitand, bitand_scalar, bitor, bitor_scalar, bitxor, bitxor_scalar, div,
    div_scalar, divmod, floor_div, floor_div_scalar, invert, mul, mul_scalar, neg, pos, pow,
    pow_scalar, rem, rem_scalar, scalar_div, scalar_floor_div, scalar_rem, scalar_sub, shl,
    shl_scalar, shr, shr_scalar, sub, sub_scalar,
};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Binary operands have incompatible shapes.
    #[error("matrix of shape {0} is incompatible with operand shape {1}")]
    ShapeMismatch(Shape, Shape),

    /// Integer index outside the valid range, after negative wrap-around.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Constructor data length disagrees with the requested shape.
    #[error("cannot interpret size-{size} data as shape {shape}")]
    SizeMismatch { size: usize, shape: Shape },

    /// Row-of-rows constructor received rows of unequal length.
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Matrix product over a zero-length inner dimension has no elements
    /// to accumulate.
    #[error("matrix product is undefined for an empty inner dimension")]
    EmptyInnerDimension,
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
