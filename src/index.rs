//! Index keys for flat and two-dimensional matrix access.
//!
//! Two key families exist:
//!
//! - [`MatrixIndex`]: keys into the flat row-major element space. An
//!   integer selects a single element; a range or [`Span`] selects a run
//!   of elements as a 1-row matrix.
//! - [`AxisKey`]: per-dimension selectors used in pairs by
//!   [`MatrixLike::submatrix`](crate::MatrixLike::submatrix). An integer
//!   pins the dimension to a single row or column; a range keeps it.
//!
//! Integer keys wrap from the end when negative (-1 is the last position)
//! and fail with [`MatrixError::IndexOutOfRange`] when out of bounds after
//! wrapping. Range keys are clamped instead, so an empty or out-of-range
//! span selects nothing rather than failing.

use crate::frozen::FrozenMatrix;
use crate::matrix::MatrixLike;
use crate::shape::Shape;
use crate::{MatrixError, Result};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A stepped index span with optional endpoints.
///
/// Endpoints follow slice conventions from dynamic array languages:
/// negative endpoints count from the end, out-of-range endpoints clamp,
/// and a negative step walks the span backwards (in which case an omitted
/// start means the last position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub step: isize,
}

impl Span {
    /// Create a span over `[start, end)` with the given step.
    ///
    /// # Panics
    /// Panics if `step` is 0.
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> Self {
        assert!(step != 0, "span step cannot be zero");
        Self { start, end, step }
    }

    /// The span covering an entire dimension.
    pub fn full() -> Self {
        Self {
            start: None,
            end: None,
            step: 1,
        }
    }
}

/// A per-dimension selector resolved against a dimension length.
pub trait AxisKey {
    /// Resolve this key against a dimension of length `len`.
    fn resolve(&self, len: usize) -> Result<ResolvedAxis>;
}

/// The positions an [`AxisKey`] selects along one dimension.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedAxis {
    start: isize,
    step: isize,
    count: usize,
}

impl ResolvedAxis {
    /// The number of selected positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The selected position at offset `i` within the selection.
    ///
    /// Precondition: `i < self.len()`.
    #[inline]
    pub fn at(&self, i: usize) -> usize {
        (self.start + i as isize * self.step) as usize
    }

    /// Iterate the selected positions in selection order.
    pub fn positions(&self) -> Positions {
        Positions {
            axis: *self,
            next: 0,
        }
    }
}

/// Iterator over the positions of a [`ResolvedAxis`].
#[derive(Debug, Clone)]
pub struct Positions {
    axis: ResolvedAxis,
    next: usize,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == self.axis.count {
            return None;
        }
        let position = self.axis.at(self.next);
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.axis.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

/// Clamp optional endpoints and count the selected positions, following
/// the slice-adjustment algorithm of dynamic array languages.
fn resolve_span(start: Option<isize>, end: Option<isize>, step: isize, len: usize) -> ResolvedAxis {
    let len = len as isize;
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

    let start = match start {
        None => {
            if step > 0 {
                0
            } else {
                len - 1
            }
        }
        Some(s) if s < 0 => (s + len).max(lower),
        Some(s) => s.min(upper),
    };
    let stop = match end {
        None => {
            if step > 0 {
                len
            } else {
                -1
            }
        }
        Some(e) if e < 0 => (e + len).max(lower),
        Some(e) => e.min(upper),
    };

    let count = if step > 0 {
        if start < stop {
            ((stop - start - 1) / step + 1) as usize
        } else {
            0
        }
    } else if stop < start {
        ((start - stop - 1) / -step + 1) as usize
    } else {
        0
    };

    ResolvedAxis { start, step, count }
}

impl AxisKey for isize {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        let wrapped = if *self < 0 {
            self + len as isize
        } else {
            *self
        };
        if wrapped < 0 || wrapped >= len as isize {
            return Err(MatrixError::IndexOutOfRange { index: *self, len });
        }
        Ok(ResolvedAxis {
            start: wrapped,
            step: 1,
            count: 1,
        })
    }
}

impl AxisKey for Span {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(self.start, self.end, self.step, len))
    }
}

impl AxisKey for RangeFull {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(None, None, 1, len))
    }
}

impl AxisKey for Range<isize> {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(Some(self.start), Some(self.end), 1, len))
    }
}

impl AxisKey for RangeFrom<isize> {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(Some(self.start), None, 1, len))
    }
}

impl AxisKey for RangeTo<isize> {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(None, Some(self.end), 1, len))
    }
}

// An inclusive end of -1 reaches through the last position, which the
// exclusive form can only express as an omitted endpoint.
fn after_inclusive(end: isize) -> Option<isize> {
    if end == -1 {
        None
    } else {
        Some(end + 1)
    }
}

impl AxisKey for RangeInclusive<isize> {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(
            Some(*self.start()),
            after_inclusive(*self.end()),
            1,
            len,
        ))
    }
}

impl AxisKey for RangeToInclusive<isize> {
    fn resolve(&self, len: usize) -> Result<ResolvedAxis> {
        Ok(resolve_span(None, after_inclusive(self.end), 1, len))
    }
}

/// A key into the flat row-major element space of a matrix.
///
/// The result type is selected by the key's shape at compile time: an
/// integer key produces a single element, a range key produces a 1-row
/// matrix of the selected run.
pub trait MatrixIndex<M: MatrixLike + ?Sized> {
    type Output;

    fn index_into(self, matrix: &M) -> Result<Self::Output>;
}

impl<M: MatrixLike + ?Sized> MatrixIndex<M> for isize {
    type Output = M::Elem;

    fn index_into(self, matrix: &M) -> Result<M::Elem> {
        matrix.get(self)
    }
}

macro_rules! impl_flat_span_index {
    ($($key:ty),* $(,)?) => {
        $(
            impl<M: MatrixLike + ?Sized> MatrixIndex<M> for $key {
                type Output = FrozenMatrix<M::Elem>;

                fn index_into(self, matrix: &M) -> Result<Self::Output> {
                    let axis = AxisKey::resolve(&self, matrix.size())?;
                    let data: Vec<M::Elem> =
                        axis.positions().map(|i| matrix.fetch(i)).collect();
                    FrozenMatrix::new(data, Shape::new(1, axis.len()))
                }
            }
        )*
    };
}

impl_flat_span_index!(
    Span,
    RangeFull,
    Range<isize>,
    RangeFrom<isize>,
    RangeTo<isize>,
    RangeInclusive<isize>,
    RangeToInclusive<isize>,
);
