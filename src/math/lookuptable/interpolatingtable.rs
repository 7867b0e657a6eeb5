use tracing::debug;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};
use crate::math::lookuptable::interpolation::{
    lookup,
    slope,
    validate
};
use crate::math::lookuptable::lookuptableerror::LookupTableError;
use crate::math::lookuptable::tablevalue::TableValue;

/// Fixed-size 1-D lookup table with linear interpolation.
///
/// `x` must be sorted ascending; `new` does not check it. The interval
/// containing a query is located with a branchless binary search, so `get`
/// runs in O(log N) without data-dependent branches in the search loop.
///
/// ```
/// use interptable::math::lookuptable::interpolatingtable::InterpolatingTable;
///
/// let table = InterpolatingTable::new([0.0, 1.0, 2.0], [0.0, 10.0, 20.0]);
/// assert_eq!(table.get(1.5), 15.0);
/// assert_eq!(table.get(-3.0), 0.0);
/// assert_eq!(table.get(9.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatingTable<T, const N: usize> {
    x: [T; N],
    f: [T; N],
}

impl<T: TableValue, const N: usize> InterpolatingTable<T, N> {
    pub fn new(x: [T; N], f: [T; N]) -> InterpolatingTable<T, N> {
        InterpolatingTable { x, f }
    }

    /// 檢查非空且 x 遞增（允許相等）
    pub fn try_new(x: [T; N], f: [T; N]) -> Result<InterpolatingTable<T, N>, LookupTableError> {
        validate(&x, &f).inspect_err(|error| debug!(%error, "rejected lookup table samples"))?;
        Ok(InterpolatingTable { x, f })
    }

    /// Copy samples out of slices whose lengths must both equal `N`.
    ///
    /// Sortedness is left to the caller, as with `new`.
    pub fn try_from_slices(x: &[T], f: &[T]) -> Result<InterpolatingTable<T, N>, LookupTableError> {
        let mismatch = LookupTableError::LengthMismatch {
            x_len: x.len(),
            f_len: f.len(),
        };
        let x: [T; N] = x.try_into().map_err(|_| mismatch.clone())?;
        let f: [T; N] = f.try_into().map_err(|_| mismatch)?;
        Ok(InterpolatingTable { x, f })
    }

    #[inline]
    pub fn get(&self, t: T) -> T {
        lookup(&self.x, &self.f, t)
    }

    pub fn slope(&self, t: T) -> T {
        slope(&self.x, &self.f, t)
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn x(&self) -> &[T; N] {
        &self.x
    }

    pub fn f(&self) -> &[T; N] {
        &self.f
    }
}

impl<T: TableValue, const N: usize> Curve<T> for InterpolatingTable<T, N> {
    fn value(&self, x: T) -> T {
        self.get(x)
    }

    fn derivative(&self, x: T) -> T {
        self.slope(x)
    }
}

impl<T: TableValue, const N: usize> NonparametricCurve<T> for InterpolatingTable<T, N> {
    fn points(&self) -> Vec<Point2D<T>> {
        self.x
            .iter()
            .zip(self.f.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    fn min_x(&self) -> Option<T> {
        self.x.first().copied()
    }

    fn max_x(&self) -> Option<T> {
        self.x.last().copied()
    }
}
