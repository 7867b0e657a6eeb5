use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};
use crate::math::lookuptable::interpolatingtable::InterpolatingTable;
use crate::math::lookuptable::interpolation::{
    lookup,
    slope,
    validate
};
use crate::math::lookuptable::lookuptableerror::LookupTableError;
use crate::math::lookuptable::tablevalue::TableValue;

/// Runtime-length counterpart of [`InterpolatingTable`].
///
/// Owns its samples in `Vec`s. Because the lengths are not tied together at
/// the type level, `new` accepts mismatched `x`/`f`; such a table answers
/// every query with zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicInterpolatingTable<T> {
    x: Vec<T>,
    f: Vec<T>,
}

impl<T: TableValue> DynamicInterpolatingTable<T> {
    pub fn new(x: Vec<T>, f: Vec<T>) -> DynamicInterpolatingTable<T> {
        DynamicInterpolatingTable { x, f }
    }

    pub fn try_new(x: Vec<T>, f: Vec<T>) -> Result<DynamicInterpolatingTable<T>, LookupTableError> {
        validate(&x, &f).inspect_err(|error| debug!(%error, "rejected lookup table samples"))?;
        Ok(DynamicInterpolatingTable { x, f })
    }

    #[inline]
    pub fn get(&self, t: T) -> T {
        lookup(&self.x, &self.f, t)
    }

    pub fn slope(&self, t: T) -> T {
        slope(&self.x, &self.f, t)
    }

    /// 以 x 的長度為準
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[T] {
        &self.x
    }

    pub fn f(&self) -> &[T] {
        &self.f
    }
}

impl<T: TableValue, const N: usize> From<InterpolatingTable<T, N>> for DynamicInterpolatingTable<T> {
    fn from(table: InterpolatingTable<T, N>) -> Self {
        DynamicInterpolatingTable {
            x: table.x().to_vec(),
            f: table.f().to_vec(),
        }
    }
}

impl<T: TableValue> Curve<T> for DynamicInterpolatingTable<T> {
    fn value(&self, x: T) -> T {
        self.get(x)
    }

    fn derivative(&self, x: T) -> T {
        self.slope(x)
    }
}

impl<T: TableValue> NonparametricCurve<T> for DynamicInterpolatingTable<T> {
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
