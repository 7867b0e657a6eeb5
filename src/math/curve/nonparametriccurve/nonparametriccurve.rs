use crate::math::lookuptable::tablevalue::TableValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D<T> {
    x: T,
    y: T
}

impl<T: TableValue> Point2D<T> {
    pub fn new(x: T, y: T) -> Point2D<T> {
        Point2D { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D<T>, rhs_pt: &Point2D<T>) -> T {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }
}

/// 由離散樣本點定義的曲線；空表時 `min_x` / `max_x` 為 `None`。
pub trait NonparametricCurve<T> {
    fn points(&self) -> Vec<Point2D<T>>;

    fn min_x(&self) -> Option<T>;

    fn max_x(&self) -> Option<T>;
}
