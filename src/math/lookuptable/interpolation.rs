use std::cmp::Ordering;

use num_traits::NumCast;
use tracing::trace;

use crate::math::lookuptable::branchlesssearch::branchless_bracket;
use crate::math::lookuptable::lookuptableerror::LookupTableError;
use crate::math::lookuptable::tablevalue::TableValue;

// ─────────────────────────────────────────────
// 定位
// ─────────────────────────────────────────────

enum Location<T> {
    /// 空表或 x、f 長度不一致
    Degenerate,
    /// t 不在 (x[0], x[n-1]) 內，直接回傳端點值
    Clamped(T),
    Bracket(usize, usize),
}

fn locate<T: TableValue>(x: &[T], f: &[T], t: T) -> Location<T> {
    if x.is_empty() || f.len() != x.len() {
        trace!(x_len = x.len(), f_len = f.len(), "degenerate lookup table");
        return Location::Degenerate;
    }

    let last = x.len() - 1;
    if t <= x[0] {
        return Location::Clamped(f[0]);
    }
    if t >= x[last] {
        return Location::Clamped(f[last]);
    }

    let (low, high) = branchless_bracket(x, &t);
    Location::Bracket(low, high)
}

// ─────────────────────────────────────────────
// 求值
// ─────────────────────────────────────────────

/// Linearly interpolated value of `f` over `x` at `t`.
///
/// Queries outside `[x[0], x[n-1]]` clamp to the end values. An empty table,
/// mismatched lengths or a zero-width bracket all yield `T::zero()`.
pub fn lookup<T: TableValue>(x: &[T], f: &[T], t: T) -> T {
    match locate(x, f, t) {
        Location::Degenerate => T::zero(),
        Location::Clamped(value) => value,
        Location::Bracket(low, high) => interpolate_bracket(x, f, low, high, t),
    }
}

/// Evaluate the line through `(x[low], f[low])` and `(x[high], f[high])` at `t`.
///
/// 使用斜率/截距形式，於 f64 中計算，最後才轉回 T（整數型別在此截斷）：
///   (f_h - f_l) / d * t + (x_h * f_l - x_l * f_h) / d，其中 d = x_h - x_l
pub fn interpolate_bracket<T: TableValue>(
    x: &[T],
    f: &[T],
    low: usize,
    high: usize,
    t: T,
) -> T {
    let Some(bracket) = Bracket::from_samples(x, f, low, high) else {
        return T::zero();
    };
    let Some(t) = t.to_f64() else {
        return T::zero();
    };

    let denom = bracket.x_high - bracket.x_low;
    if denom == 0.0 {
        trace!(low, high, "zero-width bracket");
        return T::zero();
    }

    let value = (bracket.f_high - bracket.f_low) / denom * t
        + (bracket.x_high * bracket.f_low - bracket.x_low * bracket.f_high) / denom;
    cast_or_zero(value)
}

/// Slope of the bracket containing `t`.
///
/// Zero in the clamped regions (including the end samples themselves), on
/// degenerate tables and on zero-width brackets.
pub fn slope<T: TableValue>(x: &[T], f: &[T], t: T) -> T {
    match locate(x, f, t) {
        Location::Degenerate | Location::Clamped(_) => T::zero(),
        Location::Bracket(low, high) => match Bracket::from_samples(x, f, low, high) {
            Some(bracket) if bracket.x_high != bracket.x_low => cast_or_zero(
                (bracket.f_high - bracket.f_low) / (bracket.x_high - bracket.x_low),
            ),
            _ => T::zero(),
        },
    }
}

struct Bracket {
    x_low: f64,
    x_high: f64,
    f_low: f64,
    f_high: f64,
}

impl Bracket {
    fn from_samples<T: TableValue>(x: &[T], f: &[T], low: usize, high: usize) -> Option<Bracket> {
        Some(Bracket {
            x_low: x[low].to_f64()?,
            x_high: x[high].to_f64()?,
            f_low: f[low].to_f64()?,
            f_high: f[high].to_f64()?,
        })
    }
}

/// 無法表示於 T 時（例如超出整數範圍）回傳零
fn cast_or_zero<T: TableValue>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::zero)
}

// ─────────────────────────────────────────────
// 檢查
// ─────────────────────────────────────────────

/// Check the preconditions the unchecked constructors leave to the caller.
pub fn validate<T: PartialOrd>(x: &[T], f: &[T]) -> Result<(), LookupTableError> {
    if x.len() != f.len() {
        return Err(LookupTableError::LengthMismatch {
            x_len: x.len(),
            f_len: f.len(),
        });
    }
    if x.is_empty() {
        return Err(LookupTableError::Empty);
    }

    for (index, pair) in x.windows(2).enumerate() {
        match pair[0].partial_cmp(&pair[1]) {
            Some(Ordering::Greater) => return Err(LookupTableError::Unsorted { index }),
            None => return Err(LookupTableError::Incomparable { index }),
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lookup_clamps_and_interpolates() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let f = [0.0, 10.0, 20.0, 30.0, 40.0];

        assert_eq!(lookup(&x, &f, -1.0), 0.0);
        assert_eq!(lookup(&x, &f, 0.5), 5.0);
        assert_eq!(lookup(&x, &f, 2.0), 20.0);
        assert_eq!(lookup(&x, &f, 3.5), 35.0);
        assert_eq!(lookup(&x, &f, 10.0), 40.0);
    }

    #[test]
    fn test_lookup_mismatched_lengths_is_zero() {
        let x = [0.0, 1.0, 2.0];
        let f = [5.0, 6.0];
        for t in [-1.0, 0.0, 0.5, 2.0, 3.0] {
            assert_eq!(lookup(&x, &f, t), 0.0);
        }
    }

    #[test]
    fn test_lookup_empty_is_zero() {
        let x: [f64; 0] = [];
        assert_eq!(lookup(&x, &x, 1.0), 0.0);
        assert_eq!(slope(&x, &x, 1.0), 0.0);
    }

    #[test]
    fn test_single_sample_always_clamps() {
        let x = [3.0];
        let f = [7.0];
        assert_eq!(lookup(&x, &f, -100.0), 7.0);
        assert_eq!(lookup(&x, &f, 3.0), 7.0);
        assert_eq!(lookup(&x, &f, 100.0), 7.0);
    }

    #[test]
    fn test_zero_width_bracket_is_zero() {
        let x = [0.0, 1.0, 1.0, 2.0];
        let f = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(interpolate_bracket(&x, &f, 1, 2, 1.0), 0.0);
    }

    #[test]
    fn test_interpolate_bracket_matches_point_slope_form() {
        let x = [1.5, 4.25];
        let f = [-3.0, 8.0];
        for k in 0..=10 {
            let t = 1.5 + (4.25 - 1.5) * k as f64 / 10.0;
            let expected = f[0] + (t - x[0]) * (f[1] - f[0]) / (x[1] - x[0]);
            assert_relative_eq!(interpolate_bracket(&x, &f, 0, 1, t), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_integer_samples_truncate_after_interpolating() {
        let x = [0, 10, 20];
        let f = [0, 100, 400];
        assert_eq!(lookup(&x, &f, 5), 50);
        assert_eq!(lookup(&x, &f, 15), 250);

        // 斜率 2.5 不先截斷，只在最後轉回整數時截斷
        assert_eq!(lookup(&[0i32, 4], &[0i32, 10], 2), 5);
        assert_eq!(lookup(&[0i64, 100], &[0i64, 250], 99), 247);
        assert_eq!(lookup(&[0u8, 3], &[0u8, 10], 2), 6);
        assert_eq!(slope(&[0i32, 4], &[0i32, 10], 1), 2);
    }

    #[test]
    fn test_out_of_range_result_is_zero() {
        // 外插不會發生，但超出 T 範圍的中間結果仍以零回傳
        assert_eq!(cast_or_zero::<u8>(300.0), 0);
        assert_eq!(cast_or_zero::<i32>(-7.9), -7);
    }

    #[test]
    fn test_slope() {
        let x = [0.0, 1.0, 3.0];
        let f = [0.0, 2.0, 8.0];
        assert_eq!(slope(&x, &f, 0.5), 2.0);
        assert_eq!(slope(&x, &f, 2.0), 3.0);
        assert_eq!(slope(&x, &f, 1.0), 2.0);
        assert_eq!(slope(&x, &f, -1.0), 0.0);
        assert_eq!(slope(&x, &f, 3.0), 0.0);
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(&[0.0, 1.0, 1.0, 2.0], &[0.0; 4]), Ok(()));
        assert_eq!(validate::<f64>(&[], &[]), Err(LookupTableError::Empty));
        assert_eq!(
            validate(&[0.0, 1.0], &[0.0]),
            Err(LookupTableError::LengthMismatch { x_len: 2, f_len: 1 })
        );
        assert_eq!(
            validate(&[0.0, 2.0, 1.0], &[0.0; 3]),
            Err(LookupTableError::Unsorted { index: 1 })
        );
        assert_eq!(
            validate(&[0.0, f64::NAN, 1.0], &[0.0; 3]),
            Err(LookupTableError::Incomparable { index: 0 })
        );
    }
}
