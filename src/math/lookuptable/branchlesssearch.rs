// ─────────────────────────────────────────────────────────────────────────────
// Branchless binary search
// ─────────────────────────────────────────────────────────────────────────────
//
// 以位元遮罩取代 if/else 更新 low/high：
//
//   mask = -(t > x[mid])          全 1 或全 0
//   low  = (mid & mask) | (low  & !mask)
//   high = (mid & !mask) | (high & mask)
//
// 例：mid = 0011, low = 0000, high = 1001
//   t > x[mid]  → mask = 1111 → low = 0011, high = 1001
//   t <= x[mid] → mask = 0000 → low = 0000, high = 0011
//
// 迴圈內沒有與資料相關的分支，迭代次數只取決於 x.len()。

/// Locate the interval `[low, high]` (with `high == low + 1`) that brackets `t`.
///
/// Callers must guarantee `x.len() >= 2` and `x[0] < t < x[x.len() - 1]`
/// with `x` sorted ascending; under those conditions the result satisfies
/// `x[low] < t <= x[high]`.
#[inline]
pub(crate) fn branchless_bracket<T: PartialOrd>(x: &[T], t: &T) -> (usize, usize) {
    let mut low: usize = 0;
    let mut high: usize = x.len() - 1;

    while high - low > 1 {
        let mid = low + ((high - low) >> 1);
        let mask = ((*t > x[mid]) as usize).wrapping_neg();
        low = (mid & mask) | (low & !mask);
        high = (mid & !mask) | (high & mask);
    }

    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_samples_is_single_bracket() {
        let x = [0.0, 5.0];
        assert_eq!(branchless_bracket(&x, &2.5), (0, 1));
    }

    #[test]
    fn test_bracket_contains_target() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        for k in 1..80 {
            let t = k as f64 * 0.1;
            let (low, high) = branchless_bracket(&x, &t);
            assert_eq!(high, low + 1);
            assert!(x[low] < t && t <= x[high], "t = {t}, bracket = ({low}, {high})");
        }
    }

    #[test]
    fn test_exact_sample_lands_on_upper_bound() {
        let x = [0, 10, 20, 30, 40];
        assert_eq!(branchless_bracket(&x, &20), (1, 2));
        assert_eq!(branchless_bracket(&x, &30), (2, 3));
        assert_eq!(branchless_bracket(&x, &10), (0, 1));
    }

    #[test]
    fn test_duplicate_samples_pick_left_interval() {
        // x[low] < t 恆成立，重複點落在左側區間
        let x = [0.0, 1.0, 1.0, 2.0];
        assert_eq!(branchless_bracket(&x, &1.0), (0, 1));
        assert_eq!(branchless_bracket(&x, &1.5), (2, 3));
    }

    #[test]
    fn test_matches_partition_point() {
        let x: Vec<i64> = (0..37).map(|i| i * i).collect();
        for t in 1..(36 * 36) {
            let (low, high) = branchless_bracket(&x, &t);
            let expected_high = x.partition_point(|&v| v < t);
            assert_eq!(high, expected_high);
            assert_eq!(low, expected_high - 1);
        }
    }
}
