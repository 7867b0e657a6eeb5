use num_traits::{
    Num,
    NumCast
};

/// 查表元素型別。
///
/// 需要四則運算、零值、偏序比較與 f64 之間的轉換；`f32`、`f64` 與各種
/// 整數皆自動滿足。插值一律在 f64 中計算，整數型別只在轉回 T 時截斷。
pub trait TableValue: Num + NumCast + PartialOrd + Copy {}

impl<T> TableValue for T where T: Num + NumCast + PartialOrd + Copy {}
