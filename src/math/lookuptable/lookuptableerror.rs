use thiserror::Error;

/// Errors returned by the checked constructors.
///
/// Queries never fail; see `interpolation::lookup` for the zero fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupTableError {
    #[error("lookup table has no samples")]
    Empty,

    #[error("sample length mismatch: x has {x_len}, f has {f_len}")]
    LengthMismatch { x_len: usize, f_len: usize },

    #[error("independent samples not sorted ascending at index {index}")]
    Unsorted { index: usize },

    #[error("independent samples at index {index} cannot be ordered")]
    Incomparable { index: usize },
}
