/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use rpntab::util::num::{MAX_SAFE_U64_INT, usize_to_f64_checked};
///
/// assert_eq!(usize_to_f64_checked(100, "too big!"), Ok(100.0));
///
/// let too_big = (MAX_SAFE_U64_INT + 1) as usize;
/// assert!(usize_to_f64_checked(too_big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(error),
    }
}

/// Safely converts an `i64` to a `usize` if and only if it is strictly
/// positive and representable.
///
/// ## Errors
/// Returns `Err(error)` for zero, negative values, or values too large for
/// the target's `usize`.
///
/// ## Example
/// ```
/// use rpntab::util::num::positive_i64_to_usize;
///
/// assert_eq!(positive_i64_to_usize(42, ()), Ok(42));
/// assert!(positive_i64_to_usize(0, ()).is_err());
/// assert!(positive_i64_to_usize(-1, ()).is_err());
/// ```
pub fn positive_i64_to_usize<E>(value: i64, error: E) -> Result<usize, E> {
    if value <= 0 {
        return Err(error);
    }

    usize::try_from(value).map_or(Err(error), Ok)
}
