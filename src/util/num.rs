/// Promotes an integer to a float.
///
/// Integers beyond `2^53` round to the nearest representable `f64`, the same
/// as an `int` to `double` conversion in C.
///
/// ## Example
/// ```
/// use minic::util::num::int_to_float;
///
/// assert_eq!(int_to_float(42), 42.0);
/// assert_eq!(int_to_float(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn int_to_float(value: i64) -> f64 {
    value as f64
}
