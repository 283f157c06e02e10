//! Percentage discount arithmetic.

/// Price after taking `percent` percent off.
///
/// No rounding is applied and inputs are not validated; a percentage
/// outside `0..=100` yields whatever the arithmetic produces.
///
/// ```
/// use kedai_commerce::count_discount;
/// assert_eq!(count_discount(75_000.0, 10.0), 67_500.0);
/// ```
pub fn count_discount(price: f64, percent: f64) -> f64 {
    price - (price * percent / 100.0)
}
