/// Round to one decimal place.
///
/// Ties are broken to even on the exact binary value of `value`, so
/// `0.25` gives `0.2` while `0.35` (stored as 0.34999...) gives `0.3`.
pub fn round_to_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse::<f64>().unwrap_or(value)
}

/// Arithmetic mean of an integer sum over `count` items, rounded with
/// [round_to_one_decimal]. `None` when `count` is zero.
pub fn rounded_mean(sum: i128, count: usize) -> Option<f64> {
    match count {
        0 => None,
        n => Some(round_to_one_decimal(sum as f64 / n as f64)),
    }
}
