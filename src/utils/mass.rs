pub const PROTON_MASS: f64 = 1.007276;

/// Relative deviation of `observed` from `expected`, in parts per million,
/// rounded to the nearest integer.
///
/// Returns `None` when the deviation is undefined: a zero (or negative)
/// expected value, or any non-finite input.
///
/// ```
/// use lipidquery::utils::mass::ppm_difference;
///
/// assert_eq!(ppm_difference(1000.01, 1000.0), Some(10));
/// assert_eq!(ppm_difference(999.99, 1000.0), Some(10));
/// assert_eq!(ppm_difference(1.0, 0.0), None);
/// ```
pub fn ppm_difference(observed: f64, expected: f64) -> Option<u64> {
    if !observed.is_finite() || !expected.is_finite() || expected <= 0.0 {
        return None;
    }
    let ppm = ((observed - expected).abs() / expected * 1e6).round();
    // f64 -> u64 saturates, so absurd deviations still compare as "too far".
    Some(ppm as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_difference_rounds() {
        // 4.4 ppm rounds down, 4.6 ppm rounds up.
        assert_eq!(ppm_difference(100.00044, 100.0), Some(4));
        assert_eq!(ppm_difference(100.00046, 100.0), Some(5));
    }

    #[test]
    fn test_ppm_difference_is_symmetric_in_sign() {
        let above = ppm_difference(21.982, 21.981942);
        let below = ppm_difference(21.981884, 21.981942);
        assert_eq!(above, below);
        assert_eq!(above, Some(3));
    }

    #[test]
    fn test_ppm_difference_undefined() {
        assert_eq!(ppm_difference(1.0, 0.0), None);
        assert_eq!(ppm_difference(1.0, -1.0), None);
        assert_eq!(ppm_difference(f64::NAN, 1.0), None);
        assert_eq!(ppm_difference(1.0, f64::INFINITY), None);
    }
}
