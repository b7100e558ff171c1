/// Divides `numerator` by `denominator`, degrading to `0.0` instead of producing
/// `NaN` or an infinity.
///
/// Every ratio and average in a report goes through this function.
///
/// # Arguments
///
/// * `numerator` - The dividend. A non-finite value is treated as `0.0`.
/// * `denominator` - The divisor. Anything that is not a positive finite number yields `0.0`.
///
/// # Returns
///
/// `numerator / denominator`, or `0.0` when the division is not meaningful.
pub fn divide(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::divide;

    #[test]
    fn divides_by_positive_denominator() {
        assert_eq!(divide(10.0, 4.0), 2.5);
        assert_eq!(divide(0.0, 7.0), 0.0);
    }

    #[test]
    fn zero_denominator_yields_zero() {
        for x in [0.0, 1.0, 1e12, -3.0] {
            assert_eq!(divide(x, 0.0), 0.0);
        }
    }

    #[test]
    fn negative_or_non_finite_denominator_yields_zero() {
        assert_eq!(divide(5.0, -1.0), 0.0);
        assert_eq!(divide(5.0, f64::NAN), 0.0);
        assert_eq!(divide(5.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn non_finite_numerator_yields_zero() {
        assert_eq!(divide(f64::NAN, 3.0), 0.0);
        assert_eq!(divide(f64::INFINITY, 3.0), 0.0);
    }

    #[test]
    fn overflowing_quotient_yields_zero() {
        assert_eq!(divide(f64::MAX, f64::MIN_POSITIVE), 0.0);
    }
}
