use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Converts an exact rational into an approximate `f64`.
///
/// The integer part converts directly. The remainder is scaled by 2^53
/// before the integer division so that the fractional part keeps a full
/// mantissa of precision. Values beyond the double range saturate to
/// infinity, values below it flush to zero.
pub fn ratio_to_f64(num: &BigRational) -> f64 {
    let (trunc, rem) = num.numer().div_rem(num.denom());

    let int_part = match trunc.to_f64() {
        Some(val) => val,
        None => {
            return if num.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
    };

    if rem.is_zero() {
        return int_part;
    }

    // `rem` carries the sign of the value, the denominator is always
    // positive
    let scaled: BigInt = (rem << 53) / num.denom();
    let frac_part = scaled.to_f64().unwrap_or(0.0) / (1u64 << 53) as f64;

    int_part + frac_part
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigInt;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(numer.into(), denom.into())
    }

    #[test]
    fn it_converts_integers_exactly() {
        assert_eq!(ratio_to_f64(&ratio(0, 1)), 0.0);
        assert_eq!(ratio_to_f64(&ratio(42, 1)), 42.0);
        assert_eq!(ratio_to_f64(&ratio(-42, 1)), -42.0);
    }

    #[test]
    fn it_approximates_fractions() {
        assert!((ratio_to_f64(&ratio(1, 3)) - 1.0 / 3.0).abs() < 1e-15);
        assert!((ratio_to_f64(&ratio(-7, 2)) - (-3.5)).abs() < 1e-15);
        assert!((ratio_to_f64(&ratio(22, 7)) - 22.0 / 7.0).abs() < 1e-15);
    }

    #[test]
    fn it_saturates_out_of_range_values() {
        let huge = BigRational::from_integer(num_traits::pow(BigInt::from(10), 400));
        assert_eq!(ratio_to_f64(&huge), f64::INFINITY);
        assert_eq!(ratio_to_f64(&-huge), f64::NEG_INFINITY);
    }

    #[test]
    fn it_flushes_tiny_values_to_zero() {
        let tiny = BigRational::new(1.into(), num_traits::pow(BigInt::from(10), 400));
        assert_eq!(ratio_to_f64(&tiny), 0.0);
    }
}
