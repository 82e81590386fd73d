//! Exact wei→ether conversion.

use alloy_primitives::{utils::format_ether, U256};

/// Convert a wei balance to ether, narrowed to `f64`.
///
/// The division by 10^18 happens in decimal over the full 256-bit value
/// via [`format_ether`]; only the final string→f64 step rounds (to the
/// nearest representable double). Balances routinely exceed 2^53 wei, so
/// converting to `f64` before dividing would corrupt the integer part.
pub fn wei_to_ether(wei: U256) -> f64 {
    // format_ether output is always `<digits>.<18 digits>`
    format_ether(wei)
        .parse()
        .expect("decimal ether string is a valid f64")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u256(s: &str) -> U256 {
        s.parse().unwrap()
    }

    #[test]
    fn zero_wei() {
        assert_eq!(wei_to_ether(U256::ZERO), 0.0);
    }

    #[test]
    fn one_ether() {
        assert_eq!(wei_to_ether(u256("1000000000000000000")), 1.0);
    }

    #[test]
    fn one_wei() {
        let v = wei_to_ether(U256::from(1));
        assert!((v - 1e-18).abs() < 1e-30);
    }

    #[test]
    fn half_ether() {
        assert_eq!(wei_to_ether(u256("500000000000000000")), 0.5);
    }

    #[test]
    fn integer_part_survives_past_f64_precision() {
        // 123456789012345678900 wei does not fit in f64 exactly; the
        // result must still be the nearest double of the true quotient.
        let v = wei_to_ether(u256("123456789012345678900"));
        let expected: f64 = "123.4567890123456789".parse().unwrap();
        assert_eq!(v, expected);
    }

    #[test]
    fn beyond_u128_range() {
        // 10^45 wei = 10^27 ether, far outside u128 as wei
        let wei = U256::from(10).pow(U256::from(45));
        assert_eq!(wei_to_ether(wei), 1e27);
    }

    #[test]
    fn max_balance_is_finite() {
        let v = wei_to_ether(U256::MAX);
        assert!(v.is_finite());
        assert!(v > 1e58);
    }
}
