//! Token balance types.

use alloy::primitives::{Address, U256};

/// Decimals of the native coin (wei per ether).
pub const NATIVE_DECIMALS: u8 = 18;

/// Result of one balance query.
///
/// Built fresh per query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    /// ERC20 contract queried.
    pub contract: Address,
    /// Account whose balance was queried.
    pub wallet: Address,
    /// Token name, when the contract exposes one.
    pub name: Option<String>,
    /// Token symbol, when the contract exposes one.
    pub symbol: Option<String>,
    /// Raw token balance in the smallest unit.
    pub balance: U256,
    /// Fractional digits used to scale `balance`.
    pub decimals: u8,
    /// Native coin balance in wei.
    pub eth_balance: U256,
    /// Block height observed when the balance was read.
    pub block: u64,
    /// Token balance rescaled to native precision, see [`labus_balance`].
    pub labus_balance: Option<U256>,
}

impl TokenBalance {
    /// Human-readable token balance, e.g. `"1.5"`.
    pub fn balance_string(&self) -> String {
        format_units(self.balance, self.decimals)
    }
}

/// Format a U256 value with decimals to a human-readable string.
///
/// Trailing fractional zeros are trimmed but at least one fractional digit
/// is kept, so whole amounts render as `"1.0"` and zero as `"0.0"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let value_str = value.to_string();
    let decimals = decimals as usize;

    let (integer, fraction) = if value_str.len() <= decimals {
        let padded = format!("{}{}", "0".repeat(decimals - value_str.len()), value_str);
        ("0".to_string(), padded)
    } else {
        let (integer, fraction) = value_str.split_at(value_str.len() - decimals);
        (integer.to_string(), fraction.to_string())
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}.0", integer)
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// Token balance expressed with native coin precision.
///
/// Rescales `balance` from `decimals` to 18 fractional digits so it can be
/// compared against the wei balance directly. Scaling down truncates;
/// scaling up saturates at `U256::MAX`. `_eth_balance` is part of the
/// policy inputs but does not currently affect the result.
pub fn labus_balance(balance: U256, decimals: u8, _eth_balance: U256) -> U256 {
    let ten = U256::from(10u8);
    if decimals <= NATIVE_DECIMALS {
        let factor = ten.pow(U256::from(NATIVE_DECIMALS - decimals));
        balance.saturating_mul(factor)
    } else {
        // 10^78 already exceeds U256::MAX, so every balance truncates to zero.
        match ten.checked_pow(U256::from(decimals - NATIVE_DECIMALS)) {
            Some(divisor) => balance / divisor,
            None => U256::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn sample(balance: U256, decimals: u8) -> TokenBalance {
        TokenBalance {
            contract: address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            wallet: address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            name: None,
            symbol: None,
            balance,
            decimals,
            eth_balance: U256::ZERO,
            block: 0,
            labus_balance: None,
        }
    }

    // ============================================================================
    // format_units Tests
    // ============================================================================

    #[test]
    fn test_format_units() {
        let one_eth = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(format_units(one_eth, 18), "1.0");

        let half_eth = U256::from(500_000_000_000_000_000u64);
        assert_eq!(format_units(half_eth, 18), "0.5");

        let usdc = U256::from(1_500_000u64);
        assert_eq!(format_units(usdc, 6), "1.5");
    }

    #[test]
    fn test_format_units_zero() {
        assert_eq!(format_units(U256::ZERO, 18), "0.0");
        assert_eq!(format_units(U256::ZERO, 6), "0.0");
        assert_eq!(format_units(U256::ZERO, 0), "0.0");
    }

    #[test]
    fn test_format_units_no_decimals() {
        assert_eq!(format_units(U256::from(12345u64), 0), "12345.0");
    }

    #[test]
    fn test_format_units_small_values() {
        assert_eq!(format_units(U256::from(1u64), 18), "0.000000000000000001");
        assert_eq!(format_units(U256::from(100u64), 18), "0.0000000000000001");
    }

    #[test]
    fn test_format_units_exact_width() {
        // As many digits as decimals: no integer digits at all.
        assert_eq!(format_units(U256::from(123456u64), 6), "0.123456");
    }

    #[test]
    fn test_format_units_large_values() {
        let million_eth = U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_units(million_eth, 18), "1000000.0");

        assert_eq!(
            format_units(U256::MAX, 18),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639935"
        );
    }

    #[test]
    fn test_format_units_precision() {
        let value = U256::from(1_123_456_789_012_345_678u64);
        assert_eq!(format_units(value, 18), "1.123456789012345678");
    }

    // ============================================================================
    // labus_balance Tests
    // ============================================================================

    #[test]
    fn test_labus_balance_scales_up() {
        // 1.5 USDC -> 1.5 * 10^18
        let scaled = labus_balance(U256::from(1_500_000u64), 6, U256::ZERO);
        assert_eq!(scaled, U256::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn test_labus_balance_native_precision_unchanged() {
        let value = U256::from(42u64);
        assert_eq!(labus_balance(value, 18, U256::from(7u64)), value);
    }

    #[test]
    fn test_labus_balance_scales_down_truncating() {
        // 24 decimals: drop six digits.
        let scaled = labus_balance(U256::from(1_999_999u64), 24, U256::ZERO);
        assert_eq!(scaled, U256::from(1u64));
    }

    #[test]
    fn test_labus_balance_huge_decimals_truncate_to_zero() {
        assert_eq!(labus_balance(U256::MAX, 100, U256::ZERO), U256::ZERO);
        assert_eq!(labus_balance(U256::MAX, 255, U256::ZERO), U256::ZERO);
        // 10^77 still fits, so the largest balance keeps one digit.
        assert_eq!(labus_balance(U256::MAX, 95, U256::ZERO), U256::from(1u8));
    }

    #[test]
    fn test_labus_balance_saturates() {
        assert_eq!(labus_balance(U256::MAX, 0, U256::ZERO), U256::MAX);
    }

    #[test]
    fn test_labus_balance_ignores_eth_balance() {
        let a = labus_balance(U256::from(5u64), 8, U256::ZERO);
        let b = labus_balance(U256::from(5u64), 8, U256::from(10u64).pow(U256::from(20u64)));
        assert_eq!(a, b);
    }

    // ============================================================================
    // TokenBalance Tests
    // ============================================================================

    #[test]
    fn test_balance_string() {
        let tb = sample(U256::from(1_000_000_000_000_000_000u64), 18);
        assert_eq!(tb.balance_string(), "1.0");
    }
}
