//! Address parsing.

use alloy::{hex, primitives::Address};

use crate::error::{AppError, Result};

/// Width of an account or contract address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Parse hex text into a canonical 20-byte address.
///
/// Accepts 40 hex digits with an optional `0x`/`0X` prefix, in any case.
/// Checksums are not enforced.
pub fn parse_address(text: &str) -> Result<Address> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidAddress("address cannot be empty".into()));
    }

    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.len() % 2 != 0 {
        return Err(AppError::InvalidAddress(format!("odd number of hex digits: {}", text)));
    }

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AppError::InvalidAddress(format!("non-hex characters: {}", text)));
    }

    let bytes = hex::decode(digits)
        .map_err(|e| AppError::InvalidAddress(format!("'{}': {}", text, e)))?;

    if bytes.len() != ADDRESS_LEN {
        return Err(AppError::InvalidAddress(format!(
            "expected 20 bytes, got {}: {}",
            bytes.len(),
            text
        )));
    }

    Ok(Address::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloy::primitives::address;

    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

    #[test]
    fn test_parse_address_case_and_prefix_insensitive() {
        let inputs = [
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48",
            "a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "  0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48 ",
        ];
        for input in inputs {
            assert_eq!(parse_address(input).unwrap(), USDC, "input: {input}");
        }
    }

    #[test]
    fn test_parse_address_bad_checksum_accepted() {
        // Mixed case that does not match EIP-55 still resolves to the same bytes.
        let parsed = parse_address("0xa0B86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap();
        assert_eq!(parsed, USDC);
    }

    #[test]
    fn test_parse_address_empty() {
        let err = parse_address("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);

        let err = parse_address("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);

        let err = parse_address("0x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    }

    #[test]
    fn test_parse_address_odd_length() {
        let err = parse_address("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb4").unwrap_err();
        assert!(err.to_string().contains("odd number"));
    }

    #[test]
    fn test_parse_address_non_hex() {
        let err = parse_address("0xZZb86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);

        let err = parse_address("not-a-valid-address").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    }

    #[test]
    fn test_parse_address_double_prefix() {
        let err = parse_address("0x0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap_err();
        assert!(err.to_string().contains("non-hex"));
    }

    #[test]
    fn test_parse_address_wrong_length() {
        let err = parse_address("0x1234").unwrap_err();
        assert!(err.to_string().contains("expected 20 bytes, got 2"));

        let too_long = format!("0x{}", "ab".repeat(32));
        let err = parse_address(&too_long).unwrap_err();
        assert!(err.to_string().contains("got 32"));
    }

    #[test]
    fn test_parse_address_zero() {
        let zero = parse_address("0x0000000000000000000000000000000000000000").unwrap();
        assert_eq!(zero, Address::ZERO);
    }
}
