// src/units.rs
use crate::error::{EtherscanError, Result};

/// Number of wei in one ether.
pub const WEI_PER_ETHER: f64 = 1e18;

/// Convert a wei amount into ether using native floating-point division.
///
/// The mapping is pure and stateless; precision is whatever `f64` division
/// gives, so values above 2^53 wei lose their lowest digits.
pub fn wei_to_ether(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETHER
}

/// Parse a decimal wei string as returned by the API.
pub fn parse_wei(raw: &str) -> Result<u128> {
    raw.trim()
        .parse::<u128>()
        .map_err(|e| EtherscanError::Parse(format!("invalid wei amount `{}`: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_wei_is_zero_ether() {
        assert_eq!(wei_to_ether(0), 0.0);
    }

    #[test]
    fn test_one_ether() {
        assert_eq!(wei_to_ether(1_000_000_000_000_000_000), 1.0);
    }

    #[test]
    fn test_fractional_ether() {
        assert_eq!(wei_to_ether(1_500_000_000_000_000_000), 1.5);
        assert_eq!(wei_to_ether(500_000_000_000_000_000), 0.5);
    }

    #[test]
    fn test_one_wei() {
        assert_eq!(wei_to_ether(1), 1e-18);
    }

    #[test]
    fn test_parse_wei_accepts_decimal_string() {
        assert_eq!(parse_wei("1000000000000000000").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_wei("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_wei_tolerates_surrounding_whitespace() {
        assert_eq!(parse_wei(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_wei_rejects_garbage() {
        assert!(parse_wei("").is_err());
        assert!(parse_wei("0x10").is_err());
        assert!(parse_wei("12.5").is_err());
        assert!(parse_wei("-3").is_err());
    }
}
