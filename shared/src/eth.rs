//! # Ether Amounts and Addresses
//!
//! Input checks for the transfer panel. Amounts are converted to wei with
//! integer arithmetic; `value` is handed to the wallet as a JSON-RPC hex
//! quantity.

use crate::error::AmountError;

pub const ETHER_DECIMALS: u32 = 18;
const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// `0x` followed by exactly 40 hex digits. Checksums are not verified.
pub fn is_valid_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Parse a decimal ether amount such as `0.015` into wei.
pub fn parse_ether(input: &str) -> Result<u128, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
        return Err(AmountError::Malformed(input.to_string()));
    }
    if frac.len() > ETHER_DECIMALS as usize {
        return Err(AmountError::TooPrecise(ETHER_DECIMALS));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| AmountError::Overflow)?
    };
    let frac: u128 = if frac.is_empty() {
        0
    } else {
        format!("{:0<width$}", frac, width = ETHER_DECIMALS as usize)
            .parse()
            .map_err(|_| AmountError::Malformed(input.to_string()))?
    };

    whole
        .checked_mul(WEI_PER_ETHER)
        .and_then(|w| w.checked_add(frac))
        .ok_or(AmountError::Overflow)
}

/// JSON-RPC quantity encoding: lowercase hex, no leading zeros.
pub fn to_hex_quantity(value: u128) -> String {
    format!("{:#x}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"));
        assert!(!is_valid_address("71C7656EC7ab88b098defB751B7401B5f6d8976F"));
        assert!(!is_valid_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976"));
        assert!(!is_valid_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976G"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn test_parse_ether() {
        assert_eq!(parse_ether("1").unwrap(), WEI_PER_ETHER);
        assert_eq!(parse_ether("0.015").unwrap(), 15_000_000_000_000_000);
        assert_eq!(parse_ether(".5").unwrap(), WEI_PER_ETHER / 2);
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), 1);
    }

    #[test]
    fn test_parse_ether_rejects() {
        assert_eq!(parse_ether(""), Err(AmountError::Empty));
        assert!(matches!(parse_ether("1e18"), Err(AmountError::Malformed(_))));
        assert_eq!(parse_ether("0.0000000000000000001"), Err(AmountError::TooPrecise(18)));
        assert_eq!(
            parse_ether("999999999999999999999999999999999999999"),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_hex_quantity() {
        assert_eq!(to_hex_quantity(0), "0x0");
        assert_eq!(to_hex_quantity(WEI_PER_ETHER), "0xde0b6b3a7640000");
    }
}
