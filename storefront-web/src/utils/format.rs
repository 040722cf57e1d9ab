//! # Formatting Utilities for the Storefront
//!
//! Display helpers specific to the web app. Prices format through
//! [`shared::pricing::Usd`], addresses through [`shared::utils::short_address`].

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Format wei as ether with 4 decimals, truncating (e.g. 15e15 -> "0.0150 ETH").
///
/// # Examples
///
/// ```rust
/// use storefront_web::utils::format::format_wei;
///
/// assert_eq!(format_wei(1_500_000_000_000_000_000, "ETH"), "1.5000 ETH");
/// ```
pub fn format_wei(wei: u128, symbol: &str) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = (wei % WEI_PER_ETHER) / 100_000_000_000_000;
    format!("{}.{:04} {}", whole, frac, symbol)
}

/// Progress label, e.g. "42% paid".
pub fn format_paid_percent(percent: u8) -> String {
    format!("{}% paid", percent)
}

/// Chain id as shown in the network card.
pub fn format_chain_id(chain_id: u64) -> String {
    if chain_id == 0 {
        "-".to_string()
    } else {
        chain_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wei() {
        assert_eq!(format_wei(15_000_000_000_000_000, "ETH"), "0.0150 ETH");
        assert_eq!(format_wei(0, "ETH"), "0.0000 ETH");
        // Below display precision.
        assert_eq!(format_wei(1, "ETH"), "0.0000 ETH");
        assert_eq!(format_wei(2 * WEI_PER_ETHER + 123_456_789_000_000_000, "ETH"), "2.1234 ETH");
    }

    #[test]
    fn test_small_labels() {
        assert_eq!(format_paid_percent(42), "42% paid");
        assert_eq!(format_chain_id(0), "-");
        assert_eq!(format_chain_id(8453), "8453");
    }
}
