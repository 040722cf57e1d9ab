//! # Shared Utility Functions
//!
//! Display helpers used by the core and the web front end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - first N and last M characters with an ellipsis
//! - [`short_address`] - `0x1234...abcd`, the form used in headers and cards
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! assert_eq!(format_address(address, 6, 4), "0x71C7...976F");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(format_address(addr, 8, 6), "0x71C765...d8976F");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// `0x` plus four characters, then the last four.
pub fn short_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Insert comma separators (e.g., 1234567 -> "1,234,567").
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
        assert_eq!(format_address(addr, 6, 4), "0x71C7...976F");
        assert_eq!(format_address(addr, 8, 6), "0x71C765...d8976F");
        assert_eq!(format_address(addr, 2, 2), "0x...6F");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"), "0x71C7...976F");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
