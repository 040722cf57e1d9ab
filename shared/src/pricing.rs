//! # Prices
//!
//! Money is held as whole US cents. Discounts round half up to the cent.
//!
//! ```rust
//! use shared::pricing::Usd;
//!
//! let price = Usd::from_cents(8999);
//! assert_eq!(price.apply_discount(15).to_string(), "$76.49");
//! assert_eq!(Usd::parse("12.5").unwrap(), Usd::from_cents(1250));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::AmountError;
use crate::utils::group_thousands;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(u64);

impl Usd {
    pub const ZERO: Usd = Usd(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse user input such as `12`, `12.5`, `$1,250.00`.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed.as_str(), ""));
        let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
            return Err(AmountError::Malformed(input.to_string()));
        }
        if frac.len() > 2 {
            return Err(AmountError::TooPrecise(2));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| AmountError::Overflow)?
        };
        let frac: u64 = format!("{:0<2}", frac).parse().map_err(|_| AmountError::Malformed(input.to_string()))?;

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Price after a percentage discount. Percentages above 100 count as 100.
    pub fn apply_discount(self, percent: u8) -> Self {
        let keep = 100 - u128::from(percent.min(100));
        let cents = (u128::from(self.0) * keep + 50) / 100;
        Self(cents as u64)
    }

    pub fn saturating_sub(self, other: Usd) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", group_thousands(self.0 / 100), self.0 % 100)
    }
}

impl Add for Usd {
    type Output = Usd;

    fn add(self, rhs: Usd) -> Usd {
        Usd(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Usd>>(iter: I) -> Usd {
        iter.fold(Usd::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Usd::from_cents(29999).to_string(), "$299.99");
        assert_eq!(Usd::from_cents(5).to_string(), "$0.05");
        assert_eq!(Usd::from_cents(123456789).to_string(), "$1,234,567.89");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Usd::parse("12").unwrap(), Usd::from_cents(1200));
        assert_eq!(Usd::parse(" 12.5 ").unwrap(), Usd::from_cents(1250));
        assert_eq!(Usd::parse("$1,250.05").unwrap(), Usd::from_cents(125005));
        assert_eq!(Usd::parse(".5").unwrap(), Usd::from_cents(50));
        assert_eq!(Usd::parse("3.").unwrap(), Usd::from_cents(300));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Usd::parse(""), Err(AmountError::Empty));
        assert_eq!(Usd::parse("  "), Err(AmountError::Empty));
        assert!(matches!(Usd::parse("abc"), Err(AmountError::Malformed(_))));
        assert!(matches!(Usd::parse("-5"), Err(AmountError::Malformed(_))));
        assert!(matches!(Usd::parse("."), Err(AmountError::Malformed(_))));
        assert!(matches!(Usd::parse("1.2.3"), Err(AmountError::Malformed(_))));
        assert_eq!(Usd::parse("1.234"), Err(AmountError::TooPrecise(2)));
        assert_eq!(Usd::parse("99999999999999999999"), Err(AmountError::Overflow));
    }

    #[test]
    fn test_discount() {
        assert_eq!(Usd::from_cents(8999).apply_discount(15), Usd::from_cents(7649));
        assert_eq!(Usd::from_cents(7999).apply_discount(20), Usd::from_cents(6399));
        assert_eq!(Usd::from_cents(29999).apply_discount(25), Usd::from_cents(22499));
        assert_eq!(Usd::from_cents(1000).apply_discount(0), Usd::from_cents(1000));
        assert_eq!(Usd::from_cents(1000).apply_discount(150), Usd::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Usd = [Usd::from_cents(100), Usd::from_cents(250)].into_iter().sum();
        assert_eq!(total, Usd::from_cents(350));
    }
}
