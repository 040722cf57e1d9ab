//! # Full and Top-up Payments
//!
//! A product can be paid in one go or topped up in arbitrary slices until
//! its final price is covered. [`PurchaseProgress`] tracks what has been
//! paid so far; [`plan_payment`] validates the next payment against it.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::dto::PurchaseRecord;
use crate::error::PaymentError;
use crate::pricing::Usd;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Full,
    Partial,
}

/// Amount paid toward one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseProgress {
    pub total: Usd,
    pub paid: Usd,
}

impl PurchaseProgress {
    pub fn new(total: Usd, paid: Usd) -> Self {
        Self { total, paid }
    }

    /// Sum the records that belong to `product`.
    pub fn from_records(product: &Product, records: &[PurchaseRecord]) -> Self {
        let paid = records
            .iter()
            .filter(|r| r.product_id == product.id)
            .map(|r| Usd::from_cents(r.amount_cents))
            .sum();
        Self::new(product.final_price(), paid)
    }

    pub fn remaining(&self) -> Usd {
        self.total.saturating_sub(self.paid)
    }

    pub fn is_complete(&self) -> bool {
        self.paid >= self.total
    }

    /// Whole percent paid, 0..=100. A zero-priced product counts as complete.
    pub fn percent(&self) -> u8 {
        if self.total.is_zero() {
            return 100;
        }
        let pct = u128::from(self.paid.cents()) * 100 / u128::from(self.total.cents());
        pct.min(100) as u8
    }
}

/// A validated payment ready to hand to the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlan {
    pub product_id: &'static str,
    pub amount: Usd,
    /// Whether this payment covers the rest of the price.
    pub completes_purchase: bool,
}

impl PaymentPlan {
    /// Notice shown after the payment went through: (title, description).
    pub fn receipt(&self, product_name: &str) -> (&'static str, String) {
        if self.completes_purchase {
            (
                "Purchase Complete!",
                format!("Successfully purchased {} for {}", product_name, self.amount),
            )
        } else {
            (
                "Payment Successful!",
                format!("Successfully paid {} towards {}", self.amount, product_name),
            )
        }
    }
}

/// Validate a payment.
///
/// `custom_amount` is only read for [`PaymentMethod::Partial`]. A partial
/// amount must be positive and may not exceed what is still owed.
pub fn plan_payment(
    product: &'static Product,
    method: PaymentMethod,
    custom_amount: &str,
    progress: &PurchaseProgress,
    is_authenticated: bool,
) -> Result<PaymentPlan, PaymentError> {
    if !is_authenticated {
        return Err(PaymentError::Unauthenticated);
    }

    let remaining = progress.remaining();
    if remaining.is_zero() {
        return Err(PaymentError::AlreadyPaid);
    }

    let amount = match method {
        PaymentMethod::Full => remaining,
        PaymentMethod::Partial => {
            let amount = Usd::parse(custom_amount).map_err(|_| PaymentError::InvalidAmount)?;
            if amount.is_zero() {
                return Err(PaymentError::InvalidAmount);
            }
            if amount > remaining {
                return Err(PaymentError::AmountTooHigh { max: remaining });
            }
            amount
        }
    };

    Ok(PaymentPlan {
        product_id: product.id,
        amount,
        completes_purchase: amount >= remaining,
    })
}
