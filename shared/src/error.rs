//! # Error Types
//!
//! One `thiserror` enum per concern. Nothing in this crate panics on bad
//! input from the wallet or the user; every failure becomes one of these.
//!
//! - [`WalletError`] - the wallet collaborator refused or failed a request
//! - [`ConfigError`] - configuration rejected during validation
//! - [`PaymentError`] - a purchase or top-up request was rejected
//! - [`AmountError`] - a money or ether amount could not be parsed

use thiserror::Error;

use crate::pricing::Usd;

/// Failure reported by the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user dismissed the request in the wallet UI.
    #[error("Request rejected by user")]
    Rejected,

    /// No wallet provider is injected into the page.
    #[error("Wallet not found: {0}")]
    Unavailable(String),

    /// The wallet does not know the requested chain.
    #[error("Chain {0} is not supported by the wallet")]
    UnsupportedChain(u64),

    /// Any other failure, carrying the provider's message.
    #[error("Wallet error: {0}")]
    Provider(String),
}

/// Configuration rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Network policy must accept at least one chain")]
    EmptyPolicy,

    #[error("Chain {0} appears more than once in the network policy")]
    DuplicateChain(u64),

    #[error("Invalid route `{0}`: must be an absolute path without query or fragment")]
    InvalidRoute(String),

    #[error("Invalid backend setting: {0}")]
    Backend(String),

    #[error("{name} must be a number, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Redirect countdown must be between 0 and 30 seconds, got {0}")]
    Countdown(u32),

    #[error("Config has already been initialized")]
    AlreadyInitialized,
}

/// A purchase request that cannot be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Maximum amount is {max}")]
    AmountTooHigh { max: Usd },

    #[error("Product {0} not found")]
    ProductNotFound(String),

    #[error("Connect your Base Wallet to purchase")]
    Unauthenticated,

    #[error("This product is already fully paid")]
    AlreadyPaid,
}

/// Amount parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,

    #[error("`{0}` is not a valid amount")]
    Malformed(String),

    #[error("Amount has more than {0} decimal places")]
    TooPrecise(u32),

    #[error("Amount is too large")]
    Overflow,
}
