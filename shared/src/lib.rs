//! # TopUp Shop Core
//!
//! Target-independent logic for the wallet-gated storefront. Everything
//! here runs on the host and in the browser; the web crate only adds the
//! wallet bridge and the views.
//!
//! ## Structure
//!
//! - **[`network`]**: accepted chains (Base Mainnet, Base Sepolia)
//! - **[`auth`]**: authentication state derived from wallet signals
//! - **[`wallet`]**: wallet port trait and the session driver
//! - **[`guard`]**: route guard decisions
//! - **[`navigation`]**: return-target capture and one-shot resume
//! - **[`catalog`]**, **[`pricing`]**, **[`payment`]**: products, prices, top-ups
//! - **[`eth`]**: ether amounts and addresses for the transfer panel
//! - **[`config`]**, **[`error`]**, **[`dto`]**, **[`utils`]**
//!
//! ## Authentication Flow
//!
//! ```text
//! wallet event ──> ConnectionSignal ──> AuthSession::apply ──> AuthState
//!                                                  │
//!                         GuardDecision::evaluate <┘──> AuthRedirect::observe
//! ```

pub mod auth;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod eth;
pub mod guard;
pub mod navigation;
pub mod network;
pub mod payment;
pub mod pricing;
pub mod utils;
pub mod wallet;

pub use auth::{AuthError, AuthSession, AuthState, AuthTransition, ConnectionSignal};
pub use guard::{GuardConfig, GuardDecision};
pub use network::{Network, NetworkPolicy};
pub use pricing::Usd;
pub use wallet::{SessionStore, SwitchOutcome, WalletAuth, WalletPort};
