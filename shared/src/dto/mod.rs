//! # Data Transfer Objects (DTOs)
//!
//! Rows exchanged with the hosted backend (a PostgREST-style HTTP API).
//!
//! ## Module Organization
//!
//! - [`purchase`] - purchase records keyed by wallet address, backend error body
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case, matching the table columns
//! - **Optional fields**: omitted when `None` so the database fills defaults
//! - **Timestamps**: RFC 3339 via `chrono`
//!
//! ## Example
//!
//! ```text
//! POST /rest/v1/purchases
//! Content-Type: application/json
//! Prefer: return=representation
//!
//! {
//!   "wallet_address": "0x71c7656ec7ab88b098defb751b7401b5f6d8976f",
//!   "product_id": "3",
//!   "amount_cents": 2500,
//!   "created_at": "2024-05-01T12:00:00Z"
//! }
//! ```

pub mod purchase;

pub use purchase::*;
