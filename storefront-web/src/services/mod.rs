//! Browser-side services: wallet bridge and backend client

pub mod store;
pub mod wallet;
