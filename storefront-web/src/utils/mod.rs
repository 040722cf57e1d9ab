//! Shared utilities for the web app

pub mod constants;
pub mod format;
pub mod url;
