//! Application constants

/// Purchase history table on the hosted backend.
pub const PURCHASES_TABLE: &str = "purchases";

/// Shown when a product image fails to load.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=500&h=500&fit=crop";

// UI timings
pub const NOTICE_TIMEOUT_MS: u32 = 5000;
pub const PAYMENT_CONFIRM_DELAY_MS: u32 = 3000;
pub const POST_PAYMENT_REDIRECT_MS: u32 = 2000;
pub const COUNTDOWN_TICK_MS: u32 = 1000;
