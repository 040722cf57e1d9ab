//! UI Components

pub mod connect_prompt;
pub mod connection_status;
pub mod navbar;
pub mod product_card;
pub mod progress_bar;
pub mod route_guard;
pub mod send_transaction;
pub mod toaster;
pub mod wallet_connect;

pub use connect_prompt::ConnectPrompt;
pub use connection_status::ConnectionStatus;
pub use navbar::Navbar;
pub use product_card::ProductCard;
pub use progress_bar::ProgressBar;
pub use route_guard::RouteGuard;
pub use send_transaction::SendTransaction;
pub use toaster::Toaster;
pub use wallet_connect::{BaseWalletConnect, NetworkSwitchButtons};
