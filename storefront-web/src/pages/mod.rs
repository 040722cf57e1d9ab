//! Page modules

pub mod auth;
pub mod dashboard;
pub mod product_detail;
pub mod products;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
