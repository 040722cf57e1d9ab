pub mod notice;
pub mod purchases;
pub mod wallet;
