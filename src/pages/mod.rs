//! Pages
//!
//! The dashboard container and one projection module per tab.

pub mod conversations;
pub mod dashboard;
pub mod inventory;
pub mod overview;
pub mod revenue;
pub mod risk;

pub use dashboard::Dashboard;
