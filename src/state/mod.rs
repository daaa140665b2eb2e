//! State Management
//!
//! Typed analytics payloads and the reactive dashboard state container.

pub mod global;
pub mod model;

pub use global::{provide_dashboard_state, refresh, DashboardState};
pub use model::AnalyticsBatch;
