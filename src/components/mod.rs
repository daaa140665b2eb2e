//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod badge;
pub mod card;
pub mod charts;
pub mod loading;
pub mod status;
pub mod tabs;

pub use badge::{Badge, BadgeVariant};
pub use card::{Card, StatCard};
pub use charts::{AreaChart, BarChart, LineChart, PieChart, SeriesPoint};
pub use loading::LoadingScreen;
pub use tabs::{Tab, TabBar};
