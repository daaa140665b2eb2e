//! API Access
//!
//! HTTP client for the RetailBot analytics API.

pub mod client;

pub use client::*;
