//! RetailBot Factory Dashboard
//!
//! Analytics dashboard for the RetailBot e-commerce chatbot, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Performance KPIs and headline metrics at a glance
//! - Conversation, revenue, risk and inventory analytics tabs
//! - Manual refresh of the full analytics snapshot
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. On load it fetches six precomputed analytics payloads from
//! the RetailBot API in parallel and maps them onto cards, lists and canvas
//! charts. All aggregation happens upstream; the UI only formats, truncates
//! and classifies.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
