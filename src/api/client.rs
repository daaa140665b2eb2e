//! HTTP API Client
//!
//! Functions for communicating with the RetailBot analytics API. All six
//! endpoints are unparameterized GETs returning pre-aggregated JSON; the
//! dashboard never sends query parameters, headers or pagination.

use futures_util::join;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::state::model::{
    AnalyticsBatch, ConversationTrends, DashboardSnapshot, InventoryInsights, PerformanceKpis,
    RevenueTrends, RiskAnalysis,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("retailbot_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error body the analytics API returns on non-2xx statuses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// GET a path under the API base and parse the JSON body.
///
/// Network failures, error statuses and unparseable bodies all collapse into
/// one undifferentiated `String` reason; callers treat them identically.
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("HTTP {}", response.status()),
        });
        return Err(error.error);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the headline dashboard metrics
pub async fn fetch_dashboard() -> Result<DashboardSnapshot, String> {
    get_json("/analytics/dashboard").await
}

/// Fetch conversation trends
pub async fn fetch_conversation_trends() -> Result<ConversationTrends, String> {
    get_json("/analytics/conversations/trends").await
}

/// Fetch revenue trends
pub async fn fetch_revenue_trends() -> Result<RevenueTrends, String> {
    get_json("/analytics/revenue/trends").await
}

/// Fetch COD risk analysis
pub async fn fetch_risk_analysis() -> Result<RiskAnalysis, String> {
    get_json("/analytics/risk/analysis").await
}

/// Fetch inventory insights
pub async fn fetch_inventory_insights() -> Result<InventoryInsights, String> {
    get_json("/analytics/inventory/insights").await
}

/// Fetch performance KPIs
pub async fn fetch_performance_kpis() -> Result<PerformanceKpis, String> {
    get_json("/analytics/performance/kpis").await
}

/// Fetch all six analytics payloads concurrently.
///
/// Waits for every request to settle, then fails the whole batch if any one
/// of them failed. There is no retry, no backoff and no partial result.
pub async fn fetch_all() -> Result<AnalyticsBatch, String> {
    let (dashboard, conversations, revenue, risk, inventory, kpis) = join!(
        fetch_dashboard(),
        fetch_conversation_trends(),
        fetch_revenue_trends(),
        fetch_risk_analysis(),
        fetch_inventory_insights(),
        fetch_performance_kpis(),
    );

    Ok(AnalyticsBatch {
        dashboard: dashboard?,
        conversations: conversations?,
        revenue: revenue?,
        risk: risk?,
        inventory: inventory?,
        kpis: kpis?,
    })
}
