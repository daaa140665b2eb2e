//! Analytics Payload Types
//!
//! Typed mirrors of the six read-only JSON bodies served by the RetailBot
//! analytics API. Each type is a full snapshot slot: it is either absent or
//! fully populated, and it is replaced wholesale on refresh. The API carries
//! a few series no widget currently reads (daily messages, average cart
//! value, daily risk trend, top sellers, alert buckets); they are
//! deserialized anyway so a slot is a faithful copy of the endpoint body.

use indexmap::IndexMap;

/// One complete fetch cycle's worth of analytics, applied atomically.
#[derive(Clone, Debug)]
pub struct AnalyticsBatch {
    pub dashboard: DashboardSnapshot,
    pub conversations: ConversationTrends,
    pub revenue: RevenueTrends,
    pub risk: RiskAnalysis,
    pub inventory: InventoryInsights,
    pub kpis: PerformanceKpis,
}

// ============ /analytics/dashboard ============

/// Headline metrics for the overview tab.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub period_days: u32,
    pub conversations: ConversationTotals,
    pub cart_recovery: CartRecoveryStats,
    pub cod_management: CodStats,
    pub inventory: InventoryHealth,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ConversationTotals {
    pub total: u64,
    pub total_messages: u64,
    pub avg_messages_per_conversation: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CartRecoveryStats {
    pub total_abandoned: u64,
    pub recovered: u64,
    pub recovery_rate: f64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub recovered_value: f64,
    #[serde(default)]
    pub value_recovery_rate: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CodStats {
    pub total_orders: u64,
    pub high_risk_orders: u64,
    pub risk_percentage: f64,
    #[serde(default)]
    pub verified_orders: u64,
    #[serde(default)]
    pub verification_rate: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct InventoryHealth {
    pub total_items: u64,
    pub low_stock_items: u64,
    pub stock_health_percentage: f64,
    pub active_alerts: u64,
}

// ============ /analytics/conversations/trends ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ConversationTrends {
    pub daily_conversations: Vec<DailyCount>,
    #[serde(default)]
    pub daily_messages: Vec<DailyCount>,
    /// Top 10 detected intents, ranked upstream.
    pub top_intents: Vec<IntentCount>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct IntentCount {
    pub intent: String,
    pub count: u64,
}

// ============ /analytics/revenue/trends ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RevenueTrends {
    pub daily_revenue: Vec<DailyRevenue>,
    #[serde(default)]
    pub daily_avg_cart_value: Vec<DailyAvgCartValue>,
    pub channel_performance: Vec<ChannelPerformance>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DailyAvgCartValue {
    pub date: String,
    pub avg_value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ChannelPerformance {
    pub channel: String,
    #[serde(default)]
    pub attempts: u64,
    #[serde(default)]
    pub conversions: u64,
    pub conversion_rate: f64,
}

// ============ /analytics/risk/analysis ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RiskAnalysis {
    pub risk_distribution: Vec<RiskBucket>,
    #[serde(default)]
    pub daily_risk_trends: Vec<DailyRiskTrend>,
    /// Top 10 cities ranked by average risk score upstream.
    pub top_risk_cities: Vec<CityRisk>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RiskBucket {
    pub risk_level: String,
    pub count: u64,
    #[serde(default)]
    pub avg_value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DailyRiskTrend {
    pub date: String,
    pub avg_risk_score: f64,
    pub total_orders: u64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CityRisk {
    pub city: String,
    pub total_orders: u64,
    #[serde(default)]
    pub avg_risk_score: f64,
    #[serde(default)]
    pub high_risk_orders: u64,
    pub risk_percentage: f64,
}

// ============ /analytics/inventory/insights ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct InventoryInsights {
    pub low_stock_items: Vec<LowStockItem>,
    #[serde(default)]
    pub top_selling_items: Vec<TopSellingItem>,
    pub category_distribution: Vec<CategoryBucket>,
    #[serde(default)]
    pub active_alerts: Vec<AlertBucket>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct LowStockItem {
    pub product_name: String,
    pub current_stock: i64,
    pub min_threshold: i64,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TopSellingItem {
    pub product_name: String,
    pub current_stock: i64,
    pub total_sold: i64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CategoryBucket {
    pub category: String,
    pub count: u64,
    #[serde(default)]
    pub total_stock: i64,
    #[serde(default)]
    pub total_value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AlertBucket {
    pub alert_type: String,
    pub severity: String,
    pub count: u64,
}

// ============ /analytics/performance/kpis ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PerformanceKpis {
    #[serde(default)]
    pub period_days: u32,
    /// Keyed by KPI identifier; the API's key order is the display order.
    pub kpis: IndexMap<String, Kpi>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Kpi {
    pub description: String,
    pub value: f64,
    pub unit: String,
    pub target: f64,
    pub status: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Endpoint bodies as the Flask backend emits them, used by the serde
    //! tests here and the state-cycle tests in `global`.

    use super::*;

    pub const DASHBOARD: &str = r#"{
        "period_days": 30,
        "conversations": {"total": 128, "total_messages": 642, "avg_messages_per_conversation": 5.02},
        "cart_recovery": {"total_abandoned": 40, "recovered": 14, "recovery_rate": 35.0,
                          "total_value": 5200.5, "recovered_value": 1820.25, "value_recovery_rate": 35.0},
        "cod_management": {"total_orders": 85, "high_risk_orders": 12, "risk_percentage": 14.12,
                           "verified_orders": 60, "verification_rate": 70.59},
        "inventory": {"total_items": 230, "low_stock_items": 18, "stock_health_percentage": 92.17, "active_alerts": 7}
    }"#;

    pub const CONVERSATIONS: &str = r#"{
        "daily_conversations": [{"date": "2026-08-01", "count": 12}, {"date": "2026-08-02", "count": 17}],
        "daily_messages": [{"date": "2026-08-01", "count": 60}],
        "top_intents": [{"intent": "order_status", "count": 44}, {"intent": "product_info", "count": 31}]
    }"#;

    pub const REVENUE: &str = r#"{
        "daily_revenue": [{"date": "2026-08-01", "revenue": 410.5, "orders": 3}],
        "daily_avg_cart_value": [{"date": "2026-08-01", "avg_value": 97.3}],
        "channel_performance": [
            {"channel": "whatsapp", "attempts": 25, "conversions": 9, "conversion_rate": 36.0},
            {"channel": "email", "attempts": 30, "conversions": 6, "conversion_rate": 20.0}
        ]
    }"#;

    pub const RISK: &str = r#"{
        "risk_distribution": [
            {"risk_level": "low", "count": 50, "avg_value": 80.0},
            {"risk_level": "medium", "count": 23, "avg_value": 95.5},
            {"risk_level": "high", "count": 12, "avg_value": 130.0}
        ],
        "daily_risk_trends": [{"date": "2026-08-01", "avg_risk_score": 0.31, "total_orders": 9}],
        "top_risk_cities": [
            {"city": "Casablanca", "total_orders": 22, "avg_risk_score": 0.62, "high_risk_orders": 12, "risk_percentage": 54.55},
            {"city": "Rabat", "total_orders": 15, "avg_risk_score": 0.41, "high_risk_orders": 5, "risk_percentage": 33.33}
        ]
    }"#;

    pub const INVENTORY: &str = r#"{
        "low_stock_items": [
            {"product_name": "Casque BT-300", "current_stock": 2, "min_threshold": 10, "category": "Audio"},
            {"product_name": "Chargeur USB-C", "current_stock": 4, "min_threshold": 15, "category": "Accessoires"}
        ],
        "top_selling_items": [{"product_name": "Casque BT-300", "current_stock": 2, "total_sold": 120}],
        "category_distribution": [
            {"category": "Audio", "count": 34, "total_stock": 410, "total_value": 12030.0},
            {"category": "Accessoires", "count": 51, "total_stock": 890, "total_value": 4400.5}
        ],
        "active_alerts": [{"alert_type": "low_stock", "severity": "high", "count": 5}]
    }"#;

    pub const KPIS: &str = r#"{
        "period_days": 30,
        "kpis": {
            "conversation_resolution_rate": {"value": 88.5, "unit": "%", "description": "Taux de résolution des conversations", "target": 85, "status": "good"},
            "avg_response_time": {"value": 2.5, "unit": "secondes", "description": "Temps de réponse moyen", "target": 3.0, "status": "good"},
            "customer_satisfaction": {"value": 82.1, "unit": "%", "description": "Satisfaction client", "target": 90, "status": "warning"},
            "cart_recovery_roi": {"value": 8.3, "unit": "%", "description": "ROI récupération paniers", "target": 15, "status": "critical"}
        }
    }"#;

    pub fn batch() -> AnalyticsBatch {
        AnalyticsBatch {
            dashboard: serde_json::from_str(DASHBOARD).unwrap(),
            conversations: serde_json::from_str(CONVERSATIONS).unwrap(),
            revenue: serde_json::from_str(REVENUE).unwrap(),
            risk: serde_json::from_str(RISK).unwrap(),
            inventory: serde_json::from_str(INVENTORY).unwrap(),
            kpis: serde_json::from_str(KPIS).unwrap(),
        }
    }
}
