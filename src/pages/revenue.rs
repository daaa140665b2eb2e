//! Revenue Tab
//!
//! Recovered revenue over time as an area chart and per-channel conversion
//! rates as a bar chart.

use leptos::*;

use crate::components::{AreaChart, BarChart, Card, SeriesPoint};
use crate::state::model::RevenueTrends;
use crate::state::DashboardState;

/// Revenue tab view
#[component]
pub fn RevenueTab() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        {move || {
            state.revenue.get().map(|trends| view! { <RevenueCharts trends=trends /> })
        }}
    }
}

#[component]
fn RevenueCharts(trends: RevenueTrends) -> impl IntoView {
    let daily: Vec<SeriesPoint> = trends
        .daily_revenue
        .iter()
        .map(|point| SeriesPoint {
            label: point.date.clone(),
            value: point.revenue,
        })
        .collect();

    let channels: Vec<SeriesPoint> = trends
        .channel_performance
        .iter()
        .map(|perf| SeriesPoint {
            label: perf.channel.clone(),
            value: perf.conversion_rate,
        })
        .collect();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card
                title="Revenus Récupérés"
                description="Revenus générés par la récupération de paniers"
            >
                <AreaChart data=daily color="#82ca9d" />
            </Card>

            <Card
                title="Performance par Canal"
                description="Efficacité des canaux de récupération"
            >
                <BarChart data=channels color="#ffc658" />
            </Card>
        </div>
    }
}
