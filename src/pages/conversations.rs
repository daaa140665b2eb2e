//! Conversations Tab
//!
//! Daily conversation volume as a line chart and the top detected intents as
//! a bar chart, straight from the trends payload.

use leptos::*;

use crate::components::{BarChart, Card, LineChart, SeriesPoint};
use crate::state::model::ConversationTrends;
use crate::state::DashboardState;

/// Conversations tab view
#[component]
pub fn ConversationsTab() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        {move || {
            state.conversations.get().map(|trends| view! { <TrendCharts trends=trends /> })
        }}
    }
}

#[component]
fn TrendCharts(trends: ConversationTrends) -> impl IntoView {
    let daily: Vec<SeriesPoint> = trends
        .daily_conversations
        .iter()
        .map(|point| SeriesPoint {
            label: point.date.clone(),
            value: point.count as f64,
        })
        .collect();

    let intents: Vec<SeriesPoint> = trends
        .top_intents
        .iter()
        .map(|intent| SeriesPoint {
            label: intent.intent.clone(),
            value: intent.count as f64,
        })
        .collect();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card
                title="Tendances des Conversations"
                description="Évolution quotidienne des conversations"
            >
                <LineChart data=daily color="#8884d8" />
            </Card>

            <Card
                title="Intentions Principales"
                description="Top 10 des intentions détectées"
            >
                <BarChart data=intents color="#8884d8" />
            </Card>
        </div>
    }
}
