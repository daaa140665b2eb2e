//! Overview Tab
//!
//! Performance KPI cards in the API's native key order, followed by the four
//! headline stat cards from the dashboard snapshot.

use leptos::*;

use crate::components::status::{kpi_badge_label, kpi_badge_variant, status_color, status_icon};
use crate::components::{Badge, StatCard};
use crate::state::model::{DashboardSnapshot, Kpi, PerformanceKpis};
use crate::state::DashboardState;

/// Overview tab view
#[component]
pub fn OverviewTab() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let state_for_snapshot = state.clone();

    view! {
        <div class="space-y-6">
            {move || {
                state.kpis.get().map(|kpis| view! { <KpiGrid kpis=kpis /> })
            }}

            {move || {
                state_for_snapshot
                    .dashboard
                    .get()
                    .map(|snapshot| view! { <SnapshotCards snapshot=snapshot /> })
            }}
        </div>
    }
}

/// One card per KPI, iterated in the mapping's native key order
#[component]
fn KpiGrid(kpis: PerformanceKpis) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {kpis
                .kpis
                .into_iter()
                .map(|(_, kpi)| view! { <KpiCard kpi=kpi /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn KpiCard(kpi: Kpi) -> impl IntoView {
    let color = status_color(&kpi.status);
    let icon = status_icon(&kpi.status);
    let variant = kpi_badge_variant(&kpi.status);
    let label = kpi_badge_label(&kpi.status);

    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-gray-900">{kpi.description.clone()}</span>
                <span class=format!("p-2 rounded-full text-white text-xs {}", color)>
                    {icon}
                </span>
            </div>
            <div class="text-2xl font-bold text-gray-900">
                {format!("{} {}", kpi.value, kpi.unit)}
            </div>
            <p class="text-xs text-gray-500 mt-1">
                {format!("Objectif: {} {}", kpi.target, kpi.unit)}
            </p>
            <div class="mt-2">
                <Badge variant=variant>{label}</Badge>
            </div>
        </div>
    }
}

/// The four headline metrics
#[component]
fn SnapshotCards(snapshot: DashboardSnapshot) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard
                title="Conversations"
                icon="💬"
                value=snapshot.conversations.total.to_string()
                caption=format!(
                    "{} messages/conv",
                    snapshot.conversations.avg_messages_per_conversation
                )
            />
            <StatCard
                title="Paniers Récupérés"
                icon="🛒"
                value=format!("{}%", snapshot.cart_recovery.recovery_rate)
                caption=format!(
                    "{}/{} paniers",
                    snapshot.cart_recovery.recovered,
                    snapshot.cart_recovery.total_abandoned
                )
            />
            <StatCard
                title="Commandes COD"
                icon="🛡"
                value=snapshot.cod_management.total_orders.to_string()
                caption=format!("{}% à haut risque", snapshot.cod_management.risk_percentage)
            />
            <StatCard
                title="Santé Inventaire"
                icon="📦"
                value=format!("{}%", snapshot.inventory.stock_health_percentage)
                caption=format!("{} alertes actives", snapshot.inventory.active_alerts)
            />
        </div>
    }
}
