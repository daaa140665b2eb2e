//! Dashboard Page
//!
//! Tab container routing between the five analytics views. All data is
//! already resident in `DashboardState`; switching tabs only toggles which
//! view renders.

use leptos::*;

use crate::components::{Tab, TabBar};
use crate::pages::{
    conversations::ConversationsTab, inventory::InventoryTab, overview::OverviewTab,
    revenue::RevenueTab, risk::RiskTab,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let active = create_rw_signal(Tab::Overview);

    view! {
        <div class="px-4 py-6 space-y-6">
            <TabBar active=active />

            {move || match active.get() {
                Tab::Overview => view! { <OverviewTab /> }.into_view(),
                Tab::Conversations => view! { <ConversationsTab /> }.into_view(),
                Tab::Revenue => view! { <RevenueTab /> }.into_view(),
                Tab::Risk => view! { <RiskTab /> }.into_view(),
                Tab::Inventory => view! { <InventoryTab /> }.into_view(),
            }}
        </div>
    }
}
