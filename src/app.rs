//! App Root Component
//!
//! Main application component with routing, the global state provider and
//! the initial fetch trigger.

use leptos::*;
use leptos_router::*;

use crate::components::LoadingScreen;
use crate::pages::Dashboard;
use crate::state::{provide_dashboard_state, refresh, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch the full analytics snapshot on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        refresh(&state_for_effect);
    });

    let loading = state.loading;

    view! {
        <Router>
            {move || {
                if loading.get() {
                    view! { <LoadingScreen /> }.into_view()
                } else {
                    view! { <Shell /> }.into_view()
                }
            }}
        </Router>
    }
}

/// Header plus routed main content, shown once data is resident
#[component]
fn Shell() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />

            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="/dashboard" view=Dashboard />
                </Routes>
            </main>
        </div>
    }
}

/// Header with brand and the manual refresh control
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <header class="bg-white shadow-sm border-b">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-6">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">"🤖 RetailBot Factory"</h1>
                        <p class="text-sm text-gray-500">"Tableau de Bord Analytique"</p>
                    </div>

                    <button
                        on:click=move |_| refresh(&state)
                        class="flex items-center px-4 py-2 bg-white border border-gray-300 \
                               rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-50 \
                               transition-colors"
                    >
                        <span class="mr-2">"⟳"</span>
                        "Actualiser"
                    </button>
                </div>
            </div>
        </header>
    }
}
