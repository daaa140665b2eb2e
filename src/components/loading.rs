//! Loading Component
//!
//! Full-page loading state shown while a fetch cycle is in flight.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <div class="loading-spinner h-32 w-32 mx-auto" />
                <p class="mt-4 text-gray-600">"Chargement du tableau de bord..."</p>
            </div>
        </div>
    }
}
