//! Card Components
//!
//! White content cards and the compact stat card used on the overview tab.

use leptos::*;

/// Content card with a title and optional description
#[component]
pub fn Card(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
            <div class="p-6 pb-2">
                <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                {description.map(|d| view! {
                    <p class="text-sm text-gray-500 mt-1">{d}</p>
                })}
            </div>
            <div class="p-6 pt-2">
                {children()}
            </div>
        </div>
    }
}

/// Compact stat card: title, icon, big value and a one-line caption
#[component]
pub fn StatCard(
    #[prop(into)]
    title: String,
    icon: &'static str,
    #[prop(into)]
    value: String,
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-gray-900">{title}</span>
                <span class="text-gray-400">{icon}</span>
            </div>
            <div class="text-2xl font-bold text-gray-900">{value}</div>
            <p class="text-xs text-gray-500 mt-1">{caption}</p>
        </div>
    }
}
