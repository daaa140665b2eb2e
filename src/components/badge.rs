//! Badge Component
//!
//! Small status pill with the three variants the dashboard uses.

use leptos::*;

/// Visual weight of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-900 text-white",
            BadgeVariant::Secondary => "bg-gray-200 text-gray-900",
            BadgeVariant::Destructive => "bg-red-600 text-white",
        }
    }
}

/// Badge pill component
#[component]
pub fn Badge(
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
            variant.class()
        )>
            {children()}
        </span>
    }
}
