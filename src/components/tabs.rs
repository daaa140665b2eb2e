//! Tab Bar
//!
//! Five mutually exclusive dashboard views behind one active-tab signal.
//! Switching tabs fetches nothing; it only toggles which view renders.

use leptos::*;

/// Dashboard tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Conversations,
    Revenue,
    Risk,
    Inventory,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Conversations,
        Tab::Revenue,
        Tab::Risk,
        Tab::Inventory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Vue d'ensemble",
            Tab::Conversations => "Conversations",
            Tab::Revenue => "Revenus",
            Tab::Risk => "Risques",
            Tab::Inventory => "Inventaire",
        }
    }
}

/// Tab selection bar
#[component]
pub fn TabBar(active: RwSignal<Tab>) -> impl IntoView {
    view! {
        <div class="grid w-full grid-cols-5 bg-gray-100 rounded-lg p-1">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! { <TabTrigger tab=tab active=active /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabTrigger(tab: Tab, active: RwSignal<Tab>) -> impl IntoView {
    let is_active = create_memo(move |_| active.get() == tab);

    view! {
        <button
            on:click=move |_| active.set(tab)
            class=move || {
                let base = "px-3 py-1.5 rounded-md text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-white text-gray-900 shadow-sm", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels_are_french() {
        assert_eq!(Tab::Overview.label(), "Vue d'ensemble");
        assert_eq!(Tab::Conversations.label(), "Conversations");
        assert_eq!(Tab::Revenue.label(), "Revenus");
        assert_eq!(Tab::Risk.label(), "Risques");
        assert_eq!(Tab::Inventory.label(), "Inventaire");
    }

    #[test]
    fn test_tab_order_matches_display_order() {
        assert_eq!(Tab::ALL[0], Tab::Overview);
        assert_eq!(Tab::ALL[4], Tab::Inventory);
        assert_eq!(Tab::ALL.len(), 5);
    }
}
