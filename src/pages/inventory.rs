//! Inventory Tab
//!
//! Low-stock items as a badge list (first five, stock count always styled
//! destructive) and the category distribution as a pie chart.

use leptos::*;

use crate::components::{Badge, BadgeVariant, Card, PieChart, SeriesPoint};
use crate::state::model::{InventoryInsights, LowStockItem};
use crate::state::DashboardState;

/// How many low-stock items the list displays.
const ITEM_DISPLAY_LIMIT: usize = 5;

/// First five low-stock items, untouched order.
fn displayed_items(items: &[LowStockItem]) -> &[LowStockItem] {
    &items[..items.len().min(ITEM_DISPLAY_LIMIT)]
}

/// Inventory tab view
#[component]
pub fn InventoryTab() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        {move || {
            state.inventory.get().map(|insights| view! { <InventoryPanels insights=insights /> })
        }}
    }
}

#[component]
fn InventoryPanels(insights: InventoryInsights) -> impl IntoView {
    let items: Vec<LowStockItem> = displayed_items(&insights.low_stock_items).to_vec();

    let categories: Vec<SeriesPoint> = insights
        .category_distribution
        .iter()
        .map(|bucket| SeriesPoint {
            label: bucket.category.clone(),
            value: bucket.count as f64,
        })
        .collect();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card
                title="Articles à Stock Faible"
                description="Articles nécessitant un réapprovisionnement"
            >
                <div class="space-y-2">
                    {items
                        .into_iter()
                        .map(|item| view! { <LowStockRow item=item /> })
                        .collect_view()}
                </div>
            </Card>

            <Card
                title="Distribution par Catégorie"
                description="Répartition de l'inventaire par catégorie"
            >
                <PieChart data=categories />
            </Card>
        </div>
    }
}

#[component]
fn LowStockRow(item: LowStockItem) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-2 bg-gray-50 rounded">
            <div>
                <span class="font-medium">{item.product_name.clone()}</span>
                <p class="text-sm text-gray-500">{item.category.clone()}</p>
            </div>
            <div class="text-right">
                // Being on this list at all means the stock is below
                // threshold, so the count is always destructive.
                <Badge variant=BadgeVariant::Destructive>
                    {item.current_stock.to_string()}
                </Badge>
                <p class="text-xs text-gray-500">{format!("Min: {}", item.min_threshold)}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> LowStockItem {
        LowStockItem {
            product_name: name.to_string(),
            current_stock: 1,
            min_threshold: 10,
            category: "Divers".to_string(),
        }
    }

    #[test]
    fn test_displays_at_most_five_items() {
        let items: Vec<LowStockItem> = (0..8).map(|i| item(&format!("p{}", i))).collect();
        let shown = displayed_items(&items);
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[0].product_name, "p0");
        assert_eq!(shown[4].product_name, "p4");
    }

    #[test]
    fn test_empty_list_renders_no_rows() {
        assert!(displayed_items(&[]).is_empty());
    }
}
