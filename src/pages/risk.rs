//! Risk Tab
//!
//! COD risk distribution as a pie chart and the riskiest cities as a badge
//! list. The API ranks and truncates to its top 10; the view shows the first
//! five in input order.

use leptos::*;

use crate::components::status::risk_badge_variant;
use crate::components::{Badge, Card, PieChart, SeriesPoint};
use crate::state::model::{CityRisk, RiskAnalysis};
use crate::state::DashboardState;

/// How many cities the list displays.
const CITY_DISPLAY_LIMIT: usize = 5;

/// First five cities of the upstream top-10, untouched order.
fn displayed_cities(cities: &[CityRisk]) -> &[CityRisk] {
    &cities[..cities.len().min(CITY_DISPLAY_LIMIT)]
}

/// Risk tab view
#[component]
pub fn RiskTab() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        {move || {
            state.risk.get().map(|analysis| view! { <RiskPanels analysis=analysis /> })
        }}
    }
}

#[component]
fn RiskPanels(analysis: RiskAnalysis) -> impl IntoView {
    let distribution: Vec<SeriesPoint> = analysis
        .risk_distribution
        .iter()
        .map(|bucket| SeriesPoint {
            label: bucket.risk_level.clone(),
            value: bucket.count as f64,
        })
        .collect();

    let cities: Vec<CityRisk> = displayed_cities(&analysis.top_risk_cities).to_vec();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card
                title="Distribution des Risques"
                description="Répartition des commandes par niveau de risque"
            >
                <PieChart data=distribution />
            </Card>

            <Card
                title="Villes à Risque"
                description="Top 10 des villes avec le plus haut risque"
            >
                <div class="space-y-2">
                    {cities
                        .into_iter()
                        .map(|city| view! { <CityRow city=city /> })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn CityRow(city: CityRisk) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-2 bg-gray-50 rounded">
            <span class="font-medium">{city.city.clone()}</span>
            <div class="flex items-center space-x-2">
                <Badge variant=risk_badge_variant(city.risk_percentage)>
                    {format!("{}%", city.risk_percentage)}
                </Badge>
                <span class="text-sm text-gray-500">
                    {format!("{} commandes", city.total_orders)}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, pct: f64) -> CityRisk {
        CityRisk {
            city: name.to_string(),
            total_orders: 10,
            avg_risk_score: 0.0,
            high_risk_orders: 0,
            risk_percentage: pct,
        }
    }

    #[test]
    fn test_displays_exactly_first_five_in_input_order() {
        let cities: Vec<CityRisk> = (0..10).map(|i| city(&format!("ville-{}", i), 10.0)).collect();
        let shown = displayed_cities(&cities);
        assert_eq!(shown.len(), 5);
        let names: Vec<_> = shown.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, ["ville-0", "ville-1", "ville-2", "ville-3", "ville-4"]);
    }

    #[test]
    fn test_short_lists_pass_through() {
        let cities = vec![city("a", 1.0), city("b", 2.0)];
        assert_eq!(displayed_cities(&cities).len(), 2);
    }
}
