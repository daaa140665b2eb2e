//! Global Application State
//!
//! Reactive state management using Leptos signals. All six analytics slots,
//! the loading flag and the last failure reason live in one `DashboardState`
//! struct provided through context by the root component.

use leptos::*;

use crate::api;
use crate::state::model::{
    AnalyticsBatch, ConversationTrends, DashboardSnapshot, InventoryInsights, PerformanceKpis,
    RevenueTrends, RiskAnalysis,
};

/// Dashboard state provided to all components.
///
/// Each slot is either `None` (never fetched, or every fetch so far failed)
/// or a fully populated payload; a successful cycle replaces all six at once.
#[derive(Clone)]
pub struct DashboardState {
    pub dashboard: RwSignal<Option<DashboardSnapshot>>,
    pub conversations: RwSignal<Option<ConversationTrends>>,
    pub revenue: RwSignal<Option<RevenueTrends>>,
    pub risk: RwSignal<Option<RiskAnalysis>>,
    pub inventory: RwSignal<Option<InventoryInsights>>,
    pub kpis: RwSignal<Option<PerformanceKpis>>,
    /// True while a fetch cycle is in flight.
    pub loading: RwSignal<bool>,
    /// Reason the most recent cycle failed, if it did. Not rendered; kept so
    /// failures are observable without changing the silent-degradation
    /// contract.
    pub last_error: RwSignal<Option<String>>,
    /// Monotonic id of the most recently started cycle. A settling batch
    /// that no longer matches is stale and gets discarded wholesale.
    generation: RwSignal<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            dashboard: create_rw_signal(None),
            conversations: create_rw_signal(None),
            revenue: create_rw_signal(None),
            risk: create_rw_signal(None),
            inventory: create_rw_signal(None),
            kpis: create_rw_signal(None),
            // The app fetches on mount, so it is born loading.
            loading: create_rw_signal(true),
            last_error: create_rw_signal(None),
            generation: create_rw_signal(0),
        }
    }

    /// Start a fetch cycle: bump the generation and raise the loading flag.
    /// Returns the cycle's id, to be handed back to [`finish_cycle`].
    ///
    /// [`finish_cycle`]: DashboardState::finish_cycle
    pub fn begin_cycle(&self) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.loading.set(true);
        generation
    }

    /// Settle a fetch cycle. A stale generation means a newer refresh owns
    /// the state: the result is dropped and nothing (slots, loading flag,
    /// error) is touched. Otherwise the batch is applied atomically or the
    /// failure recorded, and loading ends.
    pub fn finish_cycle(&self, generation: u64, result: Result<AnalyticsBatch, String>) {
        if self.generation.get_untracked() != generation {
            return;
        }

        match result {
            Ok(batch) => {
                self.apply_batch(batch);
                self.last_error.set(None);
            }
            Err(reason) => {
                self.last_error.set(Some(reason));
            }
        }

        self.loading.set(false);
    }

    fn apply_batch(&self, batch: AnalyticsBatch) {
        self.dashboard.set(Some(batch.dashboard));
        self.conversations.set(Some(batch.conversations));
        self.revenue.set(Some(batch.revenue));
        self.risk.set(Some(batch.risk));
        self.inventory.set(Some(batch.inventory));
        self.kpis.set(Some(batch.kpis));
    }
}

/// Provide dashboard state to the component tree.
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

/// Trigger a full refresh: fan out the six requests and settle the cycle
/// when they all complete. Failures are logged to the console and leave the
/// slots as they were.
pub fn refresh(state: &DashboardState) {
    let generation = state.begin_cycle();

    let state = state.clone();
    spawn_local(async move {
        let result = api::fetch_all().await;

        if let Err(reason) = &result {
            web_sys::console::error_1(
                &format!("Erreur lors du chargement des données: {}", reason).into(),
            );
        }

        state.finish_cycle(generation, result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::model::fixtures;

    #[test]
    fn test_successful_cycle_populates_every_slot() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        assert!(state.loading.get_untracked());

        let generation = state.begin_cycle();
        state.finish_cycle(generation, Ok(fixtures::batch()));

        assert!(!state.loading.get_untracked());
        assert!(state.dashboard.get_untracked().is_some());
        assert!(state.conversations.get_untracked().is_some());
        assert!(state.revenue.get_untracked().is_some());
        assert!(state.risk.get_untracked().is_some());
        assert!(state.inventory.get_untracked().is_some());
        assert!(state.kpis.get_untracked().is_some());
        assert!(state.last_error.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_failed_cycle_updates_no_slot_and_clears_loading() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        let generation = state.begin_cycle();
        state.finish_cycle(generation, Err("connexion refusée".to_string()));

        assert!(!state.loading.get_untracked());
        assert!(state.dashboard.get_untracked().is_none());
        assert!(state.kpis.get_untracked().is_none());
        assert_eq!(
            state.last_error.get_untracked().as_deref(),
            Some("connexion refusée")
        );
        runtime.dispose();
    }

    #[test]
    fn test_failure_keeps_previously_populated_slots() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        let first = state.begin_cycle();
        state.finish_cycle(first, Ok(fixtures::batch()));

        let second = state.begin_cycle();
        assert!(state.loading.get_untracked());
        state.finish_cycle(second, Err("HTTP 500".to_string()));

        assert!(!state.loading.get_untracked());
        assert!(state.dashboard.get_untracked().is_some());
        assert_eq!(state.last_error.get_untracked().as_deref(), Some("HTTP 500"));
        runtime.dispose();
    }

    #[test]
    fn test_stale_batch_is_discarded_wholesale() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        let first = state.begin_cycle();
        let second = state.begin_cycle();

        // The older batch settles after a newer refresh began: dropped.
        state.finish_cycle(first, Ok(fixtures::batch()));
        assert!(state.loading.get_untracked());
        assert!(state.dashboard.get_untracked().is_none());

        state.finish_cycle(second, Ok(fixtures::batch()));
        assert!(!state.loading.get_untracked());
        assert!(state.dashboard.get_untracked().is_some());
        runtime.dispose();
    }

    #[test]
    fn test_stale_failure_does_not_mask_winning_batch() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        let first = state.begin_cycle();
        let second = state.begin_cycle();

        state.finish_cycle(second, Ok(fixtures::batch()));
        state.finish_cycle(first, Err("timeout".to_string()));

        assert!(state.dashboard.get_untracked().is_some());
        assert!(state.last_error.get_untracked().is_none());
        assert!(!state.loading.get_untracked());
        runtime.dispose();
    }
}
