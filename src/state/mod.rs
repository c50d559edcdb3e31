// Showroom state management module
//
// This module provides the ShowroomManager which wraps the filter and
// comparison state with thread-safe access using Arc<RwLock<T>> and emits
// change events for the presentation layer.

use crate::catalog::ModelCatalog;
use crate::config::PreferenceStore;
use crate::metrics::Metrics;
use crate::models::{
    CapacityError, ComparisonSelection, ComparisonTable, FilterCategory, FilterState,
    MAX_COMPARISON_MODELS, ToggleOutcome, VehicleModel,
};
use crate::notify::{Notifier, Severity};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when showroom state is modified
///
/// These events are emitted to notify interested parties (primarily the
/// presentation layer) about state changes without requiring them to poll.
#[derive(Clone, Debug, PartialEq)]
pub enum ShowroomChange {
    /// A filter category changed its active bucket
    FilterChanged {
        category: &'static str,
        value: &'static str,
    },

    /// The visible model set was recomputed after a filter change
    VisibilityChanged { visible: Vec<String> },

    /// The comparison selection changed
    SelectionChanged {
        selected: Vec<String>,
        can_compare: bool,
    },

    /// A selection was rejected because the comparison is full
    ComparisonRejected { model_id: String },

    /// The comparison selection was cleared
    SelectionCleared,
}

/// Filter and comparison state owned by the manager.
#[derive(Debug, Clone, Default)]
pub struct ShowroomState {
    pub filters: FilterState,
    pub selection: ComparisonSelection,
}

/// Thread-safe filter/comparison manager with event emission
///
/// This is the central state component of the model grid. It:
/// - Provides thread-safe access to [`ShowroomState`] via `Arc<RwLock<T>>`
/// - Emits [`ShowroomChange`] events over a tokio broadcast channel
/// - Resolves model ids against an injected, read-only [`ModelCatalog`]
/// - Reports user-facing conditions through an injected
///   [`Notifier`](crate::notify::Notifier)
/// - Optionally persists the active filters through a
///   [`PreferenceStore`](crate::config::PreferenceStore), best-effort
///
/// All operations are total over well-formed input; the only rejecting
/// operation is [`toggle_comparison`](Self::toggle_comparison), which returns
/// a [`CapacityError`] when a fourth model is selected so the caller can
/// revert optimistic UI state.
pub struct ShowroomManager {
    catalog: Arc<ModelCatalog>,
    state: Arc<RwLock<ShowroomState>>,
    change_tx: broadcast::Sender<ShowroomChange>,
    notifier: Arc<dyn Notifier>,
    store: Option<Arc<PreferenceStore>>,
    metrics: Arc<Metrics>,
}

impl ShowroomManager {
    /// Create a manager over a catalog with a notifier for user-facing
    /// conditions. Filters start unconstrained, the selection empty.
    pub fn new(catalog: Arc<ModelCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        let (change_tx, _) = broadcast::channel(100);
        Self {
            catalog,
            state: Arc::new(RwLock::new(ShowroomState::default())),
            change_tx,
            notifier,
            store: None,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Attach a preference store and restore the persisted filters from it.
    ///
    /// Subsequent filter changes are saved back best-effort; a failing save
    /// is logged and never surfaced.
    pub fn with_store(self, store: Arc<PreferenceStore>) -> Self {
        let filters = store.load_filters();
        self.write(|state| state.filters = filters);
        Self {
            store: Some(store),
            ..self
        }
    }

    /// Subscribe to showroom change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ShowroomChange> {
        self.change_tx.subscribe()
    }

    /// Get a snapshot of the current state.
    pub fn snapshot(&self) -> ShowroomState {
        self.state
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// The currently active filters.
    pub fn filters(&self) -> FilterState {
        self.state.read().unwrap_or_else(|p| p.into_inner()).filters
    }

    /// Interaction metrics collected by this manager.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Replace the active bucket for `category`; `"all"` clears that
    /// category's constraint. Unknown values are treated as `"all"`.
    ///
    /// Recomputes the visible set, emits the corresponding events and
    /// persists the filters if a store is attached.
    pub fn set_filter(&self, category: FilterCategory, raw: &str) -> Vec<ShowroomChange> {
        let (applied, filters) = {
            let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
            let applied = state.filters.set(category, raw);
            (applied, state.filters)
        };
        self.metrics.record_state_update();
        self.metrics.record_filter_change();

        if applied != raw {
            tracing::debug!(
                "Unknown {} bucket '{}', treating as '{}'",
                category.as_str(),
                raw,
                applied
            );
        }

        let changes = vec![
            ShowroomChange::FilterChanged {
                category: category.as_str(),
                value: applied,
            },
            ShowroomChange::VisibilityChanged {
                visible: self.visible_ids(),
            },
        ];
        for change in &changes {
            self.emit(change.clone());
        }

        if let Some(store) = &self.store {
            if let Err(e) = store.save_filters(&filters) {
                tracing::warn!("Failed to persist filters: {e:#}");
            }
        }

        changes
    }

    /// True iff the model satisfies every active category constraint.
    pub fn is_visible(&self, model: &VehicleModel) -> bool {
        self.filters().matches(model)
    }

    /// Ids of the catalog models passing the active filters, in catalog order.
    pub fn visible_ids(&self) -> Vec<String> {
        let filters = self.filters();
        self.catalog
            .iter()
            .filter(|model| filters.matches(model))
            .map(|model| model.id.clone())
            .collect()
    }

    /// Catalog models passing the active filters, in catalog order.
    pub fn visible_models(&self) -> Vec<VehicleModel> {
        let filters = self.filters();
        self.catalog
            .iter()
            .filter(|model| filters.matches(model))
            .cloned()
            .collect()
    }

    /// Select (`selected = true`) or deselect a model for comparison.
    ///
    /// Adding a fourth model is rejected: the selection stays unchanged, a
    /// [`ShowroomChange::ComparisonRejected`] event is emitted, the user is
    /// warned through the notifier, and the [`CapacityError`] is returned so
    /// the caller can revert any optimistic UI state (e.g. the checkbox).
    pub fn toggle_comparison(
        &self,
        model_id: &str,
        selected: bool,
    ) -> Result<Vec<ShowroomChange>, CapacityError> {
        let outcome = {
            let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
            state.selection.toggle(model_id, selected)
        };
        self.metrics.record_state_update();

        match outcome {
            Ok(ToggleOutcome::Unchanged) => Ok(Vec::new()),
            Ok(_) => {
                self.metrics.record_selection_change();
                let change = ShowroomChange::SelectionChanged {
                    selected: self.selected_ids(),
                    can_compare: self.can_compare(),
                };
                self.emit(change.clone());
                Ok(vec![change])
            }
            Err(err) => {
                self.metrics.record_capacity_rejection();
                self.emit(ShowroomChange::ComparisonRejected {
                    model_id: model_id.to_string(),
                });
                self.notifier.notify(
                    &format!("Maximum {MAX_COMPARISON_MODELS} models can be compared"),
                    Severity::Warning,
                );
                self.metrics.record_notification();
                Err(err)
            }
        }
    }

    /// Empty the comparison selection unconditionally.
    pub fn clear_comparison(&self) -> Vec<ShowroomChange> {
        self.write(|state| state.selection.clear());
        self.metrics.record_state_update();
        self.metrics.record_selection_change();

        let changes = vec![
            ShowroomChange::SelectionCleared,
            ShowroomChange::SelectionChanged {
                selected: Vec::new(),
                can_compare: false,
            },
        ];
        for change in &changes {
            self.emit(change.clone());
        }
        changes
    }

    /// True iff at least two models are selected.
    pub fn can_compare(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .selection
            .can_compare()
    }

    /// The selected model ids in selection order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .selection
            .ids()
            .to_vec()
    }

    /// Build the side-by-side comparison table for the current selection.
    ///
    /// Ids no longer present in the catalog are skipped; selection order is
    /// preserved.
    pub fn comparison_table(&self) -> ComparisonTable {
        let ids = self.selected_ids();
        ComparisonTable::build(&self.catalog.resolve(&ids))
    }

    fn write<F>(&self, f: F)
    where
        F: FnOnce(&mut ShowroomState),
    {
        let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
        f(&mut state);
    }

    fn emit(&self, change: ShowroomChange) {
        // Ignore send errors - it's OK if no one is listening
        let _ = self.change_tx.send(change);
    }
}

// Make ShowroomManager cloneable for sharing across tasks
impl Clone for ShowroomManager {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            state: Arc::clone(&self.state),
            change_tx: self.change_tx.clone(),
            notifier: Arc::clone(&self.notifier),
            store: self.store.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::notify::{MockNotifier, TracingNotifier};
    use std::sync::atomic::Ordering;

    fn manager() -> ShowroomManager {
        ShowroomManager::new(Arc::new(default_catalog()), Arc::new(TracingNotifier))
    }

    #[test]
    fn test_defaults_show_everything() {
        let manager = manager();
        assert_eq!(manager.visible_ids().len(), 4);
        assert!(!manager.can_compare());
        assert!(manager.selected_ids().is_empty());
    }

    #[test]
    fn test_range_filter_scenario() {
        // Catalog ranges: 650, 520, 580, 420 km
        let manager = manager();
        manager.set_filter(FilterCategory::Range, "450-550");

        assert_eq!(manager.visible_ids(), ["pulse"]);
    }

    #[test]
    fn test_filters_intersect() {
        let manager = manager();
        manager.set_filter(FilterCategory::BodyType, "sedan");
        assert_eq!(manager.visible_ids(), ["apex", "pulse"]);

        manager.set_filter(FilterCategory::Price, "45k+");
        assert_eq!(manager.visible_ids(), ["apex"]);

        manager.set_filter(FilterCategory::Price, "all");
        assert_eq!(manager.visible_ids(), ["apex", "pulse"]);
    }

    #[test]
    fn test_set_filter_emits_events() {
        let manager = manager();
        let mut rx = manager.subscribe();

        manager.set_filter(FilterCategory::Price, "under-35k");

        assert_eq!(
            rx.try_recv().unwrap(),
            ShowroomChange::FilterChanged {
                category: "price",
                value: "under-35k",
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            ShowroomChange::VisibilityChanged {
                visible: vec!["city".to_string()],
            }
        );
    }

    #[test]
    fn test_is_visible_is_pure() {
        let manager = manager();
        manager.set_filter(FilterCategory::Range, "550+");

        let apex = default_catalog().get("apex").unwrap().clone();
        let first = manager.is_visible(&apex);
        let second = manager.is_visible(&apex);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_toggle_comparison_events_and_state() {
        let manager = manager();
        let mut rx = manager.subscribe();

        manager.toggle_comparison("apex", true).unwrap();
        manager.toggle_comparison("pulse", true).unwrap();

        assert_eq!(manager.selected_ids(), ["apex", "pulse"]);
        assert!(manager.can_compare());

        assert_eq!(
            rx.try_recv().unwrap(),
            ShowroomChange::SelectionChanged {
                selected: vec!["apex".to_string()],
                can_compare: false,
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            ShowroomChange::SelectionChanged {
                selected: vec!["apex".to_string(), "pulse".to_string()],
                can_compare: true,
            }
        );
    }

    #[test]
    fn test_duplicate_add_emits_nothing() {
        let manager = manager();
        manager.toggle_comparison("apex", true).unwrap();

        let mut rx = manager.subscribe();
        let changes = manager.toggle_comparison("apex", true).unwrap();

        assert!(changes.is_empty());
        assert!(rx.try_recv().is_err());
        assert_eq!(manager.selected_ids(), ["apex"]);
    }

    #[test]
    fn test_fourth_selection_warns_exactly_once() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .withf(|message, severity| {
                message == "Maximum 3 models can be compared" && *severity == Severity::Warning
            })
            .times(1)
            .return_const(());

        let manager = ShowroomManager::new(Arc::new(default_catalog()), Arc::new(mock));
        manager.toggle_comparison("apex", true).unwrap();
        manager.toggle_comparison("pulse", true).unwrap();
        manager.toggle_comparison("city", true).unwrap();

        let mut rx = manager.subscribe();
        let err = manager.toggle_comparison("prime-suv", true).unwrap_err();
        assert_eq!(err.rejected_id, "prime-suv");

        // Selection unchanged, exactly one rejection event
        assert_eq!(manager.selected_ids(), ["apex", "pulse", "city"]);
        assert_eq!(
            rx.try_recv().unwrap(),
            ShowroomChange::ComparisonRejected {
                model_id: "prime-suv".to_string(),
            }
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(
            manager.metrics().capacity_rejections.load(Ordering::Relaxed),
            1
        );
    }

    #[test]
    fn test_clear_comparison() {
        let manager = manager();
        manager.toggle_comparison("apex", true).unwrap();
        manager.toggle_comparison("pulse", true).unwrap();

        let changes = manager.clear_comparison();

        assert!(manager.selected_ids().is_empty());
        assert!(!manager.can_compare());
        assert_eq!(changes[0], ShowroomChange::SelectionCleared);
    }

    #[test]
    fn test_comparison_table_skips_unknown_ids() {
        let manager = manager();
        manager.toggle_comparison("apex", true).unwrap();
        manager.toggle_comparison("retired-model", true).unwrap();
        manager.toggle_comparison("city", true).unwrap();

        let table = manager.comparison_table();
        assert_eq!(table.columns, ["VoltEdge Apex", "VoltEdge City"]);
        assert!(!table.rows.is_empty());
    }

    #[test]
    fn test_clone_shares_state() {
        let manager1 = manager();
        let manager2 = manager1.clone();

        manager1.toggle_comparison("apex", true).unwrap();
        assert_eq!(manager2.selected_ids(), ["apex"]);
    }
}
