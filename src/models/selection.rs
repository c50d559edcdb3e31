use thiserror::Error;

/// Maximum number of models that can be compared side by side.
///
/// The comparison modal renders one column per model; more than three columns
/// does not fit the layout, so the fourth selection is rejected outright and
/// surfaced to the user instead of silently dropped.
pub const MAX_COMPARISON_MODELS: usize = 3;

/// Minimum number of models required before a comparison makes sense.
pub const MIN_COMPARISON_MODELS: usize = 2;

/// Rejection signal for a selection that would exceed the comparison limit.
///
/// The caller must revert any optimistic UI state (e.g. uncheck the box) and
/// warn the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("at most {capacity} models can be compared (rejected '{rejected_id}')")]
pub struct CapacityError {
    pub rejected_id: String,
    pub capacity: usize,
}

/// Outcome of a toggle that did not hit the capacity limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Duplicate add or removal of an id that was never selected.
    Unchanged,
}

/// Ordered set of model ids chosen for side-by-side comparison.
///
/// Invariants: no duplicate ids, never more than [`MAX_COMPARISON_MODELS`]
/// entries, selection order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a model for comparison.
    ///
    /// Adding is idempotent; adding while full returns a [`CapacityError`]
    /// and leaves the selection unchanged. Removing an absent id is a no-op.
    pub fn toggle(&mut self, model_id: &str, selected: bool) -> Result<ToggleOutcome, CapacityError> {
        let present = self.ids.iter().any(|id| id == model_id);

        if selected {
            if present {
                return Ok(ToggleOutcome::Unchanged);
            }
            if self.ids.len() >= MAX_COMPARISON_MODELS {
                return Err(CapacityError {
                    rejected_id: model_id.to_string(),
                    capacity: MAX_COMPARISON_MODELS,
                });
            }
            self.ids.push(model_id.to_string());
            Ok(ToggleOutcome::Added)
        } else if present {
            self.ids.retain(|id| id != model_id);
            Ok(ToggleOutcome::Removed)
        } else {
            Ok(ToggleOutcome::Unchanged)
        }
    }

    /// Empty the selection unconditionally.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Comparison needs at least two models.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_COMPARISON_MODELS
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, model_id: &str) -> bool {
        self.ids.iter().any(|id| id == model_id)
    }
}
