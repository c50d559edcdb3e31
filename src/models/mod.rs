//! Data models for the showroom interaction core.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`VehicleModel`]: One catalog entry, with grouped spec sheet
//! - [`FilterState`]: The active filter bucket per category
//! - [`ComparisonSelection`]: Bounded ordered set of models picked for comparison
//! - [`ComparisonTable`]: Derived side-by-side view of the resolved selection
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: catalog entries and filter state derive
//!   `Serialize`/`Deserialize` for YAML persistence
//! - **Pure**: filter matching and selection transitions have no I/O and no
//!   timers, so they are unit-testable without a runtime
//! - **Owned by one component**: mutation goes through
//!   [`ShowroomManager`](crate::state::ShowroomManager), which emits change
//!   events for the presentation layer

pub mod comparison;
pub mod filters;
pub mod selection;
pub mod vehicle;

pub use comparison::{ComparisonRow, ComparisonTable, MISSING_SPEC_MARKER};
pub use filters::{BodyTypeFilter, FilterCategory, FilterState, PriceBucket, RangeBucket};
pub use selection::{
    CapacityError, ComparisonSelection, MAX_COMPARISON_MODELS, MIN_COMPARISON_MODELS,
    ToggleOutcome,
};
pub use vehicle::{BodyType, SpecGroups, VehicleModel};
