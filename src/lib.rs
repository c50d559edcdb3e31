// VoltEdge - Showroom state engine for the VoltEdge Motors model line-up
//
// This is the library crate containing the core business logic and data structures.
// The binary crate (main.rs) provides a headless demo entry point.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use carousel::{CarouselChange, CarouselController, CarouselState};
pub use catalog::ModelCatalog;
pub use config::PreferenceStore;
pub use models::{ComparisonTable, FilterCategory, FilterState, VehicleModel};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use state::{ShowroomChange, ShowroomManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
