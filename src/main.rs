//! VoltEdge - Showroom state engine for the VoltEdge Motors model line-up
//!
//! Headless entry point that exercises the showroom components. It
//! initializes:
//! - Logging infrastructure (file rotation + console output)
//! - Tokio async runtime (carousel timers run on it)
//! - Preference store and model catalog ([`PreferenceStore`])
//! - Showroom state management ([`ShowroomManager`])
//! - Hero carousel ([`CarouselController`])
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/voltedge_<timestamp>.log
//! 2. Create tokio runtime
//! 3. Load catalog and persisted filters from VoltEdge Data/
//! 4. Run a scripted showroom session: filter, select, compare
//! 5. Drive the carousel through a couple of autoplay intervals
//! 6. Log the interaction metrics and shut the runtime down
//!
//! # Configuration Files
//!
//! Expected in `VoltEdge Data/` directory (all optional):
//! - `VoltEdge Catalog.yaml`: Vehicle line-up override
//! - `VoltEdge Filters.yaml`: Persisted filter preferences

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use voltedge::{
    APP_NAME, CarouselController, FilterCategory, PreferenceStore, ShowroomManager,
    TracingNotifier, VERSION,
};

fn main() -> Result<()> {
    // Setup logging with both file and console output
    voltedge::logging::setup_logging_with_console("logs", "voltedge", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Create tokio runtime for the carousel timers
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("voltedge-worker")
        .build()?;

    // Load catalog and persisted filters
    let store = Arc::new(PreferenceStore::new("VoltEdge Data")?);
    let catalog = Arc::new(store.load_catalog()?);
    tracing::info!("Catalog loaded with {} models", catalog.len());

    let manager = ShowroomManager::new(Arc::clone(&catalog), Arc::new(TracingNotifier))
        .with_store(Arc::clone(&store));

    // Scripted showroom session
    manager.set_filter(FilterCategory::Range, "450-550");
    tracing::info!("Visible after range filter: {:?}", manager.visible_ids());

    manager.set_filter(FilterCategory::Range, "all");
    let _ = manager.toggle_comparison("apex", true);
    let _ = manager.toggle_comparison("pulse", true);
    let _ = manager.toggle_comparison("prime-suv", true);

    // A fourth selection is rejected and surfaces through the notifier
    if manager.toggle_comparison("city", true).is_err() {
        tracing::info!("Comparison is full, as expected");
    }

    let table = manager.comparison_table();
    tracing::info!("Comparing: {:?}", table.columns);
    for (row_index, row) in table.rows.iter().enumerate() {
        tracing::info!(
            "  {}: {:?}",
            row.spec,
            (0..table.columns.len())
                .map(|column| table.cell(row_index, column))
                .collect::<Vec<_>>()
        );
    }

    // Drive the carousel through two fast autoplay intervals
    runtime.block_on(async {
        let carousel = CarouselController::with_interval(4, Duration::from_millis(100));
        carousel.start_autoplay();
        tokio::time::sleep(Duration::from_millis(250)).await;
        carousel.stop_autoplay();
        tracing::info!(
            "Carousel stopped on slide {} of {}",
            carousel.current_slide(),
            carousel.slide_count()
        );
    });

    manager.metrics().log_summary();

    runtime.shutdown_timeout(Duration::from_secs(5));
    tracing::info!("Shutdown complete");
    Ok(())
}
