// Performance metrics module
//
// Provides lightweight counters for monitoring showroom interaction volume

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Interaction metrics, shared across components.
///
/// Uses atomic operations for thread-safe tracking without locks. Counters
/// are collected over the component lifetime and logged on shutdown.
#[derive(Debug)]
pub struct Metrics {
    /// Number of state updates applied by the showroom manager
    pub state_updates: AtomicU64,

    /// Number of filter changes applied
    pub filter_changes: AtomicU64,

    /// Number of models added to or removed from the comparison selection
    pub selection_changes: AtomicU64,

    /// Number of comparison selections rejected at capacity
    pub capacity_rejections: AtomicU64,

    /// Number of user-facing notifications sent
    pub notifications_sent: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            state_updates: AtomicU64::new(0),
            filter_changes: AtomicU64::new(0),
            selection_changes: AtomicU64::new(0),
            capacity_rejections: AtomicU64::new(0),
            notifications_sent: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_filter_change(&self) {
        self.filter_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_selection_change(&self) {
        self.selection_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_capacity_rejection(&self) {
        self.capacity_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification(&self) {
        self.notifications_sent.fetch_add(1, Ordering::Relaxed);
    }

    /// Time since the metrics instance was created.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log a metrics summary, typically on shutdown.
    pub fn log_summary(&self) {
        tracing::info!("=== Interaction Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "State updates: {}, filter changes: {}, selection changes: {}",
            self.state_updates.load(Ordering::Relaxed),
            self.filter_changes.load(Ordering::Relaxed),
            self.selection_changes.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Capacity rejections: {}, notifications: {}",
            self.capacity_rejections.load(Ordering::Relaxed),
            self.notifications_sent.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
