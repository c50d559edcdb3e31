//! Cancellable timer handle.
//!
//! Owns at most one live tokio task at a time. The autoplay and cool-down
//! timers of the carousel are both instances of this resource, which is what
//! enforces the "at most one live autoplay timer per carousel" invariant
//! mechanically instead of by convention.

use std::future::Future;
use std::sync::Mutex;
use tokio::task::JoinHandle;

/// Slot for a single cancellable timer task.
///
/// All methods must be called from within a tokio runtime context.
#[derive(Debug, Default)]
pub struct TimerHandle {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TimerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a spawned task is still live.
    pub fn is_active(&self) -> bool {
        self.task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Spawn `future` unless a task is already live. Returns whether a new
    /// task was spawned (idempotent start).
    pub fn start<F>(&self, future: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.as_ref().is_some_and(|task| !task.is_finished()) {
            return false;
        }
        *slot = Some(tokio::spawn(future));
        true
    }

    /// Cancel any live task and spawn `future` in its place.
    pub fn restart<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = slot.take() {
            task.abort();
        }
        *slot = Some(tokio::spawn(future));
    }

    /// Cancel the pending task, if any. Returns whether a live task was
    /// cancelled.
    pub fn stop(&self) -> bool {
        let task = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match task {
            Some(task) => {
                let was_live = !task.is_finished();
                task.abort();
                was_live
            }
            None => false,
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        // No task survives its handle.
        if let Ok(mut slot) = self.task.lock() {
            if let Some(task) = slot.take() {
                task.abort();
            }
        }
    }
}
