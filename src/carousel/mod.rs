//! Hero carousel controller.
//!
//! Owns the current slide index and the autoplay timer lifecycle. Slide
//! transitions themselves are pure ([`CarouselState`]); the controller layers
//! the interaction policy on top:
//!
//! - autoplay advances one slide per interval
//! - manual navigation (buttons, indicators, swipes) stops autoplay and
//!   schedules it to resume after a fixed cool-down
//! - hovering stops autoplay; leaving resumes it immediately
//!
//! Change events are emitted over a tokio broadcast channel so the
//! presentation layer can re-render without polling, the same pattern the
//! showroom manager uses.

pub mod timer;

use std::sync::{Arc, RwLock};
use std::time::Duration;
use timer::TimerHandle;
use tokio::sync::broadcast;

/// Default autoplay advance interval.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Cool-down between a manual interaction and autoplay resuming.
pub const AUTOPLAY_RESUME_DELAY: Duration = Duration::from_millis(3000);

/// Minimum horizontal displacement for a swipe to navigate.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Pure slide-index state. Inert when `slide_count` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    current_slide: usize,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current_slide: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Clamp `index` into bounds and select it. Returns whether the index
    /// changed.
    pub fn go_to(&mut self, index: i64) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let clamped = index.clamp(0, (self.slide_count - 1) as i64) as usize;
        let changed = clamped != self.current_slide;
        self.current_slide = clamped;
        changed
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let target = (self.current_slide + 1) % self.slide_count;
        let changed = target != self.current_slide;
        self.current_slide = target;
        changed
    }

    /// Retreat one slide, wrapping past the start.
    pub fn prev(&mut self) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let target = (self.current_slide + self.slide_count - 1) % self.slide_count;
        let changed = target != self.current_slide;
        self.current_slide = target;
        changed
    }
}

/// Direction resolved from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Drag to the left: show the next slide.
    Next,
    /// Drag to the right: show the previous slide.
    Prev,
}

/// Start and end coordinates of a pointer/touch gesture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl SwipeGesture {
    /// Classify the gesture against a horizontal threshold.
    ///
    /// Vertical-dominant gestures return `None` so the page keeps scrolling;
    /// so does any displacement at or below the threshold.
    pub fn classify(&self, threshold_px: f32) -> Option<SwipeDirection> {
        let dx = self.start_x - self.end_x;
        let dy = self.start_y - self.end_y;

        if dx.abs() <= dy.abs() {
            return None;
        }
        if dx.abs() <= threshold_px {
            return None;
        }
        if dx > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    }
}

/// Change events emitted by the carousel for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselChange {
    SlideChanged { index: usize },
    AutoplayChanged { active: bool },
}

/// Slide state plus the event channel, shared with the timer tasks.
#[derive(Debug)]
struct CarouselShared {
    state: RwLock<CarouselState>,
    change_tx: broadcast::Sender<CarouselChange>,
}

impl CarouselShared {
    fn emit(&self, change: CarouselChange) {
        // Ignore send errors - it's OK if no one is listening
        let _ = self.change_tx.send(change);
    }

    fn advance(&self) {
        let (changed, index) = {
            let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
            (state.next(), state.current_slide())
        };
        if changed {
            self.emit(CarouselChange::SlideChanged { index });
        }
    }

    fn retreat(&self) {
        let (changed, index) = {
            let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
            (state.prev(), state.current_slide())
        };
        if changed {
            self.emit(CarouselChange::SlideChanged { index });
        }
    }

    fn jump(&self, index: i64) {
        let (changed, index) = {
            let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
            (state.go_to(index), state.current_slide())
        };
        if changed {
            self.emit(CarouselChange::SlideChanged { index });
        }
    }
}

/// Carousel controller with autoplay timer lifecycle.
///
/// Timer methods must run inside a tokio runtime. With `slide_count == 0`
/// the controller is fully inert: no timers are spawned and navigation does
/// nothing.
#[derive(Debug)]
pub struct CarouselController {
    shared: Arc<CarouselShared>,
    autoplay: Arc<TimerHandle>,
    resume: TimerHandle,
    interval: Duration,
}

impl CarouselController {
    pub fn new(slide_count: usize) -> Self {
        Self::with_interval(slide_count, DEFAULT_AUTOPLAY_INTERVAL)
    }

    pub fn with_interval(slide_count: usize, interval: Duration) -> Self {
        let (change_tx, _) = broadcast::channel(100);
        Self {
            shared: Arc::new(CarouselShared {
                state: RwLock::new(CarouselState::new(slide_count)),
                change_tx,
            }),
            autoplay: Arc::new(TimerHandle::new()),
            resume: TimerHandle::new(),
            interval,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.shared
            .state
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .slide_count()
    }

    pub fn current_slide(&self) -> usize {
        self.shared
            .state
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .current_slide()
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }

    /// Subscribe to carousel change events.
    pub fn subscribe(&self) -> broadcast::Receiver<CarouselChange> {
        self.shared.change_tx.subscribe()
    }

    // Plain navigation, no timer side effects.

    /// Advance one slide with wraparound.
    pub fn next(&self) {
        self.shared.advance();
    }

    /// Retreat one slide with wraparound.
    pub fn prev(&self) {
        self.shared.retreat();
    }

    /// Go to a specific slide, clamped into bounds. Total for any index.
    pub fn go_to(&self, index: i64) {
        self.shared.jump(index);
    }

    // Autoplay lifecycle.

    /// Begin the repeating autoplay timer. No-op if already running or if
    /// the carousel has no slides.
    pub fn start_autoplay(&self) {
        if self.slide_count() == 0 {
            tracing::debug!("Carousel has no slides, autoplay stays off");
            return;
        }
        Self::spawn_autoplay(&self.autoplay, &self.shared, self.interval);
    }

    /// Cancel the autoplay timer and any pending cool-down resume. No-op if
    /// neither is running.
    pub fn stop_autoplay(&self) {
        self.resume.stop();
        if self.autoplay.stop() {
            self.shared.emit(CarouselChange::AutoplayChanged { active: false });
        }
    }

    // Manual interaction: navigate, stop autoplay, resume after cool-down.

    /// "Next" button pressed.
    pub fn click_next(&self) {
        if self.slide_count() == 0 {
            return;
        }
        self.shared.advance();
        self.pause_for_interaction();
        self.schedule_resume();
    }

    /// "Previous" button pressed.
    pub fn click_prev(&self) {
        if self.slide_count() == 0 {
            return;
        }
        self.shared.retreat();
        self.pause_for_interaction();
        self.schedule_resume();
    }

    /// Indicator dot pressed.
    pub fn click_indicator(&self, index: i64) {
        if self.slide_count() == 0 {
            return;
        }
        self.shared.jump(index);
        self.pause_for_interaction();
        self.schedule_resume();
    }

    // Hover: pause while the pointer is over the carousel.

    /// Pointer entered the carousel area.
    pub fn pointer_enter(&self) {
        self.resume.stop();
        self.pause_for_interaction();
    }

    /// Pointer left the carousel area; autoplay resumes without cool-down.
    pub fn pointer_leave(&self) {
        self.start_autoplay();
    }

    // Touch/drag gestures.

    /// Gesture started: autoplay pauses while the user is dragging.
    pub fn begin_gesture(&self) {
        self.resume.stop();
        self.pause_for_interaction();
    }

    /// Gesture ended. Navigates if the horizontal displacement clears the
    /// threshold, then schedules the cool-down resume either way. Returns
    /// the direction taken, if any.
    pub fn end_gesture(&self, gesture: SwipeGesture) -> Option<SwipeDirection> {
        if self.slide_count() == 0 {
            return None;
        }
        let direction = gesture.classify(SWIPE_THRESHOLD_PX);
        match direction {
            Some(SwipeDirection::Next) => self.shared.advance(),
            Some(SwipeDirection::Prev) => self.shared.retreat(),
            None => {}
        }
        self.schedule_resume();
        direction
    }

    fn pause_for_interaction(&self) {
        if self.autoplay.stop() {
            self.shared.emit(CarouselChange::AutoplayChanged { active: false });
        }
    }

    fn schedule_resume(&self) {
        if self.slide_count() == 0 {
            return;
        }
        let shared = Arc::clone(&self.shared);
        let autoplay = Arc::clone(&self.autoplay);
        let interval = self.interval;
        self.resume.restart(async move {
            tokio::time::sleep(AUTOPLAY_RESUME_DELAY).await;
            Self::spawn_autoplay(&autoplay, &shared, interval);
        });
    }

    fn spawn_autoplay(autoplay: &TimerHandle, shared: &Arc<CarouselShared>, interval: Duration) {
        let task_shared = Arc::clone(shared);
        let started = autoplay.start(async move {
            loop {
                tokio::time::sleep(interval).await;
                task_shared.advance();
            }
        });
        if started {
            shared.emit(CarouselChange::AutoplayChanged { active: true });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_and_prev_wrap() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.current_slide(), 0);

        state.next();
        state.next();
        assert_eq!(state.current_slide(), 2);

        state.next();
        assert_eq!(state.current_slide(), 0, "next at last slide wraps to 0");

        state.prev();
        assert_eq!(state.current_slide(), 2, "prev at slide 0 wraps to last");
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = CarouselState::new(4);

        state.go_to(99);
        assert_eq!(state.current_slide(), 3);

        state.go_to(-7);
        assert_eq!(state.current_slide(), 0);

        state.go_to(2);
        assert_eq!(state.current_slide(), 2);
    }

    #[test]
    fn test_empty_state_is_inert() {
        let mut state = CarouselState::new(0);
        assert!(!state.next());
        assert!(!state.prev());
        assert!(!state.go_to(5));
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn test_single_slide_never_changes() {
        let mut state = CarouselState::new(1);
        assert!(!state.next());
        assert!(!state.prev());
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn test_swipe_classification() {
        let left = SwipeGesture {
            start_x: 200.0,
            start_y: 10.0,
            end_x: 100.0,
            end_y: 15.0,
        };
        assert_eq!(left.classify(SWIPE_THRESHOLD_PX), Some(SwipeDirection::Next));

        let right = SwipeGesture {
            start_x: 100.0,
            start_y: 10.0,
            end_x: 220.0,
            end_y: 12.0,
        };
        assert_eq!(right.classify(SWIPE_THRESHOLD_PX), Some(SwipeDirection::Prev));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let short = SwipeGesture {
            start_x: 100.0,
            start_y: 0.0,
            end_x: 60.0,
            end_y: 0.0,
        };
        assert_eq!(short.classify(SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn test_vertical_dominant_swipe_is_ignored() {
        let scroll = SwipeGesture {
            start_x: 100.0,
            start_y: 300.0,
            end_x: 20.0,
            end_y: 100.0,
        };
        assert_eq!(scroll.classify(SWIPE_THRESHOLD_PX), None);
    }

    proptest! {
        /// next() applied slide_count times returns to the starting slide.
        #[test]
        fn prop_wraparound_closure(slide_count in 1usize..20, start in 0usize..20) {
            let mut state = CarouselState::new(slide_count);
            state.go_to(start as i64);
            let origin = state.current_slide();

            for _ in 0..slide_count {
                state.next();
            }
            prop_assert_eq!(state.current_slide(), origin);
        }

        /// go_to never leaves the valid index range, for any integer input.
        #[test]
        fn prop_go_to_stays_in_bounds(slide_count in 1usize..20, index in any::<i64>()) {
            let mut state = CarouselState::new(slide_count);
            state.go_to(index);
            prop_assert!(state.current_slide() < slide_count);
        }
    }
}
