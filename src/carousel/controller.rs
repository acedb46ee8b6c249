// SPDX-License-Identifier: MPL-2.0
//! Carousel controller: index state, autoplay state machine, and gesture
//! consumption.
//!
//! The controller is invoked only from the host's single event loop, so all
//! mutations of its state are serialized; its job is to impose a semantic
//! ordering on the three triggers that compete for the index. A drag in
//! progress suppresses the autoplay tick so the index never jumps out from
//! under the user's gesture.
//!
//! The recurring autoplay timer itself lives in the presentation layer as an
//! Iced subscription derived from [`Carousel::tick_interval`] on every frame.
//! Because the subscription is recomputed from controller state, dropping the
//! controller (or calling [`Carousel::stop`]) tears the timer down on every
//! exit path; a tick firing after teardown is structurally impossible.

use super::config::CarouselConfig;
use super::gesture::{GestureEvent, SwipeDirection, SwipeState};
use std::time::Duration;

/// Autoplay state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Autoplay {
    #[default]
    Stopped,
    Running,
}

/// The pair the presentation layer re-renders from, fresh immediately after
/// any event call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub is_dragging: bool,
}

/// Auto-advancing, manually navigable, swipe-responsive slide index.
///
/// State is mutated only through the controller's own operations. The current
/// index is always a valid slide index while there are slides; every
/// operation is a safe no-op on an empty carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    item_count: usize,
    slides_per_view: usize,
    autoplay_interval: Option<Duration>,
    current_index: usize,
    swipe: SwipeState,
    autoplay: Autoplay,
}

impl Carousel {
    /// Creates a controller from a validated configuration.
    ///
    /// Autoplay starts in `Stopped`; call [`Carousel::start`] to arm it.
    /// Validation happens in [`CarouselConfig::new`], so a controller can
    /// never exist in an inconsistent state.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            item_count: config.item_count(),
            slides_per_view: config.slides_per_view(),
            autoplay_interval: config.autoplay_interval(),
            current_index: 0,
            swipe: SwipeState::default(),
            autoplay: Autoplay::Stopped,
        }
    }

    /// Advances forward by one navigation step, wrapping past the last slide.
    pub fn next(&mut self) {
        if self.item_count == 0 {
            return;
        }
        self.current_index = (self.current_index + self.slides_per_view) % self.item_count;
    }

    /// Steps backward by one navigation step, wrapping past the first slide.
    pub fn prev(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let step = self.slides_per_view % self.item_count;
        self.current_index = (self.current_index + self.item_count - step) % self.item_count;
    }

    /// Jumps to `index`, clamping out-of-range values into `[0, item_count)`.
    ///
    /// Indicator buttons are often generated from a stale slide count, so an
    /// out-of-range index is forgiven rather than rejected.
    pub fn go_to(&mut self, index: usize) {
        if self.item_count == 0 {
            return;
        }
        self.current_index = index.min(self.item_count - 1);
    }

    /// Updates the slide count, re-clamping the current index into range.
    ///
    /// A count of zero resets the index and stops autoplay.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if item_count == 0 {
            self.current_index = 0;
            self.autoplay = Autoplay::Stopped;
        } else {
            self.current_index = self.current_index.min(item_count - 1);
        }
    }

    /// Arms autoplay.
    ///
    /// A no-op unless an interval is configured and there are at least two
    /// slides. Idempotent: the binding derives a single timer subscription
    /// from [`Carousel::tick_interval`], so starting twice cannot arm two.
    pub fn start(&mut self) {
        if self.autoplay_interval.is_some() && self.item_count > 1 {
            self.autoplay = Autoplay::Running;
        }
    }

    /// Disarms autoplay. Idempotent.
    pub fn stop(&mut self) {
        self.autoplay = Autoplay::Stopped;
    }

    /// Interval at which the presentation layer should tick the controller,
    /// or `None` when no timer should be armed.
    ///
    /// `None` while stopped, while a drag is in progress, or with fewer than
    /// two slides. A drag therefore pauses the timer without touching the
    /// autoplay state machine; releasing the pointer resumes it.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.autoplay != Autoplay::Running || self.swipe.is_dragging() || self.item_count < 2 {
            return None;
        }
        self.autoplay_interval
    }

    /// Timer callback: advances to the next slide when autoplay is due.
    ///
    /// Guarded by the same conditions as [`Carousel::tick_interval`], so a
    /// tick already in flight when a drag begins cannot move the index.
    pub fn tick(&mut self) {
        if self.tick_interval().is_some() {
            self.next();
        }
    }

    /// Consumes one unified gesture event.
    ///
    /// A finalizing event (`Up` or `Cancel`) resolves the accumulated
    /// displacement into at most one navigation step.
    pub fn gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Down(position) => self.swipe.begin(position),
            GestureEvent::Move(position) => self.swipe.track(position),
            GestureEvent::Up | GestureEvent::Cancel => match self.swipe.finish() {
                Some(SwipeDirection::Next) => self.next(),
                Some(SwipeDirection::Previous) => self.prev(),
                None => {}
            },
        }
    }

    /// Output for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            is_dragging: self.swipe.is_dragging(),
        }
    }

    /// Current slide index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// Number of slides.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the autoplay state machine is in `Running`.
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay == Autoplay::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn carousel(item_count: usize, slides_per_view: usize, interval_ms: u64) -> Carousel {
        let config = CarouselConfig::new(item_count, slides_per_view, interval_ms)
            .expect("valid test config");
        Carousel::new(config)
    }

    #[test]
    fn next_wraps_forward() {
        let mut c = carousel(5, 1, 0);
        c.go_to(4);
        c.next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut c = carousel(5, 1, 0);
        c.prev();
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = carousel(5, 1, 0);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn next_then_prev_round_trips_from_every_index() {
        for start in 0..5 {
            let mut c = carousel(5, 2, 0);
            c.go_to(start);
            c.next();
            c.prev();
            assert_eq!(c.current_index(), start, "round trip from index {start}");
        }
    }

    #[test]
    fn index_stays_in_range_under_arbitrary_navigation() {
        let mut c = carousel(7, 3, 0);
        for step in 0..100 {
            if step % 3 == 0 {
                c.prev();
            } else {
                c.next();
            }
            assert!(c.current_index() < 7, "index escaped range at step {step}");
        }
    }

    #[test]
    fn step_larger_than_item_count_stays_in_range() {
        let mut c = carousel(3, 5, 0);
        c.next();
        assert_eq!(c.current_index(), 2);
        c.prev();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn go_to_clamps_out_of_range_index() {
        let mut c = carousel(5, 1, 0);
        c.go_to(2);
        c.go_to(5);
        assert_eq!(c.current_index(), 4);
        c.go_to(usize::MAX);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn go_to_accepts_valid_index() {
        let mut c = carousel(5, 1, 0);
        c.go_to(3);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn empty_carousel_operations_are_no_ops() {
        let mut c = carousel(0, 1, 4000);
        c.next();
        c.prev();
        c.go_to(3);
        c.start();
        c.tick();
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_autoplay_running());
        assert_eq!(c.tick_interval(), None);
    }

    #[test]
    fn set_item_count_reclamps_index() {
        let mut c = carousel(5, 1, 0);
        c.go_to(4);
        c.set_item_count(3);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn set_item_count_zero_resets_and_stops() {
        let mut c = carousel(5, 1, 4000);
        c.start();
        c.go_to(4);
        c.set_item_count(0);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_autoplay_running());
        assert_eq!(c.tick_interval(), None);
    }

    #[test]
    fn start_requires_interval_and_multiple_slides() {
        let mut manual_only = carousel(5, 1, 0);
        manual_only.start();
        assert!(!manual_only.is_autoplay_running());

        let mut single_slide = carousel(1, 1, 4000);
        single_slide.start();
        assert!(!single_slide.is_autoplay_running());
    }

    #[test]
    fn double_start_arms_a_single_timer() {
        let mut c = carousel(5, 1, 250);
        c.start();
        c.start();
        assert_eq!(c.tick_interval(), Some(Duration::from_millis(250)));

        // One elapsed interval produces exactly one tick and one advance.
        c.tick();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut c = carousel(5, 1, 250);
        c.stop();
        c.start();
        c.stop();
        c.stop();
        assert!(!c.is_autoplay_running());
        assert_eq!(c.tick_interval(), None);
    }

    #[test]
    fn tick_after_stop_changes_nothing() {
        let mut c = carousel(5, 1, 250);
        c.start();
        c.tick();
        c.stop();
        for _ in 0..10 {
            c.tick();
        }
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn swipe_past_threshold_navigates_next() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        c.gesture(GestureEvent::Move(Point::new(40.0, 0.0)));
        c.gesture(GestureEvent::Up);
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_dragging());
    }

    #[test]
    fn swipe_past_threshold_navigates_previous() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        c.gesture(GestureEvent::Move(Point::new(170.0, 0.0)));
        c.gesture(GestureEvent::Up);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn tap_below_threshold_does_not_navigate() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        c.gesture(GestureEvent::Move(Point::new(90.0, 0.0)));
        c.gesture(GestureEvent::Up);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_dragging());
    }

    #[test]
    fn cancel_finalizes_like_up() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        c.gesture(GestureEvent::Move(Point::new(30.0, 0.0)));
        c.gesture(GestureEvent::Cancel);
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_dragging());
    }

    #[test]
    fn move_before_down_is_ignored() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Move(Point::new(500.0, 0.0)));
        c.gesture(GestureEvent::Up);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_dragging());
    }

    #[test]
    fn down_while_dragging_is_ignored() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        c.gesture(GestureEvent::Move(Point::new(160.0, 0.0)));
        c.gesture(GestureEvent::Down(Point::new(900.0, 0.0)));
        c.gesture(GestureEvent::Up);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn drag_pauses_autoplay_and_release_resumes_it() {
        let mut c = carousel(5, 1, 250);
        c.start();
        assert!(c.tick_interval().is_some());

        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        assert_eq!(c.tick_interval(), None);
        assert!(c.is_autoplay_running());

        // A tick already scheduled when the drag began must not advance.
        c.tick();
        assert_eq!(c.current_index(), 0);

        c.gesture(GestureEvent::Up);
        assert_eq!(c.tick_interval(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn snapshot_is_fresh_after_every_event() {
        let mut c = carousel(5, 1, 0);
        c.gesture(GestureEvent::Down(Point::new(100.0, 0.0)));
        let mid_drag = c.snapshot();
        assert!(mid_drag.is_dragging);
        assert_eq!(mid_drag.current_index, 0);

        c.gesture(GestureEvent::Move(Point::new(30.0, 0.0)));
        c.gesture(GestureEvent::Up);
        let after = c.snapshot();
        assert!(!after.is_dragging);
        assert_eq!(after.current_index, 1);
    }

    #[test]
    fn manual_navigation_keeps_autoplay_running() {
        let mut c = carousel(5, 1, 250);
        c.start();
        c.next();
        c.go_to(3);
        assert!(c.is_autoplay_running());
        assert_eq!(c.tick_interval(), Some(Duration::from_millis(250)));
    }
}
