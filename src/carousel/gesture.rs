// SPDX-License-Identifier: MPL-2.0
//! Unified pointer/touch gesture stream and swipe state machine.
//!
//! Mouse and touch input are abstracted into the same four logical events so
//! the controller runs a single drag state machine regardless of input
//! modality. A gesture interrupted by the pointer leaving the tracking area
//! finalizes exactly like a release, so the machine can never be left stuck
//! in its dragging state.

use iced::Point;

/// Minimum horizontal displacement, in logical pixels, for a gesture to count
/// as an intentional swipe rather than a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A gesture event forwarded by the presentation layer.
///
/// `Cancel` covers the pointer leaving the tracking area mid-drag and is
/// finalized identically to `Up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
}

/// Navigation direction resolved from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged toward the end of the strip (negative delta).
    Next,
    /// Dragged toward the start of the strip (positive delta).
    Previous,
}

/// Drag state for an in-progress swipe.
///
/// Invariant: `origin` is `Some` exactly while a drag is active, and `delta`
/// is zero whenever it is not.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeState {
    origin: Option<Point>,
    delta: f32,
}

impl SwipeState {
    /// Starts tracking a drag at `position`.
    ///
    /// Ignored if a drag is already in progress; the original origin wins.
    pub fn begin(&mut self, position: Point) {
        if self.origin.is_none() {
            self.origin = Some(position);
            self.delta = 0.0;
        }
    }

    /// Updates the horizontal displacement from the drag origin.
    ///
    /// A move without a preceding down is ignored; event ordering is dictated
    /// by the host input system and must be tolerated.
    pub fn track(&mut self, position: Point) {
        if let Some(origin) = self.origin {
            self.delta = position.x - origin.x;
        }
    }

    /// Finalizes the gesture and resolves it into a navigation direction.
    ///
    /// Returns `None` when no drag was in progress or the displacement stayed
    /// below [`SWIPE_THRESHOLD`] (a tap). The state is reset either way.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        self.origin.take()?;
        let delta = std::mem::replace(&mut self.delta, 0.0);

        if delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }

        if delta < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Current horizontal displacement from the drag origin.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }
}
