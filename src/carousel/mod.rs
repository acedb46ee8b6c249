// SPDX-License-Identifier: MPL-2.0
//! Carousel interaction controller.
//!
//! The controller owns a single slide index and the two bits of interaction
//! state that compete for it: a recurring autoplay timer and an in-progress
//! drag gesture. The presentation layer forwards raw events in and re-renders
//! purely from the [`CarouselSnapshot`] the controller exposes.
//!
//! ## Architecture
//!
//! ```text
//! controller.rs (orchestrator)
//!     ├── config   - Validated construction parameters
//!     └── gesture  - Unified pointer/touch drag state machine
//! ```

pub mod config;
pub mod controller;
pub mod gesture;

pub use config::CarouselConfig;
pub use controller::{Carousel, CarouselSnapshot};
pub use gesture::{GestureEvent, SwipeDirection, SWIPE_THRESHOLD};
