// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a small carousel component built with the Iced GUI framework.
//!
//! The heart of the crate is [`carousel::Carousel`], a presentation-agnostic
//! controller that reconciles three independent triggers of slide changes
//! (a recurring autoplay timer, discrete navigation commands, and continuous
//! pointer/touch gestures) into one consistent index state. The [`app`]
//! module binds the controller to an Iced demo application.

pub mod app;
pub mod carousel;
pub mod error;
