// SPDX-License-Identifier: MPL-2.0
//! Validated construction parameters for the carousel controller.

use crate::error::{Error, Result};
use std::time::Duration;

/// Immutable carousel configuration, validated at construction.
///
/// `item_count` and `slides_per_view` are unsigned, so negative values are
/// unrepresentable; the constructor rejects the remaining invalid shape
/// (`slides_per_view == 0`) so a controller can never exist in an
/// inconsistent state. An `autoplay_interval_ms` of zero means autoplay is
/// disabled and is stored as `None`.
///
/// # Example
///
/// ```
/// use iced_carousel::carousel::CarouselConfig;
///
/// let config = CarouselConfig::new(5, 1, 4000).expect("valid config");
/// assert_eq!(config.item_count(), 5);
/// assert!(config.autoplay_interval().is_some());
///
/// // Zero interval disables autoplay rather than failing.
/// let manual_only = CarouselConfig::new(5, 1, 0).expect("valid config");
/// assert!(manual_only.autoplay_interval().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    item_count: usize,
    slides_per_view: usize,
    autoplay_interval: Option<Duration>,
}

impl CarouselConfig {
    /// Creates a new configuration.
    ///
    /// Returns [`Error::Config`] if `slides_per_view` is zero.
    pub fn new(item_count: usize, slides_per_view: usize, autoplay_interval_ms: u64) -> Result<Self> {
        if slides_per_view == 0 {
            return Err(Error::Config(
                "slides_per_view must be at least 1".to_string(),
            ));
        }

        let autoplay_interval = if autoplay_interval_ms > 0 {
            Some(Duration::from_millis(autoplay_interval_ms))
        } else {
            None
        };

        Ok(Self {
            item_count,
            slides_per_view,
            autoplay_interval,
        })
    }

    /// Number of slides.
    #[must_use]
    pub fn item_count(self) -> usize {
        self.item_count
    }

    /// Number of items advanced per navigation step.
    #[must_use]
    pub fn slides_per_view(self) -> usize {
        self.slides_per_view
    }

    /// Autoplay interval, or `None` when autoplay is disabled.
    #[must_use]
    pub fn autoplay_interval(self) -> Option<Duration> {
        self.autoplay_interval
    }
}
