//! Smooth page scrolling
//!
//! Once the hero is fully expanded the page below it scrolls like a normal
//! document. Line, half-page and page steps animate toward their target with
//! a configurable easing curve.
//!
//! - `easing` - pure easing curves on [0, 1]
//! - `animator` - the page scroll animator

pub mod animator;
pub mod easing;

use std::time::Duration;

pub use animator::PageScroller;
pub use easing::EasingTypeExt;
pub use termfolio_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis((1000 / fps as u64).max(1)),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0 && self.easing != EasingType::None
    }
}
