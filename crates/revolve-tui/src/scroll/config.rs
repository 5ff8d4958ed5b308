//! L4 Atomic Layer: Scroll configuration helpers
//!
//! The configuration types live in revolve-core; this adds the derived values
//! the animator needs.

use std::time::Duration;

pub use revolve_core::ScrollConfig;

use super::timing::frame_interval;

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Duration of one animated scroll
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Whether smooth scrolls actually animate
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        frame_interval(self.animation_fps)
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
