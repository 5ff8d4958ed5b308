//! L3 Molecular Layer: Scroll animation controller
//!
//! Combines easing functions and timing utilities to animate a horizontal
//! offset. Time is always passed in, so callers decide what "now" is.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_to()` or `scroll_by()` to begin an animation, then `update()`
/// each frame to get the current interpolated offset.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the running animation (if any) completes
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Offset as of the last `update()`
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump immediately, cancelling any running animation
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Animate from the current offset to `target`, clamped to `[0, max]`.
    ///
    /// A running animation is replaced; the new one starts where the old one
    /// currently is. Jumps immediately when smooth scrolling is disabled.
    pub fn scroll_to(&mut self, target: f64, max: f64, now: Instant) {
        let target = target.clamp(0.0, max.max(0.0));

        if !self.config.is_smooth() {
            self.set_offset(target);
            return;
        }

        if self.current == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Animate by `delta` relative to the offset visible right now,
    /// not relative to the target of a running animation
    pub fn scroll_by(&mut self, delta: f64, max: f64, now: Instant) {
        self.scroll_to(self.current + delta, max, now);
    }

    /// Advance the animation to `now` and return the current offset
    pub fn update(&mut self, max: f64, now: Instant) -> f64 {
        let max = max.max(0.0);
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to.min(max);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                let eased_t = anim.easing.apply(t);
                self.current = lerp(anim.from, anim.to, eased_t).min(max);
            }
        }
        self.current
    }

    /// Stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });

        animator.scroll_to(100.0, 200.0, Instant::now());
        assert_eq!(animator.current(), 100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_interpolates_with_synthetic_clock() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.set_offset(300.0);

        animator.scroll_to(400.0, 2000.0, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 400.0);

        let mid = animator.update(2000.0, t0 + Duration::from_millis(50));
        assert!((mid - 350.0).abs() < 0.001);

        assert_eq!(animator.update(2000.0, t0 + Duration::from_millis(100)), 400.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_is_relative_to_visible_offset() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.set_offset(300.0);

        animator.scroll_by(100.0, 2000.0, t0);
        animator.update(2000.0, t0 + Duration::from_millis(50));
        animator.scroll_by(100.0, 2000.0, t0 + Duration::from_millis(50));

        assert!((animator.target() - 450.0).abs() < 0.001);
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.set_offset(50.0);

        animator.scroll_to(300.0, 100.0, t0);
        assert_eq!(animator.target(), 100.0);

        animator.scroll_by(-500.0, 100.0, t0);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn test_cancel_keeps_current_offset() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.scroll_to(100.0, 200.0, t0);
        animator.update(200.0, t0 + Duration::from_millis(25));
        animator.cancel();

        assert!(!animator.is_animating());
        assert!((animator.current() - 25.0).abs() < 0.001);
    }
}
