//! Animated horizontal viewport backing the carousel in the terminal
//!
//! Behaves like a scroll container with mandatory snapping: relative
//! scrolls animate, every offset change is queued as a scroll notification,
//! and once motion stops the offset settles onto the nearest snap point.

use std::collections::VecDeque;
use std::time::Instant;

use revolve_core::carousel::{ScrollBehavior, Viewport};
use revolve_core::ScrollConfig;
use tracing::trace;

use crate::scroll::ScrollAnimator;

const ALIGN_EPSILON: f64 = 1e-6;

#[derive(Debug)]
pub struct TerminalViewport {
    animator: ScrollAnimator,
    /// Largest reachable offset
    max_offset: f64,
    /// Distance between snap points; `0.0` disables snapping
    snap_interval: f64,
    dragging: bool,
    notifications: VecDeque<f64>,
    /// Offset at the time of the last queued notification
    reported: f64,
    /// Time used to start animations requested between frames
    clock: Instant,
}

impl TerminalViewport {
    pub fn new(config: ScrollConfig, now: Instant) -> Self {
        Self {
            animator: ScrollAnimator::new(config),
            max_offset: 0.0,
            snap_interval: 0.0,
            dragging: false,
            notifications: VecDeque::new(),
            reported: 0.0,
            clock: now,
        }
    }

    /// Scrollable range: total strip length minus the visible width
    pub fn set_extent(&mut self, content: f64, visible: f64) {
        self.max_offset = (content - visible).max(0.0);
        if self.animator.current() > self.max_offset {
            self.animator.set_offset(self.max_offset);
            self.report();
        }
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn set_snap_interval(&mut self, interval: f64) {
        self.snap_interval = if interval.is_finite() { interval.max(0.0) } else { 0.0 };
    }

    pub fn snap_interval(&self) -> f64 {
        self.snap_interval
    }

    /// Record the time of the input that is about to scroll
    pub fn sync_clock(&mut self, now: Instant) {
        if now > self.clock {
            self.clock = now;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether frames must keep coming at animation rate
    pub fn needs_update(&self) -> bool {
        self.animator.is_animating() || !self.notifications.is_empty() || self.needs_settle()
    }

    /// Advance animations to `now` and settle onto a snap point once idle
    pub fn tick(&mut self, now: Instant) {
        self.sync_clock(now);
        self.animator.update(self.max_offset, now);
        self.report();

        if self.needs_settle() {
            let target = self.nearest_snap_point();
            trace!("Settling offset {} -> {}", self.animator.current(), target);
            self.animator.scroll_to(target, self.max_offset, now);
            self.animator.update(self.max_offset, now);
            self.report();
        }
    }

    /// Next pending scroll notification, oldest first
    pub fn poll_notification(&mut self) -> Option<f64> {
        self.notifications.pop_front()
    }

    pub fn pending_notifications(&self) -> usize {
        self.notifications.len()
    }

    /// Grab the strip; snapping waits until `end_drag`
    pub fn begin_drag(&mut self) {
        self.animator.cancel();
        self.dragging = true;
    }

    /// Follow the pointer without animation
    pub fn drag_by(&mut self, delta: f64) {
        if !self.dragging {
            return;
        }
        let offset = (self.animator.current() + delta).clamp(0.0, self.max_offset);
        self.animator.set_offset(offset);
        self.report();
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    fn needs_settle(&self) -> bool {
        !self.dragging
            && !self.animator.is_animating()
            && self.snap_interval > 0.0
            && (self.nearest_snap_point() - self.animator.current()).abs() > ALIGN_EPSILON
    }

    fn nearest_snap_point(&self) -> f64 {
        let offset = self.animator.current();
        if self.snap_interval <= 0.0 {
            return offset;
        }
        let snapped = (offset / self.snap_interval).round() * self.snap_interval;
        if snapped > self.max_offset + ALIGN_EPSILON {
            // Last reachable snap point
            (self.max_offset / self.snap_interval).floor() * self.snap_interval
        } else {
            snapped
        }
    }

    fn report(&mut self) {
        let offset = self.animator.current();
        if offset != self.reported {
            self.reported = offset;
            self.notifications.push_back(offset);
        }
    }
}

impl Viewport for TerminalViewport {
    fn offset(&self) -> f64 {
        self.animator.current()
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let offset = offset.clamp(0.0, self.max_offset);
        match behavior {
            ScrollBehavior::Instant => {
                self.animator.set_offset(offset);
                self.report();
            }
            ScrollBehavior::Smooth => {
                self.animator.scroll_to(offset, self.max_offset, self.clock);
                // Non-smooth configs jump inside the animator
                self.report();
            }
        }
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        let target = self.animator.current() + delta;
        self.scroll_to(target, behavior);
    }
}
