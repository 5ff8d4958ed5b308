//! Boundary correction policy
//!
//! Decides, on every scroll notification, whether the offset has drifted
//! into the clone padding and must be snapped back to the equivalent
//! position among the real cards. A two-state guard suppresses the
//! notification produced by the snap itself.

use std::time::{Duration, Instant};

use super::geometry::Boundaries;
use crate::config::WrapRule;

/// Guard state of the correction policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Next notification is inspected
    Stable,
    /// Notifications are ignored until the deadline passes
    Correcting { until: Instant },
}

/// Outcome of one scroll notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    /// Guard engaged, offset not inspected
    Suppressed,
    /// Nothing to wrap (empty list or unmeasured pitch)
    Skipped,
    /// Offset is inside the real region
    Untouched,
    /// Offset must jump to the given value
    SnapTo(f64),
}

/// Pure snap decision for one offset
pub fn snap_target(offset: f64, bounds: &Boundaries, rule: WrapRule) -> Option<f64> {
    match rule {
        WrapRule::LastRealCard => {
            if offset >= bounds.end - bounds.pitch {
                Some(bounds.start)
            } else if offset <= bounds.start - bounds.pitch {
                Some(bounds.end - bounds.pitch)
            } else {
                None
            }
        }
        WrapRule::FirstClone => {
            if offset >= bounds.end {
                Some(offset - bounds.period())
            } else if offset <= bounds.start - bounds.pitch {
                Some(offset + bounds.period())
            } else {
                None
            }
        }
    }
}

/// Two-state correction policy with a timed guard release
#[derive(Debug, Clone)]
pub struct CorrectionPolicy {
    state: GuardState,
    settle: Duration,
    rule: WrapRule,
    /// Offset written by the last snap; its echo is expected while correcting
    expected: Option<f64>,
    /// A notification other than the snap's echo arrived while correcting
    missed: bool,
}

impl CorrectionPolicy {
    pub fn new(settle: Duration, rule: WrapRule) -> Self {
        Self {
            state: GuardState::Stable,
            settle,
            rule,
            expected: None,
            missed: false,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn rule(&self) -> WrapRule {
        self.rule
    }

    #[inline]
    pub fn is_correcting(&self) -> bool {
        matches!(self.state, GuardState::Correcting { .. })
    }

    /// Release the guard if its deadline has passed. Returns true on release.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            GuardState::Correcting { until } if now >= until => {
                self.state = GuardState::Stable;
                true
            }
            _ => false,
        }
    }

    /// Handle one scroll notification observed at `offset`
    pub fn on_scroll(
        &mut self,
        offset: f64,
        bounds: Option<&Boundaries>,
        now: Instant,
    ) -> Correction {
        self.tick(now);
        if self.is_correcting() {
            if self.expected != Some(offset) {
                self.missed = true;
            }
            return Correction::Suppressed;
        }

        let Some(bounds) = bounds else {
            return Correction::Skipped;
        };

        self.state = GuardState::Correcting {
            until: now + self.settle,
        };
        self.missed = false;
        self.expected = snap_target(offset, bounds, self.rule);

        match self.expected {
            Some(target) => Correction::SnapTo(target),
            None => Correction::Untouched,
        }
    }

    /// Whether a genuine scroll was swallowed by the last guard window.
    /// Clears the flag.
    pub fn take_missed(&mut self) -> bool {
        std::mem::take(&mut self.missed)
    }

    /// Drop any pending release and return to `Stable`
    pub fn reset(&mut self) {
        self.state = GuardState::Stable;
        self.expected = None;
        self.missed = false;
    }
}
