//! Scroll position tracker
//!
//! Holds the card measurement the rest of the carousel derives its
//! geometry from, and fans scroll notifications out to subscribers.

use std::fmt;

use super::geometry;
use super::viewport::Viewport;

type OffsetHandler = Box<dyn FnMut(f64)>;

pub struct ScrollTracker {
    gap: f64,
    card_width: Option<f64>,
    listeners: Vec<OffsetHandler>,
}

impl fmt::Debug for ScrollTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("gap", &self.gap)
            .field("card_width", &self.card_width)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollTracker {
    pub fn new(gap: f64) -> Self {
        Self {
            gap,
            card_width: None,
            listeners: Vec::new(),
        }
    }

    /// Record the rendered width of one card
    pub fn measure(&mut self, card_width: f64) {
        self.card_width = Some(card_width);
    }

    pub fn card_width(&self) -> Option<f64> {
        self.card_width
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Card width plus gap, or `0.0` before a card has been measured
    pub fn pitch(&self) -> f64 {
        self.card_width
            .map(|width| geometry::pitch(width, self.gap))
            .unwrap_or(0.0)
    }

    /// Live offset of the viewport
    #[inline]
    pub fn current_offset<V: Viewport + ?Sized>(&self, viewport: &V) -> f64 {
        viewport.offset()
    }

    /// Subscribe to scroll notifications
    pub fn on_offset_changed(&mut self, handler: impl FnMut(f64) + 'static) {
        self.listeners.push(Box::new(handler));
    }

    /// Deliver one notification to every subscriber, in subscription order
    pub fn notify(&mut self, offset: f64) {
        for listener in &mut self.listeners {
            listener(offset);
        }
    }

    /// Detach every subscriber
    pub fn detach(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
