//! Pitch and boundary arithmetic for the padded strip

/// Gap between two cards, in logical units
pub const CARD_GAP: f64 = 32.0;

/// Distance from one card's leading edge to the next: card width plus gap.
///
/// Returns `0.0` when no card has been measured yet.
pub fn pitch(card_width: f64, gap: f64) -> f64 {
    if card_width > 0.0 && card_width.is_finite() {
        card_width + gap.max(0.0)
    } else {
        0.0
    }
}

/// Offsets delimiting the real (non-clone) part of the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub pitch: f64,
    /// `clone_count * pitch`: offset at which the first real card is at the left edge
    pub start: f64,
    /// `(clone_count + len) * pitch`: offset at which the first trailing clone is at the left edge
    pub end: f64,
}

impl Boundaries {
    /// Compute boundaries, or `None` when there is nothing to wrap
    /// (empty list or unmeasured pitch).
    pub fn compute(clone_count: usize, original_len: usize, pitch: f64) -> Option<Self> {
        if original_len == 0 || pitch <= 0.0 {
            return None;
        }
        Some(Self {
            pitch,
            start: clone_count as f64 * pitch,
            end: (clone_count + original_len) as f64 * pitch,
        })
    }

    /// Length of one full loop over the real items
    pub fn period(&self) -> f64 {
        self.end - self.start
    }

    /// Offset showing the last real card at the left edge
    pub fn last_real(&self) -> f64 {
        self.end - self.pitch
    }

    /// Strip position of the card whose leading edge is nearest to `offset`
    pub fn position_at(&self, offset: f64) -> usize {
        (offset / self.pitch).round().max(0.0) as usize
    }

    /// Offset that puts strip position `position` at the left edge
    pub fn offset_of(&self, position: usize) -> f64 {
        position as f64 * self.pitch
    }
}
