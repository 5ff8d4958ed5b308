//! Screen and strip geometry in terminal cells
//!
//! The carousel works in logical units; one terminal column covers
//! `units_per_column` of them. Everything here converts between the two.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use revolve_core::CarouselConfig;

/// Width (logical units) from which two cards fit side by side
pub const TWO_UP_WIDTH: f64 = 768.0;
/// Width (logical units) from which three cards fit side by side
pub const THREE_UP_WIDTH: f64 = 1024.0;

const MIN_CARD_COLUMNS: u16 = 16;

/// Cards visible at once for a viewport `width` in logical units
pub fn responsive_cards_per_view(width: f64) -> usize {
    if width < TWO_UP_WIDTH {
        1
    } else if width < THREE_UP_WIDTH {
        2
    } else {
        3
    }
}

/// How cards are laid out inside the strip area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub cards_per_view: usize,
    /// Width of one card in columns
    pub card_columns: u16,
    pub units_per_column: f64,
}

impl StripLayout {
    /// Lay out `width` columns. `max_cards` caps the cards per view so the
    /// clone padding always covers the visible area.
    pub fn compute(width: u16, config: &CarouselConfig, max_cards: usize) -> Self {
        let units_per_column = if config.units_per_column > 0.0 {
            config.units_per_column
        } else {
            1.0
        };
        let gap_columns = (config.gap / units_per_column).round().max(0.0) as u16;

        let wanted = if config.cards_per_view > 0 {
            config.cards_per_view
        } else {
            responsive_cards_per_view(width as f64 * units_per_column)
        };
        let mut cards_per_view = wanted.min(max_cards.max(1)).max(1);

        let card_columns = loop {
            let gaps = gap_columns.saturating_mul(cards_per_view as u16 - 1);
            let columns = width.saturating_sub(gaps) / cards_per_view as u16;
            if columns >= MIN_CARD_COLUMNS || cards_per_view == 1 {
                break columns;
            }
            cards_per_view -= 1;
        };

        Self {
            cards_per_view,
            card_columns,
            units_per_column,
        }
    }

    /// Card width in logical units, as measured by the carousel
    pub fn card_width(&self) -> f64 {
        self.card_columns as f64 * self.units_per_column
    }

    pub fn to_units(&self, columns: f64) -> f64 {
        columns * self.units_per_column
    }

    pub fn to_columns(&self, units: f64) -> f64 {
        units / self.units_per_column
    }
}

/// Regions of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub strip: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Card strip
                Constraint::Length(3), // Controls
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let strip = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(2), Constraint::Min(1), Constraint::Length(2)])
            .split(rows[1])[1];

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(22),
                Constraint::Length(2),
                Constraint::Length(22),
                Constraint::Min(0),
            ])
            .split(rows[2]);

        Self {
            header: rows[0],
            strip,
            previous: controls[1],
            next: controls[3],
            status: rows[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(responsive_cards_per_view(400.0), 1);
        assert_eq!(responsive_cards_per_view(768.0), 2);
        assert_eq!(responsive_cards_per_view(1023.0), 2);
        assert_eq!(responsive_cards_per_view(1024.0), 3);
    }

    #[test]
    fn test_three_up_layout() {
        let config = CarouselConfig::default();
        // 136 columns * 8 units = 1088 units
        let layout = StripLayout::compute(136, &config, 3);
        assert_eq!(layout.cards_per_view, 3);
        // (136 - 2 * 4) / 3
        assert_eq!(layout.card_columns, 42);
        assert_eq!(layout.card_width(), 336.0);
    }

    #[test]
    fn test_clone_count_caps_cards_per_view() {
        let config = CarouselConfig::default();
        let layout = StripLayout::compute(136, &config, 2);
        assert_eq!(layout.cards_per_view, 2);
    }

    #[test]
    fn test_narrow_strip_falls_back_to_one_card() {
        let config = CarouselConfig {
            cards_per_view: 3,
            ..Default::default()
        };
        let layout = StripLayout::compute(30, &config, 3);
        assert_eq!(layout.cards_per_view, 1);
        assert_eq!(layout.card_columns, 30);
    }

    #[test]
    fn test_screen_regions_stack() {
        let layout = ScreenLayout::split(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.y, 29);
        assert_eq!(layout.strip.width, 96);
        assert!(layout.previous.x < layout.next.x);
        assert_eq!(layout.previous.y, layout.next.y);
    }
}
