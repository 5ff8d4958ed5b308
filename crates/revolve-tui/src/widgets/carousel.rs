use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
    Frame,
};

use super::card::ReviewCard;
use crate::app::App;

/// The scrolling strip: every padded slot is drawn at its offset, cards
/// cut by the strip edges are clipped column by column
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let carousel = &app.carousel;
        let (Some(seq), Some(layout)) = (carousel.sequence(), app.strip) else {
            let empty = Paragraph::new("No reviews to show")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.grey).bg(app.theme.bg0));
            frame.render_widget(empty, area);
            return;
        };

        let pitch = layout.to_columns(carousel.pitch());
        let card_columns = carousel
            .card_width()
            .map(|width| layout.to_columns(width).round() as u16)
            .unwrap_or(0);
        if pitch <= 0.0 || card_columns == 0 || area.height == 0 {
            return;
        }
        let offset = layout.to_columns(carousel.current_offset());

        for (slot, review) in seq.iter() {
            let left = (slot.key.position as f64 * pitch - offset).round() as i32;
            let right = left + card_columns as i32;
            if right <= 0 || left >= area.width as i32 {
                continue;
            }

            let card_area = Rect::new(0, 0, card_columns, area.height);
            let mut card = Buffer::empty(card_area);
            ReviewCard::new(review, &app.theme).render(card_area, &mut card);
            blit(&card, left, area, frame.buffer_mut());
        }
    }
}

/// Copy `src` into `dst` with its left edge at column `left` of `area`,
/// dropping whatever falls outside `area`
fn blit(src: &Buffer, left: i32, area: Rect, dst: &mut Buffer) {
    for cx in 0..src.area.width {
        let column = left + cx as i32;
        if column < 0 || column >= area.width as i32 {
            continue;
        }
        for y in 0..src.area.height.min(area.height) {
            let Some(cell) = src.cell((cx, y)) else { continue };
            if let Some(target) = dst.cell_mut((area.x + column as u16, area.y + y)) {
                *target = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blit_clips_both_edges() {
        let src_area = Rect::new(0, 0, 4, 1);
        let mut src = Buffer::empty(src_area);
        src.set_string(0, 0, "abcd", Style::default());

        let area = Rect::new(1, 0, 3, 1);
        let mut dst = Buffer::empty(Rect::new(0, 0, 5, 1));

        blit(&src, -2, area, &mut dst);
        assert_eq!(dst.cell((1, 0)).map(|c| c.symbol()), Some("c"));
        assert_eq!(dst.cell((2, 0)).map(|c| c.symbol()), Some("d"));
        assert_eq!(dst.cell((0, 0)).map(|c| c.symbol()), Some(" "));

        let mut dst = Buffer::empty(Rect::new(0, 0, 5, 1));
        blit(&src, 2, area, &mut dst);
        assert_eq!(dst.cell((3, 0)).map(|c| c.symbol()), Some("a"));
        assert_eq!(dst.cell((4, 0)).map(|c| c.symbol()), Some(" "));
    }
}
