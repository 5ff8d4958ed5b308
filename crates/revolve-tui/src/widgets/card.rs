use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};
use revolve_core::ReviewItem;

use crate::theme::Theme;

const STAR: &str = "★";

/// One testimonial card: rating, quoted text, reviewer and company
pub struct ReviewCard<'a> {
    review: &'a ReviewItem,
    theme: &'a Theme,
}

impl<'a> ReviewCard<'a> {
    pub fn new(review: &'a ReviewItem, theme: &'a Theme) -> Self {
        Self { review, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let theme = self.theme;
        let review = self.review;

        let stars = Line::from(Span::styled(
            STAR.repeat(review.stars()),
            Style::default().fg(theme.star).bg(theme.card),
        ));

        vec![
            stars,
            Line::default(),
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", review.text),
                theme.quote_style(),
            )),
            Line::default(),
            Line::from(Span::styled(review.name.as_str(), theme.name_style())),
            Line::from(Span::styled(review.company.as_str(), theme.company_style())),
        ]
    }
}

impl Widget for ReviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.card_border).bg(self.theme.card))
            .padding(Padding::horizontal(1))
            .style(self.theme.card_style());

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_card_anatomy() {
        let theme = Theme::default();
        let review = ReviewItem::new("Ada", "Analytical Engines", 4, "Works.");
        let area = Rect::new(0, 0, 30, 9);
        let mut buf = Buffer::empty(area);

        ReviewCard::new(&review, &theme).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with('╭'));
        assert_eq!(row(&buf, 1).trim_matches(|c| c == '│' || c == ' '), "★★★★");
        assert!(row(&buf, 3).contains("\u{201c}Works.\u{201d}"));
        assert!(row(&buf, 5).contains("Ada"));
        assert!(row(&buf, 6).contains("Analytical Engines"));
    }
}
