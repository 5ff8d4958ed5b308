use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = if app.mode.is_dark() { "DARK" } else { "LIGHT" };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            let total = app.carousel.items().len();
            match (app.leading_index(), app.leading_review()) {
                (Some(index), Some(review)) => format!(
                    " {} | Review {}/{} | {}",
                    mode_str,
                    index + 1,
                    total,
                    review.name
                ),
                _ => format!(" {} | No reviews", mode_str),
            }
        };

        let help_hint = " h/l:scroll Tab:focus t:mode ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg1)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg1)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg1)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
