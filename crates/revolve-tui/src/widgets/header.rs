use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let lines = vec![
            Line::from(Span::styled(
                "Clients in their own words",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "See how teams transform their workflow",
                Style::default().fg(theme.grey),
            )),
        ];

        let header = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(theme.page());
        frame.render_widget(header, area);
    }
}
