use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use revolve_core::Direction;

use crate::app::App;

pub struct ControlsWidget;

impl ControlsWidget {
    /// Render the previous/next buttons, highlighting the focused one
    pub fn render(frame: &mut Frame, previous: Rect, next: Rect, app: &App) {
        for (direction, area) in [(Direction::Previous, previous), (Direction::Next, next)] {
            let focused = app.focus == Some(direction);
            let style = app.theme.control_style(focused);
            let border = if focused { BorderType::Thick } else { BorderType::Rounded };

            let button = Paragraph::new(Self::caption(direction))
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border)
                        .border_style(style),
                );
            frame.render_widget(button, area);
        }
    }

    pub fn caption(direction: Direction) -> String {
        match direction {
            Direction::Previous => format!("◀ {}", direction.label()),
            Direction::Next => format!("{} ▶", direction.label()),
        }
    }
}
