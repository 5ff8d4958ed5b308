use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let keys = &app.config.keymap;
        let theme = &app.theme;

        let rows = [
            (format!("{} / ←", keys.previous), "Previous reviews"),
            (format!("{} / →", keys.next), "Next reviews"),
            (format!("{} / {}", keys.nudge_left, keys.nudge_right), "Free scroll"),
            (
                format!("{} / {}", keys.focus_next_control, keys.focus_prev_control),
                "Focus a control",
            ),
            (format!("{} / <Space>", keys.activate), "Press focused control"),
            (keys.toggle_mode.clone(), "Dark / light mode"),
            ("wheel / drag".to_string(), "Scroll with the mouse"),
            (keys.help.clone(), "Toggle this help"),
            (keys.quit.clone(), "Quit"),
        ];

        let key_width = rows.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$}  ", key, width = key_width),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.grey),
        )));

        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
