use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg0: Color,
    pub bg1: Color,

    // Foregrounds
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Cards
    pub card: Color,
    pub card_border: Color,
    pub star: Color,

    // Semantic colors
    pub accent: Color,
    pub control: Color,
    pub control_focused: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}

impl Theme {
    pub fn page(&self) -> Style {
        Style::default().bg(self.bg0).fg(self.fg0)
    }

    pub fn card_style(&self) -> Style {
        Style::default().bg(self.card).fg(self.fg1)
    }

    pub fn name_style(&self) -> Style {
        Style::default()
            .fg(self.fg0)
            .bg(self.card)
            .add_modifier(Modifier::BOLD)
    }

    pub fn company_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.card)
    }

    pub fn quote_style(&self) -> Style {
        Style::default()
            .fg(self.fg1)
            .bg(self.card)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn control_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.bg0)
                .bg(self.control_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.control).bg(self.bg1)
        }
    }
}
