use ratatui::{widgets::Block, Frame};

use crate::app::App;
use crate::layout::ScreenLayout;
use crate::widgets::{
    CarouselWidget, ControlsWidget, HeaderWidget, PopupWidget, StatusBarWidget,
};

/// Draw one frame. `App::resize` must have seen the frame area first.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = app.screen.unwrap_or_else(|| ScreenLayout::split(area));

    frame.render_widget(Block::default().style(app.theme.page()), area);

    HeaderWidget::render(frame, screen.header, app);
    CarouselWidget::render(frame, screen.strip, app);
    ControlsWidget::render(frame, screen.previous, screen.next, app);
    StatusBarWidget::render(frame, screen.status, app);

    if app.show_help {
        PopupWidget::render_help(frame, app);
    }
}
