use crossterm::event::KeyEvent;

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// One card back
    Previous,
    /// One card forward
    Next,
    /// Free scroll, snapped by the viewport once it stops
    NudgeLeft,
    NudgeRight,
    FocusNextControl,
    FocusPrevControl,
    /// Press the focused control
    Activate,
    ToggleMode,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    let action = app.keymap.lookup(&key).copied().unwrap_or(Action::None);

    if app.show_help {
        // Any key other than quit closes help
        return match action {
            Action::Quit => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    action
}
