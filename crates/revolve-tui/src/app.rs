use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use revolve_core::carousel::{self, Lifecycle, ScrollBehavior, Viewport};
use revolve_core::{AppConfig, Carousel, Direction, ReviewItem, VisualMode};
use tracing::debug;

use crate::input::Action;
use crate::keymap::Keymap;
use crate::layout::{ScreenLayout, StripLayout};
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::viewport::TerminalViewport;

/// Share of a pitch moved by one wheel notch or nudge key
const NUDGE_FRACTION: f64 = 0.25;

pub type ReviewCarousel = Carousel<ReviewItem, TerminalViewport>;

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub carousel: ReviewCarousel,
    pub keymap: Keymap,
    pub theme: Theme,
    pub mode: VisualMode,
    /// Focused navigation control, if any
    pub focus: Option<Direction>,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Screen regions from the last resize
    pub screen: Option<ScreenLayout>,
    /// Strip layout from the last resize
    pub strip: Option<StripLayout>,
    /// Column of the last drag event while the left button is held on the strip
    drag_column: Option<u16>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, reviews: Vec<ReviewItem>, now: Instant) -> Self {
        let viewport = TerminalViewport::new(config.ui.scroll.clone(), now);
        let carousel = Carousel::new(Arc::from(reviews), viewport, &config.carousel);
        let mode = config.ui.mode;

        Self {
            keymap: Keymap::from_config(&config.keymap),
            theme: load_theme(&config.ui.theme, mode),
            config,
            carousel,
            mode,
            focus: None,
            show_help: false,
            should_quit: false,
            status_message: None,
            screen: None,
            strip: None,
            drag_column: None,
        }
    }

    /// Lay the screen out for `area`. The first call mounts the carousel.
    pub fn resize(&mut self, area: Rect, now: Instant) {
        let screen = ScreenLayout::split(area);
        let max_cards = self
            .carousel
            .sequence()
            .map(|seq| seq.clone_count())
            .unwrap_or(1);
        let layout = StripLayout::compute(screen.strip.width, &self.config.carousel, max_cards);
        let visible = layout.to_units(screen.strip.width as f64);

        if self.screen == Some(screen) && self.strip == Some(layout) {
            return;
        }
        self.screen = Some(screen);
        self.strip = Some(layout);
        self.carousel.viewport_mut().sync_clock(now);

        let measured = layout.card_width();
        match self.carousel.lifecycle() {
            Lifecycle::Pending => {
                self.sync_viewport(self.carousel.items().len(), measured, visible);
                self.carousel.mount(measured);
            }
            Lifecycle::Mounted => {
                let len = self.carousel.items().len();
                let old = self.carousel.card_width().unwrap_or(measured);
                // Room for the offset under both measurements while it is rescaled
                self.sync_viewport(len, old.max(measured), visible);
                self.carousel.on_resize(measured);
                let current = self.carousel.card_width().unwrap_or(measured);
                self.sync_viewport(len, current, visible);
            }
            Lifecycle::Unmounted => {}
        }
        debug!(
            "Layout: {} cards per view, {} columns per card",
            layout.cards_per_view, layout.card_columns
        );
    }

    /// Replace the reviews shown by the carousel
    pub fn set_reviews(&mut self, reviews: Vec<ReviewItem>) {
        let visible = self.visible_units();
        let card_width = self.carousel.card_width().unwrap_or(0.0);
        let len = reviews.len().max(self.carousel.items().len());

        self.sync_viewport(len, card_width, visible);
        self.carousel.set_items(Arc::from(reviews));
        self.sync_viewport(self.carousel.items().len(), card_width, visible);
    }

    /// Advance animations and the correction guard to `now`
    pub fn update(&mut self, now: Instant) {
        self.carousel.viewport_mut().tick(now);
        self.drain_notifications(now);
        if self.carousel.tick(now) {
            self.drain_notifications(now);
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.carousel.viewport().needs_update()
            || self.carousel.policy().is_correcting()
            || self.drag_column.is_some()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Previous => self.press(Direction::Previous, now),
            Action::Next => self.press(Direction::Next, now),
            Action::NudgeLeft => self.nudge(-1.0, now),
            Action::NudgeRight => self.nudge(1.0, now),
            Action::FocusNextControl => {
                self.focus = match self.focus {
                    Some(Direction::Previous) => Some(Direction::Next),
                    _ => Some(Direction::Previous),
                };
            }
            Action::FocusPrevControl => {
                self.focus = match self.focus {
                    Some(Direction::Next) => Some(Direction::Previous),
                    _ => Some(Direction::Next),
                };
            }
            Action::Activate => match self.focus {
                Some(direction) => self.press(direction, now),
                None => self.set_status("No control focused, press Tab"),
            },
            Action::ToggleMode => self.toggle_mode(),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::ExitMode => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.focus = None;
                    self.clear_status();
                }
            }
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let Some(screen) = self.screen else { return };
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => self.nudge(1.0, now),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => self.nudge(-1.0, now),
            MouseEventKind::Down(MouseButton::Left) => {
                if screen.previous.contains(position) {
                    self.focus = Some(Direction::Previous);
                    self.press(Direction::Previous, now);
                } else if screen.next.contains(position) {
                    self.focus = Some(Direction::Next);
                    self.press(Direction::Next, now);
                } else if screen.strip.contains(position) {
                    self.carousel.viewport_mut().begin_drag();
                    self.drag_column = Some(mouse.column);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (Some(last), Some(layout)) = (self.drag_column, self.strip) else {
                    return;
                };
                // Content follows the pointer, so the offset moves the other way
                let delta = layout.to_units(last as f64 - mouse.column as f64);
                self.carousel.viewport_mut().drag_by(delta);
                self.drag_column = Some(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_column.take().is_some() {
                    self.carousel.viewport_mut().end_drag();
                }
            }
            _ => {}
        }
    }

    /// Press one of the navigation controls
    pub fn press(&mut self, direction: Direction, now: Instant) {
        self.carousel.viewport_mut().sync_clock(now);
        if !self.carousel.advance(direction) {
            debug!("Ignoring {:?}: nothing to scroll", direction);
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.theme = load_theme(&self.config.ui.theme, self.mode);
        let label = if self.mode.is_dark() { "Dark mode" } else { "Light mode" };
        self.set_status(label);
    }

    /// Index (in the original list) of the card at the left edge
    pub fn leading_index(&self) -> Option<usize> {
        let position = self.carousel.leading_position()?;
        let (slot, _) = self.carousel.sequence()?.get(position)?;
        Some(slot.source)
    }

    pub fn leading_review(&self) -> Option<&ReviewItem> {
        self.carousel.leading_item()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn nudge(&mut self, sign: f64, now: Instant) {
        let pitch = self.carousel.pitch();
        if pitch <= 0.0 {
            return;
        }
        let viewport = self.carousel.viewport_mut();
        viewport.sync_clock(now);
        viewport.scroll_by(sign * pitch * NUDGE_FRACTION, ScrollBehavior::Smooth);
    }

    fn drain_notifications(&mut self, now: Instant) {
        while self.carousel.viewport_mut().poll_notification().is_some() {
            self.carousel.on_scroll(now);
        }
    }

    fn visible_units(&self) -> f64 {
        match (self.screen, self.strip) {
            (Some(screen), Some(layout)) => layout.to_units(screen.strip.width as f64),
            _ => 0.0,
        }
    }

    /// Size the viewport for `len` items of `card_width`
    fn sync_viewport(&mut self, len: usize, card_width: f64, visible: f64) {
        let gap = self.config.carousel.gap;
        let pitch = carousel::pitch(card_width, gap);
        let clones = self.config.carousel.clone_count.min(len);
        let padded = len + 2 * clones;
        let content = if padded == 0 || pitch <= 0.0 {
            0.0
        } else {
            padded as f64 * pitch - gap
        };
        // The first trailing clone must be able to reach the left edge,
        // so never count more than the clones' width as visible
        let visible = if clones > 0 && pitch > 0.0 {
            visible.min(clones as f64 * pitch - gap).max(0.0)
        } else {
            visible
        };

        let viewport = self.carousel.viewport_mut();
        viewport.set_snap_interval(pitch);
        viewport.set_extent(content, visible);
    }
}
