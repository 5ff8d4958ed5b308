mod card;
mod carousel;
mod controls;
mod header;
mod popup;
mod status_bar;

pub use card::ReviewCard;
pub use carousel::CarouselWidget;
pub use controls::ControlsWidget;
pub use header::HeaderWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
