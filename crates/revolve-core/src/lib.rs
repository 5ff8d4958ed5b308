pub mod carousel;
pub mod config;
pub mod error;
pub mod review;

pub use carousel::{Carousel, Direction, PaddedSequence, Viewport};
pub use config::{AppConfig, CarouselConfig, EasingType, ScrollConfig, VisualMode, WrapRule};
pub use error::{Error, Result};
pub use review::ReviewItem;
