mod loader;
mod models;
mod samples;

pub use loader::{parse_reviews, ReviewFormat};
pub use models::{ReviewItem, MAX_RATING, MIN_RATING};
pub use samples::sample_reviews;
