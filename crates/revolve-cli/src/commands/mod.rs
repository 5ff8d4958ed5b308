pub mod check;
pub mod config;
pub mod list;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use revolve_core::review::{parse_reviews, sample_reviews, ReviewFormat};
use revolve_core::ReviewItem;

/// Read reviews from `path`, or the built-in samples when no file is given
pub async fn load_reviews(path: Option<&Path>) -> Result<Vec<ReviewItem>> {
    let Some(path) = path else {
        return Ok(sample_reviews());
    };

    let format = ReviewFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let reviews = parse_reviews(&content, format)
        .with_context(|| format!("Invalid reviews file {}", path.display()))?;

    info!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}
