use std::path::Path;

use anyhow::Result;

use super::load_reviews;

pub async fn run(file: &Path) -> Result<()> {
    let reviews = load_reviews(Some(file)).await?;

    if reviews.is_empty() {
        println!("{}: valid, but contains no reviews (the carousel will be empty)", file.display());
        return Ok(());
    }

    println!("{}: {} reviews OK\n", file.display(), reviews.len());
    for (i, review) in reviews.iter().enumerate() {
        println!(
            "  {:>2}. {} ({}) {}",
            i + 1,
            review.name,
            review.company,
            "★".repeat(review.stars())
        );
    }

    Ok(())
}
