use std::sync::Arc;

use anyhow::Result;

use revolve_core::carousel::{normalize, pitch, Boundaries};
use revolve_core::{AppConfig, ReviewItem};

/// Print the padded sequence the carousel would lay out
pub fn run(config: &AppConfig, reviews: Vec<ReviewItem>, card_width: f64) -> Result<()> {
    if reviews.is_empty() {
        println!("No reviews to show.");
        println!("\nTo use a reviews file, run:");
        println!("  revolve list -r <file.toml|file.json>");
        return Ok(());
    }

    let carousel = &config.carousel;
    let seq = normalize(Arc::from(reviews), carousel.clone_count);
    let pitch = pitch(card_width, carousel.gap);

    println!(
        "Padded sequence ({} cards, {} real, {} clones per side):\n",
        seq.len(),
        seq.original_len(),
        seq.clone_count()
    );

    for (slot, review) in seq.iter() {
        println!(
            "  {:>3}  {:<14} #{:<3} {:>8.1}  {}",
            slot.key.position,
            slot.key.to_string(),
            slot.source,
            slot.key.position as f64 * pitch,
            review.name
        );
    }

    match Boundaries::compute(seq.clone_count(), seq.original_len(), pitch) {
        Some(bounds) => {
            println!();
            println!("  pitch:          {:.1}", bounds.pitch);
            println!("  start boundary: {:.1}", bounds.start);
            println!("  end boundary:   {:.1}", bounds.end);
            println!("  wrap rule:      {:?}", carousel.wrap_rule);
        }
        None => println!("\nCard width {} gives no usable pitch.", card_width),
    }

    Ok(())
}
