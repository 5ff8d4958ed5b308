use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A single testimonial shown on a carousel card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    /// Person who wrote the review
    pub name: String,
    /// Company or affiliation of the reviewer
    pub company: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Testimonial text
    pub text: String,
}

impl ReviewItem {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        rating: u8,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            rating,
            text: text.into(),
        }
    }

    /// Check the fields a card needs, returning the first problem found
    pub fn problem(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name is empty".to_string());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Some(format!(
                "rating {} is outside {}..={}",
                self.rating, MIN_RATING, MAX_RATING
            ));
        }
        None
    }

    /// Number of filled stars to draw
    pub fn stars(&self) -> usize {
        self.rating.clamp(MIN_RATING, MAX_RATING) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_review_has_no_problem() {
        let review = ReviewItem::new("Sarah Chen", "TechStart Inc.", 5, "Great.");
        assert!(review.problem().is_none());
        assert_eq!(review.stars(), 5);
    }

    #[test]
    fn test_rating_out_of_range() {
        let review = ReviewItem::new("Sarah Chen", "TechStart Inc.", 6, "Great.");
        assert!(review.problem().unwrap().contains("rating 6"));

        let review = ReviewItem::new("Sarah Chen", "TechStart Inc.", 0, "Great.");
        assert!(review.problem().is_some());
        assert_eq!(review.stars(), 1);
    }

    #[test]
    fn test_blank_name() {
        let review = ReviewItem::new("  ", "TechStart Inc.", 4, "Great.");
        assert_eq!(review.problem().as_deref(), Some("name is empty"));
    }
}
