use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::models::ReviewItem;
use crate::{Error, Result};

/// On-disk formats accepted for a reviews file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFormat {
    /// A `[[reviews]]` array of tables
    Toml,
    /// A top-level JSON array of review objects
    Json,
}

impl ReviewFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Ok(ReviewFormat::Toml),
            Some("json") => Ok(ReviewFormat::Json),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Deserialize)]
struct ReviewsFile {
    #[serde(default)]
    reviews: Vec<ReviewItem>,
}

/// Parse and validate reviews from text
pub fn parse_reviews(content: &str, format: ReviewFormat) -> Result<Vec<ReviewItem>> {
    let reviews = match format {
        ReviewFormat::Toml => toml::from_str::<ReviewsFile>(content)?.reviews,
        ReviewFormat::Json => serde_json::from_str::<Vec<ReviewItem>>(content)?,
    };

    for (index, review) in reviews.iter().enumerate() {
        if let Some(reason) = review.problem() {
            return Err(Error::InvalidReview { index, reason });
        }
    }

    debug!("Parsed {} reviews", reviews.len());
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ReviewFormat::from_path(Path::new("reviews.toml")).unwrap(),
            ReviewFormat::Toml
        );
        assert_eq!(
            ReviewFormat::from_path(Path::new("reviews.JSON")).unwrap(),
            ReviewFormat::Json
        );
        assert!(matches!(
            ReviewFormat::from_path(Path::new("reviews.yaml")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
            [[reviews]]
            name = "Sarah Chen"
            company = "TechStart Inc."
            rating = 5
            text = "Response times dropped by 80%."

            [[reviews]]
            name = "Peter Groot"
            company = "Tech Consultancy"
            rating = 4
            text = "Integration went smoothly."
        "#;

        let reviews = parse_reviews(content, ReviewFormat::Toml).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].name, "Peter Groot");
        assert_eq!(reviews[1].rating, 4);
    }

    #[test]
    fn test_parse_json() {
        let content = r#"[
            {"name": "Anna Vermeulen", "company": "HealthTech Solutions", "rating": 5, "text": "Seamless."}
        ]"#;

        let reviews = parse_reviews(content, ReviewFormat::Json).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].company, "HealthTech Solutions");
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let reviews = parse_reviews("", ReviewFormat::Toml).unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_invalid_rating_reports_index() {
        let content = r#"[
            {"name": "A", "company": "X", "rating": 5, "text": "ok"},
            {"name": "B", "company": "Y", "rating": 9, "text": "too many stars"}
        ]"#;

        match parse_reviews(content, ReviewFormat::Json) {
            Err(Error::InvalidReview { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("rating 9"));
            }
            other => panic!("expected InvalidReview, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_reviews("{not json", ReviewFormat::Json),
            Err(Error::Json(_))
        ));
    }
}
