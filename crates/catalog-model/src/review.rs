//! Review data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::validate::{within, Validate};

/// A customer review embedded in a product detail record.
///
/// Reviews have no identity of their own; their order is the service's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

impl Validate for Review {
    fn validate(&self) -> Result<(), ModelError> {
        within("reviews.rating", self.rating, 0.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEW: &str = r#"{
        "rating": 4,
        "comment": "Very satisfied!",
        "date": "2024-05-23T08:56:21.618Z",
        "reviewerName": "Lucas Gordon",
        "reviewerEmail": "lucas.gordon@x.dummyjson.com"
    }"#;

    #[test]
    fn test_review_parses() {
        let review: Review = crate::from_json(REVIEW.as_bytes()).unwrap();
        assert_eq!(review.rating, 4.0);
        assert_eq!(review.reviewer_name, "Lucas Gordon");
        assert_eq!(review.date.to_rfc3339(), "2024-05-23T08:56:21.618+00:00");
    }

    #[test]
    fn test_rating_out_of_range() {
        let body = REVIEW.replace("\"rating\": 4", "\"rating\": 7");
        let err = crate::from_json::<Review>(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelError::Invalid { ref field, .. } if field == "reviews.rating"));
    }

    #[test]
    fn test_bad_timestamp_is_malformed() {
        let body = REVIEW.replace("2024-05-23T08:56:21.618Z", "yesterday");
        let err = crate::from_json::<Review>(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));
    }
}
