//! Feedback form
//!
//! Submission only logs the values locally; there is no endpoint. The
//! one piece of validation: a rating (1-5) and non-empty feedback text
//! are required.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feedback categories offered by the form.
pub const CATEGORIES: &[&str] = &[
    "User Experience",
    "Feature Request",
    "Bug Report",
    "Performance",
    "Documentation",
    "General",
];

/// Caption shown next to a star rating.
pub fn rating_caption(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("Poor - Needs significant improvement"),
        2 => Some("Fair - Some issues to address"),
        3 => Some("Good - Meets expectations"),
        4 => Some("Very Good - Exceeds expectations"),
        5 => Some("Excellent - Outstanding experience"),
        _ => None,
    }
}

/// The form as the user fills it in. Rating 0 means "not yet rated".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub rating: u8,
    pub name: String,
    pub email: String,
    pub category: String,
    pub text: String,
}

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub id: Uuid,
    pub rating: u8,
    pub name: String,
    pub email: String,
    pub category: String,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

/// Validate and "submit" the form.
///
/// On success the submission is logged via `tracing` and returned; the
/// caller is expected to clear its form state afterwards.
pub fn submit(form: &FeedbackForm) -> Result<FeedbackSubmission, ValidationError> {
    if form.rating == 0 {
        return Err(ValidationError::MissingField {
            field: "a rating".to_string(),
        });
    }
    if form.rating > 5 {
        return Err(ValidationError::InvalidValue {
            field: "rating".to_string(),
            value: form.rating.to_string(),
        });
    }
    if form.text.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "your feedback".to_string(),
        });
    }

    let submission = FeedbackSubmission {
        id: Uuid::new_v4(),
        rating: form.rating,
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        category: form.category.clone(),
        text: form.text.trim().to_string(),
        submitted_at: Utc::now(),
    };

    tracing::info!(
        id = %submission.id,
        rating = submission.rating,
        category = %submission.category,
        "feedback submitted"
    );

    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FeedbackForm {
        FeedbackForm {
            rating: 5,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            category: "General".to_string(),
            text: "Great demo!".to_string(),
        }
    }

    #[test]
    fn test_zero_rating_is_rejected() {
        let form = FeedbackForm {
            rating: 0,
            ..filled_form()
        };
        assert!(matches!(
            submit(&form),
            Err(ValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        let form = FeedbackForm {
            rating: 6,
            ..filled_form()
        };
        assert!(matches!(
            submit(&form),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let form = FeedbackForm {
            text: "   ".to_string(),
            ..filled_form()
        };
        assert!(matches!(
            submit(&form),
            Err(ValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let submission = submit(&filled_form()).unwrap();
        assert_eq!(submission.rating, 5);
        assert_eq!(submission.text, "Great demo!");
        assert_eq!(submission.category, "General");
    }

    #[test]
    fn test_contact_fields_are_optional() {
        let form = FeedbackForm {
            name: String::new(),
            email: String::new(),
            category: String::new(),
            ..filled_form()
        };
        assert!(submit(&form).is_ok());
    }

    #[test]
    fn test_rating_captions() {
        assert_eq!(rating_caption(5), Some("Excellent - Outstanding experience"));
        assert_eq!(rating_caption(0), None);
        assert_eq!(rating_caption(6), None);
    }
}
