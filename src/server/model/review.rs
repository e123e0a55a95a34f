//! Domain models for review data operations.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::review::ReviewDto;

/// Review of a scholarship left by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    /// String form of the reviewed scholarship id. Not checked against live scholarships.
    pub scholarship_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    /// Rating text exactly as submitted.
    pub rating: Option<String>,
    pub comment: Option<String>,
    pub review_date: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            scholarship_id: entity.scholarship_id,
            user_email: entity.user_email,
            user_name: entity.user_name,
            rating: entity.rating,
            comment: entity.comment,
            review_date: entity.review_date,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            scholarship_id: self.scholarship_id,
            user_email: self.user_email,
            user_name: self.user_name,
            rating: rating_to_json(self.rating),
            comment: self.comment,
            review_date: self.review_date,
        }
    }
}

/// Renders stored rating text as a JSON number when it is one, otherwise as text.
fn rating_to_json(rating: Option<String>) -> Value {
    match rating {
        None => Value::Null,
        Some(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::String(text)),
    }
}

/// Normalizes a submitted JSON rating into the stored text form.
///
/// Numbers and strings are stored verbatim, `null` stores nothing, anything else
/// is stored as its JSON text (and will aggregate as zero).
pub fn rating_from_json(rating: Value) -> Option<String> {
    match rating {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// Parameters for inserting or replacing the review a user left on a scholarship.
///
/// `(scholarship_id, user_email)` is the natural key.
#[derive(Debug, Clone)]
pub struct UpsertReviewParams {
    pub scholarship_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    pub rating: Option<String>,
    pub comment: Option<String>,
}

/// Parameters for editing an existing review.
#[derive(Debug, Clone)]
pub struct UpdateReviewParams {
    pub id: i32,
    pub rating: Option<String>,
    pub comment: Option<String>,
}
