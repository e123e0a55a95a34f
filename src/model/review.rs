use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub scholarship_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    /// Number when the stored rating is numeric, otherwise the raw submitted text.
    #[schema(value_type = Object)]
    pub rating: Value,
    pub comment: Option<String>,
    pub review_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub scholarship_id: String,
    pub user_name: Option<String>,
    /// Accepted as a JSON number or string.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub rating: Value,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewDto {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub rating: Value,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageRatingDto {
    /// Mean rating rounded to two decimal places, `0` when there are no reviews.
    pub average_rating: f64,
    pub total_reviews: u64,
}
