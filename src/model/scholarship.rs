use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipDto {
    pub id: i32,
    pub scholarship_name: String,
    pub university_name: String,
    pub degree: String,
    pub application_fees: f64,
    pub post_date: DateTime<Utc>,
    pub posted_by: Option<String>,
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
    /// Average review rating, present on search and detail responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Body for creating or fully replacing a scholarship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipPayloadDto {
    pub scholarship_name: String,
    pub university_name: String,
    pub degree: String,
    #[serde(default)]
    pub application_fees: f64,
    /// Defaults to the time of the request when omitted.
    pub post_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}
