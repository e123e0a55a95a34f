use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: i32,
    pub scholarship_id: String,
    pub user_email: String,
    pub status: String,
    pub feedback: Option<String>,
    pub application_fees: f64,
    pub transaction_id: Option<String>,
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationDto {
    pub scholarship_id: String,
    pub transaction_id: Option<String>,
    /// Applicant-provided fields (phone, address, results, ...).
    #[serde(default)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusDto {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationFeedbackDto {
    pub feedback: String,
}
