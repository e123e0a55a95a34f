//! Domain models for scholarship applications.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use crate::{
    model::application::ApplicationDto,
    server::{error::AppError, model::json_object},
};

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            other => Err(AppError::BadRequest(format!(
                "Unknown application status '{}'",
                other
            ))),
        }
    }
}

/// Application a user submitted for a scholarship.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub scholarship_id: String,
    pub user_email: String,
    /// Stored status text; kept raw so unknown legacy values still round-trip.
    pub status: String,
    pub feedback: Option<String>,
    pub application_fees: f64,
    pub transaction_id: Option<String>,
    pub details: Map<String, Value>,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    pub fn from_entity(entity: entity::application::Model) -> Self {
        Self {
            id: entity.id,
            scholarship_id: entity.scholarship_id,
            user_email: entity.user_email,
            status: entity.status,
            feedback: entity.feedback,
            application_fees: entity.application_fees,
            transaction_id: entity.transaction_id,
            details: json_object(entity.details),
            applied_at: entity.applied_at,
        }
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            scholarship_id: self.scholarship_id,
            user_email: self.user_email,
            status: self.status,
            feedback: self.feedback,
            application_fees: self.application_fees,
            transaction_id: self.transaction_id,
            details: self.details,
            applied_at: self.applied_at,
        }
    }
}

/// Parameters for submitting an application.
#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    pub scholarship_id: i32,
    pub user_email: String,
    pub transaction_id: Option<String>,
    pub details: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(
            "Processing".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Processing
        );
        assert_eq!(
            ApplicationStatus::Rejected.to_string(),
            "rejected".to_string()
        );
        assert!(matches!(
            "approved".parse::<ApplicationStatus>(),
            Err(AppError::BadRequest(_))
        ));
    }
}
