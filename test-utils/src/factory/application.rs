//! Application factory for creating test scholarship application entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    scholarship_id: String,
    user_email: String,
    status: String,
    application_fees: f64,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory.
    ///
    /// Defaults:
    /// - status: `"pending"`
    /// - application_fees: `25.0`
    pub fn new(
        db: &'a DatabaseConnection,
        scholarship_id: impl ToString,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            db,
            scholarship_id: scholarship_id.to_string(),
            user_email: user_email.into(),
            status: "pending".to_string(),
            application_fees: 25.0,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn application_fees(mut self, fees: f64) -> Self {
        self.application_fees = fees;
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            id: ActiveValue::NotSet,
            scholarship_id: ActiveValue::Set(self.scholarship_id),
            user_email: ActiveValue::Set(self.user_email),
            status: ActiveValue::Set(self.status),
            feedback: ActiveValue::Set(None),
            application_fees: ActiveValue::Set(self.application_fees),
            transaction_id: ActiveValue::Set(None),
            details: ActiveValue::Set(serde_json::json!({})),
            applied_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending application for a scholarship id and applicant email.
pub async fn create_application(
    db: &DatabaseConnection,
    scholarship_id: impl ToString,
    user_email: impl Into<String>,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, scholarship_id, user_email)
        .build()
        .await
}
