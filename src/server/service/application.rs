//! Scholarship application workflow.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        application::{ApplicationRepository, NewApplication},
        scholarship::ScholarshipRepository,
    },
    error::AppError,
    model::application::{Application, ApplicationStatus, CreateApplicationParams},
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application for a scholarship.
    ///
    /// The application fee is copied from the scholarship at submission time and the
    /// application starts out `pending`.
    ///
    /// # Returns
    /// - `Ok(Application)` - Stored application
    /// - `Err(AppError::NotFound)` - Scholarship doesn't exist
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, AppError> {
        let scholarship = ScholarshipRepository::new(self.db)
            .get_by_id(params.scholarship_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Scholarship {} not found", params.scholarship_id))
            })?;

        let application = ApplicationRepository::new(self.db)
            .create(NewApplication {
                scholarship_id: scholarship.id.to_string(),
                user_email: params.user_email,
                application_fees: scholarship.application_fees,
                transaction_id: params.transaction_id,
                details: params.details.into(),
            })
            .await?;

        tracing::info!(
            "{} applied to scholarship {}",
            application.user_email,
            application.scholarship_id
        );

        Ok(application)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .get_by_user(user_email)
            .await?)
    }

    /// Returns true if updated, false if not found
    pub async fn set_status(&self, id: i32, status: ApplicationStatus) -> Result<bool, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .set_status(id, status)
            .await?)
    }

    /// Returns true if updated, false if not found
    pub async fn set_feedback(&self, id: i32, feedback: String) -> Result<bool, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .set_feedback(id, feedback)
            .await?)
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ApplicationRepository::new(self.db).delete(id).await?)
    }
}
