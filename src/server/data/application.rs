//! Scholarship application data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::application::{Application, ApplicationStatus};

/// Fields stored for a new application.
pub struct NewApplication {
    pub scholarship_id: String,
    pub user_email: String,
    pub application_fees: f64,
    pub transaction_id: Option<String>,
    pub details: serde_json::Value,
}

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new application in the `pending` state.
    pub async fn create(&self, new: NewApplication) -> Result<Application, DbErr> {
        let entity = entity::application::ActiveModel {
            scholarship_id: ActiveValue::Set(new.scholarship_id),
            user_email: ActiveValue::Set(new.user_email),
            status: ActiveValue::Set(ApplicationStatus::Pending.to_string()),
            feedback: ActiveValue::Set(None),
            application_fees: ActiveValue::Set(new.application_fees),
            transaction_id: ActiveValue::Set(new.transaction_id),
            details: ActiveValue::Set(new.details),
            applied_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Application::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        let entity = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Application::from_entity))
    }

    /// Gets every application, newest first.
    pub async fn get_all(&self) -> Result<Vec<Application>, DbErr> {
        let entities = entity::prelude::Application::find()
            .order_by_desc(entity::application::Column::AppliedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    /// Gets the applications submitted by one user, newest first.
    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Application>, DbErr> {
        let entities = entity::prelude::Application::find()
            .filter(entity::application::Column::UserEmail.eq(user_email))
            .order_by_desc(entity::application::Column::AppliedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    /// Sets the status of an application.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No application has that id
    pub async fn set_status(&self, id: i32, status: ApplicationStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Application::update_many()
            .filter(entity::application::Column::Id.eq(id))
            .col_expr(
                entity::application::Column::Status,
                Expr::value(status.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets moderator feedback on an application.
    ///
    /// # Returns
    /// - `Ok(true)` - Feedback stored
    /// - `Ok(false)` - No application has that id
    pub async fn set_feedback(&self, id: i32, feedback: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Application::update_many()
            .filter(entity::application::Column::Id.eq(id))
            .col_expr(entity::application::Column::Feedback, Expr::value(feedback))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
