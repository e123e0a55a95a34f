//! Scholarship factory for creating test scholarship entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test scholarships with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::scholarship::ScholarshipFactory;
///
/// let scholarship = ScholarshipFactory::new(&db)
///     .scholarship_name("Merit Award")
///     .application_fees(0.0)
///     .build()
///     .await?;
/// ```
pub struct ScholarshipFactory<'a> {
    db: &'a DatabaseConnection,
    scholarship_name: String,
    university_name: String,
    degree: String,
    application_fees: f64,
    post_date: DateTime<Utc>,
    attributes: serde_json::Value,
}

impl<'a> ScholarshipFactory<'a> {
    /// Creates a new ScholarshipFactory with default values.
    ///
    /// Defaults:
    /// - scholarship_name: `"Scholarship {id}"`
    /// - university_name: `"University {id}"`
    /// - degree: `"Bachelor"`
    /// - application_fees: `25.0`
    /// - post_date: now
    /// - attributes: `{}`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            scholarship_name: format!("Scholarship {}", id),
            university_name: format!("University {}", id),
            degree: "Bachelor".to_string(),
            application_fees: 25.0,
            post_date: Utc::now(),
            attributes: serde_json::json!({}),
        }
    }

    pub fn scholarship_name(mut self, name: impl Into<String>) -> Self {
        self.scholarship_name = name.into();
        self
    }

    pub fn university_name(mut self, name: impl Into<String>) -> Self {
        self.university_name = name.into();
        self
    }

    pub fn degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = degree.into();
        self
    }

    pub fn application_fees(mut self, fees: f64) -> Self {
        self.application_fees = fees;
        self
    }

    pub fn post_date(mut self, post_date: DateTime<Utc>) -> Self {
        self.post_date = post_date;
        self
    }

    pub fn attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builds and inserts the scholarship entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::scholarship::Model)` - Created scholarship entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::scholarship::Model, DbErr> {
        let search_text = entity::scholarship::search_text(
            &self.scholarship_name,
            &self.university_name,
            &self.degree,
        );

        entity::scholarship::ActiveModel {
            id: ActiveValue::NotSet,
            scholarship_name: ActiveValue::Set(self.scholarship_name),
            university_name: ActiveValue::Set(self.university_name),
            degree: ActiveValue::Set(self.degree),
            application_fees: ActiveValue::Set(self.application_fees),
            post_date: ActiveValue::Set(self.post_date),
            posted_by: ActiveValue::Set(None),
            attributes: ActiveValue::Set(self.attributes),
            search_text: ActiveValue::Set(search_text),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scholarship with default values.
pub async fn create_scholarship(
    db: &DatabaseConnection,
) -> Result<entity::scholarship::Model, DbErr> {
    ScholarshipFactory::new(db).build().await
}
