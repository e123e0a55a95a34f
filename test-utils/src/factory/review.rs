//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The scholarship reference is stored as a plain string, so reviews can be
/// created for ids that have no scholarship row.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, scholarship.id)
///     .rating("5")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    scholarship_id: String,
    user_email: String,
    rating: Option<String>,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - user_email: `"reviewer{id}@example.com"`
    /// - rating: `Some("5")`
    /// - comment: `Some("Great scholarship")`
    pub fn new(db: &'a DatabaseConnection, scholarship_id: impl ToString) -> Self {
        let id = next_id();
        Self {
            db,
            scholarship_id: scholarship_id.to_string(),
            user_email: format!("reviewer{}@example.com", id),
            rating: Some("5".to_string()),
            comment: Some("Great scholarship".to_string()),
        }
    }

    pub fn user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = email.into();
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Stores the review without any rating value.
    pub fn no_rating(mut self) -> Self {
        self.rating = None;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            scholarship_id: ActiveValue::Set(self.scholarship_id),
            user_email: ActiveValue::Set(self.user_email),
            user_name: ActiveValue::Set(None),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            review_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with the given rating for a scholarship id.
pub async fn create_review(
    db: &DatabaseConnection,
    scholarship_id: impl ToString,
    rating: impl Into<String>,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, scholarship_id)
        .rating(rating)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_review_for_dangling_scholarship_id() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_review_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let review = create_review(db, 9999, "4").await?;

        assert_eq!(review.scholarship_id, "9999");
        assert_eq!(review.rating.as_deref(), Some("4"));

        Ok(())
    }
}
