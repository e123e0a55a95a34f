//! Review submission and management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{review::ReviewRepository, scholarship::ScholarshipRepository},
    error::AppError,
    model::review::{Review, UpdateReviewParams, UpsertReviewParams},
    util::parse::parse_id,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a review, replacing the one the same user already left on the scholarship.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created or replaced review
    /// - `Err(AppError::BadRequest)` - Malformed scholarship id
    /// - `Err(AppError::NotFound)` - Scholarship doesn't exist
    pub async fn upsert(&self, params: UpsertReviewParams) -> Result<Review, AppError> {
        let scholarship_id = parse_id(&params.scholarship_id)?;

        if ScholarshipRepository::new(self.db)
            .get_by_id(scholarship_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Scholarship {} not found",
                scholarship_id
            )));
        }

        // Store the canonical id form so aggregation lookups match.
        let params = UpsertReviewParams {
            scholarship_id: scholarship_id.to_string(),
            ..params
        };

        Ok(ReviewRepository::new(self.db).upsert(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_scholarship(&self, scholarship_id: &str) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_by_scholarship(scholarship_id)
            .await?)
    }

    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_by_user(user_email).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }

    /// Updates rating and comment of a review.
    /// Returns None if the review doesn't exist
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).update(params).await?)
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ReviewRepository::new(self.db).delete(id).await?)
    }
}
