//! Rating aggregation over the review collection.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository, error::AppError, model::rating::RatingSummary,
    util::timeout::with_store_timeout,
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
    store_timeout: Duration,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection, store_timeout: Duration) -> Self {
        Self { db, store_timeout }
    }

    /// Computes the average rating and review count for one scholarship.
    ///
    /// Reads every review referencing `scholarship_id` at call time. Reviews with a
    /// missing or malformed rating count toward the total and contribute `0`.
    ///
    /// # Arguments
    /// - `scholarship_id` - String form of the scholarship identifier
    ///
    /// # Returns
    /// - `Ok(RatingSummary)` - Aggregate, `0` average when nothing matched
    /// - `Err(AppError::StoreUnavailable)` - The review read timed out
    /// - `Err(AppError::DbErr)` - The review read failed
    pub async fn summary_for(&self, scholarship_id: &str) -> Result<RatingSummary, AppError> {
        let repo = ReviewRepository::new(self.db);

        let ratings =
            with_store_timeout(self.store_timeout, repo.ratings_for_scholarship(scholarship_id))
                .await?;

        Ok(RatingSummary::from_ratings(
            ratings.iter().map(Option::as_deref),
        ))
    }
}
