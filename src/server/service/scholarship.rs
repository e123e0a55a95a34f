//! Scholarship search with rating enrichment, plus scholarship management.

use futures::{stream, StreamExt, TryStreamExt};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::QuerySettings,
    data::scholarship::ScholarshipRepository,
    error::AppError,
    model::{
        scholarship::{RatedScholarship, Scholarship, ScholarshipParams},
        search::ScholarshipSearch,
    },
    service::rating::RatingService,
    util::timeout::with_store_timeout,
};

/// Number of scholarships returned by the top listing.
pub const TOP_SCHOLARSHIP_LIMIT: u64 = 6;

pub struct ScholarshipService<'a> {
    db: &'a DatabaseConnection,
    settings: QuerySettings,
}

impl<'a> ScholarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: QuerySettings) -> Self {
        Self { db, settings }
    }

    /// Returns one page of scholarships matching the search, each with its average rating.
    ///
    /// The page is read first, then ratings are fetched concurrently, at most
    /// `rating_concurrency` at a time. Output order matches the page order. Any
    /// failed read fails the whole search.
    ///
    /// # Arguments
    /// - `search` - Validated filter and pagination
    ///
    /// # Returns
    /// - `Ok(Vec<RatedScholarship>)` - Enriched page, possibly empty
    /// - `Err(AppError::StoreUnavailable)` - A store call timed out
    /// - `Err(AppError::DbErr)` - A store call failed
    pub async fn search(&self, search: &ScholarshipSearch) -> Result<Vec<RatedScholarship>, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        let page = with_store_timeout(
            self.settings.store_timeout,
            repo.search_paginated(search.text.as_deref(), search.page, search.size),
        )
        .await?;

        self.enrich(page).await
    }

    /// Counts scholarships matching the search text, ignoring pagination.
    pub async fn count(&self, text: Option<&str>) -> Result<u64, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        with_store_timeout(self.settings.store_timeout, repo.count(text)).await
    }

    /// Gets a single scholarship with its average rating.
    ///
    /// # Returns
    /// - `Ok(Some(RatedScholarship))` - Scholarship found and enriched
    /// - `Ok(None)` - No scholarship with that id
    /// - `Err(AppError)` - Store failure or timeout
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RatedScholarship>, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        let Some(scholarship) =
            with_store_timeout(self.settings.store_timeout, repo.get_by_id(id)).await?
        else {
            return Ok(None);
        };

        let summary = RatingService::new(self.db, self.settings.store_timeout)
            .summary_for(&scholarship.id.to_string())
            .await?;

        Ok(Some(RatedScholarship {
            scholarship,
            rating: summary.average_rating,
        }))
    }

    /// Lists the cheapest scholarships, newest first among equal fees.
    ///
    /// Ratings are not attached on this path.
    pub async fn top(&self) -> Result<Vec<Scholarship>, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        with_store_timeout(
            self.settings.store_timeout,
            repo.get_cheapest(TOP_SCHOLARSHIP_LIMIT),
        )
        .await
    }

    pub async fn create(&self, params: ScholarshipParams) -> Result<Scholarship, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        let scholarship = repo.create(params).await?;

        tracing::info!(
            "Created scholarship {} ({})",
            scholarship.id,
            scholarship.scholarship_name
        );

        Ok(scholarship)
    }

    /// Replaces every field of a scholarship.
    /// Returns None if the scholarship doesn't exist
    pub async fn replace(
        &self,
        id: i32,
        params: ScholarshipParams,
    ) -> Result<Option<Scholarship>, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        Ok(repo.replace(id, params).await?)
    }

    /// Deletes a scholarship. Reviews referencing it are left in place.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ScholarshipRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    async fn enrich(&self, page: Vec<Scholarship>) -> Result<Vec<RatedScholarship>, AppError> {
        let ratings = &RatingService::new(self.db, self.settings.store_timeout);

        stream::iter(page)
            .map(|scholarship| async move {
                let summary = ratings.summary_for(&scholarship.id.to_string()).await?;

                Ok::<_, AppError>(RatedScholarship {
                    scholarship,
                    rating: summary.average_rating,
                })
            })
            .buffered(self.settings.rating_concurrency.max(1))
            .try_collect()
            .await
    }
}
