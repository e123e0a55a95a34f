//! Review data repository.
//!
//! Reviews reference scholarships by the string form of their id. Nothing here
//! checks that the referenced scholarship still exists.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::{Review, UpdateReviewParams, UpsertReviewParams};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review or replaces the one the same user left on the same scholarship.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT (scholarship_id, user_email) DO UPDATE`
    /// so concurrent submissions from one user cannot create duplicates.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created or updated review
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, params: UpsertReviewParams) -> Result<Review, DbErr> {
        let entity = entity::prelude::Review::insert(entity::review::ActiveModel {
            scholarship_id: ActiveValue::Set(params.scholarship_id),
            user_email: ActiveValue::Set(params.user_email),
            user_name: ActiveValue::Set(params.user_name),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            review_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::review::Column::ScholarshipId,
                entity::review::Column::UserEmail,
            ])
            .update_columns([
                entity::review::Column::UserName,
                entity::review::Column::Rating,
                entity::review::Column::Comment,
                entity::review::Column::ReviewDate,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets the raw rating of every review referencing a scholarship.
    ///
    /// # Arguments
    /// - `scholarship_id` - String form of the scholarship id
    ///
    /// # Returns
    /// - `Ok(Vec<Option<String>>)` - One entry per review, `None` where no rating was stored
    /// - `Err(DbErr)` - Database error during query
    pub async fn ratings_for_scholarship(
        &self,
        scholarship_id: &str,
    ) -> Result<Vec<Option<String>>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::ScholarshipId.eq(scholarship_id))
            .into_tuple::<Option<String>>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets every review of a scholarship, newest first.
    pub async fn get_by_scholarship(&self, scholarship_id: &str) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::ScholarshipId.eq(scholarship_id))
            .order_by_desc(entity::review::Column::ReviewDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets every review written by a user, newest first.
    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::UserEmail.eq(user_email))
            .order_by_desc(entity::review::Column::ReviewDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::ReviewDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Updates the rating and comment of a review and bumps its review date.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated review
    /// - `Ok(None)` - No review has that id
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, DbErr> {
        let result = entity::review::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            review_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(Review::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - Review deleted
    /// - `Ok(false)` - No review has that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
