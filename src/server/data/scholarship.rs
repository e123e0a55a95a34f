//! Scholarship data repository.
//!
//! Provides filtered/paginated reads, the cheapest-then-newest listing, and the
//! write operations over the scholarship table.

use sea_orm::{
    sea_query::{Expr, ExprTrait, LikeExpr},
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::scholarship::{Scholarship, ScholarshipParams};

/// Escape character for LIKE patterns; must stay a single non-backslash char.
const LIKE_ESCAPE: char = '!';

pub struct ScholarshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScholarshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new scholarship.
    ///
    /// # Returns
    /// - `Ok(Scholarship)` - The created scholarship with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: ScholarshipParams) -> Result<Scholarship, DbErr> {
        let search_text = entity::scholarship::search_text(
            &params.scholarship_name,
            &params.university_name,
            &params.degree,
        );

        let entity = entity::scholarship::ActiveModel {
            scholarship_name: ActiveValue::Set(params.scholarship_name),
            university_name: ActiveValue::Set(params.university_name),
            degree: ActiveValue::Set(params.degree),
            application_fees: ActiveValue::Set(params.application_fees),
            post_date: ActiveValue::Set(params.post_date),
            posted_by: ActiveValue::Set(params.posted_by),
            attributes: ActiveValue::Set(params.attributes.into()),
            search_text: ActiveValue::Set(search_text),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Scholarship::from_entity(entity))
    }

    /// Finds a scholarship by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Scholarship>, DbErr> {
        let entity = entity::prelude::Scholarship::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Scholarship::from_entity))
    }

    /// Gets one page of scholarships matching the search text, in insertion order.
    ///
    /// # Arguments
    /// - `text` - Case-insensitive substring matched against name, university and degree;
    ///   `None` matches everything
    /// - `page` - Zero-indexed page number
    /// - `size` - Number of scholarships per page, must be non-zero
    ///
    /// # Returns
    /// - `Ok(Vec<Scholarship>)` - Scholarships `page * size .. page * size + size`
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_paginated(
        &self,
        text: Option<&str>,
        page: u64,
        size: u64,
    ) -> Result<Vec<Scholarship>, DbErr> {
        let entities = entity::prelude::Scholarship::find()
            .filter(search_condition(text))
            .order_by_asc(entity::scholarship::Column::Id)
            .paginate(self.db, size)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Scholarship::from_entity).collect())
    }

    /// Counts scholarships matching the search text.
    pub async fn count(&self, text: Option<&str>) -> Result<u64, DbErr> {
        entity::prelude::Scholarship::find()
            .filter(search_condition(text))
            .count(self.db)
            .await
    }

    /// Gets the cheapest scholarships, newest first among equal fees.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of scholarships to return
    pub async fn get_cheapest(&self, limit: u64) -> Result<Vec<Scholarship>, DbErr> {
        let entities = entity::prelude::Scholarship::find()
            .order_by_asc(entity::scholarship::Column::ApplicationFees)
            .order_by_desc(entity::scholarship::Column::PostDate)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Scholarship::from_entity).collect())
    }

    /// Replaces every field of an existing scholarship.
    ///
    /// # Returns
    /// - `Ok(Some(Scholarship))` - The replaced scholarship
    /// - `Ok(None)` - No scholarship has that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn replace(
        &self,
        id: i32,
        params: ScholarshipParams,
    ) -> Result<Option<Scholarship>, DbErr> {
        let search_text = entity::scholarship::search_text(
            &params.scholarship_name,
            &params.university_name,
            &params.degree,
        );

        let result = entity::scholarship::ActiveModel {
            id: ActiveValue::Unchanged(id),
            scholarship_name: ActiveValue::Set(params.scholarship_name),
            university_name: ActiveValue::Set(params.university_name),
            degree: ActiveValue::Set(params.degree),
            application_fees: ActiveValue::Set(params.application_fees),
            post_date: ActiveValue::Set(params.post_date),
            posted_by: ActiveValue::Set(params.posted_by),
            attributes: ActiveValue::Set(params.attributes.into()),
            search_text: ActiveValue::Set(search_text),
        }
        .update(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(Scholarship::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a scholarship. Reviews and applications referencing it are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - Scholarship deleted
    /// - `Ok(false)` - No scholarship has that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Scholarship::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Builds the free-text filter: case-insensitive substring match on name, university
/// or degree, via the pre-folded `search_text` column.
fn search_condition(text: Option<&str>) -> Condition {
    let Some(text) = text else {
        return Condition::all();
    };

    let pattern = format!("%{}%", escape_like(&text.to_lowercase()));

    Condition::all().add(
        Expr::col(entity::scholarship::Column::SearchText)
            .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
    )
}

/// Escapes LIKE wildcards so search text matches literally.
fn escape_like(text: &str) -> String {
    text.chars()
        .flat_map(|ch| {
            matches!(ch, '%' | '_' | LIKE_ESCAPE)
                .then_some(LIKE_ESCAPE)
                .into_iter()
                .chain([ch])
        })
        .collect()
}
