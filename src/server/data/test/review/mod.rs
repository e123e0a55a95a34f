use crate::server::{
    data::review::ReviewRepository,
    model::review::{UpdateReviewParams, UpsertReviewParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::review::ReviewFactory};

mod delete;
mod ratings_for_scholarship;
mod update;
mod upsert;

fn upsert_params(scholarship_id: &str, user_email: &str, rating: &str) -> UpsertReviewParams {
    UpsertReviewParams {
        scholarship_id: scholarship_id.to_string(),
        user_email: user_email.to_string(),
        user_name: Some("Reviewer".to_string()),
        rating: Some(rating.to_string()),
        comment: Some("Helpful".to_string()),
    }
}
