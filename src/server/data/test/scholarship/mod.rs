use crate::server::{data::scholarship::ScholarshipRepository, model::scholarship::ScholarshipParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use serde_json::Map;
use test_utils::{builder::TestBuilder, factory::scholarship::ScholarshipFactory};

mod create;
mod delete;
mod get_cheapest;
mod replace;
mod search_paginated;

fn params(name: &str) -> ScholarshipParams {
    ScholarshipParams {
        scholarship_name: name.to_string(),
        university_name: "Kyoto University".to_string(),
        degree: "Masters".to_string(),
        application_fees: 40.0,
        post_date: Utc::now(),
        posted_by: Some("moderator@example.com".to_string()),
        attributes: Map::new(),
    }
}
