use crate::server::{
    data::application::{ApplicationRepository, NewApplication},
    model::application::ApplicationStatus,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
