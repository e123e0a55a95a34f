use crate::server::{
    data::user::UserRepository,
    model::user::{Role, UpsertUserParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod delete;
mod set_role;
mod upsert;
