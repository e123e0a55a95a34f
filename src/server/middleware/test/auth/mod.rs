use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::Role,
    service::identity::Principal,
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod require;

fn principal(email: &str) -> Principal {
    Principal {
        email: email.to_string(),
    }
}
