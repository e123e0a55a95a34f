use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
    service::identity::Principal,
    state::AppState,
};

pub enum Permission {
    /// Role `admin`.
    Admin,
    /// Role `moderator` or higher.
    Moderator,
    /// The user's email equals the given one.
    Owner(String),
    /// Owner of the resource, or `moderator` and higher.
    OwnerOrModerator(String),
    /// Owner of the resource, or `admin`.
    OwnerOrAdmin(String),
}

/// Verifies the bearer token with the identity provider.
///
/// Rejects with 401 when the header is missing or malformed, or when the provider
/// does not accept the token.
impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;

        state.identity.verify(token).await
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    principal: &'a Principal,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: &'a Principal) -> Self {
        Self { db, principal }
    }

    /// Loads the principal's user record and checks every permission.
    ///
    /// An empty permission list only requires the account to exist.
    ///
    /// # Returns
    /// - `Ok(User)` - All permissions satisfied
    /// - `Err(AuthError::UserNotInDatabase)` - No account for the principal's email
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&self.principal.email).await? else {
            return Err(AuthError::UserNotInDatabase(self.principal.email.clone()).into());
        };

        for permission in permissions {
            let (allowed, requirement) = match permission {
                Permission::Admin => (user.role == Role::Admin, "admin role".to_string()),
                Permission::Moderator => {
                    (user.role >= Role::Moderator, "moderator role".to_string())
                }
                Permission::Owner(email) => {
                    (user.email == *email, format!("ownership of {}", email))
                }
                Permission::OwnerOrModerator(email) => (
                    user.email == *email || user.role >= Role::Moderator,
                    format!("ownership of {} or moderator role", email),
                ),
                Permission::OwnerOrAdmin(email) => (
                    user.email == *email || user.role == Role::Admin,
                    format!("ownership of {} or admin role", email),
                ),
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    user.email.clone(),
                    format!("requires {}", requirement),
                )
                .into());
            }
        }

        Ok(user)
    }
}
