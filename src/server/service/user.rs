//! User service for business logic.
//!
//! Accounts are keyed by email. Roles only change through an explicit admin action;
//! signing in never alters them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Role, UpsertUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a sign-in, creating the account on first sign-in.
    ///
    /// # Arguments
    /// - `params` - Email plus optional profile fields and the sign-in time
    ///
    /// # Returns
    /// - `Ok(User)` - The created or refreshed user
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, params: UpsertUserParams) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).upsert(params).await?;

        tracing::debug!("Recorded sign-in for {}", user.email);

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_email(email).await?)
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No user with that email
    pub async fn set_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        let updated = UserRepository::new(self.db).set_role(email, role).await?;

        if updated {
            tracing::info!("Set role of {} to {}", email, role);
        }

        Ok(updated)
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, email: &str) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).delete(email).await?)
    }
}
