//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records keyed by
//! email, including the sign-in upsert and role management.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{Role, UpsertUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user on sign-in.
    ///
    /// Inserts a new user with the `user` role, or, when the email is already
    /// registered, updates the sign-in time plus whichever profile fields were
    /// provided. The role of an existing user is never touched here, so signing in
    /// cannot demote an admin.
    ///
    /// # Arguments
    /// - `param` - Upsert parameters keyed by email
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParams) -> Result<User, DbErr> {
        // Build list of columns to update on conflict
        let mut update_columns = vec![entity::user::Column::LastSignInTime];

        if param.name.is_some() {
            update_columns.push(entity::user::Column::Name);
        }
        if param.photo_url.is_some() {
            update_columns.push(entity::user::Column::PhotoUrl);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            photo_url: ActiveValue::Set(param.photo_url),
            role: ActiveValue::Set(Role::User.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            last_sign_in_time: ActiveValue::Set(Some(param.last_sign_in_time)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by registration date.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No user registered with that email
    pub async fn set_role(&self, email: &str, role: Role) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.eq(email))
            .col_expr(entity::user::Column::Role, Expr::value(role.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user registered with that email
    pub async fn delete(&self, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
