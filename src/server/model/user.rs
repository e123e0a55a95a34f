//! User domain models and parameters.
//!
//! Provides the account model with its role, plus the parameters used by the
//! sign-in upsert.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{model::user::UserDto, server::error::AppError};

/// Account role, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    User,
    Moderator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "moderator" => Ok(Self::Moderator),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::BadRequest(format!("Unknown role '{}'", other))),
        }
    }
}

/// Registered account keyed by email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_time: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Unknown stored roles fall back to `Role::User`, the least privileged one.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let role = entity.role.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "User {} has unknown role '{}', treating as user",
                entity.email,
                entity.role
            );
            Role::User
        });

        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            photo_url: entity.photo_url,
            role,
            created_at: entity.created_at,
            last_sign_in_time: entity.last_sign_in_time,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            photo_url: self.photo_url,
            role: self.role.to_string(),
            created_at: self.created_at,
            last_sign_in_time: self.last_sign_in_time,
        }
    }
}

/// Parameters for the sign-in upsert.
///
/// New accounts are inserted with `Role::User`. Existing accounts keep their role;
/// only the sign-in time and any provided profile fields are refreshed.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub last_sign_in_time: DateTime<Utc>,
}
