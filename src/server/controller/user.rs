use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        user::{UpdateRoleDto, UpsertUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::{Role, UpsertUserParams},
        service::{identity::Principal, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Record a sign-in.
///
/// Creates the caller's account with the `user` role on first sign-in. Later calls
/// refresh the sign-in time and any profile fields provided, leaving the role alone.
///
/// # Access Control
/// - The body email must be the caller's own
///
/// # Returns
/// - `200 OK` - Created or refreshed user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Body email differs from the caller's
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "Created or refreshed user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Body email differs from the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    if !payload.email.trim().eq_ignore_ascii_case(&principal.email) {
        return Err(AuthError::AccessDenied(
            principal.email,
            format!("attempted to sign in as {}", payload.email),
        )
        .into());
    }

    let service = UserService::new(&state.db);

    let user = service
        .upsert(UpsertUserParams {
            email: principal.email,
            name: payload.name,
            photo_url: payload.photo_url,
            last_sign_in_time: payload.last_sign_in_time.unwrap_or_else(Utc::now),
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List every user.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a user by email.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves, or admins
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::OwnerOrAdmin(email.clone())])
        .await?;

    let service = UserService::new(&state.db);

    let user = service
        .get_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change a user's role.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - User with the new role
/// - `400 Bad Request` - Unknown role
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{email}/role",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "User with the new role", body = UserDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Admin])
        .await?;

    let role: Role = payload.role.parse()?;

    let service = UserService::new(&state.db);

    if !service.set_role(&email, role).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let user = service
        .get_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Deleted user", body = DeletedDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    if !service.delete(&email).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeletedDto { deleted_count: 1 })))
}
